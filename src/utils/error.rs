use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Failed to start '{program}': {source}")]
    ProcessStart {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {}", exit_code_label(.code))]
    NonZeroExit { command: String, code: Option<i32> },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid version pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Step '{step}' failed")]
    StepFailed { step: String },
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Process,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BootstrapError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProcessStart { .. } | Self::NonZeroExit { .. } | Self::StepFailed { .. } => {
                ErrorCategory::Process
            }
            Self::ConfigParseError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::PatternError(_) => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NonZeroExit { .. } => ErrorSeverity::Medium,
            Self::ProcessStart { .. } | Self::StepFailed { .. } => ErrorSeverity::High,
            Self::ConfigParseError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::PatternError(_) => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ProcessStart { program, .. } => {
                format!("Make sure '{}' is installed and on your PATH", program)
            }
            Self::NonZeroExit { command, .. } => {
                format!("Run '{}' manually to inspect its output", command)
            }
            Self::ConfigParseError { .. } => {
                "Check that the configuration file is valid TOML".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' setting in the configuration file or CLI flags", field)
            }
            Self::PatternError(_) => "Use a plain tool name such as 'uv'".to_string(),
            Self::StepFailed { .. } => {
                "Re-run with --verbose to see the failing command".to_string()
            }
            Self::IoError(_) => "Check file permissions for the target paths".to_string(),
            Self::SerializationError(_) => "Retry without --json".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ProcessStart { program, .. } => format!("Could not run '{}'", program),
            Self::NonZeroExit { command, .. } => format!("Command failed: {}", command),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
            Self::StepFailed { step } => format!("Bootstrap step '{}' did not succeed", step),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BootstrapError>;
