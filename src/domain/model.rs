use serde::Serialize;
use std::fmt;

/// A program and its ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Outcome of a child process that started and ran to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).trim().to_string()
    }

    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim().to_string()
    }
}

/// Host operating-system family, which decides the install/update method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub fn is_windows(self) -> bool {
        self == Platform::Windows
    }
}

/// Lifecycle of one tool-installer run. Nothing is persisted between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    NotInstalled,
    Installing,
    Installed,
    Failed,
}

/// Version information extracted from `<tool> --version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum VersionRecord {
    /// `tool MAJOR.MINOR.MICRO`, optionally followed by `(HASH YYYY-MM-DD)`.
    Semantic { major: u64, minor: u64, micro: u64 },
    /// `tool VERSION (HASH YYYY-MM-DD)` with a free-form version token.
    Build {
        version: String,
        build_hash: String,
        build_date: String,
    },
    Unparsed,
}

impl VersionRecord {
    pub fn is_parsed(&self) -> bool {
        !matches!(self, VersionRecord::Unparsed)
    }

    /// Human-readable report, one tab-prefixed line per field.
    pub fn render(&self, tool: &str) -> String {
        match self {
            VersionRecord::Semantic {
                major,
                minor,
                micro,
            } => format!("\tVersion: {}.{}.{}", major, minor, micro),
            VersionRecord::Build {
                version,
                build_hash,
                build_date,
            } => format!(
                "\tVersion: {}\n\tBuild Hash: {}\n\tBuild Date: {}",
                version, build_hash, build_date
            ),
            VersionRecord::Unparsed => {
                format!("\tUnable to extract {} version information", tool)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display_quotes_spaced_args() {
        let cmd = CommandSpec::new("sh")
            .arg("-c")
            .arg("curl -LsSf https://astral.sh/uv/install.sh | sh");
        assert_eq!(
            cmd.to_string(),
            "sh -c \"curl -LsSf https://astral.sh/uv/install.sh | sh\""
        );
    }

    #[test]
    fn test_command_result_success() {
        let ok = CommandResult {
            exit_code: Some(0),
            ..Default::default()
        };
        let failed = CommandResult {
            exit_code: Some(1),
            ..Default::default()
        };
        let killed = CommandResult::default();
        assert!(ok.success());
        assert!(!failed.success());
        assert!(!killed.success());
    }

    #[test]
    fn test_render_build_record() {
        let record = VersionRecord::Build {
            version: "0.5.0-rc1".to_string(),
            build_hash: "abc1234".to_string(),
            build_date: "2024-11-02".to_string(),
        };
        assert_eq!(
            record.render("uv"),
            "\tVersion: 0.5.0-rc1\n\tBuild Hash: abc1234\n\tBuild Date: 2024-11-02"
        );
    }

    #[test]
    fn test_render_unparsed_is_single_line() {
        let rendered = VersionRecord::Unparsed.render("uv");
        assert_eq!(rendered, "\tUnable to extract uv version information");
        assert_eq!(rendered.lines().count(), 1);
    }

    #[test]
    fn test_version_record_json_shape() {
        let record = VersionRecord::Semantic {
            major: 0,
            minor: 4,
            micro: 18,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["format"], "semantic");
        assert_eq!(json["micro"], 18);
    }
}
