#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{BootstrapError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_TOOL: &str = "uv";
pub const DEFAULT_VENV_PATH: &str = ".venv";
pub const DEFAULT_INSTALL_SCRIPT_URL: &str = "https://astral.sh/uv/install.sh";
pub const DEFAULT_PACKAGE_MANAGER: &str = "pip";

/// Settings shared by every bootstrap step.
///
/// Built once at startup (defaults, then an optional TOML file, then CLI
/// overrides) and passed by reference to each step afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Executable name of the packaging tool.
    pub tool: String,
    pub venv_path: PathBuf,
    pub python_version: Option<String>,
    /// Local projects, installed in this order.
    pub projects: Vec<PathBuf>,
    pub dev_groups: Vec<String>,
    pub pipeline_groups: Vec<String>,
    /// Script fetched and piped to `sh` on non-Windows hosts.
    pub install_script_url: String,
    /// Package manager used on Windows and as the non-Windows fallback.
    pub package_manager: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            venv_path: PathBuf::from(DEFAULT_VENV_PATH),
            python_version: None,
            projects: Vec::new(),
            dev_groups: vec!["dev".to_string(), "test".to_string()],
            pipeline_groups: vec!["pipeline".to_string(), "test".to_string()],
            install_script_url: DEFAULT_INSTALL_SCRIPT_URL.to_string(),
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
        }
    }
}

/// Named dependency-group selection for project installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum GroupSet {
    #[default]
    Dev,
    Pipeline,
    None,
}

/// Values that replace file/default settings when present.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub venv_path: Option<PathBuf>,
    pub python_version: Option<String>,
    pub projects: Vec<PathBuf>,
}

impl BootstrapConfig {
    /// Loads a configuration file; missing keys fall back to defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BootstrapError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(venv_path) = overrides.venv_path {
            self.venv_path = venv_path;
        }
        if let Some(python_version) = overrides.python_version {
            self.python_version = Some(python_version);
        }
        if !overrides.projects.is_empty() {
            self.projects = overrides.projects;
        }
    }

    pub fn groups(&self, set: GroupSet) -> &[String] {
        match set {
            GroupSet::Dev => &self.dev_groups,
            GroupSet::Pipeline => &self.pipeline_groups,
            GroupSet::None => &[],
        }
    }
}

impl Validate for BootstrapConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_token("tool", &self.tool)?;
        validation::validate_token("package_manager", &self.package_manager)?;
        validation::validate_path("venv_path", &self.venv_path)?;
        validation::validate_url("install_script_url", &self.install_script_url)?;

        if let Some(version) = &self.python_version {
            validation::validate_token("python_version", version)?;
        }

        for project in &self.projects {
            validation::validate_path("projects", project)?;
        }

        validation::validate_tokens("dev_groups", &self.dev_groups)?;
        validation::validate_tokens("pipeline_groups", &self.pipeline_groups)?;

        Ok(())
    }
}
