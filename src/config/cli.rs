use crate::config::{ConfigOverrides, GroupSet};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "venv-bootstrap")]
#[command(about = "Install uv, create a virtual environment and install local projects into it")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the virtual environment location
    #[arg(long, global = true)]
    pub venv_path: Option<PathBuf>,

    /// Pin the interpreter version used for the virtual environment
    #[arg(long = "python", global = true)]
    pub python_version: Option<String>,

    /// Project to install (repeatable, replaces the configured list)
    #[arg(long = "project", global = true)]
    pub projects: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the installed tool version
    Version {
        /// Print the parsed version as JSON
        #[arg(long)]
        json: bool,
    },
    /// Install the tool if missing, then update it
    SetupTool,
    /// Recreate the virtual environment
    CreateVenv,
    /// Install the configured projects into the active environment
    InstallProjects {
        /// Named dependency-group set
        #[arg(long, value_enum, default_value_t = GroupSet::Dev)]
        groups: GroupSet,

        /// Explicit dependency group (repeatable, replaces --groups)
        #[arg(long = "group")]
        group: Vec<String>,
    },
    /// Run setup-tool, create-venv and install-projects in sequence
    Bootstrap {
        #[arg(long, value_enum, default_value_t = GroupSet::Dev)]
        groups: GroupSet,
    },
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            venv_path: self.venv_path.clone(),
            python_version: self.python_version.clone(),
            projects: self.projects.clone(),
        }
    }
}
