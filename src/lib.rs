pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;

pub use adapters::SystemRunner;
pub use config::{BootstrapConfig, ConfigOverrides, GroupSet};
pub use core::{
    bootstrap::BootstrapEngine, projects::ProjectInstaller, tool::ToolInstaller,
    venv::EnvironmentCreator, version::VersionProbe,
};
pub use utils::error::{BootstrapError, Result};
