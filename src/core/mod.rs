pub mod bootstrap;
pub mod projects;
pub mod tool;
pub mod venv;
pub mod version;

pub use crate::domain::model::{CommandResult, CommandSpec, InstallState, Platform, VersionRecord};
pub use crate::domain::ports::ProcessRunner;
pub use crate::utils::error::Result;
