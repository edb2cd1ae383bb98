use crate::domain::model::{CommandResult, CommandSpec};
use crate::utils::error::Result;

/// Narrow capability for running external programs.
///
/// `Err` means the program could not be started at all (missing executable,
/// permission denied). A program that ran and exited non-zero is an `Ok`
/// result whose [`CommandResult::success`] is false.
pub trait ProcessRunner {
    fn run(&self, command: &CommandSpec) -> Result<CommandResult>;
}
