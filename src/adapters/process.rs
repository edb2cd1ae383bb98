use crate::domain::model::{CommandResult, CommandSpec};
use crate::domain::ports::ProcessRunner;
use crate::utils::error::{BootstrapError, Result};
use std::process::{Command, Stdio};

/// Runs programs on the host, blocking until each child exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &CommandSpec) -> Result<CommandResult> {
        tracing::debug!("Running: {}", command);

        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| BootstrapError::ProcessStart {
                program: command.program.clone(),
                source,
            })?;

        let result = CommandResult {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        };
        tracing::debug!("'{}' finished with exit code {:?}", command, result.exit_code);

        Ok(result)
    }
}
