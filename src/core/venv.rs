use crate::domain::model::CommandSpec;
use crate::domain::ports::ProcessRunner;
use crate::utils::console::format_prefix;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Recreates a virtual environment from scratch on every call.
pub struct EnvironmentCreator<'a, R: ProcessRunner> {
    runner: &'a R,
    tool: &'a str,
}

impl<'a, R: ProcessRunner> EnvironmentCreator<'a, R> {
    pub fn new(runner: &'a R, tool: &'a str) -> Self {
        Self { runner, tool }
    }

    pub fn command(&self, venv_path: &Path, python_version: Option<&str>) -> CommandSpec {
        let mut command = CommandSpec::new(self.tool).arg("venv");
        if let Some(version) = python_version {
            command = command.arg("--python").arg(version);
        }
        command.arg(venv_path.to_string_lossy())
    }

    /// Deletes whatever is at `venv_path`, then creates a fresh environment.
    ///
    /// Returns the path on success and `None` when removal, process start or
    /// the creation command fails.
    pub fn create(
        &self,
        venv_path: &Path,
        python_version: Option<&str>,
        prefix: Option<&str>,
    ) -> Option<PathBuf> {
        println!("{}Creating venv...", format_prefix(prefix));

        if let Err(e) = remove_existing_venv(venv_path, None) {
            tracing::warn!("Could not remove '{}': {}", venv_path.display(), e);
            println!("\tFailed to remove existing venv");
            return None;
        }

        let command = self.command(venv_path, python_version);
        match self.runner.run(&command) {
            Ok(result) if result.success() => {
                println!("\tVenv created");
                Some(venv_path.to_path_buf())
            }
            Ok(result) => {
                tracing::warn!(
                    "'{}' exited with {:?}: {}",
                    command,
                    result.exit_code,
                    result.stderr_text()
                );
                println!("\tFailed to create venv");
                None
            }
            Err(e) => {
                tracing::warn!("{}", e);
                println!("\tFailed to create venv");
                None
            }
        }
    }
}

/// Removes a previous environment, reporting what it found.
pub fn remove_existing_venv(venv_path: &Path, prefix: Option<&str>) -> io::Result<()> {
    println!("{}Searching for existing venv...", format_prefix(prefix));

    if venv_path.symlink_metadata().is_ok() {
        println!("\tRemoving existing venv...");
        remove_entry(venv_path)?;
        println!("\tExisting venv removed");
    } else {
        println!("\tNo existing venv found");
    }
    Ok(())
}

// Symlinks are unlinked, never followed.
fn remove_entry(path: &Path) -> io::Result<()> {
    if path.symlink_metadata()?.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CommandResult;
    use crate::utils::error::Result;
    use tempfile::TempDir;

    struct NoopRunner;

    impl ProcessRunner for NoopRunner {
        fn run(&self, _command: &CommandSpec) -> Result<CommandResult> {
            Ok(CommandResult {
                exit_code: Some(0),
                ..Default::default()
            })
        }
    }

    #[test]
    fn test_command_without_python_version() {
        let creator = EnvironmentCreator::new(&NoopRunner, "uv");
        let command = creator.command(Path::new(".venv"), None);
        assert_eq!(command.program, "uv");
        assert_eq!(command.args, vec!["venv", ".venv"]);
    }

    #[test]
    fn test_command_with_python_version() {
        let creator = EnvironmentCreator::new(&NoopRunner, "uv");
        let command = creator.command(Path::new("env"), Some("3.12"));
        assert_eq!(command.args, vec!["venv", "--python", "3.12", "env"]);
    }

    #[test]
    fn test_remove_existing_venv() {
        let temp_dir = TempDir::new().unwrap();
        let venv = temp_dir.path().join(".venv");
        fs::create_dir_all(venv.join("lib")).unwrap();
        fs::write(venv.join("lib/marker"), b"x").unwrap();

        remove_existing_venv(&venv, Some("1/1")).unwrap();
        assert!(!venv.exists());

        // Nothing left to remove
        remove_existing_venv(&venv, None).unwrap();
    }

    #[test]
    fn test_remove_plain_file() {
        let temp_dir = TempDir::new().unwrap();
        let venv = temp_dir.path().join(".venv");
        fs::write(&venv, b"not a directory").unwrap();

        remove_existing_venv(&venv, None).unwrap();
        assert!(!venv.exists());
    }
}
