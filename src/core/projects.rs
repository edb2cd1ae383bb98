use crate::domain::model::CommandSpec;
use crate::domain::ports::ProcessRunner;
use crate::utils::console::format_prefix;
use std::path::Path;

/// Installs local projects into the active environment, one at a time.
pub struct ProjectInstaller<'a, R: ProcessRunner> {
    runner: &'a R,
    tool: &'a str,
}

impl<'a, R: ProcessRunner> ProjectInstaller<'a, R> {
    pub fn new(runner: &'a R, tool: &'a str) -> Self {
        Self { runner, tool }
    }

    pub fn command(&self, project: &Path, groups: &[String]) -> CommandSpec {
        let mut command = CommandSpec::new(self.tool)
            .args(["pip", "install"])
            .arg(project.to_string_lossy());
        if !groups.is_empty() {
            command = command.arg("--group").args(groups.iter().cloned());
        }
        command
    }

    /// Installs `projects` in order.
    ///
    /// A project whose install exits non-zero is logged and the loop moves
    /// on. A project whose install cannot be started stops the loop and
    /// the call returns `false`; earlier installs are left in place.
    pub fn install(
        &self,
        projects: &[impl AsRef<Path>],
        groups: &[String],
        prefix: Option<&str>,
    ) -> bool {
        println!("{}Installing dependencies...", format_prefix(prefix));

        for project in projects {
            let project = project.as_ref();
            println!("\tInstalling project '{}'...", project.display());

            let command = self.command(project, groups);
            let result = match self.runner.run(&command) {
                Ok(result) => result,
                Err(e) => {
                    println!("\tFailed to install project '{}': {}", project.display(), e);
                    return false;
                }
            };

            println!("{}", result.stderr_text());
            println!("{}", result.stdout_text());
            if !result.success() {
                tracing::warn!(
                    "'{}' exited with {:?}, continuing with remaining projects",
                    command,
                    result.exit_code
                );
            }
            println!("\tInstalled project '{}'", project.display());
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CommandResult;
    use crate::utils::error::Result;

    struct NoopRunner;

    impl ProcessRunner for NoopRunner {
        fn run(&self, _command: &CommandSpec) -> Result<CommandResult> {
            Ok(CommandResult::default())
        }
    }

    #[test]
    fn test_command_without_groups() {
        let installer = ProjectInstaller::new(&NoopRunner, "uv");
        let command = installer.command(Path::new("libs/core"), &[]);
        assert_eq!(command.to_string(), "uv pip install libs/core");
    }

    #[test]
    fn test_command_with_groups() {
        let installer = ProjectInstaller::new(&NoopRunner, "uv");
        let groups = vec!["dev".to_string(), "test".to_string()];
        let command = installer.command(Path::new("."), &groups);
        assert_eq!(command.args, vec!["pip", "install", ".", "--group", "dev", "test"]);
    }

    #[test]
    fn test_empty_project_list_succeeds() {
        let installer = ProjectInstaller::new(&NoopRunner, "uv");
        let projects: Vec<&Path> = Vec::new();
        assert!(installer.install(&projects, &[], None));
    }
}
