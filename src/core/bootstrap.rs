use crate::config::BootstrapConfig;
use crate::core::projects::ProjectInstaller;
use crate::core::tool::ToolInstaller;
use crate::core::venv::EnvironmentCreator;
use crate::domain::model::{InstallState, Platform};
use crate::domain::ports::ProcessRunner;
use crate::utils::console::must_pass;
use crate::utils::error::Result;
use std::path::PathBuf;

pub const BOOTSTRAP_STEPS: usize = 5;

/// Runs tool setup, environment creation and project installation in order.
/// Environment creation and project installation are required steps.
pub struct BootstrapEngine<'a, R: ProcessRunner> {
    runner: &'a R,
    config: &'a BootstrapConfig,
    platform: Platform,
}

impl<'a, R: ProcessRunner> BootstrapEngine<'a, R> {
    pub fn new(runner: &'a R, config: &'a BootstrapConfig) -> Self {
        Self::with_platform(runner, config, Platform::current())
    }

    pub fn with_platform(runner: &'a R, config: &'a BootstrapConfig, platform: Platform) -> Self {
        Self {
            runner,
            config,
            platform,
        }
    }

    /// Returns the created environment path.
    pub fn run(&self, groups: &[String]) -> Result<PathBuf> {
        tracing::info!("Bootstrapping '{}'", self.config.venv_path.display());

        // Steps 1-3. A failed non-Windows install is only logged; step 4
        // catches a tool that is still missing.
        let state = ToolInstaller::with_platform(self.runner, self.config, self.platform)?
            .with_total_steps(BOOTSTRAP_STEPS)
            .setup_environment()?;
        if state != InstallState::Installed {
            tracing::warn!("{} is not installed, continuing", self.config.tool);
        }

        let venv_label = format!("4/{}", BOOTSTRAP_STEPS);
        let venv_path = EnvironmentCreator::new(self.runner, &self.config.tool)
            .create(
                &self.config.venv_path,
                self.config.python_version.as_deref(),
                Some(&venv_label),
            )
            .filter(|path| path.exists());
        must_pass(venv_path.is_some(), "create-venv")?;

        let projects_label = format!("5/{}", BOOTSTRAP_STEPS);
        let installed = ProjectInstaller::new(self.runner, &self.config.tool).install(
            &self.config.projects,
            groups,
            Some(&projects_label),
        );
        must_pass(installed, "install-projects")?;

        Ok(self.config.venv_path.clone())
    }
}
