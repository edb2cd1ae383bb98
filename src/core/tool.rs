use crate::config::BootstrapConfig;
use crate::core::version::VersionProbe;
use crate::domain::model::{CommandSpec, InstallState, Platform};
use crate::domain::ports::ProcessRunner;
use crate::utils::console::format_prefix;
use crate::utils::error::{BootstrapError, Result};

pub const SETUP_STEPS: usize = 3;

/// Installs the packaging tool when missing and keeps it up to date.
///
/// Install order on non-Windows hosts is the network install script first,
/// then the package manager. Those failures are logged and reported as
/// [`InstallState::Failed`]. On Windows only the package manager is
/// available and its failure is returned as an error.
pub struct ToolInstaller<'a, R: ProcessRunner> {
    runner: &'a R,
    config: &'a BootstrapConfig,
    platform: Platform,
    total_steps: usize,
    probe: VersionProbe<'a, R>,
}

impl<'a, R: ProcessRunner> ToolInstaller<'a, R> {
    pub fn new(runner: &'a R, config: &'a BootstrapConfig) -> Result<Self> {
        Self::with_platform(runner, config, Platform::current())
    }

    pub fn with_platform(
        runner: &'a R,
        config: &'a BootstrapConfig,
        platform: Platform,
    ) -> Result<Self> {
        Ok(Self {
            runner,
            config,
            platform,
            total_steps: SETUP_STEPS,
            probe: VersionProbe::new(runner, &config.tool)?,
        })
    }

    /// Numbers progress lines as the first three steps of a longer sequence.
    pub fn with_total_steps(mut self, total_steps: usize) -> Self {
        self.total_steps = total_steps;
        self
    }

    fn step(&self, number: usize) -> String {
        format_prefix(Some(&format!("{}/{}", number, self.total_steps)))
    }

    fn tool(&self) -> &str {
        &self.config.tool
    }

    /// True iff the version check starts and exits zero, whether or not its
    /// output parses.
    pub fn is_installed(&self) -> bool {
        let label = format!("1/{}", self.total_steps);
        self.probe.check(Some(&label)).is_some()
    }

    pub fn install(&self) -> Result<InstallState> {
        let step = self.step(2);
        let tool = self.tool();
        let pm = &self.config.package_manager;
        tracing::info!(platform = ?self.platform, "{:?}", InstallState::Installing);

        if self.platform.is_windows() {
            println!("{}Installing {} via {}...", step, tool, pm);
            self.install_with_package_manager()?;
            println!("\tSuccessfully installed {} via {}", tool, pm);
            return Ok(InstallState::Installed);
        }

        println!("{}*nix detected, installing {} via install script...", step, tool);
        match self.install_with_script() {
            Ok(()) => {
                println!("\tSuccessfully installed {} via install script", tool);
                return Ok(InstallState::Installed);
            }
            Err(e) => {
                tracing::warn!("Install script failed: {}", e);
                println!("\tFailed to install {} via install script", tool);
            }
        }

        println!("{}Installing {} via {}...", step, tool, pm);
        match self.install_with_package_manager() {
            Ok(()) => {
                println!("\tSuccessfully installed {} via {}", tool, pm);
                Ok(InstallState::Installed)
            }
            Err(e) => {
                tracing::warn!("Package manager install failed: {}", e);
                println!("\tFailed to install {} via {}", tool, pm);
                Ok(InstallState::Failed)
            }
        }
    }

    /// Returns `false` without running anything when the tool is missing.
    /// Update failures are logged, never raised.
    pub fn update(&self) -> bool {
        if !self.is_installed() {
            return false;
        }

        let command = if self.platform.is_windows() {
            CommandSpec::new(&self.config.package_manager)
                .args(["install", "--upgrade"])
                .arg(self.tool())
        } else {
            CommandSpec::new(self.tool()).arg("self-update")
        };

        println!("{}Updating {}...", self.step(3), self.tool());
        match self.run_checked(&command) {
            Ok(()) => {
                println!("\tUpdated {}", self.tool());
                true
            }
            Err(e) => {
                tracing::warn!("Update failed: {}", e);
                println!("\tFailed to update {}", self.tool());
                false
            }
        }
    }

    /// Installs when missing, then always updates.
    pub fn setup_environment(&self) -> Result<InstallState> {
        let state = if self.is_installed() {
            InstallState::Installed
        } else {
            tracing::info!("{:?}", InstallState::NotInstalled);
            self.install()?
        };

        self.update();
        Ok(state)
    }

    /// The URL reaches `sh` as `$1`, never as part of the script text.
    pub fn install_script_command(&self) -> CommandSpec {
        CommandSpec::new("sh")
            .arg("-c")
            .arg("curl -LsSf \"$1\" | sh")
            .arg("sh")
            .arg(&self.config.install_script_url)
    }

    fn install_with_script(&self) -> Result<()> {
        self.run_checked(&self.install_script_command())?;
        self.verify()
    }

    fn install_with_package_manager(&self) -> Result<()> {
        let command = CommandSpec::new(&self.config.package_manager)
            .arg("install")
            .arg(self.tool());
        self.run_checked(&command)?;
        self.verify()
    }

    /// Re-runs the version check after an install attempt.
    fn verify(&self) -> Result<()> {
        self.run_checked(&self.probe.command())
    }

    fn run_checked(&self, command: &CommandSpec) -> Result<()> {
        let result = self.runner.run(command)?;
        if result.success() {
            Ok(())
        } else {
            tracing::debug!("stderr of '{}': {}", command, result.stderr_text());
            Err(BootstrapError::NonZeroExit {
                command: command.to_string(),
                code: result.exit_code,
            })
        }
    }
}
