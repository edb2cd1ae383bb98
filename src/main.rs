use clap::Parser;
use std::path::Path;
use venv_bootstrap::config::cli::{Cli, Command};
use venv_bootstrap::utils::error::ErrorSeverity;
use venv_bootstrap::utils::{console::must_pass, logger, validation::Validate};
use venv_bootstrap::{
    BootstrapConfig, BootstrapEngine, BootstrapError, EnvironmentCreator, ProjectInstaller,
    SystemRunner, ToolInstaller, VersionProbe,
};

const DEFAULT_CONFIG_FILE: &str = "venv-bootstrap.toml";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI args: {:?}", cli);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    match run(&cli.command, &config) {
        Ok(()) => Ok(()),
        Err(e @ BootstrapError::StepFailed { .. }) => {
            tracing::error!("{}", e);
            println!("[-] Exiting...");
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!(
                "{} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium | ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> venv_bootstrap::Result<BootstrapConfig> {
    let mut config = match &cli.config {
        Some(path) => BootstrapConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            BootstrapConfig::from_file(DEFAULT_CONFIG_FILE)?
        }
        None => BootstrapConfig::default(),
    };
    config.apply_overrides(cli.overrides());
    config.validate()?;
    tracing::debug!("Effective config: {:?}", config);
    Ok(config)
}

fn run(command: &Command, config: &BootstrapConfig) -> venv_bootstrap::Result<()> {
    let runner = SystemRunner::new();

    match command {
        Command::Version { json } => {
            let probe = VersionProbe::new(&runner, &config.tool)?;
            if *json {
                let record = probe.probe();
                println!("{}", serde_json::to_string_pretty(&record)?);
                must_pass(record.is_some(), "version")?;
            } else {
                must_pass(probe.check(None).is_some(), "version")?;
            }
        }
        Command::SetupTool => {
            ToolInstaller::new(&runner, config)?.setup_environment()?;
        }
        Command::CreateVenv => {
            let venv_path = EnvironmentCreator::new(&runner, &config.tool).create(
                &config.venv_path,
                config.python_version.as_deref(),
                Some("1/1"),
            );
            must_pass(venv_path.is_some_and(|path| path.exists()), "create-venv")?;
        }
        Command::InstallProjects { groups, group } => {
            let groups = if group.is_empty() {
                config.groups(*groups)
            } else {
                group.as_slice()
            };
            let installed = ProjectInstaller::new(&runner, &config.tool).install(
                &config.projects,
                groups,
                Some("1/1"),
            );
            must_pass(installed, "install-projects")?;
        }
        Command::Bootstrap { groups } => {
            let venv_path = BootstrapEngine::new(&runner, config).run(config.groups(*groups))?;
            println!("✅ Environment ready at '{}'", venv_path.display());
        }
    }

    Ok(())
}
