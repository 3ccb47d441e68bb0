//! Visual runtime build CLI
//!
//! Resolves component versions and CDN paths from `package.json`, `vrb.toml`
//! and command-line overrides.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use context::BuildContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let Some(command) = cli.command else {
        // No command provided - show help hint
        println!("{} Visual runtime build configuration", "vrb".green().bold());
        println!();
        println!("Run {} for available commands.", "vrb --help".cyan());
        return Ok(());
    };

    let context = BuildContext::new(&cli.manifest, cli.config.as_deref(), &cli.overrides)?;
    execute_command(&context, command)
}

fn execute_command(context: &BuildContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::ListParams => commands::run_list_params(context),
        Commands::Show { json } => commands::run_show(context, json),
        Commands::Get { component, field } => commands::run_get(context, &component, field),
        Commands::Check => commands::run_check(context),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrb_test_utils::TestProject;

    fn sample_context(project: &TestProject) -> BuildContext {
        BuildContext::new(&project.path("package.json"), None, &[])
            .unwrap()
            .without_env()
    }

    #[test]
    fn test_execute_every_command() {
        let project = TestProject::with_sample_package();
        let context = sample_context(&project);

        let commands = [
            Commands::ListParams,
            Commands::Show { json: false },
            Commands::Show { json: true },
            Commands::Get {
                component: "oraclejet".to_string(),
                field: cli::Field::Version,
            },
            Commands::Check,
        ];
        for cmd in commands {
            let label = format!("{cmd:?}");
            assert!(execute_command(&context, cmd).is_ok(), "{label} failed");
        }
    }

    #[test]
    fn test_cli_error_user() {
        let error = crate::error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }
}
