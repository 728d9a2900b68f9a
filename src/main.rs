//! orgov CLI - AWS Organizations governor
//!
//! Usage: orgov [--profile <name>] [--role <arn>] <COMMAND>
//!
//! Commands:
//!   create-organization  Turn the calling account into an organization root
//!   create-ou            Create an organizational unit
//!   create-account       Create, place and provision an account
//!   update-policy        Deploy policy stacks to recorded accounts

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use orgov::config::{self, CliOverrides, Config};

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let loaded = config::discover(cli.config.as_deref())?;
    for warning in &loaded.warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => tracing::warn!(
                "unknown config key '{}' in {} (did you mean '{}'?)",
                warning.key,
                location,
                suggestion
            ),
            None => tracing::warn!("unknown config key '{}' in {}", warning.key, location),
        }
    }
    if let Some(source) = &loaded.source {
        tracing::debug!(config = %source.display(), "configuration loaded");
    }

    let overrides = CliOverrides {
        profile: cli.profile.clone(),
        role: cli.role.clone(),
    };
    Ok(loaded.config.with_overrides(&overrides))
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Commands::CreateOrganization => commands::organization::cmd_create_organization(&config),
        Commands::CreateOu { name, parent } => commands::ou::cmd_create_ou(&config, &name, &parent),
        Commands::CreateAccount {
            name,
            email,
            ou,
            updateiam,
        } => commands::account::cmd_create_account(&config, &name, &email, &ou, updateiam),
        Commands::UpdatePolicy {
            accounts,
            updateiam,
        } => commands::policy::cmd_update_policy(&config, &accounts, updateiam),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(255)
        }
    }
}
