use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use td_cli::commands::{Ledger, add, days, del, list};
use td_cli::{Cli, Commands, Config};

/// Resolve the ledger location and the date that counts as today.
fn open_ledger(cli: &Cli) -> Result<Ledger> {
    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let path = cli.file.clone().unwrap_or(config.ledger_path);
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    tracing::debug!(path = %path.display(), %today, "using ledger");

    Ok(Ledger { path, today })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut stdout = io::stdout().lock();
    match &cli.command {
        Some(Commands::List(args)) => list::run(&mut stdout, args, &open_ledger(&cli)?)?,
        Some(Commands::Days(args)) => days::run(&mut stdout, args, &open_ledger(&cli)?)?,
        Some(Commands::Add(args)) => add::run(&mut stdout, args, &open_ledger(&cli)?)?,
        Some(Commands::Del(args)) => del::run(&mut stdout, args, &open_ledger(&cli)?)?,
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
