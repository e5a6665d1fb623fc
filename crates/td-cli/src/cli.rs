//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use td_core::{Window, parse_calendar_date};

/// Track how many days you stay in each country.
///
/// Stays are kept as a continuous timeline of (country, entry, departure)
/// rows. Use `ongoing` as the departure of the stay you are still in.
#[derive(Debug, Parser)]
#[command(name = "td", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Ledger CSV file (overrides the configured path).
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Date to use as today, in YYYY-MM-DD form (defaults to the local date).
    #[arg(long, global = true, value_parser = parse_calendar_date)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List stays with their line numbers.
    List(ListArgs),

    /// Show days spent per country.
    Days(DaysArgs),

    /// Add a stay.
    Add(AddArgs),

    /// Delete a stay by line number (see `list`).
    Del(DelArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Window to show: `all`, `last` for the trailing year, or a year number.
    #[arg(short, long, default_value = "all")]
    pub year: Window,
}

#[derive(Debug, Args)]
pub struct DaysArgs {
    /// Window to count: `all`, `last` for the trailing year, or a year number.
    #[arg(short, long, default_value = "all")]
    pub year: Window,

    /// Show the length of the current stay instead. Ignores --year.
    #[arg(short, long)]
    pub last: bool,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Country name; quote it if it contains spaces.
    pub country: String,

    /// Date of entry, YYYY-MM-DD.
    pub entry_date: String,

    /// Date of departure, YYYY-MM-DD, or `ongoing` if you are still there.
    pub departure_date: String,
}

#[derive(Debug, Args)]
pub struct DelArgs {
    /// Line number to delete, as shown by `list`.
    pub line: usize,
}
