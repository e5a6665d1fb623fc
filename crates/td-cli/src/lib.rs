//! Travel days CLI library.
//!
//! This crate provides the CLI interface and CSV storage for the ledger
//! engine in `td-core`.

mod cli;
pub mod commands;
mod config;
pub mod store;

pub use cli::{AddArgs, Cli, Commands, DaysArgs, DelArgs, ListArgs};
pub use config::Config;
