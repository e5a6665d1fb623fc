//! CLI subcommand implementations.

pub mod add;
pub mod days;
pub mod del;
pub mod list;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use td_core::Stay;

use crate::store;

/// Where the ledger lives and which day it is for this run.
#[derive(Debug, Clone)]
pub struct Ledger {
    pub path: PathBuf,
    pub today: NaiveDate,
}

impl Ledger {
    /// Reads and validates the whole ledger.
    pub fn load(&self) -> Result<Vec<Stay>> {
        let records = store::read_records(&self.path)?;
        td_core::load(records, self.today)
            .with_context(|| format!("invalid ledger {}", self.path.display()))
    }

    /// Persists the given stays, replacing the file.
    pub fn save(&self, stays: &[Stay]) -> Result<()> {
        store::write_records(&self.path, &td_core::into_records(stays))
    }
}
