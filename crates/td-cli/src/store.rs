//! CSV storage for stay records.
//!
//! The file has a `country,entry_date,departure_date` header and one row per
//! stay. Only the tokens are stored; resolved dates are recomputed on load.

use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use td_core::StayRecord;
use tempfile::NamedTempFile;

const HEADER: [&str; 3] = ["country", "entry_date", "departure_date"];

/// Reads all records in file order. A missing file is an empty ledger.
pub fn read_records(path: &Path) -> Result<Vec<StayRecord>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "ledger file not found, starting empty");
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut records = Vec::new();
    for (idx, row) in reader.deserialize().enumerate() {
        // Line 1 is the header.
        let record: StayRecord =
            row.with_context(|| format!("invalid record on line {} of {}", idx + 2, path.display()))?;
        records.push(record);
    }

    tracing::debug!(path = %path.display(), records = records.len(), "read ledger file");
    Ok(records)
}

/// Replaces the file with `records`, creating parent directories as needed.
///
/// Rows go to a temp file in the same directory which is then renamed over
/// the ledger, so a failed write never leaves a truncated ledger behind.
pub fn write_records(path: &Path, records: &[StayRecord]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(&mut file);
        writer.write_record(HEADER)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }
    file.persist(path)
        .with_context(|| format!("failed to replace {}", path.display()))?;

    tracing::debug!(path = %path.display(), records = records.len(), "wrote ledger file");
    Ok(())
}
