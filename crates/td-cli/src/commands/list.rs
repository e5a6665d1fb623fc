//! List command for showing stays with line numbers.

use std::io::Write;

use anyhow::Result;
use td_core::{Stay, filter_by_window};

use crate::ListArgs;
use crate::commands::Ledger;

pub fn run<W: Write>(writer: &mut W, args: &ListArgs, ledger: &Ledger) -> Result<()> {
    let stays = ledger.load()?;
    let stays = filter_by_window(&stays, args.year, ledger.today);
    write_stays(writer, &stays)
}

/// Writes `N: COUNTRY ENTRY => DEPARTURE` lines using the stored tokens.
pub fn write_stays<W: Write>(writer: &mut W, stays: &[Stay]) -> Result<()> {
    if stays.is_empty() {
        writeln!(writer, "No entries")?;
        return Ok(());
    }

    for (idx, stay) in stays.iter().enumerate() {
        let record = stay.record();
        writeln!(
            writer,
            "{}: {} {} => {}",
            idx + 1,
            record.country,
            record.entry_date,
            record.departure_date
        )?;
    }
    Ok(())
}
