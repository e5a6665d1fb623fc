//! Days command for per-country totals and the current stay.

use std::io::Write;

use anyhow::Result;
use td_core::{aggregate_days, current_stay, filter_by_window};

use crate::DaysArgs;
use crate::commands::Ledger;

pub fn run<W: Write>(writer: &mut W, args: &DaysArgs, ledger: &Ledger) -> Result<()> {
    let stays = ledger.load()?;

    if args.last {
        let current = current_stay(&stays, ledger.today)?;
        if args.json {
            writeln!(writer, "{}", serde_json::to_string_pretty(&current)?)?;
        } else {
            writeln!(
                writer,
                "Your current visit in {} lasts for {} days already",
                current.country, current.days
            )?;
        }
        return Ok(());
    }

    let stays = filter_by_window(&stays, args.year, ledger.today);
    let totals = aggregate_days(&stays);

    if args.json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&totals)?)?;
        return Ok(());
    }

    for total in &totals {
        writeln!(writer, "{} {}", total.country, total.days)?;
    }
    Ok(())
}
