//! Add command for recording a new stay.

use std::io::Write;

use anyhow::{Context, Result};
use td_core::StayRecord;

use crate::AddArgs;
use crate::commands::Ledger;
use crate::commands::list::write_stays;

pub fn run<W: Write>(writer: &mut W, args: &AddArgs, ledger: &Ledger) -> Result<()> {
    let stays = ledger.load()?;
    let record = StayRecord::new(
        args.country.as_str(),
        args.entry_date.as_str(),
        args.departure_date.as_str(),
    );

    let updated = td_core::add(&stays, record, ledger.today)
        .with_context(|| format!("cannot add stay in {}", args.country))?;
    ledger.save(&updated)?;
    tracing::debug!(country = %args.country, "stay saved");

    write_stays(writer, &updated)
}
