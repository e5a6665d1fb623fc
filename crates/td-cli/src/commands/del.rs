//! Del command for removing a stay by line number.

use std::io::Write;

use anyhow::Result;

use crate::DelArgs;
use crate::commands::Ledger;

pub fn run<W: Write>(writer: &mut W, args: &DelArgs, ledger: &Ledger) -> Result<()> {
    let stays = ledger.load()?;
    let deletion = td_core::delete(&stays, args.line)?;

    writeln!(
        writer,
        "entry with country {} was deleted",
        deletion.removed.country()
    )?;
    if let Some(advisory) = &deletion.advisory {
        writeln!(writer, "warning: ledger is no longer consistent: {advisory}")?;
        writeln!(writer, "check it with the `list` command")?;
    }

    ledger.save(&deletion.stays)
}
