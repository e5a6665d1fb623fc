//! Loading and editing a whole ledger.
//!
//! Every edit builds a candidate ledger from the persisted records, runs it
//! through the same resolve, sort and validate pipeline as a load, and only
//! then hands it back. The input slice is never modified, so a rejected edit
//! leaves the caller's ledger as it was.

use chrono::NaiveDate;

use crate::error::LedgerError;
use crate::resolve::resolve_record;
use crate::sort::sort_stays;
use crate::stay::{Stay, StayRecord};
use crate::validate::{validate_sequence, validate_stay};

/// Outcome of removing a stay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deletion {
    /// Remaining stays, in their previous order.
    pub stays: Vec<Stay>,
    /// The stay that was removed.
    pub removed: Stay,
    /// Why the remaining stays no longer validate, if they don't.
    pub advisory: Option<LedgerError>,
}

/// Resolves, sorts and validates records into a ledger.
pub fn load(records: Vec<StayRecord>, today: NaiveDate) -> Result<Vec<Stay>, LedgerError> {
    let stays = resolve_all(records, today)?;
    let stays = sort_stays(stays);
    validate_sequence(&stays)?;
    tracing::debug!(stays = stays.len(), %today, "loaded ledger");
    Ok(stays)
}

fn resolve_all(records: Vec<StayRecord>, today: NaiveDate) -> Result<Vec<Stay>, LedgerError> {
    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| resolve_record(record, Some(idx + 1), today))
        .collect()
}

/// Adds a stay, returning the new ledger.
///
/// When the new stay sorts last and the stay before it is ongoing and
/// started earlier, the ongoing stay is closed on the new entry date.
/// Stays inserted earlier in the timeline never rewrite existing records.
pub fn add(ledger: &[Stay], record: StayRecord, today: NaiveDate) -> Result<Vec<Stay>, LedgerError> {
    let new_stay = resolve_record(record.clone(), None, today)?;
    validate_stay(&new_stay, None)?;

    let mut records = into_records(ledger);
    records.push(record);
    let mut stays = sort_stays(resolve_all(records, today)?);

    // Stable sort: the new stay is the last one equal to it.
    let added_last = stays
        .iter()
        .rposition(|stay| *stay == new_stay)
        .is_some_and(|idx| idx + 1 == stays.len());

    if added_last {
        if let [.., previous, last] = stays.as_mut_slice() {
            if previous.is_ongoing() && last.entry() > previous.entry() {
                tracing::debug!(
                    country = previous.country(),
                    closed_on = %last.entry(),
                    "closing ongoing stay"
                );
                previous.close_on(&last.record().entry_date, last.entry());
            }
        }
    }

    validate_sequence(&stays)?;
    tracing::debug!(stays = stays.len(), "stay added");
    Ok(stays)
}

/// Removes the stay at 1-based `index`.
///
/// The remainder is not required to be valid; any problem is reported in
/// [`Deletion::advisory`] instead of failing the deletion.
pub fn delete(ledger: &[Stay], index: usize) -> Result<Deletion, LedgerError> {
    if index == 0 || index > ledger.len() {
        return Err(LedgerError::IndexOutOfRange {
            index,
            len: ledger.len(),
        });
    }

    let mut stays = ledger.to_vec();
    let removed = stays.remove(index - 1);
    let advisory = validate_sequence(&stays).err();
    if let Some(err) = &advisory {
        tracing::warn!(error = %err, "ledger is inconsistent after deletion");
    }

    Ok(Deletion {
        stays,
        removed,
        advisory,
    })
}

/// Persisted form of a ledger.
pub fn into_records(stays: &[Stay]) -> Vec<StayRecord> {
    stays.iter().map(|stay| stay.record().clone()).collect()
}
