//! Interval and continuity checks.
//!
//! A ledger is a continuous timeline: each stay starts on the day the
//! previous one ended (same-day travel) or the day after. An ongoing stay
//! breaks the chain; the stay after it is not checked against it.

use chrono::NaiveDate;

use crate::error::LedgerError;
use crate::stay::Stay;

/// Largest allowed number of days between a departure and the next entry.
const MAX_GAP_DAYS: i64 = 1;

/// Checks a single stay; `position` is 1-based and only used for diagnostics.
pub fn validate_stay(stay: &Stay, position: Option<usize>) -> Result<(), LedgerError> {
    if stay.entry() > stay.departure_date() {
        let record = stay.record();
        return Err(LedgerError::InvertedInterval {
            country: record.country.clone(),
            entry: record.entry_date.clone(),
            departure: record.departure_date.clone(),
            position,
        });
    }
    Ok(())
}

/// Checks a sorted sequence, stopping at the first problem.
pub fn validate_sequence(stays: &[Stay]) -> Result<(), LedgerError> {
    let mut last: Option<(NaiveDate, &str)> = None;
    let mut ongoing: Option<usize> = None;

    for (idx, stay) in stays.iter().enumerate() {
        let position = idx + 1;
        validate_stay(stay, Some(position))?;

        if let Some((previous_departure, previous_country)) = last {
            let gap_days = (stay.entry() - previous_departure).num_days();
            if !(0..=MAX_GAP_DAYS).contains(&gap_days) {
                return Err(LedgerError::OverlapOrGap {
                    country: stay.country().to_string(),
                    entry: stay.record().entry_date.clone(),
                    previous_country: previous_country.to_string(),
                    previous_departure,
                    gap_days,
                    position,
                });
            }
        }

        if stay.is_ongoing() {
            if let Some(first) = ongoing {
                return Err(LedgerError::MultipleOngoing {
                    first,
                    second: position,
                });
            }
            ongoing = Some(position);
            last = None;
        } else {
            last = Some((stay.departure_date(), stay.country()));
        }
    }

    tracing::trace!(stays = stays.len(), "sequence validated");
    Ok(())
}
