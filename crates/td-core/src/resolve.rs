//! Date token resolution.

use chrono::NaiveDate;

use crate::error::{DateField, LedgerError};
use crate::stay::{DateToken, Stay, StayRecord};

/// Resolves a departure token; the ongoing sentinel becomes `today`.
pub fn resolve_token(token: &str, today: NaiveDate) -> Result<NaiveDate, LedgerError> {
    parse(token, DateField::Departure, None).map(|t| t.resolve(today))
}

/// Resolves an entry token, which must always be a concrete date.
pub fn resolve_entry(token: &str) -> Result<NaiveDate, LedgerError> {
    resolve_entry_at(token, None)
}

fn resolve_entry_at(token: &str, position: Option<usize>) -> Result<NaiveDate, LedgerError> {
    match parse(token, DateField::Entry, position)? {
        DateToken::Date(date) => Ok(date),
        DateToken::Ongoing => Err(invalid(token, DateField::Entry, position)),
    }
}

/// Resolves both dates of a record.
///
/// `position` is the 1-based place of the record in its input, used only
/// for diagnostics.
pub fn resolve_record(
    record: StayRecord,
    position: Option<usize>,
    today: NaiveDate,
) -> Result<Stay, LedgerError> {
    if record.country.trim().is_empty() {
        return Err(LedgerError::EmptyCountry { position });
    }
    let entry = resolve_entry_at(&record.entry_date, position)?;
    let departure = parse(&record.departure_date, DateField::Departure, position)?;
    let departure_date = departure.resolve(today);
    Ok(Stay::new(record, entry, departure, departure_date))
}

fn parse(token: &str, field: DateField, position: Option<usize>) -> Result<DateToken, LedgerError> {
    token.parse().map_err(|_| invalid(token, field, position))
}

fn invalid(token: &str, field: DateField, position: Option<usize>) -> LedgerError {
    LedgerError::InvalidDateFormat {
        token: token.to_string(),
        field,
        position,
    }
}
