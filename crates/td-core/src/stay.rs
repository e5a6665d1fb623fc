//! Stay records and their resolved form.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical sentinel for a departure that has not happened yet.
pub const ONGOING: &str = "ongoing";

/// Sentinel written by older ledger files, accepted when parsing.
const LEGACY_ONGOING: &str = "now";

/// Date format of every concrete token.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A stay as handed to and from storage.
///
/// Dates are kept as the tokens the user supplied. Resolved dates never get
/// persisted; they are recomputed on every load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayRecord {
    pub country: String,
    pub entry_date: String,
    pub departure_date: String,
}

impl StayRecord {
    pub fn new(
        country: impl Into<String>,
        entry_date: impl Into<String>,
        departure_date: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            entry_date: entry_date.into(),
            departure_date: departure_date.into(),
        }
    }
}

/// A date token: either a calendar date or the open-ended sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateToken {
    Date(NaiveDate),
    Ongoing,
}

impl DateToken {
    /// Concrete date of this token, with `Ongoing` standing for `today`.
    pub const fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Date(date) => date,
            Self::Ongoing => today,
        }
    }

    pub const fn is_ongoing(self) -> bool {
        matches!(self, Self::Ongoing)
    }
}

impl fmt::Display for DateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            Self::Ongoing => write!(f, "{ONGOING}"),
        }
    }
}

impl FromStr for DateToken {
    type Err = InvalidDateToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ONGOING | LEGACY_ONGOING => Ok(Self::Ongoing),
            _ => parse_calendar_date(s).map(Self::Date),
        }
    }
}

/// Parses a zero-padded `YYYY-MM-DD` date that exists on the calendar.
pub fn parse_calendar_date(s: &str) -> Result<NaiveDate, InvalidDateToken> {
    if !is_iso_shaped(s) {
        return Err(InvalidDateToken(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| InvalidDateToken(s.to_string()))
}

/// `YYYY-MM-DD` with zero padding; chrono alone also takes `2020-1-5`.
fn is_iso_shaped(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Error type for strings that are neither a date nor the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDateToken(String);

impl fmt::Display for InvalidDateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid date token: {}", self.0)
    }
}

impl std::error::Error for InvalidDateToken {}

/// A stay with its dates resolved against a given "today".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stay {
    record: StayRecord,
    entry: NaiveDate,
    departure: DateToken,
    departure_date: NaiveDate,
}

impl Stay {
    pub(crate) const fn new(
        record: StayRecord,
        entry: NaiveDate,
        departure: DateToken,
        departure_date: NaiveDate,
    ) -> Self {
        Self {
            record,
            entry,
            departure,
            departure_date,
        }
    }

    pub fn country(&self) -> &str {
        &self.record.country
    }

    /// The stay as persisted.
    pub const fn record(&self) -> &StayRecord {
        &self.record
    }

    pub fn into_record(self) -> StayRecord {
        self.record
    }

    pub const fn entry(&self) -> NaiveDate {
        self.entry
    }

    pub const fn departure(&self) -> DateToken {
        self.departure
    }

    /// Resolved departure; today's date for an ongoing stay.
    pub const fn departure_date(&self) -> NaiveDate {
        self.departure_date
    }

    pub const fn is_ongoing(&self) -> bool {
        self.departure.is_ongoing()
    }

    /// Days spent, counting both the entry and the departure day.
    pub fn days(&self) -> i64 {
        (self.departure_date - self.entry).num_days() + 1
    }

    /// Sort key: entry date, then resolved departure date.
    pub(crate) const fn key(&self) -> (NaiveDate, NaiveDate) {
        (self.entry, self.departure_date)
    }

    /// Copy of this stay with its resolved dates narrowed to `[start, end]`.
    ///
    /// Tokens are left as written so clipped stays still display as entered.
    pub(crate) fn clipped(&self, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            record: self.record.clone(),
            entry: self.entry.max(start),
            departure: self.departure,
            departure_date: self.departure_date.min(end),
        }
    }

    /// Closes an ongoing stay on `date`, rewriting its departure token.
    pub(crate) fn close_on(&mut self, token: &str, date: NaiveDate) {
        token.clone_into(&mut self.record.departure_date);
        self.departure = DateToken::Date(date);
        self.departure_date = date;
    }
}
