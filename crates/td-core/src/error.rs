//! Ledger error taxonomy.

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

/// Which date of a stay a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Entry,
    Departure,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Entry => "entry",
            Self::Departure => "departure",
        };
        write!(f, "{s}")
    }
}

/// Errors raised while resolving, validating or editing a ledger.
///
/// Positions are 1-based. For resolution errors they refer to the input
/// order; for sequence errors they refer to the sorted order shown by `list`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A date token is malformed or names a day that does not exist.
    #[error("bad {field} date '{token}'{}", at_position(.position))]
    InvalidDateFormat {
        token: String,
        field: DateField,
        position: Option<usize>,
    },

    /// The country label is blank.
    #[error("country cannot be empty{}", at_position(.position))]
    EmptyCountry { position: Option<usize> },

    /// Entry date falls after departure date within one stay.
    #[error("in country {country} entry date {entry} is after departure date {departure}")]
    InvertedInterval {
        country: String,
        entry: String,
        departure: String,
        position: Option<usize>,
    },

    /// Two consecutive stays overlap or leave more than one day unaccounted.
    #[error(
        "entry date {entry} to {country} is too far from last departure date \
         {previous_departure} from country {previous_country} ({gap_days} day gap)"
    )]
    OverlapOrGap {
        country: String,
        entry: String,
        previous_country: String,
        previous_departure: NaiveDate,
        gap_days: i64,
        position: usize,
    },

    /// More than one stay is still open.
    #[error("stays {first} and {second} are both ongoing; only one stay can be open")]
    MultipleOngoing { first: usize, second: usize },

    /// Deletion target does not exist.
    #[error("ledger has only {len} entries, cannot remove entry {index}")]
    IndexOutOfRange { index: usize, len: usize },

    /// No stay is currently open.
    #[error("couldn't find the country you are now in")]
    NoOngoingStay,

    /// A reporting window could not be parsed.
    #[error("invalid window '{0}': use 'all', 'last' or a year such as 2024")]
    InvalidWindow(String),
}

#[allow(clippy::ref_option, reason = "thiserror passes fields by reference")]
fn at_position(position: &Option<usize>) -> String {
    position.map_or_else(String::new, |p| format!(" in line {p}"))
}
