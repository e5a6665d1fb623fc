//! Stay interval ledger engine.
//!
//! This crate contains the fundamental types and logic for:
//! - Resolution: turning date tokens (`YYYY-MM-DD` or `ongoing`) into dates
//! - Validation: single-stay checks and timeline continuity
//! - Windows: clipping stays to a calendar year or the trailing year
//! - Aggregation: day totals per country and the current stay
//! - Ledger edits: add and delete with whole-ledger revalidation
//!
//! The engine never reads a clock or touches storage; "today" is always
//! passed in and records are handed over in memory.

mod aggregate;
mod error;
pub mod ledger;
mod resolve;
mod sort;
mod stay;
mod validate;
mod window;

pub use aggregate::{CountryDays, CurrentStay, aggregate_days, current_stay};
pub use error::{DateField, LedgerError};
pub use ledger::{Deletion, add, delete, into_records, load};
pub use resolve::{resolve_entry, resolve_record, resolve_token};
pub use sort::sort_stays;
pub use stay::{
    DATE_FORMAT, DateToken, InvalidDateToken, ONGOING, Stay, StayRecord, parse_calendar_date,
};
pub use validate::{validate_sequence, validate_stay};
pub use window::{Window, filter_by_window};
