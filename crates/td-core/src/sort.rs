//! Chronological ordering of stays.

use crate::stay::Stay;

/// Orders stays by entry date, then resolved departure date.
///
/// The sort is stable: stays with equal keys keep their input order.
pub fn sort_stays(mut stays: Vec<Stay>) -> Vec<Stay> {
    stays.sort_by_key(Stay::key);
    stays
}
