//! Reporting windows and clipping of stays to them.

use std::fmt;
use std::str::FromStr;

use chrono::{Months, NaiveDate};

use crate::error::LedgerError;
use crate::stay::Stay;

/// Date range a report is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    /// No filtering.
    #[default]
    All,
    /// January 1 through December 31 of the given year.
    Year(i32),
    /// The year of history ending today, today included.
    TrailingYear,
}

impl Window {
    /// First and last day of the window, both inclusive; `None` for [`Window::All`].
    pub fn bounds(self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Self::All => None,
            Self::Year(year) => Some((
                NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN),
                NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(NaiveDate::MAX),
            )),
            Self::TrailingYear => Some((trailing_year_start(today), today)),
        }
    }
}

/// Same day one year back, plus one day.
///
/// Subtracting whole months clamps to the end of the target month, so a
/// Feb 29 `today` maps to Feb 28 of the previous year and the window starts
/// on March 1.
fn trailing_year_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(12))
        .and_then(|d| d.succ_opt())
        .unwrap_or(NaiveDate::MIN)
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Year(year) => write!(f, "{year}"),
            Self::TrailingYear => write!(f, "last"),
        }
    }
}

impl FromStr for Window {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "last" => Ok(Self::TrailingYear),
            _ => s
                .parse::<i32>()
                .ok()
                .filter(|year| NaiveDate::from_ymd_opt(*year, 1, 1).is_some())
                .map(Self::Year)
                .ok_or_else(|| LedgerError::InvalidWindow(s.to_string())),
        }
    }
}

/// Clips sorted stays to `window`, returning new copies.
///
/// Each stay's resolved entry is raised to the window start and its
/// departure lowered to the window end. A stay whose clipped entry is not
/// strictly before its clipped departure has no presence in the window and
/// is dropped. Input order is kept.
pub fn filter_by_window(stays: &[Stay], window: Window, today: NaiveDate) -> Vec<Stay> {
    let Some((start, end)) = window.bounds(today) else {
        return stays.to_vec();
    };

    let clipped: Vec<Stay> = stays
        .iter()
        .map(|stay| stay.clipped(start, end))
        .filter(|stay| stay.entry() < stay.departure_date())
        .collect();

    tracing::debug!(
        %window,
        %start,
        %end,
        kept = clipped.len(),
        dropped = stays.len() - clipped.len(),
        "clipped stays to window"
    );
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::resolve::resolve_record;
    use crate::stay::StayRecord;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stays(rows: &[(&str, &str, &str)], today: NaiveDate) -> Vec<Stay> {
        rows.iter()
            .map(|(c, e, d)| resolve_record(StayRecord::new(*c, *e, *d), None, today).unwrap())
            .collect()
    }

    fn spans(stays: &[Stay]) -> Vec<(&str, NaiveDate, NaiveDate)> {
        stays
            .iter()
            .map(|s| (s.country(), s.entry(), s.departure_date()))
            .collect()
    }

    #[test]
    fn parses_window_names() {
        assert_eq!("all".parse::<Window>().unwrap(), Window::All);
        assert_eq!("last".parse::<Window>().unwrap(), Window::TrailingYear);
        assert_eq!("2019".parse::<Window>().unwrap(), Window::Year(2019));
        assert_eq!(
            "someday".parse::<Window>().unwrap_err(),
            LedgerError::InvalidWindow("someday".to_string())
        );
        assert!("9999999999".parse::<Window>().is_err());
    }

    #[test]
    fn calendar_year_bounds() {
        assert_eq!(
            Window::Year(2020).bounds(date(2026, 1, 1)),
            Some((date(2020, 1, 1), date(2020, 12, 31)))
        );
    }

    #[test]
    fn trailing_year_on_ordinary_day() {
        assert_eq!(
            Window::TrailingYear.bounds(date(2021, 6, 15)),
            Some((date(2020, 6, 16), date(2021, 6, 15)))
        );
    }

    #[test]
    fn trailing_year_on_leap_day_clamps_to_february_end() {
        // 2023-02-29 does not exist: clamp to 2023-02-28, then add a day.
        let (start, end) = Window::TrailingYear.bounds(date(2024, 2, 29)).unwrap();
        assert_eq!(start, date(2023, 3, 1));
        assert_eq!(end, date(2024, 2, 29));
        assert_eq!((end - start).num_days() + 1, 366);
    }

    #[test]
    fn trailing_year_on_last_day_of_month() {
        assert_eq!(
            Window::TrailingYear.bounds(date(2021, 12, 31)),
            Some((date(2021, 1, 1), date(2021, 12, 31)))
        );
        assert_eq!(
            Window::TrailingYear.bounds(date(2021, 2, 28)),
            Some((date(2020, 2, 29), date(2021, 2, 28)))
        );
    }

    #[test]
    fn all_is_identity() {
        let today = date(2020, 6, 1);
        let input = stays(
            &[
                ("cnt1", "2020-01-01", "2020-01-31"),
                ("cnt2", "2020-01-31", "2020-05-01"),
                ("cnt3", "2020-05-01", "ongoing"),
            ],
            today,
        );
        assert_eq!(filter_by_window(&input, Window::All, today), input);
    }

    #[test]
    fn year_window_clips_and_drops() {
        let today = date(2021, 6, 1);
        let input = stays(
            &[
                ("a", "2019-06-01", "2019-12-30"),
                ("b", "2019-12-31", "2020-03-01"),
                ("c", "2020-03-01", "2020-12-31"),
                ("d", "2020-12-31", "2021-01-15"),
                ("e", "2021-01-16", "ongoing"),
            ],
            today,
        );
        let clipped = filter_by_window(&input, Window::Year(2020), today);
        assert_eq!(
            spans(&clipped),
            [
                ("b", date(2020, 1, 1), date(2020, 3, 1)),
                ("c", date(2020, 3, 1), date(2020, 12, 31)),
            ]
        );
        // "d" touches 2020 for one day only, which clips to an empty span.
        assert!(clipped.iter().all(|s| s.country() != "d"));
    }

    #[test]
    fn filtering_leaves_input_untouched() {
        let today = date(2020, 6, 1);
        let input = stays(&[("a", "2019-06-01", "2020-02-01")], today);
        let before = input.clone();
        let clipped = filter_by_window(&input, Window::Year(2020), today);

        assert_eq!(input, before);
        assert_eq!(clipped[0].entry(), date(2020, 1, 1));
        assert_eq!(input[0].entry(), date(2019, 6, 1));
        assert_eq!(clipped[0].record().entry_date, "2019-06-01");
    }

    #[test]
    fn trailing_window_uses_today_for_ongoing() {
        let today = date(2020, 6, 1);
        let input = stays(
            &[
                ("a", "2019-01-01", "2019-05-31"),
                ("b", "2019-05-31", "2020-01-10"),
                ("c", "2020-01-10", "ongoing"),
            ],
            today,
        );
        let clipped = filter_by_window(&input, Window::TrailingYear, today);
        assert_eq!(
            spans(&clipped),
            [
                ("b", date(2019, 6, 2), date(2020, 1, 10)),
                ("c", date(2020, 1, 10), date(2020, 6, 1)),
            ]
        );
    }
}
