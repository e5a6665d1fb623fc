//! Day totals per country.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::LedgerError;
use crate::stay::Stay;

/// Total days spent in one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryDays {
    pub country: String,
    pub days: i64,
}

/// The stay that is still open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentStay {
    pub country: String,
    pub entry: NaiveDate,
    pub days: i64,
}

/// Sums inclusive day counts per country, in order of first appearance.
pub fn aggregate_days(stays: &[Stay]) -> Vec<CountryDays> {
    let mut totals: Vec<CountryDays> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for stay in stays {
        let slot = *index.entry(stay.country()).or_insert_with(|| {
            totals.push(CountryDays {
                country: stay.country().to_string(),
                days: 0,
            });
            totals.len() - 1
        });
        totals[slot].days += stay.days();
    }

    totals
}

/// Reports the ongoing stay and how long it has lasted as of `today`.
pub fn current_stay(stays: &[Stay], today: NaiveDate) -> Result<CurrentStay, LedgerError> {
    let stay = stays
        .iter()
        .find(|stay| stay.is_ongoing())
        .ok_or(LedgerError::NoOngoingStay)?;

    Ok(CurrentStay {
        country: stay.country().to_string(),
        entry: stay.entry(),
        days: (today - stay.entry()).num_days() + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ledger::load;
    use crate::stay::StayRecord;
    use crate::window::{Window, filter_by_window};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn records(rows: &[(&str, &str, &str)]) -> Vec<StayRecord> {
        rows.iter()
            .map(|(c, e, d)| StayRecord::new(*c, *e, *d))
            .collect()
    }

    fn sample() -> Vec<StayRecord> {
        records(&[
            ("cnt1", "2020-01-01", "2020-01-31"),
            ("cnt2", "2020-01-31", "2020-05-01"),
            ("cnt1", "2020-05-01", "2020-05-10"),
            ("cnt3", "2020-05-10", "ongoing"),
        ])
    }

    fn days_of(totals: &[CountryDays], country: &str) -> Option<i64> {
        totals.iter().find(|t| t.country == country).map(|t| t.days)
    }

    #[test]
    fn sample_ledger_totals() {
        let today = date(2020, 6, 1);
        let stays = load(sample(), today).unwrap();
        let totals = aggregate_days(&stays);

        assert_eq!(
            totals,
            [
                CountryDays {
                    country: "cnt1".to_string(),
                    days: 41
                },
                CountryDays {
                    country: "cnt2".to_string(),
                    days: 92
                },
                CountryDays {
                    country: "cnt3".to_string(),
                    days: 23
                },
            ]
        );
    }

    #[test]
    fn empty_ledger_has_no_totals() {
        assert!(aggregate_days(&[]).is_empty());
    }

    #[test]
    fn yearly_totals_add_up_to_all_time() {
        let today = date(2023, 1, 1);
        let stays = load(
            records(&[
                ("a", "2019-03-01", "2019-11-30"),
                ("b", "2019-12-01", "2020-02-10"),
                ("a", "2020-02-10", "2020-12-20"),
                ("c", "2020-12-21", "2021-01-05"),
                ("a", "2021-01-06", "2021-08-31"),
            ]),
            today,
        )
        .unwrap();

        let all_time = aggregate_days(&stays);
        for country in ["a", "b", "c"] {
            let yearly: i64 = (2019..=2021)
                .map(|year| {
                    let windowed = filter_by_window(&stays, Window::Year(year), today);
                    days_of(&aggregate_days(&windowed), country).unwrap_or(0)
                })
                .sum();
            assert_eq!(Some(yearly), days_of(&all_time, country), "country {country}");
        }
    }

    #[test]
    fn current_stay_counts_through_today() {
        let today = date(2020, 6, 1);
        let stays = load(sample(), today).unwrap();
        assert_eq!(
            current_stay(&stays, today).unwrap(),
            CurrentStay {
                country: "cnt3".to_string(),
                entry: date(2020, 5, 10),
                days: 23,
            }
        );
    }

    #[test]
    fn current_stay_requires_open_stay() {
        let today = date(2020, 6, 1);
        let stays = load(records(&[("cnt1", "2020-01-01", "2020-01-31")]), today).unwrap();
        assert_eq!(
            current_stay(&stays, today).unwrap_err(),
            LedgerError::NoOngoingStay
        );
    }
}
