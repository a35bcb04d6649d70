//! Upcoming-birthday scheduling.
//!
//! Buckets every contact's next birthday occurrence by weekday, after a
//! roll-forward shift for occurrences that land too close to `today`. The
//! computation is a pure function of the records and the `today` argument,
//! so reports are reproducible in tests; the shell passes the current
//! local date.

use crate::models::Record;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use tracing::warn;

/// Weekday display names, indexed Monday=0 .. Sunday=6.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Stored birthday format.
const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Names grouped by the weekday their next birthday lands on, after
/// shifting.
///
/// Renders one `{Weekday}: name1, name2` line per non-empty bucket, in
/// Monday-to-Sunday order; weekdays with no birthdays produce no line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthdayReport {
    buckets: [Vec<String>; 7],
}

impl BirthdayReport {
    /// Names bucketed on the given weekday index (Monday=0 .. Sunday=6).
    pub fn names_for(&self, weekday: usize) -> &[String] {
        &self.buckets[weekday]
    }

    /// Whether no contact was bucketed at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|names| names.is_empty())
    }
}

impl fmt::Display for BirthdayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (day, names) in self.buckets.iter().enumerate() {
            if names.is_empty() {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{}: {}", WEEKDAY_NAMES[day], names.join(", "))?;
        }
        Ok(())
    }
}

/// Bucket the next birthday occurrence of every record by shifted weekday.
///
/// For each record with a birthday:
/// 1. Take its next occurrence: this year, or next year if it already
///    passed.
/// 2. Find the occurrence's weekday (Monday=0 .. Sunday=6).
/// 3. If the occurrence is no more than `today`'s weekday index days away,
///    roll it forward one weekday.
///
/// The roll-forward condition compares day distance against the weekday
/// index on purpose; it is the report's historical behavior and is kept
/// exactly, as is the absence of any 7-day cutoff.
///
/// Records whose stored birthday is not a real calendar date (the field
/// rule checks syntax only, so "31.02.2099" can be stored) are skipped
/// with a warning, as are Feb-29 birthdays when the target year has no
/// Feb 29.
pub fn upcoming_birthdays<'a>(
    records: impl Iterator<Item = &'a Record>,
    today: NaiveDate,
) -> BirthdayReport {
    let current_weekday = today.weekday().num_days_from_monday();
    let mut report = BirthdayReport::default();

    for record in records {
        let Some(birthday) = record.birthday() else {
            continue;
        };

        let parsed = match NaiveDate::parse_from_str(birthday.as_str(), BIRTHDAY_FORMAT) {
            Ok(date) => date,
            Err(_) => {
                warn!(
                    contact = record.name(),
                    birthday = birthday.as_str(),
                    "skipping birthday that is not a real calendar date"
                );
                continue;
            }
        };

        let Some(next) = next_occurrence(parsed, today) else {
            warn!(
                contact = record.name(),
                birthday = birthday.as_str(),
                "skipping birthday with no occurrence in the target year"
            );
            continue;
        };

        let delta_days = (next - today).num_days();
        let mut occurrence_weekday = next.weekday().num_days_from_monday();
        if delta_days <= i64::from(current_weekday) {
            occurrence_weekday = (occurrence_weekday + 1) % 7;
        }

        report.buckets[occurrence_weekday as usize].push(record.name().to_string());
    }

    report
}

/// The birthday's next occurrence on or after `today`.
///
/// `None` when the anniversary does not exist in the target year
/// (Feb 29 in a common year).
fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.with_year(today.year())?;
    if this_year < today {
        birthday.with_year(today.year() + 1)
    } else {
        Some(this_year)
    }
}
