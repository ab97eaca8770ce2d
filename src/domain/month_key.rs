use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Canonical identifier for one calendar month of ledger state.
///
/// The wire form is always the two-digit `"MM/YY"` string; internally the
/// full year is kept so ordering and date math stay chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Key for the calendar month containing `ts`.
    pub fn for_date(ts: DateTime<Utc>) -> Self {
        Self {
            year: ts.year(),
            month: ts.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Inverse of [`MonthKey::for_date`]: the first day of this month.
    pub fn first_day(&self) -> NaiveDate {
        // month is validated to 1..=12 by every constructor
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month key holds a valid month")
    }

    /// Key for the month immediately before this one; January wraps to
    /// December of the prior year.
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Last instant of this month, for whole-month report windows.
    pub fn last_moment(&self) -> DateTime<Utc> {
        let next = if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        };
        let midnight = next
            .first_day()
            .and_hms_opt(0, 0, 0)
            .expect("midnight is a valid time")
            .and_utc();
        midnight - chrono::Duration::seconds(1)
    }

    /// Whether `ts` falls inside the calendar month this key names.
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts.year() == self.year && ts.month() == self.month
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year.rem_euclid(100))
    }
}

impl FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (month_part, year_part) = value
            .split_once('/')
            .ok_or_else(|| ParseMonthKeyError(value.to_string()))?;
        if month_part.len() != 2 || year_part.len() != 2 {
            return Err(ParseMonthKeyError(value.to_string()));
        }
        let month: u32 = month_part
            .parse()
            .map_err(|_| ParseMonthKeyError(value.to_string()))?;
        let year_suffix: i32 = year_part
            .parse()
            .map_err(|_| ParseMonthKeyError(value.to_string()))?;
        if !(1..=12).contains(&month) {
            return Err(ParseMonthKeyError(value.to_string()));
        }
        Ok(Self {
            year: 2000 + year_suffix,
            month,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid month key `{0}`, expected MM/YY")]
pub struct ParseMonthKeyError(pub String);

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
