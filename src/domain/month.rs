//! Calendar month keys (`YYYY-MM`) and the period ranges built from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// A single calendar month, e.g. `2025-03`.
///
/// This is the engine's only notion of time: projects run for inclusive
/// `[start, end]` ranges of `MonthKey`, and every decision variable is
/// indexed by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Parse a `YYYY-MM` string.
    pub fn parse(s: &str) -> Result<Self> {
        let (y, m) = s.split_once('-').ok_or_else(|| {
            Error::input_validation(format!("malformed month key '{s}', expected YYYY-MM"))
        })?;
        let year: i32 = y
            .parse()
            .map_err(|_| Error::input_validation(format!("malformed month key '{s}'")))?;
        let month: u32 = m
            .parse()
            .map_err(|_| Error::input_validation(format!("malformed month key '{s}'")))?;
        if !(1..=12).contains(&month) {
            return Err(Error::input_validation(format!(
                "month out of range in '{s}'"
            )));
        }
        Ok(Self { year, month })
    }

    /// Construct directly from numeric parts.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::input_validation(format!(
                "month out of range: {month}"
            )));
        }
        Ok(Self { year, month })
    }

    /// Calendar year this month falls in.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Month number, 1-12.
    pub fn month(self) -> u32 {
        self.month
    }

    /// Calendar quarter, 1-4, via `ceil(month / 3)`.
    pub fn quarter(self) -> u32 {
        (self.month + 2) / 3
    }

    /// `YYYY-Qn` label used by the quarterly pivot view.
    pub fn quarter_label(self) -> String {
        format!("{}-Q{}", self.year, self.quarter())
    }

    /// The next calendar month.
    pub fn succ(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// The previous calendar month.
    pub fn pred(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// All months from `self..=end` inclusive, in order.
    pub fn range_to(self, end: Self) -> Vec<Self> {
        let mut out = Vec::new();
        let mut cur = self;
        while cur <= end {
            out.push(cur);
            cur = cur.succ();
        }
        out
    }

    /// This month represented as the first calendar day, for interop with `chrono`.
    pub fn to_naive_date(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("validated month")
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl TryFrom<String> for MonthKey {
    type Error = Error;
    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<MonthKey> for String {
    fn from(value: MonthKey) -> Self {
        value.to_string()
    }
}

/// Number of distinct calendar months belonging to `year` within `months`.
pub fn months_in_year(months: &[MonthKey], year: i32) -> usize {
    months.iter().filter(|m| m.year() == year).count()
}

/// Partition `months` by calendar year, preserving month order within each year.
pub fn group_by_year(months: &[MonthKey]) -> Vec<(i32, Vec<MonthKey>)> {
    let mut years: Vec<i32> = months.iter().map(|m| m.year()).collect();
    years.sort_unstable();
    years.dedup();
    years
        .into_iter()
        .map(|y| {
            let ms: Vec<MonthKey> = months.iter().copied().filter(|m| m.year() == y).collect();
            (y, ms)
        })
        .collect()
}
