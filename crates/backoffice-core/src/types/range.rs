//! Reporting windows for aggregate endpoints.

use chrono::{DateTime, Months, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Bucket size for time-series reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    /// One bucket per day.
    Day,
    /// One bucket per calendar month.
    #[default]
    Month,
}

impl GroupBy {
    /// Return the wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
        }
    }
}

/// Inclusive `[from, to]` window sent to report endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Start of the window.
    pub from: DateTime<Utc>,
    /// End of the window.
    pub to: DateTime<Utc>,
}

impl DateRange {
    /// The trailing window of `months` months ending with `today`.
    ///
    /// `to` is the last millisecond of `today`; `from` is midnight of the
    /// same calendar day `months` months earlier (clamped to month end).
    pub fn last_months(months: u32, today: NaiveDate) -> Self {
        let end_of_day = NaiveTime::MIN - TimeDelta::milliseconds(1);
        let to = today.and_time(end_of_day).and_utc();
        let start = today
            .checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN);
        let from = start.and_time(NaiveTime::MIN).and_utc();
        Self { from, to }
    }

    /// Query pairs `from`, `to` (ISO-8601) and `groupBy`.
    pub fn to_pairs(&self, group_by: GroupBy) -> Vec<(String, String)> {
        vec![
            ("from".to_string(), iso(self.from)),
            ("to".to_string(), iso(self.to)),
            ("groupBy".to_string(), group_by.as_str().to_string()),
        ]
    }
}

fn iso(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
