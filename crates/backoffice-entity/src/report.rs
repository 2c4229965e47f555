//! Dashboard aggregates from the `/Admin` report endpoints.
//!
//! Each series decodes on its own so one malformed response only empties
//! its own panel. Missing numbers count as zero; a number of the wrong
//! JSON type is a decode error.

use serde::{Deserialize, Serialize};

/// Platform totals (`GET /Admin/overview`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "OverviewWire")]
pub struct Overview {
    /// Registered users.
    pub total_users: u64,
    /// Trips ever created.
    pub total_trips: u64,
    /// Revenue in VND.
    pub total_revenue: f64,
    /// Packages ever created.
    pub total_packages: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverviewWire {
    #[serde(default, alias = "TotalUsers")]
    total_users: Option<u64>,
    #[serde(default, alias = "TotalTrips")]
    total_trips: Option<u64>,
    #[serde(default, alias = "TotalRevenue")]
    total_revenue: Option<f64>,
    #[serde(default, alias = "TotalPackages")]
    total_packages: Option<u64>,
}

impl From<OverviewWire> for Overview {
    fn from(wire: OverviewWire) -> Self {
        Self {
            total_users: wire.total_users.unwrap_or_default(),
            total_trips: wire.total_trips.unwrap_or_default(),
            total_revenue: wire.total_revenue.unwrap_or_default(),
            total_packages: wire.total_packages.unwrap_or_default(),
        }
    }
}

/// One bucket of a by-status breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StatusCountWire")]
pub struct StatusCount {
    /// Status (or role) name.
    pub name: String,
    /// Records in that status.
    pub value: u64,
}

#[derive(Deserialize)]
struct StatusCountWire {
    #[serde(default, alias = "Status")]
    status: Option<String>,
    #[serde(default, alias = "Role")]
    role: Option<String>,
    #[serde(default, alias = "Count")]
    count: Option<u64>,
    #[serde(default, alias = "Value")]
    value: Option<u64>,
}

impl From<StatusCountWire> for StatusCount {
    fn from(wire: StatusCountWire) -> Self {
        Self {
            name: wire
                .status
                .or(wire.role)
                .unwrap_or_else(|| "UNKNOWN".to_string()),
            value: wire.count.or(wire.value).unwrap_or_default(),
        }
    }
}

/// One point of a time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TimePointWire")]
pub struct TimePoint {
    /// Bucket label, e.g. `2026-08`.
    pub label: String,
    /// Value for the bucket.
    pub value: f64,
}

#[derive(Deserialize)]
struct TimePointWire {
    #[serde(default, alias = "Label")]
    label: Option<String>,
    #[serde(default, alias = "Value")]
    value: Option<f64>,
}

impl From<TimePointWire> for TimePoint {
    fn from(wire: TimePointWire) -> Self {
        Self {
            label: wire.label.unwrap_or_default(),
            value: wire.value.unwrap_or_default(),
        }
    }
}

/// Records in the bucket named `name`, matched case-insensitively.
pub fn count_of(series: &[StatusCount], name: &str) -> u64 {
    series
        .iter()
        .find(|bucket| bucket.name.eq_ignore_ascii_case(name))
        .map(|bucket| bucket.value)
        .unwrap_or_default()
}

/// Packages currently in the `ACTIVE` bucket.
pub fn active_packages(packages_by_status: &[StatusCount]) -> u64 {
    count_of(packages_by_status, "ACTIVE")
}
