//! Admin dashboard: five report series loaded together.

use backoffice_client::services::ReportService;
use backoffice_core::types::{DateRange, GroupBy};
use backoffice_core::{AppError, AppResult};
use backoffice_entity::report::{self, Overview, StatusCount, TimePoint};
use chrono::NaiveDate;
use tracing::{info, warn};

use crate::panel::{Panel, Ticket};

/// Windows the dashboard offers, in months.
pub const WINDOW_CHOICES: [u32; 2] = [3, 6];

/// Lifecycle of one dashboard load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardState {
    /// Never loaded.
    #[default]
    Idle,
    /// Series outstanding.
    Loading,
    /// Every series has resolved (some may have failed).
    Settled,
}

/// A load in progress.
#[derive(Debug, Clone, Copy)]
pub struct DashboardRequest {
    range: DateRange,
    overview: Ticket,
    trips_by_status: Ticket,
    packages_by_status: Ticket,
    revenue: Ticket,
    trips_created: Ticket,
}

impl DashboardRequest {
    /// Window the series are fetched for.
    pub fn range(&self) -> DateRange {
        self.range
    }
}

/// Raw results of the five fetches.
#[derive(Debug)]
pub struct DashboardResults {
    /// Totals.
    pub overview: AppResult<Overview>,
    /// Trips per status.
    pub trips_by_status: AppResult<Vec<StatusCount>>,
    /// Packages per status.
    pub packages_by_status: AppResult<Vec<StatusCount>>,
    /// Revenue per month.
    pub revenue: AppResult<Vec<TimePoint>>,
    /// Trips created per month.
    pub trips_created: AppResult<Vec<TimePoint>>,
}

/// Dashboard controller.
///
/// Each series has its own panel, so one failing endpoint only empties
/// its own chart. A refresh while a load is outstanding is ignored.
#[derive(Debug)]
pub struct DashboardController {
    reports: ReportService,
    months: u32,
    state: DashboardState,
    overview: Panel<Overview>,
    trips_by_status: Panel<Vec<StatusCount>>,
    packages_by_status: Panel<Vec<StatusCount>>,
    revenue: Panel<Vec<TimePoint>>,
    trips_created: Panel<Vec<TimePoint>>,
}

impl DashboardController {
    /// A dashboard over the trailing `months` months (3 unless 6 is given).
    pub fn new(reports: ReportService, months: u32) -> Self {
        Self {
            reports,
            months: if WINDOW_CHOICES.contains(&months) { months } else { WINDOW_CHOICES[0] },
            state: DashboardState::Idle,
            overview: Panel::new(),
            trips_by_status: Panel::new(),
            packages_by_status: Panel::new(),
            revenue: Panel::new(),
            trips_created: Panel::new(),
        }
    }

    /// Current window in months.
    pub fn months(&self) -> u32 {
        self.months
    }

    /// Change the window. Only 3 and 6 are offered.
    pub fn set_months(&mut self, months: u32) -> AppResult<()> {
        if !WINDOW_CHOICES.contains(&months) {
            return Err(AppError::validation(format!(
                "Dashboard window must be 3 or 6 months, got {months}"
            )));
        }
        self.months = months;
        Ok(())
    }

    /// Load state.
    pub fn state(&self) -> DashboardState {
        self.state
    }

    /// Start a load, unless one is outstanding.
    pub fn begin(&mut self, today: NaiveDate) -> Option<DashboardRequest> {
        if self.state == DashboardState::Loading {
            return None;
        }
        self.state = DashboardState::Loading;
        Some(DashboardRequest {
            range: DateRange::last_months(self.months, today),
            overview: self.overview.begin(),
            trips_by_status: self.trips_by_status.begin(),
            packages_by_status: self.packages_by_status.begin(),
            revenue: self.revenue.begin(),
            trips_created: self.trips_created.begin(),
        })
    }

    /// Fetch all five series concurrently.
    pub async fn fetch(reports: &ReportService, request: &DashboardRequest) -> DashboardResults {
        let range = request.range;
        let (overview, trips_by_status, packages_by_status, revenue, trips_created) = tokio::join!(
            reports.overview(),
            reports.trips_by_status(),
            reports.packages_by_status(),
            reports.revenue(&range, GroupBy::Month),
            reports.trips_created(&range, GroupBy::Month),
        );
        DashboardResults {
            overview,
            trips_by_status,
            packages_by_status,
            revenue,
            trips_created,
        }
    }

    /// Apply the results of `request` and settle.
    pub fn finish(&mut self, request: DashboardRequest, results: DashboardResults) {
        let failed = [
            log_failure("overview", &results.overview),
            log_failure("trips by status", &results.trips_by_status),
            log_failure("packages by status", &results.packages_by_status),
            log_failure("revenue", &results.revenue),
            log_failure("trips created", &results.trips_created),
        ]
        .into_iter()
        .filter(|failed| *failed)
        .count();

        self.overview.resolve(request.overview, results.overview);
        self.trips_by_status.resolve(request.trips_by_status, results.trips_by_status);
        self.packages_by_status
            .resolve(request.packages_by_status, results.packages_by_status);
        self.revenue.resolve(request.revenue, results.revenue);
        self.trips_created.resolve(request.trips_created, results.trips_created);
        self.state = DashboardState::Settled;
        info!(months = self.months, failed, "Dashboard loaded");
    }

    /// Load every series. Returns `false` if a load was already running.
    pub async fn refresh(&mut self, today: NaiveDate) -> bool {
        let Some(request) = self.begin(today) else {
            return false;
        };
        let results = Self::fetch(&self.reports, &request).await;
        self.finish(request, results);
        true
    }

    /// Totals panel.
    pub fn overview(&self) -> &Panel<Overview> {
        &self.overview
    }

    /// Trips-by-status panel.
    pub fn trips_by_status(&self) -> &Panel<Vec<StatusCount>> {
        &self.trips_by_status
    }

    /// Packages-by-status panel.
    pub fn packages_by_status(&self) -> &Panel<Vec<StatusCount>> {
        &self.packages_by_status
    }

    /// Revenue panel.
    pub fn revenue(&self) -> &Panel<Vec<TimePoint>> {
        &self.revenue
    }

    /// Trips-created panel.
    pub fn trips_created(&self) -> &Panel<Vec<TimePoint>> {
        &self.trips_created
    }

    /// Packages in the `ACTIVE` bucket, when that series loaded.
    pub fn active_packages(&self) -> Option<u64> {
        self.packages_by_status
            .value()
            .map(|series| report::active_packages(series))
    }
}

fn log_failure<T>(series: &str, result: &AppResult<T>) -> bool {
    match result {
        Ok(_) => false,
        Err(e) => {
            warn!(series, error = %e, "Dashboard series failed");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use backoffice_client::ApiClient;
    use backoffice_client::mock::MockTransport;
    use backoffice_core::traits::HttpMethod;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn test_window_choices() {
        let mock = Arc::new(MockTransport::new());
        let mut dashboard = DashboardController::new(ReportService::new(ApiClient::new(mock)), 4);
        assert_eq!(dashboard.months(), 3);
        assert!(dashboard.set_months(6).is_ok());
        assert!(dashboard.set_months(12).unwrap_err().is_validation());
        assert_eq!(dashboard.months(), 6);
    }

    #[test]
    fn test_second_begin_ignored_while_loading() {
        let mock = Arc::new(MockTransport::new());
        let mut dashboard = DashboardController::new(ReportService::new(ApiClient::new(mock)), 3);
        assert!(dashboard.begin(today()).is_some());
        assert!(dashboard.begin(today()).is_none());
    }

    #[tokio::test]
    async fn test_one_failing_series_degrades_alone() {
        let mock = Arc::new(MockTransport::new());
        mock.ok(HttpMethod::Get, "/Admin/overview", json!({ "totalUsers": 3, "totalTrips": 9 }));
        mock.fail(HttpMethod::Get, "/Admin/trips/by-status", "Report unavailable");
        mock.ok(HttpMethod::Get, "/Admin/packages/by-status", json!([{ "status": "ACTIVE", "count": 7 }]));
        mock.ok(HttpMethod::Get, "/Admin/revenue", json!([]));
        mock.ok(HttpMethod::Get, "/Admin/trips/created", json!([{ "label": "2026-10", "value": 4 }]));

        let mut dashboard = DashboardController::new(ReportService::new(ApiClient::new(mock)), 3);
        assert!(dashboard.refresh(today()).await);

        assert_eq!(dashboard.state(), DashboardState::Settled);
        assert_eq!(dashboard.overview().value().map(|o| o.total_trips), Some(9));
        assert_eq!(dashboard.trips_by_status().error().as_deref(), Some("Report unavailable"));
        assert_eq!(dashboard.active_packages(), Some(7));
        assert_eq!(dashboard.trips_created().value().map(Vec::len), Some(1));
    }
}
