//! Dashboard report endpoints.

use backoffice_core::traits::ApiRequest;
use backoffice_core::types::{DateRange, GroupBy};
use backoffice_core::AppResult;
use backoffice_entity::report::{Overview, StatusCount, TimePoint};

use crate::client::ApiClient;

/// Reads the `/Admin` aggregates. Each call decodes independently.
#[derive(Debug, Clone)]
pub struct ReportService {
    /// Shared API client.
    client: ApiClient,
}

impl ReportService {
    /// Create a report service.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Platform totals.
    pub async fn overview(&self) -> AppResult<Overview> {
        self.client
            .fetch("overview", ApiRequest::get("/Admin/overview"))
            .await
    }

    /// Trip counts per status.
    pub async fn trips_by_status(&self) -> AppResult<Vec<StatusCount>> {
        self.client
            .fetch("trips by status", ApiRequest::get("/Admin/trips/by-status"))
            .await
    }

    /// Package counts per status.
    pub async fn packages_by_status(&self) -> AppResult<Vec<StatusCount>> {
        self.client
            .fetch("packages by status", ApiRequest::get("/Admin/packages/by-status"))
            .await
    }

    /// Revenue per bucket over `range`.
    pub async fn revenue(&self, range: &DateRange, group_by: GroupBy) -> AppResult<Vec<TimePoint>> {
        let request = ApiRequest::get("/Admin/revenue").with_query(range.to_pairs(group_by));
        self.client.fetch("revenue", request).await
    }

    /// Trips created per bucket over `range`.
    pub async fn trips_created(&self, range: &DateRange, group_by: GroupBy) -> AppResult<Vec<TimePoint>> {
        let request = ApiRequest::get("/Admin/trips/created").with_query(range.to_pairs(group_by));
        self.client.fetch("trips created", request).await
    }
}
