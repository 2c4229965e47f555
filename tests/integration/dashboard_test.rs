//! Integration tests for the admin dashboard.

mod helpers;

use backoffice_core::error::ErrorKind;
use backoffice_core::traits::HttpMethod;
use serde_json::json;

fn script_series(app: &helpers::TestConsole) {
    app.mock.ok(
        HttpMethod::Get,
        "/Admin/trips/by-status",
        json!([{ "status": "COMPLETED", "count": 12 }]),
    );
    app.mock.ok(
        HttpMethod::Get,
        "/Admin/packages/by-status",
        json!([{ "status": "ACTIVE", "count": 4 }, { "status": "DELETED", "count": 1 }]),
    );
    app.mock.ok(
        HttpMethod::Get,
        "/Admin/revenue",
        json!([{ "label": "2026-09", "value": 1500000.0 }]),
    );
    app.mock.ok(
        HttpMethod::Get,
        "/Admin/trips/created",
        json!([{ "label": "2026-09", "value": 7 }]),
    );
}

#[tokio::test]
async fn test_dashboard_loads_every_series_once() {
    let app = helpers::TestConsole::admin();
    app.mock.ok(
        HttpMethod::Get,
        "/Admin/overview",
        json!({ "totalUsers": 40, "totalTrips": 12, "totalRevenue": 1500000, "totalPackages": 5 }),
    );
    script_series(&app);

    app.run(&["dashboard", "--months", "6"]).await.unwrap();

    for path in [
        "/Admin/overview",
        "/Admin/trips/by-status",
        "/Admin/packages/by-status",
        "/Admin/revenue",
        "/Admin/trips/created",
    ] {
        assert_eq!(app.mock.count(HttpMethod::Get, path), 1, "{path}");
    }
    let revenue = app.mock.requests_to(HttpMethod::Get, "/Admin/revenue");
    assert!(revenue[0].query_value("from").is_some());
    assert!(revenue[0].query_value("to").is_some());
    assert!(revenue[0].query_value("groupBy").is_some());
}

#[tokio::test]
async fn test_one_failing_series_does_not_fail_dashboard() {
    let app = helpers::TestConsole::admin();
    app.mock.unreachable(HttpMethod::Get, "/Admin/overview");
    script_series(&app);

    app.run(&["dashboard"]).await.unwrap();
    assert_eq!(app.mock.count(HttpMethod::Get, "/Admin/revenue"), 1);
}

#[tokio::test]
async fn test_malformed_overview_is_isolated() {
    let app = helpers::TestConsole::admin();
    app.mock.ok(HttpMethod::Get, "/Admin/overview", json!({ "totalUsers": "many" }));
    script_series(&app);

    assert!(app.run(&["dashboard"]).await.is_ok());
}

#[tokio::test]
async fn test_unsupported_window_rejected() {
    let app = helpers::TestConsole::admin();
    let err = app.run(&["dashboard", "--months", "4"]).await.unwrap_err();
    assert!(err.is_validation());
    assert!(app.mock.requests().is_empty());
}

#[tokio::test]
async fn test_dashboard_is_admin_only() {
    let app = helpers::TestConsole::staff();
    let err = app.run(&["dashboard"]).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
}
