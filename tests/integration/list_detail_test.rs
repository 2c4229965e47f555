//! Integration tests for list, detail, filter, and delete commands.

mod helpers;

use backoffice_core::error::ErrorKind;
use backoffice_core::traits::HttpMethod;
use backoffice_core::types::{PostPackageId, PostTripId, TransactionId, TripId, UserId};
use serde_json::{Value, json};

fn user(id: UserId, name: &str, role: &str) -> Value {
    json!({ "userId": id, "fullName": name, "role": role, "status": "ACTIVE" })
}

fn trip(id: TripId, code: &str, status: &str) -> Value {
    json!({ "tripId": id, "tripCode": code, "ownerName": "Binh", "status": status })
}

#[tokio::test]
async fn test_staff_cannot_open_user_admin() {
    let app = helpers::TestConsole::staff();
    let err = app.run(&["user", "list"]).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
    assert!(app.mock.requests().is_empty());
}

#[tokio::test]
async fn test_missing_role_claim_is_authentication_error() {
    let app = helpers::TestConsole::new(None);
    let err = app.run(&["trip", "list"]).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authentication);
}

#[tokio::test]
async fn test_admin_cannot_open_staff_area() {
    let app = helpers::TestConsole::admin();
    let err = app.run(&["trip", "list"]).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
}

#[tokio::test]
async fn test_transaction_list_sends_paging_search_and_sort() {
    let app = helpers::TestConsole::admin();
    let id = TransactionId::new();
    let tx = json!({ "transactionId": id, "type": "TOPUP", "amount": 50000, "status": "COMPLETED" });
    app.mock.ok(HttpMethod::Get, "/Transaction", helpers::page(vec![tx.clone()], 2, 3));
    app.mock.ok(HttpMethod::Get, &format!("/Transaction/{id}"), tx);

    app.run(&[
        "transaction", "list", "--search", "topup", "--sort", "createdAt_desc", "--page", "2",
    ])
    .await
    .unwrap();

    let requests = app.mock.requests_to(HttpMethod::Get, "/Transaction");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query_value("pageNumber"), Some("2"));
    assert_eq!(requests[0].query_value("search"), Some("topup"));
    assert_eq!(requests[0].query_value("sortField"), Some("createdAt"));
}

#[tokio::test]
async fn test_trip_search_runs_locally() {
    let app = helpers::TestConsole::staff();
    let (a, b) = (TripId::new(), TripId::new());
    app.mock.ok(
        HttpMethod::Get,
        "/Trip/all",
        helpers::page(vec![trip(a, "TRIP-1", "CREATED"), trip(b, "TRIP-2", "CREATED")], 1, 1),
    );
    app.mock.ok(HttpMethod::Get, &format!("/Trip/{b}"), trip(b, "TRIP-2", "CREATED"));

    app.run(&["trip", "list", "--search", "trip-2"]).await.unwrap();

    let requests = app.mock.requests_to(HttpMethod::Get, "/Trip/all");
    assert_eq!(requests[0].query_value("search"), None);
    assert_eq!(requests[0].query_value("pageSize"), Some("200"));
    assert_eq!(app.mock.count(HttpMethod::Get, &format!("/Trip/{b}")), 1);
    assert_eq!(app.mock.count(HttpMethod::Get, &format!("/Trip/{a}")), 0);
}

#[tokio::test]
async fn test_phase_filter_selects_first_visible_trip() {
    let app = helpers::TestConsole::staff();
    let (moving, done) = (TripId::new(), TripId::new());
    app.mock.ok(
        HttpMethod::Get,
        "/Trip/all",
        helpers::page(
            vec![trip(done, "TRIP-1", "COMPLETED"), trip(moving, "TRIP-2", "LOADING")],
            1,
            1,
        ),
    );
    app.mock.ok(HttpMethod::Get, &format!("/Trip/{done}"), trip(done, "TRIP-1", "COMPLETED"));
    app.mock.ok(HttpMethod::Get, &format!("/Trip/{moving}"), trip(moving, "TRIP-2", "LOADING"));

    app.run(&["trip", "list", "--phase", "moving"]).await.unwrap();

    assert_eq!(app.mock.count(HttpMethod::Get, &format!("/Trip/{moving}")), 1);
    assert_eq!(app.mock.count(HttpMethod::Get, &format!("/Trip/{done}")), 0);
}

#[tokio::test]
async fn test_list_failure_surfaces_server_message() {
    let app = helpers::TestConsole::admin();
    app.mock.fail(HttpMethod::Get, "/User", "Access denied");
    let err = app.run(&["user", "list"]).await.unwrap_err();
    assert_eq!(err.user_message(), "Access denied");
}

#[tokio::test]
async fn test_invalid_sort_choice_sends_nothing() {
    let app = helpers::TestConsole::admin();
    let err = app.run(&["user", "list", "--sort", "createdAt"]).await.unwrap_err();
    assert!(err.is_validation());
    assert!(app.mock.requests().is_empty());
}

#[tokio::test]
async fn test_delete_user_refreshes_once() {
    let app = helpers::TestConsole::admin();
    let (a, b) = (UserId::new(), UserId::new());
    app.mock.ok(HttpMethod::Get, &format!("/User/{a}"), user(a, "An", "Driver"));
    app.mock.ok(HttpMethod::Get, &format!("/User/{b}"), user(b, "Binh", "Staff"));
    app.mock.ok(HttpMethod::Delete, &format!("/User/{a}"), Value::Null);
    app.mock.ok(HttpMethod::Get, "/User", helpers::page(vec![user(b, "Binh", "Staff")], 1, 1));

    app.run(&["user", "delete", &a.to_string()]).await.unwrap();

    assert_eq!(app.mock.count(HttpMethod::Delete, &format!("/User/{a}")), 1);
    assert_eq!(app.mock.count(HttpMethod::Get, "/User"), 1);
}

#[tokio::test]
async fn test_delete_missing_user_sends_no_delete() {
    let app = helpers::TestConsole::admin();
    let a = UserId::new();
    app.mock.fail(HttpMethod::Get, &format!("/User/{a}"), "User not found");

    let err = app.run(&["user", "delete", &a.to_string()]).await.unwrap_err();
    assert_eq!(err.user_message(), "User not found");
    assert_eq!(app.mock.count(HttpMethod::Delete, &format!("/User/{a}")), 0);
}

#[tokio::test]
async fn test_bearer_token_attached() {
    let app = helpers::TestConsole::staff();
    app.mock.ok(HttpMethod::Get, "/Trip/all", helpers::page(Vec::new(), 1, 1));
    app.run(&["trip", "list"]).await.unwrap();
    assert_eq!(app.mock.bearer_token().as_deref(), Some("test-token"));
}

#[tokio::test]
async fn test_package_posts_sorted_by_server_and_first_detail_loaded() {
    let app = helpers::TestConsole::staff();
    let id = PostPackageId::new();
    let row = json!({ "postPackageId": id, "title": "Rice to Da Nang", "providerName": "Mai" });
    app.mock.ok(HttpMethod::Get, "/PostPackage/get-all", helpers::page(vec![row], 1, 1));
    app.mock.ok(
        HttpMethod::Get,
        &format!("/PostPackage/get-details/{id}"),
        json!({ "postPackageId": id, "title": "Rice to Da Nang", "status": "OPEN" }),
    );

    app.run(&["post", "package", "list", "--sort", "price_desc"]).await.unwrap();

    let requests = app.mock.requests_to(HttpMethod::Get, "/PostPackage/get-all");
    assert_eq!(requests[0].query_value("sortBy"), Some("price"));
    assert_eq!(requests[0].query_value("sortOrder"), Some("DESC"));
    assert_eq!(app.mock.count(HttpMethod::Get, &format!("/PostPackage/get-details/{id}")), 1);
}

#[tokio::test]
async fn test_trip_post_shown_from_list() {
    let app = helpers::TestConsole::staff();
    let id = PostTripId::new();
    let row = json!({ "postTripId": id, "title": "Need drivers", "status": "OPEN" });
    app.mock.ok(HttpMethod::Get, "/PostTrip/all", helpers::page(vec![row], 1, 1));

    app.run(&["post", "trip", "show", &id.to_string()]).await.unwrap();

    let requests = app.mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].query_value("pageSize"), Some("500"));
}

#[tokio::test]
async fn test_posts_are_staff_only() {
    let app = helpers::TestConsole::admin();
    let err = app.run(&["post", "trip", "list"]).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Authorization);
    assert!(app.mock.requests().is_empty());
}
