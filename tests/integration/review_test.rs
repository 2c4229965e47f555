//! Integration tests for document review.

mod helpers;

use backoffice_core::traits::{HttpMethod, RequestBody};
use backoffice_core::types::DocumentId;
use serde_json::{Value, json};

fn user_document(id: DocumentId, status: &str) -> Value {
    json!({
        "userDocumentId": id,
        "fullName": "An Nguyen",
        "documentType": "CCCD",
        "status": status
    })
}

fn vehicle_document(id: DocumentId, status: &str) -> Value {
    json!({
        "vehicleDocumentId": id,
        "plateNumber": "51C-123.45",
        "documentType": "REGISTRATION",
        "status": status
    })
}

#[tokio::test]
async fn test_approve_user_document() {
    let app = helpers::TestConsole::staff();
    let id = DocumentId::new();
    app.mock.ok(
        HttpMethod::Get,
        &format!("/UserDocument/pending-reviews/{id}"),
        user_document(id, "PENDING_REVIEW"),
    );
    app.mock.ok(HttpMethod::Post, "/UserDocument/review", Value::Null);
    app.mock.ok(
        HttpMethod::Get,
        "/UserDocument/pending-reviews",
        helpers::page(Vec::new(), 1, 1),
    );

    app.run(&["document", "user", "approve", &id.to_string()]).await.unwrap();

    let posts = app.mock.requests_to(HttpMethod::Post, "/UserDocument/review");
    assert_eq!(posts.len(), 1);
    let RequestBody::Json(body) = &posts[0].body else {
        panic!("expected JSON body");
    };
    assert_eq!(body["isApproved"], true);
    assert_eq!(app.mock.count(HttpMethod::Get, "/UserDocument/pending-reviews"), 1);
}

#[tokio::test]
async fn test_reject_without_reason_sends_nothing() {
    let app = helpers::TestConsole::staff();
    let id = DocumentId::new();
    app.mock.ok(
        HttpMethod::Get,
        &format!("/VehicleDocument/pending-reviews/{id}"),
        vehicle_document(id, "PENDING_REVIEW"),
    );

    let err = app
        .run(&["document", "vehicle", "reject", &id.to_string()])
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(app.mock.count(HttpMethod::Post, "/VehicleDocument/review"), 0);
}

#[tokio::test]
async fn test_reject_vehicle_document_with_reason() {
    let app = helpers::TestConsole::staff();
    let id = DocumentId::new();
    app.mock.ok(
        HttpMethod::Get,
        &format!("/VehicleDocument/pending-reviews/{id}"),
        vehicle_document(id, "PENDING_REVIEW"),
    );
    app.mock.ok(HttpMethod::Post, "/VehicleDocument/review", Value::Null);
    app.mock.ok(
        HttpMethod::Get,
        "/VehicleDocument/pending-reviews",
        helpers::page(Vec::new(), 1, 1),
    );

    app.run(&[
        "document",
        "vehicle",
        "reject",
        &id.to_string(),
        "--reason",
        "Registration expired",
    ])
    .await
    .unwrap();

    let posts = app.mock.requests_to(HttpMethod::Post, "/VehicleDocument/review");
    let RequestBody::Json(body) = &posts[0].body else {
        panic!("expected JSON body");
    };
    assert_eq!(body["isApproved"], false);
    assert_eq!(body["rejectReason"], "Registration expired");
}

#[tokio::test]
async fn test_already_reviewed_document_refused() {
    let app = helpers::TestConsole::staff();
    let id = DocumentId::new();
    app.mock.ok(
        HttpMethod::Get,
        &format!("/UserDocument/pending-reviews/{id}"),
        user_document(id, "ACTIVE"),
    );

    let err = app
        .run(&["document", "user", "approve", &id.to_string()])
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(app.mock.count(HttpMethod::Post, "/UserDocument/review"), 0);
}

#[tokio::test]
async fn test_document_review_is_staff_only() {
    let app = helpers::TestConsole::admin();
    let err = app.run(&["document", "user", "list"]).await.unwrap_err();
    assert_eq!(err.kind, backoffice_core::error::ErrorKind::Authorization);
}
