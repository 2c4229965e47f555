//! Integration tests for template create and update forms.

mod helpers;

use backoffice_core::config::AfterCreate;
use backoffice_core::traits::{HttpMethod, RequestBody};
use backoffice_core::types::{ContractTemplateId, DeliveryRecordTemplateId};
use serde_json::{Value, json};

fn contract(id: ContractTemplateId, name: &str) -> Value {
    json!({
        "contractTemplateId": id,
        "contractTemplateName": name,
        "version": "1.0",
        "type": "DRIVER_CONTRACT",
        "contractTerms": []
    })
}

fn delivery_template(id: DeliveryRecordTemplateId, name: &str) -> Value {
    json!({
        "deliveryRecordTemplateId": id,
        "templateName": name,
        "version": "2",
        "type": "PICKUP",
        "status": "ACTIVE"
    })
}

fn form_value(body: &RequestBody, name: &str) -> Option<String> {
    match body {
        RequestBody::Multipart(parts) => parts
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.clone()),
        _ => None,
    }
}

#[tokio::test]
async fn test_blank_template_name_is_not_sent() {
    let app = helpers::TestConsole::staff();
    let err = app
        .run(&["contract", "create", "--name", "  ", "--version", "1.0"])
        .await
        .unwrap_err();
    assert_eq!(err.message, "Template name is required");
    assert_eq!(app.mock.count(HttpMethod::Post, "/ContractTemplate/create"), 0);
}

#[tokio::test]
async fn test_unknown_contract_type_rejected() {
    let app = helpers::TestConsole::staff();
    let err = app
        .run(&["contract", "create", "--name", "Driver", "--version", "1", "--type", "LEASE"])
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(app.mock.requests().is_empty());
}

#[tokio::test]
async fn test_create_contract_sends_multipart_and_refreshes() {
    let app = helpers::TestConsole::staff();
    let id = ContractTemplateId::new();
    app.mock.ok(
        HttpMethod::Post,
        "/ContractTemplate/create",
        json!({ "contractTemplateId": id }),
    );
    app.mock.ok(
        HttpMethod::Get,
        "/ContractTemplate/getAll",
        helpers::page(vec![contract(id, "Driver agreement")], 1, 1),
    );
    app.mock.ok(
        HttpMethod::Get,
        &format!("/ContractTemplate/getById/{id}"),
        contract(id, "Driver agreement"),
    );

    app.run(&[
        "contract",
        "create",
        "--name",
        " Driver agreement ",
        "--version",
        "1.0",
        "--type",
        "DRIVER_CONTRACT",
    ])
    .await
    .unwrap();

    let posts = app.mock.requests_to(HttpMethod::Post, "/ContractTemplate/create");
    assert_eq!(posts.len(), 1);
    assert_eq!(
        form_value(&posts[0].body, "ContractTemplateName").as_deref(),
        Some("Driver agreement")
    );
    assert_eq!(form_value(&posts[0].body, "Type").as_deref(), Some("DRIVER_CONTRACT"));
    assert_eq!(form_value(&posts[0].body, "ContractTemplateId"), None);
    assert_eq!(app.mock.count(HttpMethod::Get, "/ContractTemplate/getAll"), 1);
}

#[tokio::test]
async fn test_create_then_edit_selects_new_record() {
    let mut app = helpers::TestConsole::staff();
    app.console.config.console.after_create = AfterCreate::Edit;
    let (existing, created) = (DeliveryRecordTemplateId::new(), DeliveryRecordTemplateId::new());
    app.mock.ok(
        HttpMethod::Post,
        "/DeliveryRecordTemplate",
        json!({ "deliveryRecordTemplateId": created }),
    );
    app.mock.ok(
        HttpMethod::Get,
        "/DeliveryRecordTemplate",
        helpers::page(
            vec![delivery_template(existing, "Old"), delivery_template(created, "New")],
            1,
            1,
        ),
    );
    app.mock.ok(
        HttpMethod::Get,
        &format!("/DeliveryRecordTemplate/{existing}"),
        delivery_template(existing, "Old"),
    );
    app.mock.ok(
        HttpMethod::Get,
        &format!("/DeliveryRecordTemplate/{created}"),
        delivery_template(created, "New"),
    );

    app.run(&["delivery-record", "create", "--name", "New", "--type", "DROPOFF"])
        .await
        .unwrap();

    let posts = app.mock.requests_to(HttpMethod::Post, "/DeliveryRecordTemplate");
    match &posts[0].body {
        RequestBody::Json(body) => {
            assert_eq!(body["templateName"], "New");
            assert_eq!(body["type"], "DROPOFF");
        }
        other => panic!("expected a JSON body, got {other:?}"),
    }
    assert_eq!(
        app.mock
            .count(HttpMethod::Get, &format!("/DeliveryRecordTemplate/{created}")),
        1
    );
}

#[tokio::test]
async fn test_update_contract_keeps_unchanged_fields() {
    let app = helpers::TestConsole::staff();
    let id = ContractTemplateId::new();
    app.mock.ok(
        HttpMethod::Get,
        &format!("/ContractTemplate/getById/{id}"),
        contract(id, "Driver agreement"),
    );
    app.mock.ok(HttpMethod::Put, "/ContractTemplate/update", Value::Null);
    app.mock.ok(
        HttpMethod::Get,
        "/ContractTemplate/getAll",
        helpers::page(vec![contract(id, "Driver agreement")], 1, 1),
    );

    app.run(&["contract", "update", &id.to_string(), "--version", "2.0"])
        .await
        .unwrap();

    let puts = app.mock.requests_to(HttpMethod::Put, "/ContractTemplate/update");
    assert_eq!(puts.len(), 1);
    assert_eq!(form_value(&puts[0].body, "Version").as_deref(), Some("2.0"));
    assert_eq!(
        form_value(&puts[0].body, "ContractTemplateName").as_deref(),
        Some("Driver agreement")
    );
    assert_eq!(form_value(&puts[0].body, "ContractTemplateId"), Some(id.to_string()));
}

#[tokio::test]
async fn test_update_failure_reports_server_message() {
    let app = helpers::TestConsole::staff();
    let id = DeliveryRecordTemplateId::new();
    app.mock.ok(
        HttpMethod::Get,
        &format!("/DeliveryRecordTemplate/{id}"),
        delivery_template(id, "Pickup"),
    );
    app.mock.fail(
        HttpMethod::Put,
        &format!("/DeliveryRecordTemplate/{id}"),
        "Template is in use",
    );

    let err = app
        .run(&["delivery-record", "update", &id.to_string(), "--name", "Renamed"])
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Template is in use");
    assert_eq!(app.mock.count(HttpMethod::Get, "/DeliveryRecordTemplate"), 0);
}
