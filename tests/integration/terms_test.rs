//! Integration tests for the term subcommands of both template kinds.

mod helpers;

use backoffice_core::traits::{HttpMethod, RequestBody};
use backoffice_core::types::{
    ContractTemplateId, ContractTermId, DeliveryRecordTemplateId, DeliveryRecordTermId,
};
use serde_json::{Value, json};

fn contract_with_terms(id: ContractTemplateId, orders: &[i32]) -> Value {
    let terms: Vec<Value> = orders
        .iter()
        .map(|order| {
            json!({
                "contractTermId": ContractTermId::new(),
                "content": format!("Clause {order}"),
                "order": order
            })
        })
        .collect();
    json!({
        "contractTemplateId": id,
        "contractTemplateName": "Provider agreement",
        "version": "1.0",
        "type": "PROVIDER_CONTRACT",
        "contractTerms": terms
    })
}

fn delivery_term(id: DeliveryRecordTermId, content: &str, order: i32) -> Value {
    json!({ "deliveryRecordTermId": id, "content": content, "displayOrder": order })
}

#[tokio::test]
async fn test_new_contract_term_goes_after_highest_order() {
    let app = helpers::TestConsole::staff();
    let id = ContractTemplateId::new();
    app.mock.ok(
        HttpMethod::Get,
        &format!("/ContractTemplate/getById/{id}"),
        contract_with_terms(id, &[2, 7, 4]),
    );
    app.mock.ok(HttpMethod::Post, "/ContractTerm/create", Value::Null);

    app.run(&["contract", "term", "add", &id.to_string(), "--content", "Pay within 7 days"])
        .await
        .unwrap();

    let posts = app.mock.requests_to(HttpMethod::Post, "/ContractTerm/create");
    assert_eq!(posts.len(), 1);
    let RequestBody::Multipart(parts) = &posts[0].body else {
        panic!("expected multipart body");
    };
    let value = |name: &str| parts.iter().find(|p| p.name == name).map(|p| p.value.as_str());
    assert_eq!(value("Order"), Some("8"));
    assert_eq!(value("Content"), Some("Pay within 7 days"));
    assert_eq!(value("ContractTemplateId"), Some(id.to_string().as_str()));
    assert_eq!(
        app.mock.count(HttpMethod::Get, &format!("/ContractTemplate/getById/{id}")),
        2
    );
}

#[tokio::test]
async fn test_first_term_gets_order_one() {
    let app = helpers::TestConsole::staff();
    let template = DeliveryRecordTemplateId::new();
    let path = format!("/DeliveryRecordTerm/{template}/terms");
    app.mock.ok(HttpMethod::Get, &path, helpers::page(Vec::new(), 1, 1));
    app.mock.ok(HttpMethod::Post, "/DeliveryRecordTerm/terms", Value::Null);

    app.run(&["delivery-record", "term", "add", &template.to_string(), "--content", "Seal intact"])
        .await
        .unwrap();

    let posts = app.mock.requests_to(HttpMethod::Post, "/DeliveryRecordTerm/terms");
    let RequestBody::Json(body) = &posts[0].body else {
        panic!("expected JSON body");
    };
    assert_eq!(body["displayOrder"], 1);
    assert_eq!(body["deliveryRecordTemplateId"], json!(template));
}

#[tokio::test]
async fn test_blank_term_is_not_sent() {
    let app = helpers::TestConsole::staff();
    let template = DeliveryRecordTemplateId::new();
    let path = format!("/DeliveryRecordTerm/{template}/terms");
    app.mock.ok(HttpMethod::Get, &path, helpers::page(Vec::new(), 1, 1));

    let err = app
        .run(&["delivery-record", "term", "add", &template.to_string(), "--content", "   "])
        .await
        .unwrap_err();
    assert_eq!(err.message, "Term content is required");
    assert_eq!(app.mock.count(HttpMethod::Post, "/DeliveryRecordTerm/terms"), 0);
}

#[tokio::test]
async fn test_edit_term_keeps_its_order() {
    let app = helpers::TestConsole::staff();
    let template = DeliveryRecordTemplateId::new();
    let (first, second) = (DeliveryRecordTermId::new(), DeliveryRecordTermId::new());
    app.mock.ok(
        HttpMethod::Get,
        &format!("/DeliveryRecordTerm/{template}/terms"),
        helpers::page(
            vec![delivery_term(second, "Photos taken", 5), delivery_term(first, "Seal intact", 2)],
            1,
            1,
        ),
    );
    app.mock.ok(HttpMethod::Put, &format!("/DeliveryRecordTerm/terms/{second}"), Value::Null);

    app.run(&[
        "delivery-record",
        "term",
        "edit",
        &template.to_string(),
        &second.to_string(),
        "--content",
        "Photos of every side",
    ])
    .await
    .unwrap();

    let puts = app
        .mock
        .requests_to(HttpMethod::Put, &format!("/DeliveryRecordTerm/terms/{second}"));
    let RequestBody::Json(body) = &puts[0].body else {
        panic!("expected JSON body");
    };
    assert_eq!(body["displayOrder"], 5);
    assert_eq!(body["content"], "Photos of every side");
}

#[tokio::test]
async fn test_edit_unknown_term_sends_nothing() {
    let app = helpers::TestConsole::staff();
    let template = DeliveryRecordTemplateId::new();
    app.mock.ok(
        HttpMethod::Get,
        &format!("/DeliveryRecordTerm/{template}/terms"),
        helpers::page(Vec::new(), 1, 1),
    );
    let missing = DeliveryRecordTermId::new();

    let err = app
        .run(&[
            "delivery-record",
            "term",
            "edit",
            &template.to_string(),
            &missing.to_string(),
            "--content",
            "Anything",
        ])
        .await
        .unwrap_err();
    assert_eq!(err.kind, backoffice_core::error::ErrorKind::NotFound);
    assert_eq!(
        app.mock
            .count(HttpMethod::Put, &format!("/DeliveryRecordTerm/terms/{missing}")),
        0
    );
}

#[tokio::test]
async fn test_delete_term_reloads_without_renumbering() {
    let app = helpers::TestConsole::staff();
    let template = DeliveryRecordTemplateId::new();
    let (a, b, c) = (
        DeliveryRecordTermId::new(),
        DeliveryRecordTermId::new(),
        DeliveryRecordTermId::new(),
    );
    let path = format!("/DeliveryRecordTerm/{template}/terms");
    app.mock.ok(
        HttpMethod::Get,
        &path,
        helpers::page(
            vec![delivery_term(a, "One", 1), delivery_term(b, "Two", 2), delivery_term(c, "Three", 3)],
            1,
            1,
        ),
    );
    app.mock.ok(
        HttpMethod::Get,
        &path,
        helpers::page(vec![delivery_term(a, "One", 1), delivery_term(c, "Three", 3)], 1, 1),
    );
    app.mock.ok(HttpMethod::Delete, &format!("/DeliveryRecordTerm/terms/{b}"), Value::Null);

    app.run(&["delivery-record", "term", "delete", &template.to_string(), &b.to_string()])
        .await
        .unwrap();

    assert_eq!(app.mock.count(HttpMethod::Delete, &format!("/DeliveryRecordTerm/terms/{b}")), 1);
    assert_eq!(app.mock.count(HttpMethod::Get, &path), 2);
    assert_eq!(app.mock.count(HttpMethod::Put, &format!("/DeliveryRecordTerm/terms/{c}")), 0);
}

#[tokio::test]
async fn test_invalid_template_id_rejected() {
    let app = helpers::TestConsole::staff();
    let err = app
        .run(&["contract", "term", "list", "not-a-uuid"])
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert!(app.mock.requests().is_empty());
}
