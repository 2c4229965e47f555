//! Delivery-record templates and their terms.

use async_trait::async_trait;
use backoffice_core::traits::{ApiRequest, RequestBody};
use backoffice_core::types::{DeliveryRecordTemplateId, DeliveryRecordTermId, ListQuery, Page};
use backoffice_core::AppResult;
use backoffice_entity::delivery_record::{
    DeliveryRecordTemplate, DeliveryRecordTemplateForm, DeliveryRecordTerm, DeliveryRecordTermBody,
};
use backoffice_entity::term::TermDraft;
use serde_json::Value;
use tracing::info;

use super::children::ChildService;
use super::json_body;
use crate::client::{ApiClient, Outcome};
use crate::resource::{Editable, Resource, id_field};
use crate::routes::Routes;

/// Terms fetched per template.
const TERMS_PAGE_SIZE: u32 = 50;

/// Delivery-record templates.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryRecordTemplates;

impl Resource for DeliveryRecordTemplates {
    type Id = DeliveryRecordTemplateId;
    type Record = DeliveryRecordTemplate;
    const ROUTES: Routes = Routes::rest(
        "Delivery-record template",
        "/DeliveryRecordTemplate",
        "/DeliveryRecordTemplate/{id}",
    )
    .with_create("/DeliveryRecordTemplate")
    .with_update("/DeliveryRecordTemplate/{id}")
    .with_delete("/DeliveryRecordTemplate/{id}");

    fn id_of(record: &DeliveryRecordTemplate) -> DeliveryRecordTemplateId {
        record.delivery_record_template_id
    }
}

impl Editable for DeliveryRecordTemplates {
    type CreateForm = DeliveryRecordTemplateForm;
    type UpdateForm = DeliveryRecordTemplateForm;

    fn create_body(form: &DeliveryRecordTemplateForm) -> AppResult<RequestBody> {
        json_body(form)
    }

    fn update_body(_id: DeliveryRecordTemplateId, form: &DeliveryRecordTemplateForm) -> AppResult<RequestBody> {
        json_body(form)
    }

    fn created_id(result: Option<&Value>) -> Option<DeliveryRecordTemplateId> {
        id_field(result, "deliveryRecordTemplateId")
    }
}

/// Terms of a delivery-record template, served by nested endpoints.
#[derive(Debug, Clone)]
pub struct DeliveryRecordTermService {
    /// Shared API client.
    client: ApiClient,
}

impl DeliveryRecordTermService {
    /// Create a term service.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// One term (`GET /DeliveryRecordTerm/terms/{id}`).
    pub async fn get(&self, id: DeliveryRecordTermId) -> AppResult<DeliveryRecordTerm> {
        self.client
            .fetch(
                "delivery-record term",
                ApiRequest::get(format!("/DeliveryRecordTerm/terms/{id}")),
            )
            .await
    }
}

#[async_trait]
impl ChildService for DeliveryRecordTermService {
    type ParentId = DeliveryRecordTemplateId;
    type ChildId = DeliveryRecordTermId;
    type Child = DeliveryRecordTerm;

    fn child_id(child: &DeliveryRecordTerm) -> DeliveryRecordTermId {
        child.delivery_record_term_id
    }

    async fn children(&self, parent: DeliveryRecordTemplateId) -> AppResult<Vec<DeliveryRecordTerm>> {
        let request = ApiRequest::get(format!("/DeliveryRecordTerm/{parent}/terms"))
            .with_query(ListQuery::new(TERMS_PAGE_SIZE).to_pairs());
        let page: Page<DeliveryRecordTerm> = self
            .client
            .fetch_page("delivery-record terms", request)
            .await?;
        Ok(page.data)
    }

    async fn create_child(&self, parent: DeliveryRecordTemplateId, draft: &TermDraft) -> AppResult<Outcome> {
        let body = DeliveryRecordTermBody::new(parent, draft);
        let mut request = ApiRequest::post("/DeliveryRecordTerm/terms");
        request.body = json_body(&body)?;
        let outcome = self.client.call(request).await?;
        info!(template_id = %parent, order = draft.order, "Delivery-record term created");
        Ok(outcome)
    }

    async fn update_child(
        &self,
        parent: DeliveryRecordTemplateId,
        id: DeliveryRecordTermId,
        draft: &TermDraft,
    ) -> AppResult<Outcome> {
        let body = DeliveryRecordTermBody::new(parent, draft);
        let mut request = ApiRequest::put(format!("/DeliveryRecordTerm/terms/{id}"));
        request.body = json_body(&body)?;
        let outcome = self.client.call(request).await?;
        info!(template_id = %parent, term_id = %id, "Delivery-record term updated");
        Ok(outcome)
    }

    async fn delete_child(&self, id: DeliveryRecordTermId) -> AppResult<Outcome> {
        let outcome = self
            .client
            .call(ApiRequest::delete(format!("/DeliveryRecordTerm/terms/{id}")))
            .await?;
        info!(term_id = %id, "Delivery-record term deleted");
        Ok(outcome)
    }
}
