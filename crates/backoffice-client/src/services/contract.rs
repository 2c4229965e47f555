//! Contract templates and terms.
//!
//! These routes are action-suffixed and take `multipart/form-data`.

use std::cmp::Ordering;

use async_trait::async_trait;
use backoffice_core::traits::{ApiRequest, RequestBody};
use backoffice_core::types::{ContractTemplateId, ContractTermId, SortDirection};
use backoffice_core::AppResult;
use backoffice_entity::contract::{ContractTemplate, ContractTemplateForm, ContractTerm};
use backoffice_entity::term::TermDraft;
use serde_json::Value;
use tracing::info;

use super::children::ChildService;
use crate::client::{ApiClient, Outcome};
use crate::resource::{Editable, Resource, ResourceService, id_field};
use crate::routes::Routes;

/// Contract templates. The list endpoint returns every template at once.
#[derive(Debug, Clone, Copy)]
pub struct ContractTemplates;

impl Resource for ContractTemplates {
    type Id = ContractTemplateId;
    type Record = ContractTemplate;
    const ROUTES: Routes = Routes::rest(
        "Contract template",
        "/ContractTemplate/getAll",
        "/ContractTemplate/getById/{id}",
    )
    .with_create("/ContractTemplate/create")
    .with_update("/ContractTemplate/update")
    .with_delete("/ContractTemplate/delete/{id}");
    const LOCAL_QUERY: bool = true;

    fn id_of(record: &ContractTemplate) -> ContractTemplateId {
        record.contract_template_id
    }

    fn matches(record: &ContractTemplate, search: &str) -> bool {
        let needle = search.trim().to_lowercase();
        needle.is_empty()
            || record.contract_template_name.to_lowercase().contains(&needle)
            || record.version.to_lowercase().contains(&needle)
    }

    fn compare(a: &ContractTemplate, b: &ContractTemplate, field: &str, direction: SortDirection) -> Ordering {
        let ordering = match field {
            "createdAt" => a.created_at.cmp(&b.created_at),
            "version" => a.version.cmp(&b.version),
            _ => a
                .contract_template_name
                .to_lowercase()
                .cmp(&b.contract_template_name.to_lowercase()),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl Editable for ContractTemplates {
    type CreateForm = ContractTemplateForm;
    type UpdateForm = ContractTemplateForm;

    fn create_body(form: &ContractTemplateForm) -> AppResult<RequestBody> {
        Ok(RequestBody::Multipart(form.to_form_parts(None)))
    }

    fn update_body(id: ContractTemplateId, form: &ContractTemplateForm) -> AppResult<RequestBody> {
        Ok(RequestBody::Multipart(form.to_form_parts(Some(id))))
    }

    fn created_id(result: Option<&Value>) -> Option<ContractTemplateId> {
        id_field(result, "contractTemplateId")
    }
}

/// Terms of a contract template. They are read from the template detail
/// and written through `/ContractTerm/*`.
#[derive(Debug, Clone)]
pub struct ContractTermService {
    /// Shared API client.
    client: ApiClient,
    /// Template lookups.
    templates: ResourceService<ContractTemplates>,
}

impl ContractTermService {
    /// Create a term service.
    pub fn new(client: ApiClient) -> Self {
        Self {
            templates: ResourceService::new(client.clone()),
            client,
        }
    }
}

#[async_trait]
impl ChildService for ContractTermService {
    type ParentId = ContractTemplateId;
    type ChildId = ContractTermId;
    type Child = ContractTerm;

    fn child_id(child: &ContractTerm) -> ContractTermId {
        child.contract_term_id
    }

    async fn children(&self, parent: ContractTemplateId) -> AppResult<Vec<ContractTerm>> {
        Ok(self.templates.get(parent).await?.contract_terms)
    }

    async fn create_child(&self, parent: ContractTemplateId, draft: &TermDraft) -> AppResult<Outcome> {
        let request = ApiRequest::post("/ContractTerm/create")
            .with_form(ContractTerm::create_parts(parent, draft));
        let outcome = self.client.call(request).await?;
        info!(template_id = %parent, order = draft.order, "Contract term created");
        Ok(outcome)
    }

    async fn update_child(
        &self,
        parent: ContractTemplateId,
        id: ContractTermId,
        draft: &TermDraft,
    ) -> AppResult<Outcome> {
        let request = ApiRequest::put("/ContractTerm/update")
            .with_form(ContractTerm::update_parts(id, draft));
        let outcome = self.client.call(request).await?;
        info!(template_id = %parent, term_id = %id, "Contract term updated");
        Ok(outcome)
    }

    async fn delete_child(&self, id: ContractTermId) -> AppResult<Outcome> {
        let outcome = self
            .client
            .call(ApiRequest::delete(format!("/ContractTerm/delete/{id}")))
            .await?;
        info!(term_id = %id, "Contract term deleted");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use backoffice_core::traits::{FormPart, HttpMethod};
    use backoffice_core::types::ListQuery;
    use serde_json::json;

    use crate::mock::MockTransport;

    #[tokio::test]
    async fn test_get_all_bare_array() {
        let mock = Arc::new(MockTransport::new());
        mock.ok(
            HttpMethod::Get,
            "/ContractTemplate/getAll",
            json!([
                { "contractTemplateId": ContractTemplateId::new(), "contractTemplateName": "Driver", "version": "1" },
                { "contractTemplateId": ContractTemplateId::new(), "contractTemplateName": "Provider", "version": "3" }
            ]),
        );
        let service = ResourceService::<ContractTemplates>::new(ApiClient::new(mock));
        let page = service.list(&ListQuery::new(10)).await.unwrap();
        assert_eq!(page.total_count, 2);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_update_carries_id_in_form() {
        let mock = Arc::new(MockTransport::new());
        mock.ok(HttpMethod::Put, "/ContractTemplate/update", json!(null));
        let service = ResourceService::<ContractTemplates>::new(ApiClient::new(mock.clone()));
        let id = ContractTemplateId::new();
        let form = ContractTemplateForm {
            name: "Driver".into(),
            version: "2".into(),
            ..Default::default()
        };
        service.update(id, &form).await.unwrap();
        let RequestBody::Multipart(parts) = &mock.requests()[0].body else {
            panic!("expected multipart");
        };
        assert!(parts.contains(&FormPart::new("ContractTemplateId", id.to_string())));
    }

    #[tokio::test]
    async fn test_children_from_detail() {
        let mock = Arc::new(MockTransport::new());
        let id = ContractTemplateId::new();
        mock.ok(
            HttpMethod::Get,
            &format!("/ContractTemplate/getById/{id}"),
            json!({
                "contractTemplateId": id,
                "contractTerms": [
                    { "contractTermId": ContractTermId::new(), "content": "B", "order": 2 },
                    { "contractTermId": ContractTermId::new(), "content": "A", "order": 1 }
                ]
            }),
        );
        let terms = ContractTermService::new(ApiClient::new(mock)).children(id).await.unwrap();
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].content, "A");
    }
}
