//! Pending verification documents and review decisions.

use backoffice_core::traits::ApiRequest;
use backoffice_core::types::DocumentId;
use backoffice_core::AppResult;
use backoffice_entity::document::{DocumentStatus, ReviewDecision, UserDocument, VehicleDocument};
use tracing::info;

use crate::client::Outcome;
use crate::resource::{Resource, ResourceService};
use crate::routes::Routes;

/// A document resource that accepts review decisions.
pub trait Reviewable: Resource<Id = DocumentId> {
    /// Review endpoint.
    const REVIEW_PATH: &'static str;

    /// Current status of a document.
    fn status_of(record: &Self::Record) -> DocumentStatus;
}

/// User identity documents waiting for review.
#[derive(Debug, Clone, Copy)]
pub struct UserDocuments;

impl Resource for UserDocuments {
    type Id = DocumentId;
    type Record = UserDocument;
    const ROUTES: Routes = Routes::rest(
        "User document",
        "/UserDocument/pending-reviews",
        "/UserDocument/pending-reviews/{id}",
    );

    fn id_of(record: &UserDocument) -> DocumentId {
        record.user_document_id
    }
}

impl Reviewable for UserDocuments {
    const REVIEW_PATH: &'static str = "/UserDocument/review";

    fn status_of(record: &UserDocument) -> DocumentStatus {
        record.status
    }
}

/// Vehicle documents waiting for review.
#[derive(Debug, Clone, Copy)]
pub struct VehicleDocuments;

impl Resource for VehicleDocuments {
    type Id = DocumentId;
    type Record = VehicleDocument;
    const ROUTES: Routes = Routes::rest(
        "Vehicle document",
        "/VehicleDocument/pending-reviews",
        "/VehicleDocument/pending-reviews/{id}",
    );

    fn id_of(record: &VehicleDocument) -> DocumentId {
        record.vehicle_document_id
    }
}

impl Reviewable for VehicleDocuments {
    const REVIEW_PATH: &'static str = "/VehicleDocument/review";

    fn status_of(record: &VehicleDocument) -> DocumentStatus {
        record.status
    }
}

impl<R: Reviewable> ResourceService<R> {
    /// Record a decision on `document`.
    ///
    /// Rules are checked before anything is sent: the document must still
    /// be pending and a rejection needs a reason.
    pub async fn review(&self, document: &R::Record, decision: &ReviewDecision) -> AppResult<Outcome> {
        let id = R::id_of(document);
        let payload = decision.to_payload(id, R::status_of(document))?;
        let body = super::json_body(&payload)?;
        let mut request = ApiRequest::post(R::REVIEW_PATH);
        request.body = body;

        let outcome = self.client().call(request).await?;
        info!(
            resource = R::ROUTES.name,
            %id,
            approved = payload.is_approved,
            "Document reviewed"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use backoffice_core::traits::{HttpMethod, RequestBody};
    use serde_json::json;

    use crate::client::ApiClient;
    use crate::mock::MockTransport;

    fn pending_vehicle_doc() -> VehicleDocument {
        serde_json::from_value(json!({
            "vehicleDocumentId": DocumentId::new(),
            "documentType": "INSURANCE",
            "status": "PENDING_REVIEW"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_reject_without_reason_sends_nothing() {
        let mock = Arc::new(MockTransport::new());
        let service = ResourceService::<VehicleDocuments>::new(ApiClient::new(mock.clone()));
        let err = service
            .review(&pending_vehicle_doc(), &ReviewDecision::reject(""))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_approve_posts_payload() {
        let mock = Arc::new(MockTransport::new());
        mock.ok(HttpMethod::Post, "/VehicleDocument/review", json!(true));
        let service = ResourceService::<VehicleDocuments>::new(ApiClient::new(mock.clone()));
        let doc = pending_vehicle_doc();
        service.review(&doc, &ReviewDecision::Approve).await.unwrap();

        let sent = &mock.requests()[0];
        let RequestBody::Json(body) = &sent.body else {
            panic!("expected JSON body");
        };
        assert_eq!(body["documentId"], json!(doc.vehicle_document_id));
        assert_eq!(body["isApproved"], true);
    }
}
