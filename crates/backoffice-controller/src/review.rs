//! Review actions on pending verification documents.

use backoffice_client::client::Outcome;
use backoffice_client::resource::ResourceService;
use backoffice_client::services::{Reviewable, Users};
use backoffice_core::types::UserId;
use backoffice_core::{AppError, AppResult};
use backoffice_entity::document::{AggregateStatus, ReviewDecision};
use tracing::info;

use crate::list::ListDetailController;

impl<R: Reviewable> ListDetailController<R> {
    /// Decide on the selected document.
    ///
    /// The decision is checked against the loaded detail before anything
    /// is sent. On success the document leaves the pending list, so the
    /// selection is cleared and the list re-fetched.
    pub async fn review_selected(&mut self, decision: &ReviewDecision) -> AppResult<Outcome> {
        let document = self
            .detail()
            .cloned()
            .ok_or_else(|| AppError::validation("Select a document to review"))?;

        let outcome = match self.service().review(&document, decision).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.set_error(e.user_message());
                return Err(e);
            }
        };
        let approved = matches!(decision, ReviewDecision::Approve);
        self.set_notice(outcome.message.clone().unwrap_or_else(|| {
            if approved {
                "Document approved".to_string()
            } else {
                "Document rejected".to_string()
            }
        }));
        self.clear_selection();
        self.refresh().await;
        info!(resource = R::ROUTES.name, approved, "Review recorded");
        Ok(outcome)
    }
}

/// Aggregate verification status of one user.
pub async fn user_document_status(users: &ResourceService<Users>, user_id: UserId) -> AppResult<AggregateStatus> {
    let list = users.documents(user_id).await?;
    Ok(AggregateStatus::of(&list.documents))
}
