//! Review decisions on verification documents.

use backoffice_core::types::DocumentId;
use backoffice_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use super::model::DocumentStatus;

/// A staff decision on a pending document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    /// Accept the document.
    Approve,
    /// Refuse it, with the reason shown to the uploader.
    Reject {
        /// Why the document was refused.
        reason: String,
    },
}

impl ReviewDecision {
    /// Shorthand for a rejection.
    pub fn reject(reason: impl Into<String>) -> Self {
        Self::Reject {
            reason: reason.into(),
        }
    }

    /// Build the request body for a document in `status`.
    ///
    /// Only pending documents can be reviewed, and a rejection needs a
    /// non-blank reason.
    pub fn to_payload(&self, document_id: DocumentId, status: DocumentStatus) -> AppResult<ReviewPayload> {
        if !status.is_reviewable() {
            return Err(AppError::validation(format!(
                "Only documents pending review can be reviewed (status is {status})"
            )));
        }

        match self {
            Self::Approve => Ok(ReviewPayload {
                document_id,
                is_approved: true,
                reject_reason: None,
            }),
            Self::Reject { reason } => {
                let reason = reason.trim();
                if reason.is_empty() {
                    return Err(AppError::validation("Please enter a reason for rejection"));
                }
                Ok(ReviewPayload {
                    document_id,
                    is_approved: false,
                    reject_reason: Some(reason.to_string()),
                })
            }
        }
    }
}

/// Body of `POST /UserDocument/review` and `POST /VehicleDocument/review`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    /// Reviewed document.
    pub document_id: DocumentId,
    /// Approve or reject.
    pub is_approved: bool,
    /// Trimmed reason, `null` on approval.
    pub reject_reason: Option<String>,
}
