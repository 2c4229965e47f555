//! Document records and verification status.

use std::fmt;

use backoffice_core::types::{DocumentId, UserId, VehicleId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Verification status shared by user and vehicle documents.
    DocumentStatus {
        /// Uploaded and waiting for a staff decision.
        PendingReview => "PENDING_REVIEW",
        /// Approved and in force.
        Active => "ACTIVE",
        /// Superseded or withdrawn.
        Inactive => "INACTIVE",
        /// Refused by staff.
        Rejected => "REJECTED",
    }
}

impl DocumentStatus {
    /// Whether a review decision may still be recorded.
    pub fn is_reviewable(&self) -> bool {
        matches!(self, Self::PendingReview)
    }
}

/// An identity document uploaded by a user (ID card, licence, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    /// Document ID.
    #[serde(alias = "UserDocumentId")]
    pub user_document_id: DocumentId,
    /// Owning user, when the endpoint includes it.
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Owning user's name (pending-review listings).
    #[serde(default)]
    pub full_name: Option<String>,
    /// Document kind, free text from the backend.
    #[serde(default, alias = "DocumentType")]
    pub document_type: String,
    /// Verification status.
    #[serde(default, alias = "Status")]
    pub status: DocumentStatus,
    /// Front image URL.
    #[serde(default)]
    pub front_image_url: Option<String>,
    /// Back image URL.
    #[serde(default)]
    pub back_image_url: Option<String>,
    /// Reason recorded on rejection.
    #[serde(default)]
    pub rejection_reason: Option<String>,
    /// Upload time.
    #[serde(default, with = "crate::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Result of `GET /UserDocument/user/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocumentList {
    /// The user's documents.
    #[serde(default, deserialize_with = "crate::null_as_empty")]
    pub documents: Vec<UserDocument>,
}

/// A vehicle registration or insurance document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDocument {
    /// Document ID.
    #[serde(alias = "VehicleDocumentId")]
    pub vehicle_document_id: DocumentId,
    /// Vehicle the document belongs to.
    #[serde(default)]
    pub vehicle_id: Option<VehicleId>,
    /// Plate of that vehicle, when listed.
    #[serde(default)]
    pub plate_number: Option<String>,
    /// Document kind.
    #[serde(default, alias = "DocumentType")]
    pub document_type: String,
    /// Verification status.
    #[serde(default, alias = "Status")]
    pub status: DocumentStatus,
    /// Front scan.
    #[serde(default, alias = "frontImageUrl")]
    pub front_document_url: Option<String>,
    /// Back scan.
    #[serde(default, alias = "backImageUrl")]
    pub back_document_url: Option<String>,
    /// Additional images.
    #[serde(default, deserialize_with = "crate::media::deserialize_urls")]
    pub image_urls: Vec<String>,
    /// Notes left by a previous reviewer.
    #[serde(default)]
    pub admin_notes: Option<String>,
    /// Expiry.
    #[serde(default, with = "crate::timestamp::option")]
    pub expiration_date: Option<DateTime<Utc>>,
    /// Upload time.
    #[serde(default, with = "crate::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Summary status of all documents a user has submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateStatus {
    /// Nothing submitted.
    None,
    /// The status that represents the user.
    Status(DocumentStatus),
}

impl AggregateStatus {
    /// Fold a user's documents into one status.
    ///
    /// Any pending document makes the user pending. Otherwise the most
    /// recently created document wins; documents without a timestamp sort
    /// oldest.
    pub fn of(documents: &[UserDocument]) -> Self {
        if documents.is_empty() {
            return Self::None;
        }
        if documents.iter().any(|d| d.status.is_reviewable()) {
            return Self::Status(DocumentStatus::PendingReview);
        }
        documents
            .iter()
            .max_by_key(|d| d.created_at)
            .map(|d| Self::Status(d.status))
            .unwrap_or(Self::None)
    }
}

impl fmt::Display for AggregateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("NONE"),
            Self::Status(status) => write!(f, "{status}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(status: &str, created_at: &str) -> UserDocument {
        serde_json::from_value(serde_json::json!({
            "userDocumentId": uuid::Uuid::new_v4(),
            "documentType": "CCCD",
            "status": status,
            "createdAt": created_at,
        }))
        .unwrap()
    }

    #[test]
    fn test_aggregate_none() {
        assert_eq!(AggregateStatus::of(&[]), AggregateStatus::None);
        assert_eq!(AggregateStatus::None.to_string(), "NONE");
    }

    #[test]
    fn test_aggregate_pending_wins() {
        let docs = vec![
            doc("ACTIVE", "2026-05-01T00:00:00"),
            doc("PENDING_REVIEW", "2026-01-01T00:00:00"),
        ];
        assert_eq!(
            AggregateStatus::of(&docs),
            AggregateStatus::Status(DocumentStatus::PendingReview)
        );
    }

    #[test]
    fn test_aggregate_latest_wins() {
        let docs = vec![
            doc("REJECTED", "2026-06-01T00:00:00"),
            doc("ACTIVE", "2026-02-01T00:00:00"),
        ];
        assert_eq!(
            AggregateStatus::of(&docs),
            AggregateStatus::Status(DocumentStatus::Rejected)
        );
    }

    #[test]
    fn test_document_list_null() {
        let list: UserDocumentList =
            serde_json::from_value(serde_json::json!({ "documents": null })).unwrap();
        assert!(list.documents.is_empty());
    }

    #[test]
    fn test_vehicle_document_image_aliases() {
        let doc: VehicleDocument = serde_json::from_value(serde_json::json!({
            "vehicleDocumentId": uuid::Uuid::new_v4(),
            "documentType": "REGISTRATION",
            "status": "pending_review",
            "frontImageUrl": "https://cdn.test/front.jpg",
        }))
        .unwrap();
        assert!(doc.status.is_reviewable());
        assert_eq!(doc.front_document_url.as_deref(), Some("https://cdn.test/front.jpg"));
    }
}
