//! Delivery-record terms.

use backoffice_core::types::{DeliveryRecordTemplateId, DeliveryRecordTermId};
use serde::{Deserialize, Serialize};

use crate::ordering::Ordered;
use crate::term::{TermDraft, TermText};

/// One checklist line of a delivery-record template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRecordTerm {
    /// Term ID.
    #[serde(alias = "DeliveryRecordTermId")]
    pub delivery_record_term_id: DeliveryRecordTermId,
    /// Owning template.
    #[serde(default)]
    pub delivery_record_template_id: Option<DeliveryRecordTemplateId>,
    /// Line text.
    #[serde(default, alias = "Content")]
    pub content: String,
    /// Position within the template.
    #[serde(default, alias = "DisplayOrder")]
    pub display_order: i32,
}

impl Ordered for DeliveryRecordTerm {
    fn order(&self) -> i32 {
        self.display_order
    }
}

impl TermText for DeliveryRecordTerm {
    fn text(&self) -> &str {
        &self.content
    }
}

/// JSON body of `POST` and `PUT /DeliveryRecordTerm/terms`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRecordTermBody {
    /// Owning template.
    pub delivery_record_template_id: DeliveryRecordTemplateId,
    /// Line text.
    pub content: String,
    /// Position within the template.
    pub display_order: i32,
}

impl DeliveryRecordTermBody {
    /// Body for `draft` under `template_id`.
    pub fn new(template_id: DeliveryRecordTemplateId, draft: &TermDraft) -> Self {
        Self {
            delivery_record_template_id: template_id,
            content: draft.content.trim().to_string(),
            display_order: draft.order,
        }
    }
}
