//! Contract terms.

use backoffice_core::traits::FormPart;
use backoffice_core::types::{ContractTemplateId, ContractTermId};
use serde::{Deserialize, Serialize};

use crate::ordering::Ordered;
use crate::term::{TermDraft, TermText};

/// One clause of a contract template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTerm {
    /// Term ID.
    #[serde(alias = "ContractTermId")]
    pub contract_term_id: ContractTermId,
    /// Owning template.
    #[serde(default)]
    pub contract_template_id: Option<ContractTemplateId>,
    /// Clause text.
    #[serde(default, alias = "Content")]
    pub content: String,
    /// Position within the template.
    #[serde(default, alias = "Order")]
    pub order: i32,
}

impl ContractTerm {
    /// Parts for `POST /ContractTerm/create`.
    pub fn create_parts(template_id: ContractTemplateId, draft: &TermDraft) -> Vec<FormPart> {
        vec![
            FormPart::new("Content", draft.content.trim()),
            FormPart::new("Order", draft.order.to_string()),
            FormPart::new("ContractTemplateId", template_id.to_string()),
        ]
    }

    /// Parts for `PUT /ContractTerm/update`.
    pub fn update_parts(term_id: ContractTermId, draft: &TermDraft) -> Vec<FormPart> {
        vec![
            FormPart::new("Content", draft.content.trim()),
            FormPart::new("Order", draft.order.to_string()),
            FormPart::new("ContractTermId", term_id.to_string()),
        ]
    }
}

impl Ordered for ContractTerm {
    fn order(&self) -> i32 {
        self.order
    }
}

impl TermText for ContractTerm {
    fn text(&self) -> &str {
        &self.content
    }
}
