//! Contract template record and form.

use backoffice_core::traits::FormPart;
use backoffice_core::types::ContractTemplateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::term::ContractTerm;
use crate::ordering;

wire_enum! {
    /// Party a contract template is signed with.
    ContractType {
        /// Package providers.
        ProviderContract => "PROVIDER_CONTRACT",
        /// Drivers.
        DriverContract => "DRIVER_CONTRACT",
    }
}

impl ContractType {
    /// Human label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ProviderContract => "Provider Contract",
            Self::DriverContract => "Driver Contract",
            Self::Unknown => "Unknown",
        }
    }
}

/// A contract template. Detail responses embed the terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractTemplate {
    /// Template ID.
    #[serde(alias = "ContractTemplateId")]
    pub contract_template_id: ContractTemplateId,
    /// Template name.
    #[serde(default, alias = "ContractTemplateName")]
    pub contract_template_name: String,
    /// Version label.
    #[serde(default, alias = "Version")]
    pub version: String,
    /// Party type.
    #[serde(default, rename = "type", alias = "Type")]
    pub contract_type: ContractType,
    /// Creation time.
    #[serde(default, with = "crate::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    /// Terms, ascending by order after decode.
    #[serde(
        default,
        alias = "ContractTerms",
        deserialize_with = "deserialize_terms"
    )]
    pub contract_terms: Vec<ContractTerm>,
}

fn deserialize_terms<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<ContractTerm>, D::Error> {
    let mut terms = Option::<Vec<ContractTerm>>::deserialize(deserializer)?.unwrap_or_default();
    ordering::sort_by_order(&mut terms);
    Ok(terms)
}

/// Template editor fields, sent as `multipart/form-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContractTemplateForm {
    /// Template name.
    #[validate(custom(function = "crate::validation::not_blank", message = "Template name is required"))]
    pub name: String,
    /// Version label.
    #[validate(custom(function = "crate::validation::not_blank", message = "Version is required"))]
    pub version: String,
    /// Party type.
    pub contract_type: ContractType,
}

impl Default for ContractTemplateForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: String::new(),
            contract_type: ContractType::ProviderContract,
        }
    }
}

impl ContractTemplateForm {
    /// Populate from a fetched template.
    pub fn from_template(template: &ContractTemplate) -> Self {
        Self {
            name: template.contract_template_name.clone(),
            version: template.version.clone(),
            contract_type: if template.contract_type.is_known() {
                template.contract_type
            } else {
                ContractType::ProviderContract
            },
        }
    }

    /// Form parts. Updates carry the template id in the body.
    pub fn to_form_parts(&self, id: Option<ContractTemplateId>) -> Vec<FormPart> {
        let mut parts = vec![
            FormPart::new("ContractTemplateName", self.name.trim()),
            FormPart::new("Version", self.version.trim()),
            FormPart::new("Type", self.contract_type.as_str()),
        ];
        if let Some(id) = id {
            parts.push(FormPart::new("ContractTemplateId", id.to_string()));
        }
        parts
    }
}
