//! Delivery-record template record and form.

use backoffice_core::types::DeliveryRecordTemplateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

wire_enum! {
    /// Stage of the trip the record is filled in at.
    DeliveryRecordType {
        /// When goods are picked up.
        Pickup => "PICKUP",
        /// When goods are handed over.
        Dropoff => "DROPOFF",
    }
}

wire_enum! {
    /// Whether the template is offered for new trips.
    TemplateStatus {
        /// In use.
        Active => "ACTIVE",
        /// Retired.
        Inactive => "INACTIVE",
    }
}

/// A delivery-record template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRecordTemplate {
    /// Template ID.
    #[serde(alias = "DeliveryRecordTemplateId")]
    pub delivery_record_template_id: DeliveryRecordTemplateId,
    /// Template name.
    #[serde(default, alias = "TemplateName")]
    pub template_name: String,
    /// Version label.
    #[serde(default, alias = "Version")]
    pub version: String,
    /// Trip stage.
    #[serde(default, rename = "type", alias = "Type")]
    pub record_type: DeliveryRecordType,
    /// Availability.
    #[serde(default, alias = "Status")]
    pub status: TemplateStatus,
    /// Creation time.
    #[serde(default, with = "crate::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Template editor fields, sent as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRecordTemplateForm {
    /// Template name.
    #[validate(custom(function = "crate::validation::not_blank", message = "Template name is required"))]
    pub template_name: String,
    /// Version label.
    pub version: String,
    /// Trip stage.
    #[serde(rename = "type")]
    pub record_type: DeliveryRecordType,
}

impl Default for DeliveryRecordTemplateForm {
    fn default() -> Self {
        Self {
            template_name: String::new(),
            version: String::new(),
            record_type: DeliveryRecordType::Pickup,
        }
    }
}

impl DeliveryRecordTemplateForm {
    /// Populate from a fetched template.
    pub fn from_template(template: &DeliveryRecordTemplate) -> Self {
        Self {
            template_name: template.template_name.clone(),
            version: template.version.clone(),
            record_type: if template.record_type.is_known() {
                template.record_type
            } else {
                DeliveryRecordType::Pickup
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_wire_shape() {
        let form = DeliveryRecordTemplateForm {
            template_name: "Standard pickup".into(),
            version: "1.0".into(),
            record_type: DeliveryRecordType::Dropoff,
        };
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            serde_json::json!({ "templateName": "Standard pickup", "version": "1.0", "type": "DROPOFF" })
        );
    }

    #[test]
    fn test_unknown_type_defaults_to_pickup_on_edit() {
        let template: DeliveryRecordTemplate = serde_json::from_value(serde_json::json!({
            "deliveryRecordTemplateId": "8e7d6c5b-4a39-4281-9f0e-1d2c3b4a5968",
            "templateName": "Legacy",
            "type": "RETURN"
        }))
        .unwrap();
        assert_eq!(template.record_type, DeliveryRecordType::Unknown);
        assert_eq!(
            DeliveryRecordTemplateForm::from_template(&template).record_type,
            DeliveryRecordType::Pickup
        );
    }
}
