//! Items offered by providers.

use backoffice_core::types::{ItemId, UserId};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Item lifecycle.
    ItemStatus {
        /// Waiting for staff approval.
        Pending => "PENDING",
        /// Available.
        Active => "ACTIVE",
        /// Packed into a shipment.
        InUse => "IN_USE",
        /// Removed.
        Deleted => "DELETED",
    }
}

/// An item record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Item ID.
    #[serde(alias = "ItemId")]
    pub item_id: ItemId,
    /// Display name.
    #[serde(default, alias = "ItemName")]
    pub item_name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Declared value, in `currency`.
    #[serde(default)]
    pub declared_value: Option<f64>,
    /// ISO currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Lifecycle status.
    #[serde(default, alias = "Status")]
    pub status: ItemStatus,
    /// Owner account.
    #[serde(default)]
    pub owner_id: Option<UserId>,
    /// Provider account.
    #[serde(default)]
    pub provider_id: Option<UserId>,
    /// Photos.
    #[serde(default, deserialize_with = "crate::media::deserialize_urls")]
    pub image_urls: Vec<String>,
}

impl Item {
    /// Value with its currency, e.g. `1500000 VND`.
    pub fn declared_value_label(&self) -> Option<String> {
        self.declared_value.map(|value| match &self.currency {
            Some(currency) => format!("{value} {currency}"),
            None => value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_item() {
        let item: Item = serde_json::from_value(serde_json::json!({
            "itemId": "6d1c0a4e-3a9e-4b57-8c2f-0d3e1b2a4c5d",
            "itemName": "Rice sacks",
            "declaredValue": 1500000,
            "currency": "VND",
            "status": "IN_USE",
            "imageUrls": ["https://cdn.test/rice.jpg"]
        }))
        .unwrap();
        assert_eq!(item.status, ItemStatus::InUse);
        assert_eq!(item.declared_value_label().as_deref(), Some("1500000 VND"));
        assert_eq!(item.image_urls.len(), 1);
    }

    #[test]
    fn test_wrong_value_type_fails() {
        let result: Result<Item, _> = serde_json::from_value(serde_json::json!({
            "itemId": "6d1c0a4e-3a9e-4b57-8c2f-0d3e1b2a4c5d",
            "declaredValue": "a lot"
        }));
        assert!(result.is_err());
    }
}
