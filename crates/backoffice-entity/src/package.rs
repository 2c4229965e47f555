//! Shipment packages.

use backoffice_core::types::{PackageId, UserId};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Package lifecycle.
    PackageStatus {
        /// Waiting for staff approval.
        Pending => "PENDING",
        /// Approved for transport.
        Approved => "APPROVED",
        /// Assigned to a trip.
        InUse => "IN_USE",
        /// Refused by staff.
        Rejected => "REJECTED",
        /// Removed.
        Deleted => "DELETED",
    }
}

/// A package record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Package ID.
    #[serde(alias = "PackageId")]
    pub package_id: PackageId,
    /// Human-readable code.
    #[serde(default, alias = "PackageCode")]
    pub package_code: String,
    /// Title.
    #[serde(default, alias = "Title")]
    pub title: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Quantity in `unit`.
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Unit of `quantity`.
    #[serde(default)]
    pub unit: Option<String>,
    /// Weight in kilograms.
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Volume in cubic metres.
    #[serde(default, alias = "volumeM3")]
    pub volume_m3: Option<f64>,
    /// Lifecycle status.
    #[serde(default, alias = "Status")]
    pub status: PackageStatus,
    /// Provider account.
    #[serde(default)]
    pub provider_id: Option<UserId>,
    /// Photos.
    #[serde(default, deserialize_with = "crate::media::deserialize_urls")]
    pub package_images: Vec<String>,
}
