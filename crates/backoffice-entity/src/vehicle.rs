//! Vehicles registered by owners.

use backoffice_core::types::{UserId, VehicleId};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Vehicle lifecycle.
    VehicleStatus {
        /// Available for trips.
        Active => "ACTIVE",
        /// Withdrawn by the owner.
        Inactive => "INACTIVE",
        /// Assigned to a running trip.
        InUse => "IN_USE",
        /// Documents waiting for review.
        PendingReview => "PENDING_REVIEW",
        /// Removed.
        Deleted => "DELETED",
    }
}

/// The owner summary embedded in a vehicle record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleOwner {
    /// Owner account.
    #[serde(default)]
    pub user_id: Option<UserId>,
    /// Owner name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Owner company.
    #[serde(default)]
    pub company_name: Option<String>,
}

impl VehicleOwner {
    /// Company name if set, else the person's name.
    pub fn display_name(&self) -> Option<&str> {
        self.company_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.full_name.as_deref())
    }
}

/// A vehicle record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Vehicle ID.
    #[serde(alias = "VehicleId")]
    pub vehicle_id: VehicleId,
    /// Licence plate.
    #[serde(default, alias = "PlateNumber")]
    pub plate_number: String,
    /// Manufacturer.
    #[serde(default)]
    pub brand: Option<String>,
    /// Model.
    #[serde(default)]
    pub model: Option<String>,
    /// Body colour.
    #[serde(default)]
    pub color: Option<String>,
    /// Vehicle class (truck, van, ...).
    #[serde(default)]
    pub vehicle_type: Option<String>,
    /// Year of manufacture.
    #[serde(default)]
    pub year_of_manufacture: Option<i32>,
    /// Maximum payload in kilograms.
    #[serde(default)]
    pub payload_in_kg: Option<f64>,
    /// Cargo volume in cubic metres.
    #[serde(default, alias = "volumeInM3")]
    pub volume_in_m3: Option<f64>,
    /// Lifecycle status.
    #[serde(default, alias = "Status")]
    pub status: VehicleStatus,
    /// Owner summary.
    #[serde(default)]
    pub owner: Option<VehicleOwner>,
    /// Photos.
    #[serde(default, deserialize_with = "crate::media::deserialize_urls")]
    pub image_urls: Vec<String>,
}
