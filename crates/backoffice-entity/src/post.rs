//! Marketplace posts: providers advertising packages for shipping and
//! owners recruiting crew for a trip.

use backoffice_core::types::{PackageId, PostPackageId, PostTripDetailId, PostTripId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Post lifecycle.
    PostStatus {
        /// Accepting offers.
        Open => "OPEN",
        /// No longer accepting offers.
        Closed => "CLOSED",
        /// Removed.
        Deleted => "DELETED",
    }
}

/// The person behind a post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    /// Account ID.
    #[serde(default, alias = "userId")]
    pub id: Option<UserId>,
    /// Full name.
    #[serde(default, alias = "FullName")]
    pub full_name: Option<String>,
}

/// A place on a shipping route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePoint {
    /// Street address.
    #[serde(default, alias = "Address")]
    pub address: Option<String>,
}

/// Pickup and delivery plan of a package post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRoute {
    /// Where the goods are collected.
    #[serde(default)]
    pub start_location: Option<RoutePoint>,
    /// Where the goods are delivered.
    #[serde(default)]
    pub end_location: Option<RoutePoint>,
    /// Planned pickup.
    #[serde(default, with = "crate::timestamp::option")]
    pub expected_pickup_date: Option<DateTime<Utc>>,
    /// Planned delivery.
    #[serde(default, with = "crate::timestamp::option")]
    pub expected_delivery_date: Option<DateTime<Utc>>,
}

/// A package attached to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostedPackage {
    /// Package ID.
    #[serde(alias = "PackageId")]
    pub package_id: PackageId,
    /// Human-readable code.
    #[serde(default)]
    pub package_code: Option<String>,
    /// Photos.
    #[serde(default, deserialize_with = "crate::media::deserialize_urls")]
    pub package_images: Vec<String>,
}

/// A provider's request to have packages shipped.
///
/// The list endpoint returns a summary; the detail adds the route, the
/// provider, and the packages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPackage {
    /// Post ID.
    #[serde(alias = "PostPackageId")]
    pub post_package_id: PostPackageId,
    /// Title.
    #[serde(default, alias = "Title")]
    pub title: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Price the provider offers.
    #[serde(default)]
    pub offered_price: Option<f64>,
    /// Lifecycle status.
    #[serde(default, alias = "Status")]
    pub status: PostStatus,
    /// Provider account.
    #[serde(default)]
    pub provider_id: Option<UserId>,
    /// Provider name (list rows).
    #[serde(default)]
    pub provider_name: Option<String>,
    /// Provider summary (detail).
    #[serde(default)]
    pub provider: Option<PostAuthor>,
    /// Pickup and delivery plan (detail).
    #[serde(default)]
    pub shipping_route: Option<ShippingRoute>,
    /// Packages on offer (detail).
    #[serde(default, deserialize_with = "crate::null_as_empty")]
    pub packages: Vec<PostedPackage>,
    /// Creation time.
    #[serde(default, alias = "createAt", with = "crate::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl PostPackage {
    /// Provider name from whichever shape carried it, else the provider ID.
    pub fn provider_label(&self) -> Option<String> {
        self.provider
            .as_ref()
            .and_then(|p| p.full_name.clone())
            .or_else(|| self.provider_name.clone())
            .or_else(|| self.provider_id.map(|id| id.to_string()))
    }

    /// Photos of the first package, which the console shows as the post's
    /// gallery.
    pub fn images(&self) -> &[String] {
        self.packages
            .first()
            .map(|p| p.package_images.as_slice())
            .unwrap_or_default()
    }
}

/// The trip a crew post belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostTripRoute {
    /// Departure.
    #[serde(default)]
    pub start_location_name: Option<String>,
    /// Destination.
    #[serde(default)]
    pub end_location_name: Option<String>,
    /// Vehicle model.
    #[serde(default)]
    pub vehicle_model: Option<String>,
    /// Licence plate.
    #[serde(default)]
    pub vehicle_plate: Option<String>,
}

/// One crew slot of a trip post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostTripSlot {
    /// Slot ID.
    pub post_trip_detail_id: PostTripDetailId,
    /// Crew role, e.g. `PRIMARY_DRIVER`.
    #[serde(default, rename = "type")]
    pub slot_type: Option<String>,
    /// Number of people wanted.
    #[serde(default)]
    pub required_count: u32,
    /// Pay per person.
    #[serde(default)]
    pub price_per_person: Option<f64>,
    /// Where the crew joins.
    #[serde(default)]
    pub pickup_location: Option<String>,
    /// Where the crew leaves.
    #[serde(default)]
    pub dropoff_location: Option<String>,
}

/// An owner's request for drivers on a trip. The list rows are complete;
/// there is no separate detail shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostTrip {
    /// Post ID.
    #[serde(alias = "PostTripId")]
    pub post_trip_id: PostTripId,
    /// Title.
    #[serde(default, alias = "Title")]
    pub title: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Lifecycle status.
    #[serde(default, alias = "Status")]
    pub status: PostStatus,
    /// Posting owner.
    #[serde(default)]
    pub owner: Option<PostAuthor>,
    /// The trip being staffed.
    #[serde(default)]
    pub trip: Option<PostTripRoute>,
    /// Crew slots.
    #[serde(default, deserialize_with = "crate::null_as_empty")]
    pub post_trip_details: Vec<PostTripSlot>,
    /// Creation time.
    #[serde(default, alias = "createAt", with = "crate::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl PostTrip {
    /// Posting owner's name.
    pub fn owner_name(&self) -> Option<&str> {
        self.owner.as_ref()?.full_name.as_deref()
    }

    /// Total number of people wanted across all slots.
    pub fn seats_wanted(&self) -> u32 {
        self.post_trip_details.iter().map(|d| d.required_count).sum()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_package_post_detail() {
        let post: PostPackage = serde_json::from_value(json!({
            "postPackageId": "3f9c2a1e-8b7d-4c6e-9f5a-2d1b0c9e8f7a",
            "title": "Rice to Da Nang",
            "status": "OPEN",
            "provider": { "fullName": "Tran Thi Mai" },
            "shippingRoute": {
                "startLocation": { "address": "Can Tho" },
                "endLocation": { "address": "Da Nang" },
                "expectedPickupDate": "2026-11-02T08:00:00"
            },
            "packages": [{
                "packageId": "0e7f6d2c-1b3a-4c5d-9e8f-7a6b5c4d3e2f",
                "packageImages": [{ "imageUrl": "https://cdn.test/rice.jpg" }]
            }]
        }))
        .unwrap();
        assert_eq!(post.status, PostStatus::Open);
        assert_eq!(post.provider_label().as_deref(), Some("Tran Thi Mai"));
        assert_eq!(post.images(), ["https://cdn.test/rice.jpg"]);
        let route = post.shipping_route.unwrap();
        assert_eq!(route.end_location.and_then(|p| p.address).as_deref(), Some("Da Nang"));
        assert!(route.expected_pickup_date.is_some());
    }

    #[test]
    fn test_package_post_list_row() {
        let post: PostPackage = serde_json::from_value(json!({
            "postPackageId": "3f9c2a1e-8b7d-4c6e-9f5a-2d1b0c9e8f7a",
            "title": "Rice",
            "providerName": "Mai",
            "packages": null
        }))
        .unwrap();
        assert_eq!(post.provider_label().as_deref(), Some("Mai"));
        assert!(post.images().is_empty());
        assert_eq!(post.status, PostStatus::Unknown);
    }

    #[test]
    fn test_trip_post_slots() {
        let post: PostTrip = serde_json::from_value(json!({
            "postTripId": "9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d",
            "title": "Need drivers",
            "status": "closed",
            "createAt": "2026-10-01T09:30:00Z",
            "owner": { "fullName": "Pham Van Long" },
            "trip": { "startLocationName": "Ha Noi", "endLocationName": "Hai Phong" },
            "postTripDetails": [
                { "postTripDetailId": "1a2b3c4d-5e6f-4a7b-8c9d-0e1f2a3b4c5d", "type": "PRIMARY_DRIVER", "requiredCount": 1, "pricePerPerson": 900000.0 },
                { "postTripDetailId": "2a2b3c4d-5e6f-4a7b-8c9d-0e1f2a3b4c5d", "type": "SECONDARY_DRIVER", "requiredCount": 2 }
            ]
        }))
        .unwrap();
        assert_eq!(post.status, PostStatus::Closed);
        assert_eq!(post.owner_name(), Some("Pham Van Long"));
        assert_eq!(post.seats_wanted(), 3);
        assert!(post.created_at.is_some());
        assert_eq!(post.post_trip_details[0].slot_type.as_deref(), Some("PRIMARY_DRIVER"));
    }
}
