//! Trips and their status phases.

use std::cmp::Ordering;
use std::fmt;

use backoffice_core::types::{SortDirection, TripId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Package codes listed before the remainder is summarised as `(+n)`.
const PACKAGE_PREVIEW: usize = 3;

/// Trip status.
///
/// The backend has a family of `AWAITING_*` and `PENDING_*` statuses that
/// grows over time; they decode by prefix. The original spelling is kept
/// in [`Trip::status_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TripStatus {
    /// Just created.
    Created,
    /// Any `AWAITING_*` step.
    Awaiting,
    /// Any `PENDING_*` step.
    Pending,
    /// Goods being loaded.
    Loading,
    /// On the road.
    InTransit,
    /// Goods being unloaded.
    Unloading,
    /// Finished.
    Completed,
    /// Called off.
    Cancelled,
    /// A value this console does not recognise.
    #[default]
    Unknown,
}

/// Coarse grouping of trip statuses used for badges and filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TripPhase {
    /// Created, awaiting, or pending.
    Preparing,
    /// Loading, in transit, or unloading.
    Moving,
    /// Completed.
    Done,
    /// Cancelled.
    Cancelled,
    /// Unrecognised.
    Other,
}

impl TripStatus {
    /// Decode a wire value.
    pub fn from_wire(value: &str) -> Self {
        let upper = value.trim().to_ascii_uppercase();
        match upper.as_str() {
            "CREATED" => Self::Created,
            "LOADING" => Self::Loading,
            "IN_TRANSIT" => Self::InTransit,
            "UNLOADING" => Self::Unloading,
            "COMPLETED" => Self::Completed,
            "CANCELLED" => Self::Cancelled,
            s if s.starts_with("AWAITING") => Self::Awaiting,
            s if s.starts_with("PENDING") => Self::Pending,
            _ => Self::Unknown,
        }
    }

    /// Canonical spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Awaiting => "AWAITING",
            Self::Pending => "PENDING",
            Self::Loading => "LOADING",
            Self::InTransit => "IN_TRANSIT",
            Self::Unloading => "UNLOADING",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// The phase this status belongs to.
    pub fn phase(&self) -> TripPhase {
        match self {
            Self::Created | Self::Awaiting | Self::Pending => TripPhase::Preparing,
            Self::Loading | Self::InTransit | Self::Unloading => TripPhase::Moving,
            Self::Completed => TripPhase::Done,
            Self::Cancelled => TripPhase::Cancelled,
            Self::Unknown => TripPhase::Other,
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TripStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TripStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::from_wire).unwrap_or_default())
    }
}

/// A trip as listed by `GET /Trip/all`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "TripWire")]
pub struct Trip {
    /// Trip ID.
    pub trip_id: TripId,
    /// Human-readable code.
    pub trip_code: String,
    /// Vehicle owner name.
    pub owner_name: String,
    /// Vehicle owner company.
    pub owner_company: String,
    /// Plate of the assigned vehicle.
    pub vehicle_plate: String,
    /// Model of the assigned vehicle.
    pub vehicle_model: String,
    /// Departure address.
    pub start_address: String,
    /// Destination address.
    pub end_address: String,
    /// Assigned drivers.
    pub driver_names: Vec<String>,
    /// Codes of the packages carried.
    pub package_codes: Vec<String>,
    /// Route summary text.
    pub trip_route_summary: String,
    /// Decoded status.
    pub status: TripStatus,
    /// Status exactly as sent, upper-cased.
    pub status_label: String,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
}

impl Trip {
    /// Up to three package codes, then `(+n)` for the rest.
    pub fn package_summary(&self) -> Option<String> {
        summarize(&self.package_codes)
    }

    /// Driver names joined with commas.
    pub fn driver_summary(&self) -> Option<String> {
        if self.driver_names.is_empty() {
            None
        } else {
            Some(self.driver_names.join(", "))
        }
    }

    /// Case-insensitive free-text match over the visible columns.
    pub fn matches(&self, search: &str) -> bool {
        let needle = search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            &self.trip_code,
            &self.owner_name,
            &self.owner_company,
            &self.vehicle_plate,
            &self.vehicle_model,
            &self.start_address,
            &self.end_address,
            &self.status_label,
        ]
        .into_iter()
        .chain(self.driver_names.iter())
        .chain(self.package_codes.iter())
        .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Compare two trips on a sortable column.
    ///
    /// `createdAt` compares timestamps; other columns compare their text
    /// case-insensitively. Unknown columns compare equal.
    pub fn compare_by(&self, other: &Self, field: &str, direction: SortDirection) -> Ordering {
        let ordering = match field {
            "createdAt" | "createAt" => self.created_at.cmp(&other.created_at),
            _ => match (self.text_column(field), other.text_column(field)) {
                (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
                _ => Ordering::Equal,
            },
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    fn text_column(&self, field: &str) -> Option<&str> {
        Some(match field {
            "tripCode" => self.trip_code.as_str(),
            "ownerName" => self.owner_name.as_str(),
            "ownerCompany" => self.owner_company.as_str(),
            "vehiclePlate" => self.vehicle_plate.as_str(),
            "status" => self.status_label.as_str(),
            _ => return None,
        })
    }
}

fn summarize(codes: &[String]) -> Option<String> {
    if codes.is_empty() {
        return None;
    }
    if codes.len() <= PACKAGE_PREVIEW {
        return Some(codes.join(", "));
    }
    Some(format!(
        "{} (+{})",
        codes[..PACKAGE_PREVIEW].join(", "),
        codes.len() - PACKAGE_PREVIEW
    ))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TripWire {
    #[serde(alias = "TripId")]
    trip_id: TripId,
    #[serde(default, alias = "TripCode")]
    trip_code: Option<String>,
    #[serde(default, alias = "OwnerName")]
    owner_name: Option<String>,
    #[serde(default, alias = "OwnerCompany")]
    owner_company: Option<String>,
    #[serde(default, alias = "VehiclePlate")]
    vehicle_plate: Option<String>,
    #[serde(default, alias = "VehicleModel")]
    vehicle_model: Option<String>,
    #[serde(default, alias = "StartAddress")]
    start_address: Option<String>,
    #[serde(default, alias = "EndAddress")]
    end_address: Option<String>,
    #[serde(default, alias = "DriverNames")]
    driver_names: Option<Vec<String>>,
    #[serde(default, alias = "PackageCodes")]
    package_codes: Option<Vec<String>>,
    #[serde(default, alias = "TripRouteSummary")]
    trip_route_summary: Option<String>,
    #[serde(default, alias = "Status")]
    status: Option<String>,
    #[serde(
        default,
        alias = "createAt",
        alias = "CreateAt",
        alias = "CreatedAt",
        with = "crate::timestamp::option"
    )]
    created_at: Option<DateTime<Utc>>,
}

impl From<TripWire> for Trip {
    fn from(wire: TripWire) -> Self {
        let status_label = wire
            .status
            .as_deref()
            .map(|s| s.trim().to_ascii_uppercase())
            .unwrap_or_default();
        Self {
            trip_id: wire.trip_id,
            trip_code: wire.trip_code.unwrap_or_default(),
            owner_name: wire.owner_name.unwrap_or_default(),
            owner_company: wire.owner_company.unwrap_or_default(),
            vehicle_plate: wire.vehicle_plate.unwrap_or_default(),
            vehicle_model: wire.vehicle_model.unwrap_or_default(),
            start_address: wire.start_address.unwrap_or_default(),
            end_address: wire.end_address.unwrap_or_default(),
            driver_names: wire.driver_names.unwrap_or_default(),
            package_codes: wire.package_codes.unwrap_or_default(),
            trip_route_summary: wire.trip_route_summary.unwrap_or_default(),
            status: TripStatus::from_wire(&status_label),
            status_label,
            created_at: wire.created_at,
        }
    }
}
