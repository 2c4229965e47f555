//! Newtype wrappers around [`uuid::Uuid`] for every backend resource key.
//!
//! Using distinct types prevents accidentally passing a `TripId` where a
//! `VehicleId` is expected when building request paths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype ID wrapper around `Uuid`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Return the inner UUID value.
            pub fn into_uuid(self) -> Uuid {
                self.0
            }

            /// Return a reference to the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user account.
    UserId
);

define_id!(
    /// Unique identifier for an item.
    ItemId
);

define_id!(
    /// Unique identifier for a package.
    PackageId
);

define_id!(
    /// Unique identifier for a vehicle.
    VehicleId
);

define_id!(
    /// Unique identifier for a trip.
    TripId
);

define_id!(
    /// Unique identifier for a wallet transaction.
    TransactionId
);

define_id!(
    /// Unique identifier for a contract template.
    ContractTemplateId
);

define_id!(
    /// Unique identifier for a contract term.
    ContractTermId
);

define_id!(
    /// Unique identifier for a delivery-record template.
    DeliveryRecordTemplateId
);

define_id!(
    /// Unique identifier for a delivery-record term.
    DeliveryRecordTermId
);

define_id!(
    /// Unique identifier for a user or vehicle verification document.
    DocumentId
);

define_id!(
    /// Unique identifier for a wallet.
    WalletId
);

define_id!(
    /// Unique identifier for a package shipping post.
    PostPackageId
);

define_id!(
    /// Unique identifier for a trip crew post.
    PostTripId
);

define_id!(
    /// Unique identifier for one crew slot of a trip post.
    PostTripDetailId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_new() {
        let id1 = UserId::new();
        let id2 = UserId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_user_id_display() {
        let uuid = Uuid::new_v4();
        let id = UserId::from_uuid(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn test_user_id_from_str() {
        let uuid = Uuid::new_v4();
        let id: UserId = uuid.to_string().parse().expect("should parse");
        assert_eq!(id.0, uuid);
    }

    #[test]
    fn test_decodes_bare_guid_string() {
        let parsed: ContractTermId =
            serde_json::from_str("\"7d3f0c7e-6f1b-4a53-9a51-3c0f6b4f1d20\"").expect("deserialize");
        assert_eq!(parsed.to_string(), "7d3f0c7e-6f1b-4a53-9a51-3c0f6b4f1d20");
    }

    #[test]
    fn test_rejects_non_guid() {
        assert!(serde_json::from_str::<TripId>("\"TRIP-0001\"").is_err());
    }
}
