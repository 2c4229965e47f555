//! User role enumeration.

use serde::{Deserialize, Deserializer};

wire_enum! {
    /// Roles known to the platform.
    UserRole {
        /// Platform administrator.
        Admin => "Admin",
        /// Back-office staff.
        Staff => "Staff",
        /// Drives vehicles on trips.
        Driver => "Driver",
        /// Owns vehicles.
        Owner => "Owner",
        /// Provides packages for transport.
        Provider => "Provider",
    }
}

impl UserRole {
    /// Roles whose accounts must carry a date of birth and be adults.
    pub fn requires_date_of_birth(&self) -> bool {
        matches!(self, Self::Driver | Self::Owner | Self::Provider)
    }

    /// Roles an admin may create accounts for.
    pub fn is_assignable(&self) -> bool {
        self.is_known() && !matches!(self, Self::Admin)
    }
}

/// The role as it appears on user records: a bare name or an object with
/// a `roleName`.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RoleField {
    Name(String),
    Object {
        #[serde(rename = "roleName", alias = "RoleName", alias = "name")]
        role_name: String,
    },
}

impl RoleField {
    pub(crate) fn into_role(self) -> UserRole {
        match self {
            Self::Name(name) | Self::Object { role_name: name } => UserRole::from_wire(&name),
        }
    }
}

/// Decode a role given as either spelling.
pub fn deserialize_flexible<'de, D: Deserializer<'de>>(deserializer: D) -> Result<UserRole, D::Error> {
    Ok(Option::<RoleField>::deserialize(deserializer)?
        .map(RoleField::into_role)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("driver".parse::<UserRole>().unwrap(), UserRole::Driver);
        assert_eq!("STAFF".parse::<UserRole>().unwrap(), UserRole::Staff);
        assert!("courier".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_unknown_fallback_on_decode() {
        let role: UserRole = serde_json::from_str("\"Courier\"").unwrap();
        assert_eq!(role, UserRole::Unknown);
        assert!(!role.is_known());
    }

    #[test]
    fn test_date_of_birth_roles() {
        assert!(UserRole::Driver.requires_date_of_birth());
        assert!(UserRole::Provider.requires_date_of_birth());
        assert!(!UserRole::Staff.requires_date_of_birth());
        assert!(!UserRole::Admin.is_assignable());
        assert!(!UserRole::Unknown.is_assignable());
    }
}
