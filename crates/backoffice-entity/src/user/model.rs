//! User account record.

use backoffice_core::types::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::role::{RoleField, UserRole};
use super::status::UserStatus;

/// A user account as listed and shown by the console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "UserWire")]
pub struct User {
    /// Account ID.
    pub user_id: UserId,
    /// Full name.
    pub full_name: String,
    /// Email.
    pub email: Option<String>,
    /// Phone number.
    pub phone_number: Option<String>,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Role.
    pub role: UserRole,
    /// Account status.
    pub status: UserStatus,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Postal address.
    pub address: Option<String>,
    /// Whether the email address is verified.
    pub is_email_verified: bool,
    /// Whether the phone number is verified.
    pub is_phone_verified: bool,
    /// Whether a document request is waiting for review.
    pub has_pending_document_request: bool,
    /// Driving licence number (drivers).
    pub license_number: Option<String>,
    /// Driving licence class (drivers).
    pub license_class: Option<String>,
    /// Company name (owners, providers).
    pub company_name: Option<String>,
    /// Tax code (owners, providers).
    pub tax_code: Option<String>,
    /// Registration time.
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Initials for avatar placeholders.
    pub fn initials(&self) -> String {
        let initials: String = self
            .full_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

/// User record as the backend sends it. The role arrives as `roleName`, a
/// bare `role` string, or a `role` object.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserWire {
    #[serde(alias = "UserId")]
    user_id: UserId,
    #[serde(default, alias = "FullName")]
    full_name: Option<String>,
    #[serde(default, alias = "Email")]
    email: Option<String>,
    #[serde(default, alias = "PhoneNumber")]
    phone_number: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
    #[serde(default)]
    role_name: Option<String>,
    #[serde(default, alias = "Role")]
    role: Option<RoleField>,
    #[serde(default, alias = "Status")]
    status: UserStatus,
    #[serde(default, with = "crate::timestamp::date_option")]
    date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    is_email_verified: bool,
    #[serde(default)]
    is_phone_verified: bool,
    #[serde(default)]
    has_pending_document_request: bool,
    #[serde(default)]
    license_number: Option<String>,
    #[serde(default)]
    license_class: Option<String>,
    #[serde(default)]
    company_name: Option<String>,
    #[serde(default)]
    tax_code: Option<String>,
    #[serde(default, with = "crate::timestamp::option")]
    created_at: Option<DateTime<Utc>>,
}

impl From<UserWire> for User {
    fn from(wire: UserWire) -> Self {
        let role = match (wire.role_name, wire.role) {
            (Some(name), _) if !name.trim().is_empty() => UserRole::from_wire(&name),
            (_, Some(field)) => field.into_role(),
            _ => UserRole::Unknown,
        };

        Self {
            user_id: wire.user_id,
            full_name: wire.full_name.unwrap_or_default(),
            email: wire.email,
            phone_number: wire.phone_number,
            avatar_url: wire.avatar_url,
            role,
            status: wire.status,
            date_of_birth: wire.date_of_birth,
            address: wire.address,
            is_email_verified: wire.is_email_verified,
            is_phone_verified: wire.is_phone_verified,
            has_pending_document_request: wire.has_pending_document_request,
            license_number: wire.license_number,
            license_class: wire.license_class,
            company_name: wire.company_name,
            tax_code: wire.tax_code,
            created_at: wire.created_at,
        }
    }
}

/// An entry of the role picker (`GET /Admin/roles`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleOption {
    /// Backend role key.
    #[serde(default)]
    pub role_id: Option<serde_json::Value>,
    /// Role name.
    pub role_name: UserRole,
}
