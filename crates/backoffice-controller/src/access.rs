//! Console areas and the roles allowed into them.
//!
//! This only decides which areas the console offers. The backend checks
//! every request on its own.

use std::fmt;

use backoffice_core::{AppError, AppResult};
use backoffice_entity::user::UserRole;
use tracing::debug;

/// A console area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    /// Admin dashboard.
    Dashboard,
    /// Account administration.
    Users,
    /// Wallet transactions.
    Transactions,
    /// Contract and delivery-record templates.
    Templates,
    /// Items.
    Items,
    /// Packages.
    Packages,
    /// Vehicles.
    Vehicles,
    /// Trips.
    Trips,
    /// Package and trip posts.
    Posts,
    /// Document verification.
    DocumentReview,
}

impl Area {
    /// Roles allowed into this area.
    pub fn allowed_roles(&self) -> &'static [UserRole] {
        match self {
            Self::Dashboard | Self::Users | Self::Transactions => &[UserRole::Admin],
            Self::Templates
            | Self::Items
            | Self::Packages
            | Self::Vehicles
            | Self::Trips
            | Self::Posts
            | Self::DocumentReview => &[UserRole::Staff],
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dashboard => "dashboard",
            Self::Users => "user administration",
            Self::Transactions => "transactions",
            Self::Templates => "templates",
            Self::Items => "items",
            Self::Packages => "packages",
            Self::Vehicles => "vehicles",
            Self::Trips => "trips",
            Self::Posts => "posts",
            Self::DocumentReview => "document review",
        };
        f.write_str(name)
    }
}

/// Checks the locally held role claim before a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGuard {
    role: Option<UserRole>,
}

impl RoleGuard {
    /// A guard for the given role claim.
    pub fn new(role: Option<UserRole>) -> Self {
        Self { role }
    }

    /// A guard from a configured role name. Unrecognised names count as
    /// no claim.
    pub fn from_claim(claim: Option<&str>) -> Self {
        Self::new(
            claim
                .map(UserRole::from_wire)
                .filter(UserRole::is_known),
        )
    }

    /// The role claim.
    pub fn role(&self) -> Option<UserRole> {
        self.role
    }

    /// Whether `area` is open to the claim.
    pub fn allows(&self, area: Area) -> bool {
        self.role
            .is_some_and(|role| area.allowed_roles().contains(&role))
    }

    /// Refuse unless `area` is open to the claim.
    pub fn require(&self, area: Area) -> AppResult<()> {
        let Some(role) = self.role else {
            return Err(AppError::authentication("No role claim is configured; sign in first"));
        };
        if area.allowed_roles().contains(&role) {
            return Ok(());
        }
        debug!(%role, %area, "Area refused");
        Err(AppError::authorization(format!(
            "Role '{role}' cannot open {area}"
        )))
    }
}
