//! User account status enumeration.

wire_enum! {
    /// Account status for a user.
    UserStatus {
        /// Account can sign in.
        Active => "ACTIVE",
        /// Account deactivated.
        Inactive => "INACTIVE",
        /// Account banned by staff.
        Banned => "BANNED",
    }
}

impl UserStatus {
    /// Check if the account is usable.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}
