//! Credential configuration.

use serde::{Deserialize, Serialize};

/// Bearer credential and locally held role claim.
///
/// The role claim only gates which console areas are offered; the backend
/// enforces authorization on its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Bearer token attached to every request.
    #[serde(default)]
    pub token: Option<String>,
    /// Role name of the signed-in account (`Admin`, `Staff`, ...).
    #[serde(default)]
    pub role: Option<String>,
}
