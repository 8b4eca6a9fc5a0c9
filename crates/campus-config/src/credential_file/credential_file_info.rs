//! On-disk shape of the credential slot.
//!
//! File location: `<config_dir>/credentials.json`
//!
//! Exactly one credential is persisted at a time; the session layer
//! overwrites or removes the whole file, never edits it in place. The
//! identity is never written here - it is re-derived from
//! `GET /auth/verify` at startup.

use serde::{Deserialize, Serialize};

/// Information stored in the credential slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialFileInfo {
    /// Opaque bearer token issued by the backend
    pub token: String,
    /// ISO 8601 timestamp when the token was stored
    pub saved_at: String,
    /// Client version for diagnostics (useful when sharing the file for troubleshooting)
    pub version: String,
}

impl CredentialFileInfo {
    pub(crate) fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            saved_at: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
