//! User entity - the authenticated principal returned by the backend.

use crate::{ApprovalStatus, ProfileUpdate, Role, StudentProfile, TeacherProfile};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authenticated principal.
///
/// The role is immutable once the account exists; the approval status
/// only moves forward (see [`ApprovalStatus::can_transition_to`]). The
/// client never caches this struct across restarts - it is re-derived
/// from `/auth/verify` at every startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "user_type")]
    pub role: Role,
    #[serde(default)]
    pub approval_status: ApprovalStatus,
    #[serde(default)]
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_profile: Option<StudentProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_profile: Option<TeacherProfile>,
}

impl User {
    /// Human-facing name, derived on demand and never stored.
    /// Falls back to the username when both name fields are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    /// Check if the account passed administrator review
    pub fn is_approved(&self) -> bool {
        self.approval_status == ApprovalStatus::Approved
    }

    /// Merge a partial profile update into this identity.
    /// Only fields present in the update are touched.
    pub fn apply_update(&mut self, update: &ProfileUpdate) {
        if let Some(first_name) = &update.first_name {
            self.first_name = first_name.clone();
        }
        if let Some(last_name) = &update.last_name {
            self.last_name = last_name.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
    }
}
