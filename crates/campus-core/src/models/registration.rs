//! Registration payload for `POST /auth/register`.

use crate::{CoreError, CoreResult, MIN_PASSWORD_LEN, Role};

use serde::{Deserialize, Serialize};

/// Role-specific registration fields.
///
/// Tagged by `user_type`, so a payload carrying student fields for a
/// teacher account (or vice versa) is unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "user_type", rename_all = "snake_case")]
pub enum RoleDetails {
    Student {
        student_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        gpa: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        grade_level: Option<String>,
    },
    Teacher {
        employee_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        department: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        experience_years: Option<u32>,
    },
    /// Admin accounts are provisioned with base fields only
    Admin,
}

impl RoleDetails {
    pub fn role(&self) -> Role {
        match self {
            Self::Student { .. } => Role::Student,
            Self::Teacher { .. } => Role::Teacher,
            Self::Admin => Role::Admin,
        }
    }
}

/// Complete registration request: base fields plus the role variant,
/// flattened so the wire shape is one object keyed by `user_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(flatten)]
    pub details: RoleDetails,
}

impl Registration {
    pub fn role(&self) -> Role {
        self.details.role()
    }

    /// Client-side validation, run before any network call.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if self.username.trim().is_empty() {
            return Err(CoreError::validation("username is required"));
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(CoreError::validation("a valid email address is required"));
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(CoreError::validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(CoreError::validation("first and last name are required"));
        }
        match &self.details {
            RoleDetails::Student { student_id, .. } if student_id.trim().is_empty() => {
                Err(CoreError::validation("student_id is required"))
            }
            RoleDetails::Teacher { employee_id, .. } if employee_id.trim().is_empty() => {
                Err(CoreError::validation("employee_id is required"))
            }
            _ => Ok(()),
        }
    }
}
