use crate::client::ClientError;

use campus_config::ConfigError;
use campus_core::{CoreError, Role};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Classified operation failures surfaced to the user.
///
/// Login failures are classified from the backend's status and message
/// so the UI shows a recognizable notice instead of a raw server
/// string; unrecognized server errors keep the raw message.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid username or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Account is not registered as a {role} {location}")]
    RoleMismatch {
        role: Role,
        location: ErrorLocation,
    },

    #[error("Account is awaiting approval {location}")]
    PendingApproval { location: ErrorLocation },

    #[error("Account registration was rejected {location}")]
    RejectedApproval { location: ErrorLocation },

    #[error("Not signed in {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server error ({status}): {message} {location}")]
    Server {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential storage error: {source} {location}")]
    Storage {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },
}

impl SessionError {
    /// Stable machine code, mirrored in CLI error output
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::RoleMismatch { .. } => "ROLE_MISMATCH",
            Self::PendingApproval { .. } => "PENDING_APPROVAL",
            Self::RejectedApproval { .. } => "REJECTED_APPROVAL",
            Self::NotAuthenticated { .. } => "NOT_AUTHENTICATED",
            Self::Network { .. } => "NETWORK_ERROR",
            Self::Server { .. } => "SERVER_ERROR",
            Self::Storage { .. } => "STORAGE_ERROR",
        }
    }

    /// One-line message for user notifications
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::InvalidCredentials { .. } => "Invalid username or password".to_string(),
            Self::RoleMismatch { role, .. } => {
                format!("This account is not registered as a {role}")
            }
            Self::PendingApproval { .. } => {
                "Your account is awaiting review by an administrator".to_string()
            }
            Self::RejectedApproval { .. } => {
                "Your account registration was rejected".to_string()
            }
            Self::NotAuthenticated { .. } => "You are not signed in".to_string(),
            Self::Network { .. } => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            Self::Server { message, .. } => message.clone(),
            Self::Storage { .. } => "Could not update stored credentials".to_string(),
        }
    }

    /// Create a validation error
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        SessionError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Classify a transport/API failure from the login or register flow.
    ///
    /// Backend failure messages carry a recognizable substring for the
    /// approval and role cases; everything else falls through to
    /// credentials (401) or a raw server error.
    #[track_caller]
    pub(crate) fn classify_auth(err: ClientError, claimed_role: Role) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            ClientError::Http { message, .. } => Self::Network { message, location },
            ClientError::Json { message, .. } => Self::Network {
                message: format!("invalid server response: {message}"),
                location,
            },
            ClientError::Api {
                status, message, ..
            } => {
                let lower = message.to_lowercase();
                if lower.contains("pending approval") || lower.contains("awaiting approval") {
                    Self::PendingApproval { location }
                } else if lower.contains("rejected") {
                    Self::RejectedApproval { location }
                } else if lower.contains("not registered as a") {
                    Self::RoleMismatch {
                        role: claimed_role,
                        location,
                    }
                } else if status == 401 || lower.contains("invalid credentials") {
                    Self::InvalidCredentials { location }
                } else {
                    Self::Server {
                        status,
                        message,
                        location,
                    }
                }
            }
        }
    }

    /// Classify failures from authenticated operations (no role context).
    /// A 401 means the credential went stale mid-session.
    #[track_caller]
    pub(crate) fn classify(err: ClientError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            ClientError::Http { message, .. } => Self::Network { message, location },
            ClientError::Json { message, .. } => Self::Network {
                message: format!("invalid server response: {message}"),
                location,
            },
            ClientError::Api { status: 401, .. } => Self::NotAuthenticated { location },
            ClientError::Api {
                status, message, ..
            } => Self::Server {
                status,
                message,
                location,
            },
        }
    }
}

impl From<CoreError> for SessionError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let message = match err {
            CoreError::Validation { message, .. } => message,
            other => other.to_string(),
        };
        SessionError::Validation {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for SessionError {
    #[track_caller]
    fn from(err: ConfigError) -> Self {
        SessionError::Storage {
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;
