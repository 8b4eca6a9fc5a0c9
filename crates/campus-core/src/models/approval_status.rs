use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Account review lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    /// Awaiting administrator review
    #[default]
    Pending,
    /// Reviewed and usable
    Approved,
    /// Reviewed and refused (terminal)
    Rejected,
}

impl ApprovalStatus {
    /// Convert to the wire/database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Review decisions move forward only: a pending account can be
    /// approved or rejected, and neither decision can be undone.
    /// Staying on the same status is always legal.
    pub fn can_transition_to(&self, next: ApprovalStatus) -> bool {
        *self == next
            || matches!(
                (self, next),
                (Self::Pending, Self::Approved) | (Self::Pending, Self::Rejected)
            )
    }
}

impl FromStr for ApprovalStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(CoreError::InvalidApprovalStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
