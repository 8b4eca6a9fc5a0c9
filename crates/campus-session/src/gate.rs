//! The role/status gate consulted by every protected screen.

use crate::session::SessionPhase;

use campus_core::{Role, User};

/// Declared access requirement of a protected screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequirement {
    pub role: Role,
    pub require_approved: bool,
}

impl RouteRequirement {
    /// Require a role, accepting any approval status
    pub fn role(role: Role) -> Self {
        Self {
            role,
            require_approved: false,
        }
    }

    /// Require a role with a reviewed-and-approved account
    pub fn approved_role(role: Role) -> Self {
        Self {
            role,
            require_approved: true,
        }
    }
}

/// Where a protected screen should send the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Startup verification still in flight; show a placeholder
    Loading,
    RedirectToLogin,
    RedirectToUnauthorized,
    /// Account exists but is awaiting review - deliberately distinct
    /// from unauthorized so the screen can explain the wait
    RedirectToPendingApproval,
    Render,
}

/// Decide whether a protected screen renders.
///
/// Rules are evaluated in order. This is the only place access checks
/// live; screens must not re-implement any subset of them.
pub fn evaluate(
    phase: SessionPhase,
    user: Option<&User>,
    requirement: &RouteRequirement,
) -> GateDecision {
    if phase == SessionPhase::Verifying {
        return GateDecision::Loading;
    }

    let Some(user) = user else {
        return GateDecision::RedirectToLogin;
    };

    if user.role != requirement.role {
        return GateDecision::RedirectToUnauthorized;
    }

    if requirement.require_approved && !user.is_approved() {
        return GateDecision::RedirectToPendingApproval;
    }

    GateDecision::Render
}
