//! The session store: single source of truth for "who is signed in".

use crate::client::ApiClient;
use crate::error::{SessionError, SessionResult};
use crate::gate::{self, GateDecision, RouteRequirement};
use crate::notifier::{LogNotifier, Notice, Notifier};

use campus_config::CredentialStore;
use campus_core::{ApprovalStatus, MIN_PASSWORD_LEN, ProfileUpdate, Registration, Role, User};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, warn};

/// Phrase the user must type before account deletion is forwarded
pub const DELETE_CONFIRMATION_PHRASE: &str = "DELETE";

/// Authentication phase, orthogonal to the operation-loading flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Unauthenticated,
    /// Startup credential check in flight
    Verifying,
    Authenticated,
}

/// Outcome of a successful registration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Auto-approved account: a session was established
    SignedIn,
    /// Account created but awaiting review: no session, no credential
    PendingApproval,
}

/// The session store.
///
/// Created once at application start and passed by handle to every
/// consumer. Each operation performs one network round-trip and updates
/// state atomically on success; on failure the session is left unchanged
/// apart from the emitted notice. Operations take `&mut self`, so a
/// single handle cannot overlap session-mutating calls - the
/// last-response-wins race of ad-hoc shared session state cannot occur
/// here.
///
/// Invariant: the identity is non-null if and only if a credential is
/// held and its last verification (login, auto-approved registration,
/// or startup verify) succeeded.
pub struct Session {
    client: ApiClient,
    store: CredentialStore,
    notifier: Box<dyn Notifier>,
    user: Option<User>,
    verifying: bool,
    loading: bool,
}

impl Session {
    pub fn new(client: ApiClient, store: CredentialStore) -> Self {
        Self {
            client,
            store,
            notifier: Box::new(LogNotifier),
            user: None,
            verifying: false,
            loading: false,
        }
    }

    /// Replace the notice sink (the CLI installs a stderr notifier)
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    // =========================================================================
    // Read-only view
    // =========================================================================

    pub fn phase(&self) -> SessionPhase {
        if self.verifying {
            SessionPhase::Verifying
        } else if self.user.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True while any operation's network round-trip is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Evaluate the role/status gate for a protected screen
    pub fn gate(&self, requirement: &RouteRequirement) -> GateDecision {
        gate::evaluate(self.phase(), self.user(), requirement)
    }

    // =========================================================================
    // Startup
    // =========================================================================

    /// Re-hydrate the session from the persisted credential.
    ///
    /// Fail-closed: every error path (unreadable slot, unreachable
    /// backend, `valid: false`) ends Unauthenticated with the stored
    /// credential removed. Never emits a notice - on failure the user
    /// simply lands on the signed-out view.
    pub async fn bootstrap(&mut self) -> bool {
        let token = match self.store.load() {
            Ok(Some(token)) => token,
            Ok(None) => return false,
            Err(e) => {
                warn!("Unreadable credential store ({e}); clearing");
                self.clear_local_state();
                return false;
            }
        };

        self.client.set_token(&token);
        self.verifying = true;
        let result = self.client.verify().await;
        self.verifying = false;

        match result {
            Ok(response) if response.valid => {
                if let Some(user) = response.user {
                    debug!("Startup verification succeeded for {}", user.username);
                    self.user = Some(user);
                    true
                } else {
                    warn!("Verify response carried no user; treating as signed out");
                    self.clear_local_state();
                    false
                }
            }
            Ok(_) => {
                debug!("Stored credential is no longer valid");
                self.clear_local_state();
                false
            }
            Err(e) => {
                debug!("Startup verification failed ({e}); treating as signed out");
                self.clear_local_state();
                false
            }
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Sign in with a username or email and the role the user claims
    pub async fn login(
        &mut self,
        identifier: &str,
        password: &str,
        role: Role,
    ) -> SessionResult<()> {
        self.loading = true;
        let result = self.login_inner(identifier, password, role).await;
        self.loading = false;

        match &result {
            Ok(()) => {
                let name = self.user.as_ref().map(User::display_name).unwrap_or_default();
                self.notifier.notify(&Notice::info(format!("Signed in as {name}")));
            }
            Err(e) => self.notifier.notify(&Notice::error(e.user_message())),
        }
        result
    }

    async fn login_inner(
        &mut self,
        identifier: &str,
        password: &str,
        role: Role,
    ) -> SessionResult<()> {
        if identifier.trim().is_empty() || password.is_empty() {
            return Err(SessionError::validation("username and password are required"));
        }

        let response = self
            .client
            .login(identifier, password, role)
            .await
            .map_err(|e| SessionError::classify_auth(e, role))?;

        Self::check_usable(&response.user, role)?;
        self.establish(response.token, response.user)
    }

    /// Create an account.
    ///
    /// Local validation runs before any network call. A `pending`
    /// response is a success with no session - the account exists
    /// server-side but the client stays signed out until approval.
    pub async fn register(
        &mut self,
        registration: &Registration,
    ) -> SessionResult<RegistrationOutcome> {
        self.loading = true;
        let result = self.register_inner(registration).await;
        self.loading = false;

        match &result {
            Ok(RegistrationOutcome::SignedIn) => {
                self.notifier
                    .notify(&Notice::info("Account created and signed in"));
            }
            Ok(RegistrationOutcome::PendingApproval) => {
                self.notifier.notify(&Notice::info(
                    "Account created; an administrator will review it shortly",
                ));
            }
            Err(e) => self.notifier.notify(&Notice::error(e.user_message())),
        }
        result
    }

    async fn register_inner(
        &mut self,
        registration: &Registration,
    ) -> SessionResult<RegistrationOutcome> {
        registration.validate()?;

        let response = self
            .client
            .register(registration)
            .await
            .map_err(|e| SessionError::classify_auth(e, registration.role()))?;

        match response.approval_status {
            ApprovalStatus::Pending => Ok(RegistrationOutcome::PendingApproval),
            ApprovalStatus::Rejected => Err(SessionError::RejectedApproval {
                location: ErrorLocation::from(Location::caller()),
            }),
            ApprovalStatus::Approved => {
                let (Some(token), Some(user)) = (response.token, response.user) else {
                    return Err(SessionError::Network {
                        message: "approved registration response missing token or user"
                            .to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    });
                };
                Self::check_usable(&user, registration.role())?;
                self.establish(token, user)?;
                Ok(RegistrationOutcome::SignedIn)
            }
        }
    }

    /// Sign out.
    ///
    /// Best-effort backend notification followed by an unconditional
    /// local clear: a backend failure is logged, never surfaced, and
    /// never leaves local state inconsistent. Idempotent.
    pub async fn logout(&mut self) {
        self.loading = true;
        if self.client.has_token() {
            if let Err(e) = self.client.logout().await {
                warn!("Backend logout failed ({e}); clearing local session anyway");
            }
        }
        self.clear_local_state();
        self.loading = false;
        self.notifier.notify(&Notice::info("Signed out"));
    }

    /// Re-fetch the identity from the backend while signed in.
    ///
    /// A credential that went stale mid-session fails closed exactly
    /// like startup verification.
    pub async fn refresh(&mut self) -> SessionResult<()> {
        if self.user.is_none() {
            return Err(SessionError::NotAuthenticated {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.loading = true;
        let result = self.client.verify().await;
        self.loading = false;

        match result {
            Ok(response) if response.valid => {
                if let Some(fresh) = response.user {
                    self.adopt_refreshed(fresh);
                    Ok(())
                } else {
                    self.clear_local_state();
                    Err(SessionError::NotAuthenticated {
                        location: ErrorLocation::from(Location::caller()),
                    })
                }
            }
            Ok(_) => {
                self.clear_local_state();
                Err(SessionError::NotAuthenticated {
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => {
                let err = SessionError::classify(e);
                if matches!(err, SessionError::NotAuthenticated { .. }) {
                    self.clear_local_state();
                }
                Err(err)
            }
        }
    }

    /// Adopt a refreshed identity, warning when the server's answer
    /// breaks a documented invariant. The server stays authoritative.
    fn adopt_refreshed(&mut self, fresh: User) {
        if let Some(current) = &self.user {
            if current.role != fresh.role {
                warn!(
                    "Account role changed from {} to {} mid-session",
                    current.role, fresh.role
                );
            }
            if !current.approval_status.can_transition_to(fresh.approval_status) {
                warn!(
                    "Approval status moved backward: {} -> {}",
                    current.approval_status, fresh.approval_status
                );
            }
        }
        self.user = Some(fresh);
    }

    /// Update profile fields.
    ///
    /// On success the submitted fields are merged into the in-memory
    /// identity without a re-fetch; the derived display name follows.
    pub async fn update_profile(&mut self, update: &ProfileUpdate) -> SessionResult<()> {
        self.loading = true;
        let result = self.update_profile_inner(update).await;
        self.loading = false;

        match &result {
            Ok(()) => self.notifier.notify(&Notice::info("Profile updated")),
            Err(e) => self.notifier.notify(&Notice::error(e.user_message())),
        }
        result
    }

    async fn update_profile_inner(&mut self, update: &ProfileUpdate) -> SessionResult<()> {
        if self.user.is_none() {
            return Err(SessionError::NotAuthenticated {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if update.is_empty() {
            return Err(SessionError::validation("nothing to update"));
        }

        self.client
            .update_profile(update)
            .await
            .map_err(SessionError::classify)?;

        if let Some(user) = self.user.as_mut() {
            user.apply_update(update);
        }
        Ok(())
    }

    /// Change the account password. The held credential stays valid.
    pub async fn change_password(
        &mut self,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> SessionResult<()> {
        self.loading = true;
        let result = self.change_password_inner(current, new, confirm).await;
        self.loading = false;

        match &result {
            Ok(()) => self.notifier.notify(&Notice::info("Password changed")),
            Err(e) => self.notifier.notify(&Notice::error(e.user_message())),
        }
        result
    }

    async fn change_password_inner(
        &mut self,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> SessionResult<()> {
        if self.user.is_none() {
            return Err(SessionError::NotAuthenticated {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if current.is_empty() {
            return Err(SessionError::validation("current password is required"));
        }
        if new.len() < MIN_PASSWORD_LEN {
            return Err(SessionError::validation(format!(
                "new password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if new != confirm {
            return Err(SessionError::validation("new passwords do not match"));
        }

        self.client
            .change_password(current, new, confirm)
            .await
            .map_err(SessionError::classify)?;
        Ok(())
    }

    /// Permanently delete the account.
    ///
    /// The exact confirmation phrase is required locally before the
    /// round-trip and forwarded for the backend's own check. Success
    /// performs the same unconditional clear as [`Session::logout`].
    pub async fn delete_account(&mut self, confirmation: &str) -> SessionResult<()> {
        self.loading = true;
        let result = self.delete_account_inner(confirmation).await;
        self.loading = false;

        match &result {
            Ok(()) => self.notifier.notify(&Notice::info("Account deleted")),
            Err(e) => self.notifier.notify(&Notice::error(e.user_message())),
        }
        result
    }

    async fn delete_account_inner(&mut self, confirmation: &str) -> SessionResult<()> {
        if self.user.is_none() {
            return Err(SessionError::NotAuthenticated {
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if confirmation != DELETE_CONFIRMATION_PHRASE {
            return Err(SessionError::validation(format!(
                "type {DELETE_CONFIRMATION_PHRASE} to confirm account deletion"
            )));
        }

        self.client
            .delete_account(confirmation)
            .await
            .map_err(SessionError::classify)?;

        self.clear_local_state();
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Refuse to establish a session from a response that violates the
    /// session invariant, even when the backend accepted the request.
    #[track_caller]
    fn check_usable(user: &User, claimed_role: Role) -> SessionResult<()> {
        if user.role != claimed_role {
            return Err(SessionError::RoleMismatch {
                role: claimed_role,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        match user.approval_status {
            ApprovalStatus::Approved => Ok(()),
            ApprovalStatus::Pending => Err(SessionError::PendingApproval {
                location: ErrorLocation::from(Location::caller()),
            }),
            ApprovalStatus::Rejected => Err(SessionError::RejectedApproval {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Persist the credential, then adopt the identity. Ordering
    /// matters: if the write fails there is no session.
    fn establish(&mut self, token: String, user: User) -> SessionResult<()> {
        self.store.save(&token)?;
        self.client.set_token(&token);
        self.user = Some(user);
        Ok(())
    }

    /// Drop the identity, the held token, and the persisted credential.
    /// A storage failure is logged; memory is cleared regardless.
    fn clear_local_state(&mut self) {
        self.user = None;
        self.client.clear_token();
        if let Err(e) = self.store.clear() {
            warn!("Failed to remove stored credential: {e}");
        }
    }
}
