use crate::client::{ClientError, ClientResult};

use campus_core::{ApprovalStatus, ProfileUpdate, Registration, Role, User};

use std::time::Duration;

use reqwest::{Client as ReqwestClient, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// HTTP client for the campus backend auth/profile REST API
pub struct ApiClient {
    pub base_url: String,
    token: Option<String>,
    timeout: Duration,
    client: ReqwestClient,
}

/// Successful `POST /auth/login` payload
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// `POST /auth/register` outcome.
///
/// `token`/`user` are present only when the account was auto-approved.
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub approval_status: ApprovalStatus,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// `GET /auth/verify` payload
#[derive(Debug, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(default)]
    pub user: Option<User>,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://127.0.0.1:8000")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            timeout,
            client: ReqwestClient::new(),
        }
    }

    /// Replace the bearer credential applied to subsequent requests
    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    /// Drop the bearer credential
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Build a request with the bearer header when a token is held
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url).timeout(self.timeout);

        if let Some(ref token) = self.token {
            req = req.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"));
        }

        req
    }

    /// Execute a request, surfacing non-2xx responses as [`ClientError::Api`]
    /// with the message extracted from the body.
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::api(
                status.as_u16(),
                extract_error_message(&text),
            ));
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(ClientError::from_json)
    }

    fn decode<T: DeserializeOwned>(value: Value) -> ClientResult<T> {
        serde_json::from_value(value).map_err(ClientError::from_json)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Sign in with a username or email and a claimed role
    pub async fn login(
        &self,
        identifier: &str,
        password: &str,
        role: Role,
    ) -> ClientResult<LoginResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            identifier: &'a str,
            password: &'a str,
            user_type: Role,
        }

        let body = LoginRequest {
            identifier,
            password,
            user_type: role,
        };
        let req = self.request(Method::POST, "/auth/login").json(&body);
        let value = self.execute(req).await?;
        Self::decode(value)
    }

    /// Create an account
    pub async fn register(&self, registration: &Registration) -> ClientResult<RegisterResponse> {
        let req = self.request(Method::POST, "/auth/register").json(registration);
        let value = self.execute(req).await?;
        Self::decode(value)
    }

    /// Invalidate the session server-side (best-effort, callers may ignore failures)
    pub async fn logout(&self) -> ClientResult<()> {
        let req = self.request(Method::POST, "/auth/logout");
        self.execute(req).await.map(|_| ())
    }

    /// Check whether the held credential is still valid
    pub async fn verify(&self) -> ClientResult<VerifyResponse> {
        let req = self.request(Method::GET, "/auth/verify");
        let value = self.execute(req).await?;
        Self::decode(value)
    }

    // =========================================================================
    // Profile Operations
    // =========================================================================

    /// Update profile fields; absent fields are left unchanged server-side
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<Value> {
        let req = self.request(Method::PUT, "/profile").json(update);
        self.execute(req).await
    }

    /// Change the account password. The bearer credential stays valid.
    pub async fn change_password(
        &self,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> ClientResult<()> {
        #[derive(Serialize)]
        struct ChangePasswordRequest<'a> {
            current_password: &'a str,
            new_password: &'a str,
            confirm_password: &'a str,
        }

        let body = ChangePasswordRequest {
            current_password: current,
            new_password: new,
            confirm_password: confirm,
        };
        let req = self
            .request(Method::POST, "/profile/change-password")
            .json(&body);
        self.execute(req).await.map(|_| ())
    }

    // =========================================================================
    // Account Operations
    // =========================================================================

    /// Permanently delete the account
    pub async fn delete_account(&self, confirmation: &str) -> ClientResult<()> {
        #[derive(Serialize)]
        struct DeleteAccountRequest<'a> {
            confirmation: &'a str,
        }

        let body = DeleteAccountRequest { confirmation };
        let req = self.request(Method::POST, "/account/delete").json(&body);
        self.execute(req).await.map(|_| ())
    }
}

/// Pull a human-readable message out of an error body.
///
/// Backends respond with `{"message": ...}`, `{"error": "..."}`,
/// `{"error": {"message": ...}}` or `{"detail": ...}`; anything else
/// falls back to the raw body.
pub(crate) fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
        if let Some(error) = value.get("error") {
            if let Some(message) = error.as_str() {
                return message.to_string();
            }
            if let Some(message) = error.get("message").and_then(Value::as_str) {
                return message.to_string();
            }
        }
        if let Some(detail) = value.get("detail").and_then(Value::as_str) {
            return detail.to_string();
        }
    }
    body.to_string()
}
