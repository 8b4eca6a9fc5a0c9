pub(crate) mod client;
pub(crate) mod error;

pub use client::{ApiClient, LoginResponse, RegisterResponse, VerifyResponse};
pub use error::{ClientError, Result as ClientResult};
