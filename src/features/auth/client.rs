//! Session API seam and its HTTP implementation. Flows depend on the
//! `SessionApi` trait so the decision logic can run against an in-memory
//! backend; the browser build talks to the real endpoints. Every call here is
//! credentialed because the backend answers with `Set-Cookie`.

use super::token::SessionToken;
use super::types::{Identity, LoginRequest, SignupRequest};
use crate::app_lib::AppError;

pub const ME_PATH: &str = "/api/auth/me";
pub const EXCHANGE_PATH: &str = "/api/auth/google/session";
pub const LOGIN_PATH: &str = "/api/auth/login";
pub const SIGNUP_PATH: &str = "/api/auth/signup";
pub const LOGOUT_PATH: &str = "/api/auth/logout";

/// Backend session operations.
pub trait SessionApi {
    /// Who am I, according to the ambient session cookie.
    async fn fetch_identity(&self) -> Result<Identity, AppError>;

    /// Redeems an external login token for a session cookie.
    async fn exchange_token(&self, token: &SessionToken) -> Result<Identity, AppError>;

    async fn login(&self, request: &LoginRequest) -> Result<Identity, AppError>;

    async fn signup(&self, request: &SignupRequest) -> Result<Identity, AppError>;

    /// Invalidates the session cookie on the server.
    async fn logout(&self) -> Result<(), AppError>;
}

#[cfg(target_arch = "wasm32")]
pub use http::HttpSessionApi;

#[cfg(target_arch = "wasm32")]
mod http {
    use super::*;
    use crate::app_lib::{
        get_json_with_credentials, post_empty_with_credentials, post_json_with_credentials,
    };
    use crate::features::auth::types::{SessionEnvelope, SessionExchangeRequest};

    #[derive(Clone, Copy, Debug, Default)]
    pub struct HttpSessionApi;

    impl SessionApi for HttpSessionApi {
        async fn fetch_identity(&self) -> Result<Identity, AppError> {
            get_json_with_credentials(ME_PATH).await
        }

        async fn exchange_token(&self, token: &SessionToken) -> Result<Identity, AppError> {
            let request = SessionExchangeRequest::new(token);
            let envelope: SessionEnvelope =
                post_json_with_credentials(EXCHANGE_PATH, &request).await?;
            Ok(envelope.user)
        }

        async fn login(&self, request: &LoginRequest) -> Result<Identity, AppError> {
            let envelope: SessionEnvelope = post_json_with_credentials(LOGIN_PATH, request).await?;
            Ok(envelope.user)
        }

        async fn signup(&self, request: &SignupRequest) -> Result<Identity, AppError> {
            let envelope: SessionEnvelope =
                post_json_with_credentials(SIGNUP_PATH, request).await?;
            Ok(envelope.user)
        }

        async fn logout(&self) -> Result<(), AppError> {
            post_empty_with_credentials(LOGOUT_PATH).await
        }
    }
}
