//! Request and response types for the session API. Login and exchange payloads
//! carry passwords or login tokens, so they do not implement `Debug` and must
//! never be logged.

use super::token::SessionToken;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
/// Identity returned by the backend for the current session cookie.
/// A transient read-only copy; the backend stays the source of truth.
pub struct Identity {
    #[serde(alias = "id")]
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
}

impl Identity {
    /// First word of the display name, used for the dashboard greeting.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    /// Uppercased first letter of the name for the avatar fallback.
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map(|letter| letter.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

#[derive(Clone, Debug, Deserialize)]
/// Body of login, signup and exchange responses. The backend also echoes the
/// raw session token; it is deliberately not deserialized.
pub struct SessionEnvelope {
    pub user: Identity,
}

#[derive(Serialize)]
pub struct SessionExchangeRequest<'a> {
    session_id: &'a str,
}

impl<'a> SessionExchangeRequest<'a> {
    pub fn new(token: &'a SessionToken) -> Self {
        Self {
            session_id: token.expose(),
        }
    }
}

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}
