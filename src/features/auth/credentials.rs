//! Email/password sign-in and sign-up. Failures stay on the form as a notice;
//! success carries the returned identity to the dashboard the same way the
//! external login does.

use super::client::SessionApi;
use super::navigation::Transition;
use super::types::{LoginRequest, SignupRequest};
use crate::app_lib::AppError;
use crate::features::notice::Notice;
use crate::routes::paths;
use tracing::{info, warn};

pub const GENERIC_AUTH_FAILURE: &str = "Authentication failed";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Signup => "Create Account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Signup => "Create Account",
        }
    }

    pub fn toggle_prompt(self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account? Sign up",
            AuthMode::Signup => "Already have an account? Sign in",
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome back!",
            AuthMode::Signup => "Account created successfully!",
        }
    }
}

/// Raw form input. Holds a password, so it is not `Debug`.
#[derive(Clone)]
pub struct CredentialsInput {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub name: String,
}

impl CredentialsInput {
    /// Client-side checks; the backend still validates everything.
    ///
    /// # Errors
    ///
    /// Returns the message to show next to the form.
    pub fn validate(&self) -> Result<(), String> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err("Email and password are required.".to_string());
        }
        if !email.contains('@') {
            return Err("Email address looks invalid.".to_string());
        }
        if self.mode == AuthMode::Signup && self.name.trim().is_empty() {
            return Err("Name is required to create an account.".to_string());
        }
        Ok(())
    }
}

/// Detail text from the backend when it sent one, the generic message otherwise.
pub fn form_error_message(err: &AppError) -> String {
    err.detail().unwrap_or_else(|| GENERIC_AUTH_FAILURE.to_string())
}

/// Validates and submits the form.
///
/// # Errors
///
/// Returns the notice to show when validation or the backend rejects the input.
pub async fn submit_credentials<A: SessionApi>(
    api: &A,
    input: CredentialsInput,
) -> Result<Transition, Notice> {
    input.validate().map_err(Notice::error)?;

    let email = input.email.trim().to_string();
    let result = match input.mode {
        AuthMode::Login => {
            api.login(&LoginRequest {
                email,
                password: input.password,
            })
            .await
        }
        AuthMode::Signup => {
            api.signup(&SignupRequest {
                email,
                password: input.password,
                name: input.name.trim().to_string(),
            })
            .await
        }
    };

    match result {
        Ok(identity) => {
            info!(user_id = %identity.user_id, mode = ?input.mode, "password auth succeeded");
            Ok(Transition::to(paths::DASHBOARD)
                .with_notice(Notice::success(input.mode.success_message()))
                .carrying(identity))
        }
        Err(err) => {
            warn!(error = %err, mode = ?input.mode, "password auth failed");
            Err(Notice::error(form_error_message(&err)))
        }
    }
}
