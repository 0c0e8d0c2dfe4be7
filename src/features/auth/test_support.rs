//! In-memory session backend for auth flow tests.

use super::client::SessionApi;
use super::token::SessionToken;
use super::types::{Identity, LoginRequest, SignupRequest};
use crate::app_lib::AppError;
use std::cell::{Cell, RefCell};

pub fn identity(user_id: &str) -> Identity {
    Identity {
        user_id: user_id.to_string(),
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        picture: None,
        is_premium: false,
    }
}

pub fn unauthorized() -> AppError {
    AppError::Http {
        status: 401,
        message: r#"{"detail":"Not authenticated"}"#.to_string(),
    }
}

/// Records calls and replays canned results. `logout` drops the cookie, so
/// later identity fetches fail the way the real backend does.
pub struct FakeSessionApi {
    me: RefCell<Result<Identity, AppError>>,
    exchange: Result<Identity, AppError>,
    credentials: Result<Identity, AppError>,
    logout: Result<(), AppError>,
    identity_calls: Cell<usize>,
    exchange_calls: Cell<usize>,
    login_calls: Cell<usize>,
    signup_calls: Cell<usize>,
    last_token: RefCell<Option<String>>,
}

impl Default for FakeSessionApi {
    fn default() -> Self {
        Self {
            me: RefCell::new(Err(unauthorized())),
            exchange: Err(unauthorized()),
            credentials: Err(unauthorized()),
            logout: Ok(()),
            identity_calls: Cell::new(0),
            exchange_calls: Cell::new(0),
            login_calls: Cell::new(0),
            signup_calls: Cell::new(0),
            last_token: RefCell::new(None),
        }
    }
}

impl FakeSessionApi {
    pub fn signed_in(identity: Identity) -> Self {
        Self {
            me: RefCell::new(Ok(identity)),
            ..Self::default()
        }
    }

    pub fn with_exchange(result: Result<Identity, AppError>) -> Self {
        Self {
            exchange: result,
            ..Self::default()
        }
    }

    pub fn with_credentials(result: Result<Identity, AppError>) -> Self {
        Self {
            credentials: result,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failing_logout(mut self, err: AppError) -> Self {
        self.logout = Err(err);
        self
    }

    pub fn identity_calls(&self) -> usize {
        self.identity_calls.get()
    }

    pub fn exchange_calls(&self) -> usize {
        self.exchange_calls.get()
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls.get()
    }

    pub fn signup_calls(&self) -> usize {
        self.signup_calls.get()
    }

    pub fn last_exchanged_token(&self) -> Option<String> {
        self.last_token.borrow().clone()
    }
}

impl SessionApi for FakeSessionApi {
    async fn fetch_identity(&self) -> Result<Identity, AppError> {
        self.identity_calls.set(self.identity_calls.get() + 1);
        tokio::task::yield_now().await;
        self.me.borrow().clone()
    }

    async fn exchange_token(&self, token: &SessionToken) -> Result<Identity, AppError> {
        self.exchange_calls.set(self.exchange_calls.get() + 1);
        *self.last_token.borrow_mut() = Some(token.expose().to_string());
        tokio::task::yield_now().await;
        self.exchange.clone()
    }

    async fn login(&self, _request: &LoginRequest) -> Result<Identity, AppError> {
        self.login_calls.set(self.login_calls.get() + 1);
        self.credentials.clone()
    }

    async fn signup(&self, _request: &SignupRequest) -> Result<Identity, AppError> {
        self.signup_calls.set(self.signup_calls.get() + 1);
        self.credentials.clone()
    }

    async fn logout(&self) -> Result<(), AppError> {
        if self.logout.is_ok() {
            *self.me.borrow_mut() = Err(unauthorized());
        }
        self.logout.clone()
    }
}
