//! Navigation resolution and transitions.
//!
//! The URL fragment is a side channel that path-based routing ignores, so it is
//! inspected once per location change, before any route matches. A fragment
//! carrying the login marker turns the whole page into a login callback no
//! matter what path it arrived on.

use super::token::{SessionToken, has_callback_marker, token_from_fragment};
use super::types::Identity;
use crate::features::notice::Notice;

/// What the router should do with the current location.
#[derive(Clone, Debug)]
pub enum Navigation {
    Normal(String),
    LoginCallback(LoginCallback),
}

impl Navigation {
    pub fn resolve(pathname: &str, fragment: &str) -> Self {
        if has_callback_marker(fragment) {
            Navigation::LoginCallback(LoginCallback {
                token: token_from_fragment(fragment),
            })
        } else {
            Navigation::Normal(pathname.to_string())
        }
    }

    pub fn is_login_callback(&self) -> bool {
        matches!(self, Navigation::LoginCallback(_))
    }
}

/// A login callback; the token is absent when the marker had no value.
#[derive(Clone, Debug)]
pub struct LoginCallback {
    pub(super) token: Option<SessionToken>,
}

impl LoginCallback {
    /// Latch key for this callback. Missing-token callbacks share one key.
    pub(super) fn latch_key(&self) -> u64 {
        self.token.as_ref().map_or(0, SessionToken::fingerprint)
    }
}

/// A navigation request produced by an auth flow. `carry` is handed to the
/// next guard in memory, exactly once, and is never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub target: String,
    pub notice: Option<Notice>,
    pub carry: Option<Identity>,
    pub replace: bool,
}

impl Transition {
    pub fn to(target: &str) -> Self {
        Self {
            target: target.to_string(),
            notice: None,
            carry: None,
            replace: false,
        }
    }

    #[must_use]
    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    #[must_use]
    pub fn carrying(mut self, identity: Identity) -> Self {
        self.carry = Some(identity);
        self
    }

    #[must_use]
    pub fn replacing(mut self) -> Self {
        self.replace = true;
        self
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::follow;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::Transition;
    use crate::features::{auth::state::AuthContext, notice::NoticeCenter};
    use leptos_router::NavigateOptions;

    /// Applies a transition: stores the carried identity, shows the notice,
    /// then navigates.
    pub fn follow(
        transition: Transition,
        auth: &AuthContext,
        notices: &NoticeCenter,
        navigate: &impl Fn(&str, NavigateOptions),
    ) {
        if let Some(identity) = transition.carry {
            auth.handoff.put(identity);
        }
        if let Some(notice) = transition.notice {
            notices.push(notice);
        }
        navigate(
            &transition.target,
            NavigateOptions {
                replace: transition.replace,
                ..Default::default()
            },
        );
    }
}
