//! External-login exchange.
//!
//! When the identity provider redirects back, the token in the fragment is
//! redeemed once for a session cookie. The latch is claimed synchronously,
//! before any request is issued, so a second mount of the callback view while
//! the exchange is in flight finds it taken and does nothing. A callback that
//! already ran is never redeemed again; revisiting it only sends the visitor
//! home. A `PendingExchange` can only be obtained by claiming the latch.

use super::client::SessionApi;
use super::navigation::{LoginCallback, Transition};
use super::token::SessionToken;
use super::types::Identity;
use crate::app_lib::AppError;
use crate::features::notice::Notice;
use crate::routes::paths;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

pub const MISSING_TOKEN_MESSAGE: &str = "Invalid authentication response";
pub const EXCHANGE_FAILED_MESSAGE: &str = "Authentication failed. Please try again.";
pub const EXCHANGE_SUCCESS_MESSAGE: &str = "Successfully logged in!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LatchEntry {
    InFlight,
    Done,
}

type Entries = Arc<Mutex<HashMap<u64, LatchEntry>>>;

/// Remembers which callbacks ran, or are running, during this page lifetime.
#[derive(Clone, Default)]
pub struct ExchangeLatch {
    entries: Entries,
}

impl ExchangeLatch {
    /// Claims the callback. Only the first claim for a key may run the exchange.
    pub fn claim(&self, callback: LoginCallback) -> Claim {
        let key = callback.latch_key();
        let Ok(mut entries) = self.entries.lock() else {
            warn!("exchange latch poisoned; treating login callback as settled");
            return Claim::Settled;
        };
        match entries.get(&key).copied() {
            Some(LatchEntry::InFlight) => {
                debug!("login callback already in flight");
                Claim::InFlight
            }
            Some(LatchEntry::Done) => {
                debug!("login callback already settled");
                Claim::Settled
            }
            None => {
                entries.insert(key, LatchEntry::InFlight);
                Claim::Run(PendingExchange {
                    token: callback.token,
                    key,
                    entries: Arc::clone(&self.entries),
                })
            }
        }
    }
}

/// Result of claiming the latch.
#[derive(Debug)]
pub enum Claim {
    /// First claim: the holder runs the exchange.
    Run(PendingExchange),
    /// Another mount is redeeming this token right now.
    InFlight,
    /// The callback already ran; only the navigation home is left.
    Settled,
}

impl Claim {
    /// Drives the claim to the transition the callback view must follow.
    /// `None` means another mount owns the exchange.
    pub async fn resolve<A: SessionApi>(self, api: &A) -> Option<Transition> {
        match self {
            Claim::Run(pending) => Some(pending.run(api).await.into_transition()),
            Claim::InFlight => None,
            Claim::Settled => Some(Transition::to(paths::HOME).replacing()),
        }
    }
}

/// A claimed exchange, ready to run. Its latch entry settles when it is
/// dropped, whether or not it ran.
pub struct PendingExchange {
    token: Option<SessionToken>,
    key: u64,
    entries: Entries,
}

impl PendingExchange {
    /// Redeems the token with the backend. A missing token never reaches the
    /// network.
    pub async fn run<A: SessionApi>(mut self, api: &A) -> ExchangeOutcome {
        let Some(token) = self.token.take() else {
            warn!("login callback without token");
            return ExchangeOutcome::MissingToken;
        };

        match api.exchange_token(&token).await {
            Ok(identity) => {
                info!(user_id = %identity.user_id, "external login exchanged");
                ExchangeOutcome::Completed(identity)
            }
            Err(err) => {
                warn!(error = %err, "external login exchange failed");
                ExchangeOutcome::Failed(err)
            }
        }
    }
}

impl Drop for PendingExchange {
    fn drop(&mut self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(self.key, LatchEntry::Done);
        }
    }
}

impl std::fmt::Debug for PendingExchange {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PendingExchange")
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, PartialEq)]
pub enum ExchangeOutcome {
    MissingToken,
    Completed(Identity),
    Failed(AppError),
}

impl ExchangeOutcome {
    /// Every outcome replaces the callback entry so the token never stays in
    /// history.
    pub fn into_transition(self) -> Transition {
        match self {
            ExchangeOutcome::MissingToken => Transition::to(paths::HOME)
                .with_notice(Notice::error(MISSING_TOKEN_MESSAGE))
                .replacing(),
            ExchangeOutcome::Completed(identity) => Transition::to(paths::DASHBOARD)
                .with_notice(Notice::success(EXCHANGE_SUCCESS_MESSAGE))
                .carrying(identity)
                .replacing(),
            ExchangeOutcome::Failed(_) => Transition::to(paths::HOME)
                .with_notice(Notice::error(EXCHANGE_FAILED_MESSAGE))
                .replacing(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::navigation::Navigation;
    use crate::features::auth::test_support::{FakeSessionApi, identity};
    use crate::features::notice::NoticeKind;

    fn callback(fragment: &str) -> LoginCallback {
        match Navigation::resolve("/", fragment) {
            Navigation::LoginCallback(callback) => callback,
            Navigation::Normal(_) => panic!("expected callback for {fragment}"),
        }
    }

    fn pending(claim: Claim) -> PendingExchange {
        match claim {
            Claim::Run(pending) => pending,
            other => panic!("expected a runnable claim, got {other:?}"),
        }
    }

    #[test]
    fn latch_rejects_a_second_claim_while_in_flight() {
        let latch = ExchangeLatch::default();
        let first = latch.claim(callback("#session_id=abc"));
        assert!(matches!(first, Claim::Run(_)));
        assert!(matches!(latch.claim(callback("#session_id=abc")), Claim::InFlight));
        assert!(matches!(latch.claim(callback("#session_id=other")), Claim::Run(_)));
        drop(first);
        assert!(matches!(latch.claim(callback("#session_id=abc")), Claim::Settled));
    }

    #[test]
    fn latch_is_shared_between_clones() {
        let latch = ExchangeLatch::default();
        let remounted = latch.clone();
        let _running = pending(latch.claim(callback("#session_id=abc")));
        assert!(matches!(
            remounted.claim(callback("#session_id=abc")),
            Claim::InFlight
        ));
    }

    #[tokio::test]
    async fn double_mount_exchanges_once() {
        let api = FakeSessionApi::with_exchange(Ok(identity("u1")));
        let latch = ExchangeLatch::default();

        let mount = |latch: ExchangeLatch| {
            let api = &api;
            async move { latch.claim(callback("#session_id=abc")).resolve(api).await }
        };

        let (first, second) = tokio::join!(mount(latch.clone()), mount(latch.clone()));

        assert_eq!(api.exchange_calls(), 1);
        let transitions: Vec<_> = [first, second].into_iter().flatten().collect();
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].target, paths::DASHBOARD);
    }

    #[tokio::test]
    async fn revisiting_a_settled_callback_goes_home_without_a_second_exchange() {
        let api = FakeSessionApi::with_exchange(Err(AppError::Network("offline".to_string())));
        let latch = ExchangeLatch::default();

        let first = latch
            .claim(callback("#session_id=abc"))
            .resolve(&api)
            .await
            .expect("transition");
        assert_eq!(first.target, paths::HOME);
        assert!(first.replace);

        let again = latch
            .claim(callback("#session_id=abc"))
            .resolve(&api)
            .await
            .expect("settled callbacks still navigate");
        assert_eq!(again.target, paths::HOME);
        assert!(again.replace);
        assert!(again.notice.is_none());
        assert_eq!(api.exchange_calls(), 1);
    }

    #[tokio::test]
    async fn repeated_missing_token_callbacks_always_navigate_home() {
        let api = FakeSessionApi::default();
        let latch = ExchangeLatch::default();

        for _ in 0..2 {
            let transition = latch
                .claim(callback("#session_id="))
                .resolve(&api)
                .await
                .expect("transition");
            assert_eq!(transition.target, paths::HOME);
            assert!(transition.replace);
        }
        assert_eq!(api.exchange_calls(), 0);
    }

    #[tokio::test]
    async fn successful_exchange_goes_to_dashboard_with_identity() {
        let api = FakeSessionApi::with_exchange(Ok(identity("u1")));
        let pending = pending(ExchangeLatch::default().claim(callback("#session_id=abc")));

        let transition = pending.run(&api).await.into_transition();

        assert_eq!(transition.target, paths::DASHBOARD);
        assert_eq!(transition.carry, Some(identity("u1")));
        assert!(transition.replace);
        assert_eq!(
            transition.notice.map(|notice| notice.kind),
            Some(NoticeKind::Success)
        );
        assert_eq!(api.last_exchanged_token().as_deref(), Some("abc"));
        assert_eq!(api.identity_calls(), 0);
    }

    #[tokio::test]
    async fn missing_token_goes_home_without_network() {
        let api = FakeSessionApi::with_exchange(Ok(identity("u1")));
        let pending = pending(ExchangeLatch::default().claim(callback("#session_id=")));

        let outcome = pending.run(&api).await;
        assert_eq!(outcome, ExchangeOutcome::MissingToken);
        assert_eq!(api.exchange_calls(), 0);

        let transition = outcome.into_transition();
        assert_eq!(transition.target, paths::HOME);
        assert_eq!(transition.notice, Some(Notice::error(MISSING_TOKEN_MESSAGE)));
        assert!(transition.replace);
        assert!(transition.carry.is_none());
    }

    #[tokio::test]
    async fn rejected_exchange_goes_home_with_error() {
        let api = FakeSessionApi::with_exchange(Err(AppError::Http {
            status: 401,
            message: "Invalid session".to_string(),
        }));
        let pending = pending(ExchangeLatch::default().claim(callback("#session_id=abc")));

        let transition = pending.run(&api).await.into_transition();

        assert_eq!(transition.target, paths::HOME);
        assert_eq!(transition.notice, Some(Notice::error(EXCHANGE_FAILED_MESSAGE)));
        assert!(transition.replace);
        assert!(transition.carry.is_none());
    }
}
