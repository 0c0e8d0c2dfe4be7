//! Session resolution for protected routes.
//!
//! A guard starts `Unknown`. A carried identity settles it immediately with no
//! request; otherwise one credentialed `GET /auth/me` decides between
//! `Authenticated` and `Unauthenticated`. Failures are not retried and are not
//! surfaced to the user: a visitor without a session is simply sent home.

use super::client::SessionApi;
use super::handoff::IdentityHandoff;
use super::navigation::Transition;
use super::types::Identity;
use crate::features::notice::Notice;
use crate::routes::paths;
use tracing::{debug, warn};

pub const LOGOUT_SUCCESS_MESSAGE: &str = "Logged out successfully";
pub const LOGOUT_FAILED_MESSAGE: &str = "Failed to logout";

#[derive(Clone, Debug, PartialEq)]
pub enum GuardState {
    Unknown,
    Authenticated(Identity),
    Unauthenticated,
}

/// What a guard renders for its state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    Loading,
    Content,
    Nothing,
}

impl GuardState {
    /// Initial state when a guard mounts.
    pub fn on_mount(carried: Option<Identity>) -> Self {
        match carried {
            Some(identity) => {
                debug!(user_id = %identity.user_id, "guard using carried identity");
                GuardState::Authenticated(identity)
            }
            None => GuardState::Unknown,
        }
    }

    pub fn needs_fetch(&self) -> bool {
        matches!(self, GuardState::Unknown)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            GuardState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn view(&self) -> GuardView {
        match self {
            GuardState::Unknown => GuardView::Loading,
            GuardState::Authenticated(_) => GuardView::Content,
            GuardState::Unauthenticated => GuardView::Nothing,
        }
    }

    /// Where the guard must send the visitor, if anywhere.
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            GuardState::Unauthenticated => Some(paths::HOME),
            _ => None,
        }
    }
}

/// Asks the backend who the visitor is. Any error means "not signed in".
pub async fn resolve_session<A: SessionApi>(api: &A) -> GuardState {
    match api.fetch_identity().await {
        Ok(identity) => {
            debug!(user_id = %identity.user_id, "session resolved");
            GuardState::Authenticated(identity)
        }
        Err(err) => {
            debug!(error = %err, "no active session");
            GuardState::Unauthenticated
        }
    }
}

/// Ends the session on the server and drops any carried identity.
///
/// # Errors
///
/// Returns the notice to show when the backend refuses; the caller stays put.
pub async fn sign_out<A: SessionApi>(
    api: &A,
    handoff: &IdentityHandoff,
) -> Result<Transition, Notice> {
    match api.logout().await {
        Ok(()) => {
            handoff.clear();
            Ok(Transition::to(paths::HOME).with_notice(Notice::success(LOGOUT_SUCCESS_MESSAGE)))
        }
        Err(err) => {
            warn!(error = %err, "logout failed");
            Err(Notice::error(LOGOUT_FAILED_MESSAGE))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_lib::AppError;
    use crate::features::auth::exchange::ExchangeLatch;
    use crate::features::auth::navigation::Navigation;
    use crate::features::auth::test_support::{FakeSessionApi, identity, unauthorized};

    /// Mirrors the router for a `/dashboard` location: a login callback
    /// preempts every route, so no guard mounts for it.
    fn mount_dashboard(fragment: &str, handoff: &IdentityHandoff) -> Option<GuardState> {
        match Navigation::resolve(paths::DASHBOARD, fragment) {
            Navigation::LoginCallback(_) => None,
            Navigation::Normal(_) => Some(GuardState::on_mount(handoff.take())),
        }
    }

    /// Mirrors what the guard component does on mount.
    async fn enter_protected(api: &FakeSessionApi, handoff: &IdentityHandoff) -> GuardState {
        let state = GuardState::on_mount(handoff.take());
        if state.needs_fetch() {
            resolve_session(api).await
        } else {
            state
        }
    }

    #[test]
    fn views_follow_state() {
        assert_eq!(GuardState::Unknown.view(), GuardView::Loading);
        assert_eq!(
            GuardState::Authenticated(identity("u1")).view(),
            GuardView::Content
        );
        assert_eq!(GuardState::Unauthenticated.view(), GuardView::Nothing);
        assert_eq!(GuardState::Unauthenticated.redirect(), Some(paths::HOME));
        assert_eq!(GuardState::Unknown.redirect(), None);
    }

    #[tokio::test]
    async fn carried_identity_skips_the_identity_fetch() {
        let api = FakeSessionApi::signed_in(identity("u1"));
        let handoff = IdentityHandoff::default();
        handoff.put(identity("carried"));

        let state = enter_protected(&api, &handoff).await;

        assert_eq!(state.identity().map(|i| i.user_id.as_str()), Some("carried"));
        assert_eq!(api.identity_calls(), 0);
    }

    #[tokio::test]
    async fn carried_identity_is_used_only_once() {
        let api = FakeSessionApi::signed_in(identity("u1"));
        let handoff = IdentityHandoff::default();
        handoff.put(identity("carried"));

        enter_protected(&api, &handoff).await;
        let second = enter_protected(&api, &handoff).await;

        assert_eq!(second.identity().map(|i| i.user_id.as_str()), Some("u1"));
        assert_eq!(api.identity_calls(), 1);
    }

    #[tokio::test]
    async fn missing_session_resolves_unauthenticated_and_redirects_home() {
        let api = FakeSessionApi::default();
        let state = enter_protected(&api, &IdentityHandoff::default()).await;

        assert_eq!(state, GuardState::Unauthenticated);
        assert_eq!(state.view(), GuardView::Nothing);
        assert_eq!(state.redirect(), Some(paths::HOME));
        assert_eq!(api.identity_calls(), 1);
    }

    #[tokio::test]
    async fn valid_cookie_resolves_authenticated() {
        let api = FakeSessionApi::signed_in(identity("u7"));
        let state = enter_protected(&api, &IdentityHandoff::default()).await;

        assert_eq!(state, GuardState::Authenticated(identity("u7")));
        assert_eq!(state.redirect(), None);
    }

    #[tokio::test]
    async fn exchange_then_dashboard_needs_no_identity_fetch() {
        let api = FakeSessionApi::with_exchange(Ok(identity("u1")));
        let handoff = IdentityHandoff::default();
        let latch = ExchangeLatch::default();

        let Navigation::LoginCallback(callback) =
            Navigation::resolve("/dashboard", "#session_id=abc")
        else {
            panic!("expected callback");
        };
        let transition = latch
            .claim(callback)
            .resolve(&api)
            .await
            .expect("transition");
        assert_eq!(transition.target, paths::DASHBOARD);
        if let Some(identity) = transition.carry {
            handoff.put(identity);
        }

        let state = enter_protected(&api, &handoff).await;

        assert_eq!(state, GuardState::Authenticated(identity("u1")));
        assert_eq!(api.identity_calls(), 0);
    }

    #[tokio::test]
    async fn logout_forces_the_next_visit_to_re_resolve() {
        let api = FakeSessionApi::signed_in(identity("u1"));
        let handoff = IdentityHandoff::default();

        let first = enter_protected(&api, &handoff).await;
        assert!(first.identity().is_some());

        handoff.put(identity("stale"));
        let transition = sign_out(&api, &handoff).await.expect("logout");
        assert_eq!(transition.target, paths::HOME);
        assert_eq!(
            transition.notice,
            Some(Notice::success(LOGOUT_SUCCESS_MESSAGE))
        );

        let after = enter_protected(&api, &handoff).await;
        assert_eq!(after, GuardState::Unauthenticated);
        assert_eq!(api.identity_calls(), 2);
    }

    #[tokio::test]
    async fn failed_logout_keeps_the_visitor_in_place() {
        let api = FakeSessionApi::signed_in(identity("u1"))
            .failing_logout(AppError::Network("offline".to_string()));
        let handoff = IdentityHandoff::default();

        let result = sign_out(&api, &handoff).await;

        assert_eq!(result, Err(Notice::error(LOGOUT_FAILED_MESSAGE)));
        assert!(resolve_session(&api).await.identity().is_some());
    }

    #[tokio::test]
    async fn callback_location_renders_no_protected_content_until_the_exchange_settles() {
        let api = FakeSessionApi::with_exchange(Ok(identity("u1")));
        let handoff = IdentityHandoff::default();
        let latch = ExchangeLatch::default();
        let fragment = "#session_id=abc";

        let Navigation::LoginCallback(callback) = Navigation::resolve(paths::DASHBOARD, fragment)
        else {
            panic!("expected callback");
        };
        let exchange = latch.claim(callback).resolve(&api);

        assert_eq!(mount_dashboard(fragment, &handoff), None);

        let transition = exchange.await.expect("transition");
        assert_eq!(transition.target, paths::DASHBOARD);
        if let Some(identity) = transition.carry {
            handoff.put(identity);
        }

        let state = mount_dashboard("", &handoff).expect("guard mounts after navigation");
        assert_eq!(state.view(), GuardView::Content);
        assert_eq!(state.identity(), Some(&identity("u1")));
        assert_eq!(api.identity_calls(), 0);
    }

    #[tokio::test]
    async fn failed_exchange_never_mounts_the_guard() {
        let api = FakeSessionApi::with_exchange(Err(unauthorized()));
        let latch = ExchangeLatch::default();
        let Navigation::LoginCallback(callback) =
            Navigation::resolve(paths::DASHBOARD, "#session_id=abc")
        else {
            panic!("expected callback");
        };

        let transition = latch
            .claim(callback)
            .resolve(&api)
            .await
            .expect("transition");

        assert_eq!(transition.target, paths::HOME);
        assert!(transition.carry.is_none());
        assert_eq!(api.identity_calls(), 0);
    }
}
