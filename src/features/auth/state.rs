//! Auth session context for the frontend. Unlike a hydrate-once provider, the
//! identity here is only a per-visit copy: guards resolve it on every entry to
//! a protected route, and it is dropped when that route unmounts or on logout. The exchange latch and the identity
//! handoff live here so they outlive any single mount of a view.

use crate::features::auth::{exchange::ExchangeLatch, handoff::IdentityHandoff, types::Identity};
use leptos::prelude::*;

#[derive(Clone)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<Identity>>,
    pub is_authenticated: Signal<bool>,
    pub handoff: IdentityHandoff,
    pub latch: ExchangeLatch,
}

impl AuthContext {
    fn new() -> Self {
        let session = RwSignal::new(None);
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            is_authenticated,
            handoff: IdentityHandoff::default(),
            latch: ExchangeLatch::default(),
        }
    }

    /// Records the identity a guard resolved for the current visit.
    pub fn set_session(&self, identity: Identity) {
        self.session.set(Some(identity));
    }

    /// Scopes the session copy to the current reactive owner: it is cleared
    /// when that owner is cleaned up, i.e. when the protected view unmounts.
    pub fn scope_session_to_owner(&self) {
        let session = self.session;
        on_cleanup(move || {
            session.try_set(None);
        });
    }

    /// Drops every client-side trace of the session, typically on logout.
    pub fn clear_session(&self) {
        self.session.set(None);
        self.handoff.clear();
    }
}

/// Provides the auth context. No request is made here; resolution belongs to
/// the guards.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_context(AuthContext::new());

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(AuthContext::new)
}

#[cfg(test)]
mod tests {
    use super::AuthContext;
    use crate::features::auth::test_support::identity;
    use leptos::prelude::*;

    #[test]
    fn leaving_the_protected_view_drops_the_session_copy() {
        let auth = AuthContext::new();
        let protected_view = Owner::new();
        protected_view.with(|| {
            auth.scope_session_to_owner();
            auth.set_session(identity("u1"));
        });
        assert!(auth.is_authenticated.get_untracked());

        protected_view.cleanup();

        assert_eq!(auth.session.get_untracked(), None);
        assert!(!auth.is_authenticated.get_untracked());
    }

    #[test]
    fn clearing_the_session_also_drops_the_handoff() {
        let auth = AuthContext::new();
        auth.set_session(identity("u1"));
        auth.handoff.put(identity("u1"));

        auth.clear_session();

        assert_eq!(auth.session.get_untracked(), None);
        assert_eq!(auth.handoff.take(), None);
    }
}
