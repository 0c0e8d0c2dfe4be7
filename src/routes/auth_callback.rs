//! Login-completion view shown while an external login token is redeemed.
//! The latch is claimed during setup, before anything is spawned, so a second
//! mount of this view never issues a second exchange. A mount for a callback
//! that already settled still navigates home.

use crate::components::Spinner;
use crate::features::auth::{
    client::HttpSessionApi,
    navigation::{LoginCallback, follow},
    state::use_auth,
};
use crate::features::notice::use_notices;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;

#[component]
pub fn AuthCallbackPage(callback: LoginCallback) -> impl IntoView {
    let auth = use_auth();
    let notices = use_notices();
    let navigate = use_navigate();

    let claim = auth.latch.claim(callback);
    spawn_local(async move {
        if let Some(transition) = claim.resolve(&HttpSessionApi).await {
            follow(transition, &auth, &notices, &navigate);
        }
    });

    view! {
        <div class="min-h-screen bg-slate-950 flex items-center justify-center">
            <div class="text-center">
                <Spinner />
                <p class="mt-4 text-slate-400">"Completing sign in..."</p>
            </div>
        </div>
    }
}
