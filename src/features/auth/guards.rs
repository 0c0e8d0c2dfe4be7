use crate::components::Spinner;
use crate::features::auth::{
    client::HttpSessionApi,
    resolver::{GuardState, GuardView, resolve_session},
    state::use_auth,
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{NavigateOptions, hooks::use_navigate};

/// Renders its children only once the visitor's session is confirmed.
/// UX-only guard; real access control lives on the API.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let state = RwSignal::new(GuardState::on_mount(auth.handoff.take()));
    auth.scope_session_to_owner();

    if let Some(identity) = state.get_untracked().identity() {
        auth.set_session(identity.clone());
    }

    if state.get_untracked().needs_fetch() {
        let auth = auth.clone();
        spawn_local(async move {
            let resolved = resolve_session(&HttpSessionApi).await;
            let identity = resolved.identity().cloned();
            let redirect = resolved.redirect();
            // A guard that unmounted while resolving must not repopulate the session.
            if state.try_set(resolved).is_some() {
                return;
            }
            match identity {
                Some(identity) => auth.set_session(identity),
                None => auth.session.set(None),
            }
            if let Some(target) = redirect {
                navigate(
                    target,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        });
    }

    view! {
        {move || match state.with(GuardState::view) {
            GuardView::Loading => view! {
                <div class="min-h-[60vh] flex items-center justify-center">
                    <div class="text-center">
                        <Spinner />
                        <p class="mt-4 text-slate-400">"Loading..."</p>
                    </div>
                </div>
            }
            .into_any(),
            GuardView::Content => children().into_any(),
            GuardView::Nothing => ().into_any(),
        }}
    }
}
