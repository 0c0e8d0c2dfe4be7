//! Member dashboard. Rendered only inside `RequireSession`, which has already
//! placed the resolved identity in the auth context.

use crate::components::{Button, ButtonVariant, SiteShell};
use crate::features::auth::{
    client::HttpSessionApi, navigation::follow, resolver::sign_out, state::use_auth,
    types::Identity,
};
use crate::features::course::LESSONS;
use crate::features::notice::use_notices;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let notices = use_notices();
    let navigate = use_navigate();

    let handoff = auth.handoff.clone();
    let logout = Action::new_local(move |(): &()| {
        let handoff = handoff.clone();
        async move { sign_out(&HttpSessionApi, &handoff).await }
    });
    let signing_out = logout.pending();

    {
        let auth = auth.clone();
        Effect::new(move |_| {
            let Some(result) = logout.value().get() else {
                return;
            };
            match result {
                Ok(transition) => {
                    auth.clear_session();
                    follow(transition, &auth, &notices, &navigate);
                }
                Err(notice) => notices.push(notice),
            }
        });
    }

    let on_logout = move |()| {
        if !signing_out.get_untracked() {
            logout.dispatch(());
        }
    };

    view! {
        <SiteShell>
            {move || {
                auth.session
                    .get()
                    .map(|identity| view! { <MemberArea identity=identity /> })
            }}
            <div class="max-w-7xl mx-auto px-4 pb-16">
                <Button variant=ButtonVariant::Outline disabled=signing_out on_click=on_logout>
                    "Sign Out"
                </Button>
            </div>
        </SiteShell>
    }
}

#[component]
fn MemberArea(identity: Identity) -> impl IntoView {
    let initial = identity.initial();
    let greeting = identity.first_name().to_string();

    view! {
        <div class="pt-8 pb-8 px-4">
            <div class="max-w-7xl mx-auto">
                <div class="flex items-center gap-3 mb-10">
                    {match identity.picture.clone() {
                        Some(picture) => view! {
                            <img src=picture alt="" class="h-12 w-12 rounded-full" />
                        }
                        .into_any(),
                        None => view! {
                            <div class="flex h-12 w-12 items-center justify-center rounded-full bg-blue-600 text-white font-bold">
                                {initial}
                            </div>
                        }
                        .into_any(),
                    }}
                    <div>
                        <p class="font-medium">{identity.name.clone()}</p>
                        <p class="text-sm text-slate-400">{identity.email.clone()}</p>
                    </div>
                </div>
                <h1 class="font-bold text-3xl sm:text-4xl mb-4">
                    "Welcome back, " <span class="text-amber-300">{greeting}</span> "!"
                </h1>
                <p class="text-slate-400 text-lg mb-12">"Continue your trading education journey"</p>
                <MembershipPanel is_premium=identity.is_premium />
                <h2 class="font-bold text-2xl mt-12 mb-6">"Your Course"</h2>
                <div class="grid gap-4 md:grid-cols-2">
                    {LESSONS
                        .iter()
                        .map(|lesson| {
                            view! {
                                <div class="bg-slate-900/50 border border-slate-800 p-5 rounded-xl">
                                    <p class="text-xs text-slate-500">
                                        {format!("Lesson {} · {}", lesson.number, lesson.duration_label())}
                                    </p>
                                    <p class="font-semibold mt-1">{lesson.title}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn MembershipPanel(is_premium: bool) -> impl IntoView {
    if is_premium {
        view! {
            <div class="bg-amber-500/10 border border-amber-400/30 p-8 rounded-xl">
                <h2 class="font-bold text-2xl text-amber-300 mb-3">"Premium Member"</h2>
                <p class="text-slate-300">"You have full access to all premium content and features."</p>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="bg-slate-900/50 border border-slate-800 p-8 rounded-xl">
                <h2 class="font-bold text-2xl mb-3">"Upgrade to Premium"</h2>
                <p class="text-slate-400 mb-4">
                    "Unlock advanced strategies, live sessions, and 1-on-1 mentorship for just $97/month."
                </p>
                <A href=paths::PRICING_ANCHOR {..} class="text-amber-300 hover:underline">
                    "See plans"
                </A>
            </div>
        }
        .into_any()
    }
}
