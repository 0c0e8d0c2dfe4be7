//! Public landing page: hero, feature grid, pricing, lead capture and the
//! sign-in dialog. Both login paths end on the dashboard; the external one
//! leaves the app and comes back through the login callback.

use crate::app_lib::config::AppConfig;
use crate::components::{Button, ButtonVariant, SiteShell};
use crate::features::auth::{
    client::HttpSessionApi,
    credentials::{AuthMode, CredentialsInput, submit_credentials},
    external::external_login_url,
    navigation::follow,
    state::use_auth,
};
use crate::features::leads::{
    client::submit_lead,
    types::{LEAD_FAILED_MESSAGE, LEAD_SUCCESS_MESSAGE, LeadRequest},
};
use crate::features::notice::{Notice, NoticeCenter, use_notices};
use crate::features::pricing::{PricingTier, TIERS};
use crate::routes::paths;
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate};
use tracing::warn;

const INPUT_CLASS: &str = "bg-slate-900 border border-slate-700 text-white text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5";

const FEATURES: [(&str, &str); 4] = [
    (
        "Structured Lessons",
        "Step-by-step modules that take you from chart basics to a complete trading plan.",
    ),
    (
        "Risk First",
        "Position sizing and stop placement are taught before a single entry signal.",
    ),
    (
        "Live Market Reviews",
        "Weekly breakdowns of real setups, including the ones that failed.",
    ),
    (
        "Community",
        "Trade journals and feedback from members working through the same material.",
    ),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let (dialog_open, set_dialog_open) = signal(false);
    let open_dialog = Callback::new(move |()| set_dialog_open.set(true));

    view! {
        <SiteShell on_sign_in=open_dialog>
            <Hero on_start=open_dialog />
            <FeatureGrid />
            <Pricing on_choose=open_dialog />
            <LeadCapture />
            <Show when=move || dialog_open.get()>
                <SignInDialog on_close=Callback::new(move |()| set_dialog_open.set(false)) />
            </Show>
        </SiteShell>
    }
}

#[component]
fn Hero(on_start: Callback<()>) -> impl IntoView {
    view! {
        <section class="pt-20 pb-16 px-4">
            <div class="max-w-4xl mx-auto text-center">
                <h1 class="font-bold text-4xl sm:text-6xl tracking-tight mb-6">
                    "Master the Markets with "
                    <span class="text-amber-300">"Confidence"</span>
                </h1>
                <p class="text-slate-400 text-lg sm:text-xl mb-10">
                    "Learn to trade from a clear, repeatable process instead of guesswork."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <Button variant=ButtonVariant::Gold on_click=on_start>
                        "Start Learning"
                    </Button>
                    <A href=paths::FREE_COURSE {..} class="border border-slate-700 text-slate-300 hover:text-white hover:border-slate-500 font-medium rounded-lg text-sm px-5 py-2.5 text-center">
                        "Take the Free Course"
                    </A>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureGrid() -> impl IntoView {
    view! {
        <section class="py-16 px-4">
            <div class="max-w-7xl mx-auto grid gap-6 md:grid-cols-2 lg:grid-cols-4">
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="bg-slate-900/50 border border-slate-800 p-6 rounded-xl">
                                <h3 class="font-semibold text-lg mb-2">{*title}</h3>
                                <p class="text-sm text-slate-400">{*body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Pricing(on_choose: Callback<()>) -> impl IntoView {
    view! {
        <section id="pricing" class="py-16 px-4">
            <div class="max-w-5xl mx-auto">
                <h2 class="font-bold text-3xl text-center mb-12">"Simple Pricing"</h2>
                <div class="grid gap-8 md:grid-cols-2">
                    {TIERS
                        .iter()
                        .map(|tier| view! { <TierCard tier=*tier on_choose=on_choose /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TierCard(tier: PricingTier, on_choose: Callback<()>) -> impl IntoView {
    let (card_class, variant) = if tier.highlighted {
        ("p-8 rounded-xl border border-amber-400/50 bg-amber-500/5", ButtonVariant::Gold)
    } else {
        ("p-8 rounded-xl border border-slate-800 bg-slate-900/50", ButtonVariant::Outline)
    };

    view! {
        <div class=card_class>
            <h3 class="font-semibold text-xl mb-2">{tier.name}</h3>
            <p class="mb-6">
                <span class="font-bold text-4xl">{tier.price}</span>
                <span class="text-slate-400">{tier.period}</span>
            </p>
            <ul class="space-y-2 mb-8 text-sm text-slate-300">
                {tier
                    .features
                    .iter()
                    .map(|feature| view! { <li>{*feature}</li> })
                    .collect_view()}
            </ul>
            <Button variant=variant on_click=on_choose>
                "Get Started"
            </Button>
        </div>
    }
}

#[component]
fn LeadCapture() -> impl IntoView {
    let notices = use_notices();
    let (email, set_email) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let request = match LeadRequest::from_input(&email.get_untracked(), &name.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                notices.push(Notice::error(message));
                return;
            }
        };
        set_submitting.set(true);
        spawn_local(async move {
            match submit_lead(&request).await {
                Ok(()) => {
                    notices.push(Notice::success(LEAD_SUCCESS_MESSAGE));
                    set_email.try_set(String::new());
                    set_name.try_set(String::new());
                }
                Err(err) => {
                    warn!(error = %err, "lead capture failed");
                    notices.push(Notice::error(LEAD_FAILED_MESSAGE));
                }
            }
            set_submitting.try_set(false);
        });
    };

    view! {
        <section class="py-16 px-4">
            <div class="max-w-xl mx-auto text-center">
                <h2 class="font-bold text-3xl mb-4">"Get the Free Trading Guide"</h2>
                <p class="text-slate-400 mb-8">"Leave your email and we will send it straight over."</p>
                <form class="space-y-4 text-left" on:submit=on_submit>
                    <input
                        type="text"
                        class=INPUT_CLASS
                        placeholder="Your name (optional)"
                        prop:value=move || name.get()
                        on:input=move |event| set_name.set(event_target_value(&event))
                    />
                    <input
                        type="email"
                        class=INPUT_CLASS
                        placeholder="you@example.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                    <Button button_type="submit" variant=ButtonVariant::Gold disabled=submitting>
                        {move || if submitting.get() { "Sending..." } else { "Send Me the Guide" }}
                    </Button>
                </form>
            </div>
        </section>
    }
}

/// Leaves the app for the identity provider.
fn start_external_login(notices: NoticeCenter) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let origin = match location.origin() {
        Ok(origin) => origin,
        Err(err) => {
            warn!(error = ?err, "page origin unavailable");
            return;
        }
    };
    match external_login_url(&AppConfig::load().auth_url, &origin) {
        Ok(url) => {
            if let Err(err) = location.set_href(&url) {
                warn!(error = ?err, "redirect to login provider failed");
            }
        }
        Err(err) => {
            warn!(error = %err, "login provider URL rejected");
            notices.push(Notice::error(err.to_string()));
        }
    }
}

#[component]
fn SignInDialog(on_close: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let notices = use_notices();
    let navigate = use_navigate();

    let (mode, set_mode) = signal(AuthMode::Login);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (name, set_name) = signal(String::new());

    let submit = Action::new_local(|input: &CredentialsInput| {
        let input = input.clone();
        async move { submit_credentials(&HttpSessionApi, input).await }
    });
    let pending = submit.pending();

    Effect::new(move |_| {
        let Some(result) = submit.value().get() else {
            return;
        };
        match result {
            Ok(transition) => {
                follow(transition, &auth, &notices, &navigate);
                on_close.run(());
            }
            Err(notice) => notices.push(notice),
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if pending.get_untracked() {
            return;
        }
        submit.dispatch(CredentialsInput {
            mode: mode.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            name: name.get_untracked(),
        });
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 px-4">
            <div class="w-full max-w-md rounded-xl border border-slate-800 bg-slate-950 p-8">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="font-bold text-2xl">{move || mode.get().title()}</h2>
                    <button
                        type="button"
                        class="text-slate-400 hover:text-white"
                        on:click=move |_| on_close.run(())
                    >
                        <span class="sr-only">"Close"</span>
                        "✕"
                    </button>
                </div>
                <Button
                    variant=ButtonVariant::Outline
                    on_click=Callback::new(move |()| start_external_login(notices))
                >
                    "Continue with Google"
                </Button>
                <p class="my-6 text-center text-xs uppercase text-slate-500">"or"</p>
                <form class="space-y-4" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::Signup>
                        <input
                            type="text"
                            class=INPUT_CLASS
                            placeholder="Full name"
                            autocomplete="name"
                            prop:value=move || name.get()
                            on:input=move |event| set_name.set(event_target_value(&event))
                        />
                    </Show>
                    <input
                        type="email"
                        class=INPUT_CLASS
                        placeholder="you@example.com"
                        autocomplete="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                    <input
                        type="password"
                        class=INPUT_CLASS
                        placeholder="Password"
                        autocomplete=move || match mode.get() {
                            AuthMode::Login => "current-password",
                            AuthMode::Signup => "new-password",
                        }
                        required
                        prop:value=move || password.get()
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                    <Button button_type="submit" disabled=pending>
                        {move || {
                            if pending.get() { "Please wait..." } else { mode.get().submit_label() }
                        }}
                    </Button>
                </form>
                <button
                    type="button"
                    class="mt-6 w-full text-center text-sm text-blue-400 hover:underline"
                    on:click=move |_| set_mode.update(|mode| *mode = mode.toggled())
                >
                    {move || mode.get().toggle_prompt()}
                </button>
            </div>
        </div>
    }
}
