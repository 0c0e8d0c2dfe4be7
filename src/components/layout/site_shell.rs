//! Shared page wrapper with the site navigation, mobile menu and footer.
//! Navigation remains client-side; the backend enforces access control.

use crate::app_lib::build_info::git_commit_hash;
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINK: &str = "text-slate-300 hover:text-white transition-colors";
const MOBILE_LINK: &str = "block text-slate-300 hover:text-white";

/// Wraps public pages. `on_sign_in` is provided by pages that host the sign-in
/// dialog; without it the button links home.
#[component]
pub fn SiteShell(
    #[prop(optional, into)] on_sign_in: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;

    let sign_in = move || {
        set_menu_open.set(false);
        if let Some(on_sign_in) = on_sign_in {
            on_sign_in.run(());
        }
    };

    let account_action = move |mobile: bool| {
        let class = if mobile {
            "w-full block rounded-lg bg-blue-600 px-4 py-2 text-center text-white"
        } else {
            "rounded-lg border border-slate-700 px-4 py-2 text-slate-300 hover:text-white hover:border-slate-500"
        };
        view! {
            <Show
                when=move || is_authenticated.get()
                fallback=move || {
                    if on_sign_in.is_some() {
                        view! {
                            <button type="button" class=class on:click=move |_| sign_in()>
                                "Sign In"
                            </button>
                        }
                        .into_any()
                    } else {
                        view! {
                            <A href=paths::HOME {..} class=class>
                                "Sign In"
                            </A>
                        }
                        .into_any()
                    }
                }
            >
                <A href=paths::DASHBOARD {..} class=class>
                    "Dashboard"
                </A>
            </Show>
        }
    };

    view! {
        <div class="min-h-screen flex flex-col bg-slate-950 text-slate-100">
            <nav class="fixed top-0 w-full z-50 backdrop-blur border-b border-white/10 bg-slate-950/70">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center h-16">
                        <A
                            href=paths::HOME
                            {..}
                            class="font-bold text-xl tracking-tight"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            <span class="text-amber-300">"Trading"</span>
                            " Academy"
                        </A>
                        <div class="hidden md:flex items-center space-x-8">
                            <A href=paths::FREE_COURSE {..} class=NAV_LINK>
                                "Free Course"
                            </A>
                            <A href=paths::BLOG {..} class=NAV_LINK>
                                "Blog"
                            </A>
                            <a href=paths::PRICING_ANCHOR class=NAV_LINK>
                                "Pricing"
                            </a>
                            {account_action(false)}
                        </div>
                        <button
                            type="button"
                            class="md:hidden text-white p-2"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <span class="sr-only">"Open main menu"</span>
                            <svg
                                class="w-5 h-5"
                                aria-hidden="true"
                                xmlns="http://www.w3.org/2000/svg"
                                fill="none"
                                viewBox="0 0 17 14"
                            >
                                <path
                                    stroke="currentColor"
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M1 1h15M1 7h15M1 13h15"
                                ></path>
                            </svg>
                        </button>
                    </div>
                </div>
                <div class="md:hidden border-t border-white/10 bg-slate-900" class:hidden=move || !menu_open.get()>
                    <div class="px-4 py-4 space-y-3">
                        <A
                            href=paths::FREE_COURSE
                            {..}
                            class=MOBILE_LINK
                            on:click=move |_| set_menu_open.set(false)
                        >
                            "Free Course"
                        </A>
                        <A
                            href=paths::BLOG
                            {..}
                            class=MOBILE_LINK
                            on:click=move |_| set_menu_open.set(false)
                        >
                            "Blog"
                        </A>
                        <a href=paths::PRICING_ANCHOR class=MOBILE_LINK>
                            "Pricing"
                        </a>
                        {account_action(true)}
                    </div>
                </div>
            </nav>
            <main class="flex-1 pt-16">{children()}</main>
            <footer class="border-t border-white/10 py-8 px-4 text-center text-sm text-slate-500">
                <p>"© Trading Academy. Trading involves risk; past results do not guarantee future returns."</p>
                <p class="mt-2 font-mono text-xs">{format!("build {}", git_commit_hash())}</p>
            </footer>
        </div>
    }
}
