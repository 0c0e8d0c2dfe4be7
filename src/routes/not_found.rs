use crate::components::SiteShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <SiteShell>
            <div class="max-w-xl mx-auto py-32 px-4 text-center">
                <h1 class="text-4xl font-bold">"Page not found"</h1>
                <p class="mt-4 text-slate-400">"The page you are looking for does not exist."</p>
                <A href=paths::HOME {..} class="mt-8 inline-block text-amber-300 hover:underline">
                    "Back to home"
                </A>
            </div>
        </SiteShell>
    }
}
