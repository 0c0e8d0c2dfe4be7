use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-12 w-12 animate-spin rounded-full border-b-2 border-amber-400"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
