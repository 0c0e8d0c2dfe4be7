//! Top-center notice stack fed by the notice center in context.

use super::{Alert, AlertKind};
use crate::features::notice::use_notices;
use leptos::prelude::*;

#[component]
pub fn Toaster() -> impl IntoView {
    let notices = use_notices();

    view! {
        <div class="fixed top-4 left-1/2 -translate-x-1/2 z-[100] flex w-full max-w-sm flex-col gap-2 px-4">
            <For
                each=move || notices.stack.with(|stack| stack.entries().to_vec())
                key=|(id, _)| *id
                children=move |(id, notice)| {
                    view! {
                        <div on:click=move |_| notices.dismiss(id) class="cursor-pointer">
                            <Alert kind=AlertKind::from(notice.kind) message=notice.message />
                        </div>
                    }
                }
            />
        </div>
    }
}
