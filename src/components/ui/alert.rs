//! Alert banners for success and error messages. Messages must be safe to render
//! and should never include secrets or tokens.

use crate::features::notice::NoticeKind;
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
}

impl From<NoticeKind> for AlertKind {
    fn from(kind: NoticeKind) -> Self {
        match kind {
            NoticeKind::Success => AlertKind::Success,
            NoticeKind::Error => AlertKind::Error,
        }
    }
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-lg border border-red-400/40 bg-red-900/40 px-4 py-3 text-sm text-red-100 shadow-lg"
        }
        AlertKind::Success => {
            "rounded-lg border border-emerald-400/40 bg-emerald-900/40 px-4 py-3 text-sm text-emerald-100 shadow-lg"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}
