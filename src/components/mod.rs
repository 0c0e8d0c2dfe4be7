//! Shared UI components exported for routes and features.

pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use layout::SiteShell;
pub(crate) use ui::{Button, ButtonVariant, Spinner, Toaster};
