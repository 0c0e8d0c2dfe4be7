//! Layout components shared across routes.

mod site_shell;

pub(crate) use site_shell::SiteShell;
