//! Auth feature module: fragment-based login completion, session gating,
//! email/password forms and logout. It keeps authentication decisions out of
//! the views and must stay aligned with the backend's cookie-session contract.
//! This module touches security boundaries and must avoid logging token or
//! password material.
//!
//! Flow overview: the router resolves a `Navigation` before matching routes; a
//! login callback claims the `ExchangeLatch` and redeems its token, then hands
//! the identity to the dashboard guard through the `IdentityHandoff`. Guards
//! otherwise ask `GET /api/auth/me` on every entry and send anonymous visitors
//! home without a notice.

pub(crate) mod client;
pub(crate) mod credentials;
pub(crate) mod exchange;
pub(crate) mod external;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod handoff;
pub(crate) mod navigation;
pub(crate) mod resolver;
pub(crate) mod state;
#[cfg(test)]
mod test_support;
pub(crate) mod token;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::RequireSession;
