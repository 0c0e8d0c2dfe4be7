//! Shared frontend utilities for API access, configuration, errors, logging and
//! build metadata.
//!
//! ## Session model
//!
//! The backend owns the session: it sets an `HttpOnly` cookie on a successful
//! login, signup or external-login exchange, and clears it on logout. The
//! client never reads that cookie; it only asks `GET /api/auth/me` who it is,
//! always with `credentials: include`.
//!
//! ### External login
//!
//! 1. **Redirect:** The landing page sends the browser to the identity provider
//!    with `?redirect={origin}/dashboard`.
//! 2. **Return:** The provider comes back with `#session_id=...` in the URL
//!    fragment.
//! 3. **Exchange:** The router notices the fragment before matching any route
//!    and POSTs the token to `/api/auth/google/session`, which sets the cookie.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. Callers must avoid logging token
//! or password material.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod telemetry;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{
    get_json, get_json_with_credentials, post_empty_with_credentials, post_json,
    post_json_with_credentials,
};
pub(crate) use errors::AppError;
