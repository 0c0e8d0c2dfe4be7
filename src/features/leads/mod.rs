//! Marketing lead capture (free guide signup). Fire-and-forget from the
//! client's side: the backend deduplicates by email.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
