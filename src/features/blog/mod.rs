//! Blog content read from the public content API. No credentials are sent.

pub(crate) mod client;
pub(crate) mod types;
