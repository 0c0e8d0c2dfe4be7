//! Domain-level frontend features (auth, blog, leads, course content) and their
//! shared logic. Routes import these modules to keep view code focused while
//! keeping session handling and API access in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod blog;
pub(crate) mod course;
pub(crate) mod leads;
pub(crate) mod notice;
pub(crate) mod pricing;
