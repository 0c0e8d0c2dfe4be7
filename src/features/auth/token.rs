//! Login tokens handed back by the identity provider in the URL fragment.
//! A token is only a claim: it proves nothing until the backend redeems it.

use secrecy::{ExposeSecret, SecretString};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Fragment field carrying the provider's token.
pub const CALLBACK_FIELD: &str = "session_id";
/// Substring that marks a fragment as a login callback.
pub const CALLBACK_MARKER: &str = "session_id=";

/// Opaque login token. Redacted in `Debug` and never persisted.
pub struct SessionToken(SecretString);

impl SessionToken {
    /// Wraps a raw token; blank values are rejected.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(SecretString::from(trimmed.to_string())))
        }
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Stable in-process fingerprint so the token itself need not be retained.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.expose().hash(&mut hasher);
        hasher.finish()
    }
}

impl Clone for SessionToken {
    fn clone(&self) -> Self {
        Self(SecretString::from(self.expose().to_string()))
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SessionToken([REDACTED])")
    }
}

/// True when the fragment (with or without a leading `#`) is a login callback.
pub fn has_callback_marker(fragment: &str) -> bool {
    fragment.contains(CALLBACK_MARKER)
}

/// Parses the fragment as a query string and extracts the token field.
pub fn token_from_fragment(fragment: &str) -> Option<SessionToken> {
    let trimmed = fragment.trim_start_matches('#');
    url::form_urlencoded::parse(trimmed.as_bytes())
        .find(|(key, _)| key == CALLBACK_FIELD)
        .and_then(|(_, value)| SessionToken::new(&value))
}
