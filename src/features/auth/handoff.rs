use super::types::Identity;
use std::sync::{Arc, Mutex};

/// One-shot slot that carries a just-resolved identity from a login flow to
/// the next protected route, so the guard can skip a read-after-write.
#[derive(Clone, Default)]
pub struct IdentityHandoff {
    slot: Arc<Mutex<Option<Identity>>>,
}

impl IdentityHandoff {
    pub fn put(&self, identity: Identity) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(identity);
        }
    }

    /// Removes and returns the carried identity; later calls see `None`.
    pub fn take(&self) -> Option<Identity> {
        self.slot.lock().ok().and_then(|mut slot| slot.take())
    }

    pub fn clear(&self) {
        let _ = self.take();
    }
}

#[cfg(test)]
mod tests {
    use super::IdentityHandoff;
    use crate::features::auth::test_support::identity;

    #[test]
    fn take_consumes_the_identity_once() {
        let handoff = IdentityHandoff::default();
        handoff.put(identity("u1"));
        assert_eq!(handoff.take().map(|i| i.user_id), Some("u1".to_string()));
        assert!(handoff.take().is_none());
    }

    #[test]
    fn clones_share_the_slot() {
        let handoff = IdentityHandoff::default();
        let other = handoff.clone();
        handoff.put(identity("u2"));
        other.clear();
        assert!(handoff.take().is_none());
    }
}
