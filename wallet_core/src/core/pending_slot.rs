use crate::core::provider::ProviderId;
use log::debug;
use std::sync::{Arc, Mutex, MutexGuard};

/// The single-concurrency guard: which provider, if any, currently has an
/// in-flight connection attempt.
///
/// Cloning hands out another handle to the *same* slot, so managers that
/// share a slot also share the at-most-one-attempt rule. A fresh slot per
/// manager keeps managers fully independent.
#[derive(Debug, Clone, Default)]
pub struct PendingSlot {
    inner: Arc<Mutex<Option<ProviderId>>>,
}

/// Proof of ownership of the slot. Dropping it clears the slot.
#[derive(Debug)]
pub struct SlotClaim {
    slot: PendingSlot,
    provider: ProviderId,
}

impl PendingSlot {
    pub fn new() -> Self {
        Self::default()
    }

    // Never held across an await; a poisoned lock still holds a coherent Option.
    fn lock(&self) -> MutexGuard<'_, Option<ProviderId>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Atomically claim the slot for `provider`.
    ///
    /// Returns `None` when another attempt already holds it.
    pub fn try_claim(&self, provider: &ProviderId) -> Option<SlotClaim> {
        let mut current = self.lock();
        if let Some(holder) = current.as_ref() {
            debug!("Slot busy with '{}', refusing '{}'", holder, provider);
            return None;
        }
        *current = Some(provider.clone());
        Some(SlotClaim {
            slot: self.clone(),
            provider: provider.clone(),
        })
    }

    /// Snapshot of the provider currently connecting.
    pub fn current(&self) -> Option<ProviderId> {
        self.lock().clone()
    }

    pub fn is_free(&self) -> bool {
        self.lock().is_none()
    }
}

impl Drop for SlotClaim {
    fn drop(&mut self) {
        let mut current = self.slot.lock();
        if current.as_ref() == Some(&self.provider) {
            *current = None;
        }
        debug!("Slot released by '{}'", self.provider);
    }
}
