use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::extraction::model::{ImageDigest, ReceiptExtraction};

type Slot = Arc<AsyncMutex<Option<ReceiptExtraction>>>;

struct Entry {
    slot: Slot,
    /// Callers holding or waiting for the slot.
    users: usize,
}

/// One async slot per digest currently being extracted.
///
/// Holding a [`DigestPermit`] means no other caller is working on the same
/// digest. The holder leaves its result in the slot, so callers queued behind
/// it get the same record without touching the model or the cache. Entries are
/// dropped once every registered caller has finished or given up.
#[derive(Default)]
pub struct InFlightDigests {
    entries: Mutex<HashMap<ImageDigest, Entry>>,
}

impl InFlightDigests {
    pub async fn acquire(&self, digest: &ImageDigest) -> DigestPermit<'_> {
        let slot = {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            let entry = entries.entry(digest.clone()).or_insert_with(|| Entry {
                slot: Slot::default(),
                users: 0,
            });
            entry.users += 1;
            entry.slot.clone()
        };

        // Registered before waiting: a cancelled waiter still unregisters on drop.
        let mut permit = DigestPermit {
            owner: self,
            digest: digest.clone(),
            guard: None,
        };
        permit.guard = Some(slot.lock_owned().await);
        permit
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

pub struct DigestPermit<'a> {
    owner: &'a InFlightDigests,
    digest: ImageDigest,
    guard: Option<OwnedMutexGuard<Option<ReceiptExtraction>>>,
}

impl DigestPermit<'_> {
    /// Result left by an earlier holder of this digest, if it succeeded.
    pub fn finished(&self) -> Option<&ReceiptExtraction> {
        self.guard.as_deref().and_then(Option::as_ref)
    }

    /// Hands `extraction` to every caller queued behind this permit.
    pub fn complete(&mut self, extraction: &ReceiptExtraction) {
        if let Some(guard) = self.guard.as_mut() {
            **guard = Some(extraction.clone());
        }
    }
}

impl Drop for DigestPermit<'_> {
    fn drop(&mut self) {
        self.guard.take();

        let mut entries = self
            .owner
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = entries.get_mut(&self.digest) {
            entry.users = entry.users.saturating_sub(1);
            if entry.users == 0 {
                entries.remove(&self.digest);
            }
        }
    }
}
