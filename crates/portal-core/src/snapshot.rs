use std::sync::{Arc, Mutex, PoisonError, Weak};

type Slot<T> = Mutex<Option<T>>;

/// One-slot channel: each publish overwrites the pending value, so a stalled
/// consumer costs one value of memory, never a backlog.
pub fn channel<T: Copy + Send>() -> (Publisher<T>, Latest<T>) {
    let slot = Arc::new(Mutex::new(None));
    (
        Publisher {
            slot: Arc::downgrade(&slot),
        },
        Latest { slot, last: None },
    )
}

#[derive(Clone, Debug)]
pub struct Publisher<T> {
    slot: Weak<Slot<T>>,
}

impl<T: Copy + Send> Publisher<T> {
    /// Returns false once the consumer has gone away.
    pub fn publish(&self, value: T) -> bool {
        let Some(slot) = self.slot.upgrade() else {
            return false;
        };
        // the slot only ever holds a plain value, so a poisoned lock is still usable
        *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(value);
        true
    }
}

#[derive(Debug)]
pub struct Latest<T> {
    slot: Arc<Slot<T>>,
    last: Option<T>,
}

impl<T: Copy + Send> Latest<T> {
    /// Takes the pending value, if any, and returns the newest value seen so far.
    pub fn latest(&mut self) -> Option<T> {
        let pending = self.slot.lock().unwrap_or_else(PoisonError::into_inner).take();
        if pending.is_some() {
            self.last = pending;
        }
        self.last
    }
}
