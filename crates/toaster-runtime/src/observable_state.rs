//! Presentation slot with automatic change notifications.
//!
//! Mutation = notification. The only way to change the slot is through
//! [`ObservablePresentation::update`], which broadcasts the resulting
//! snapshot before releasing the lock.

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;

use toaster_core::ToastConfig;

use crate::log::toast_log;
use crate::state::PresentationState;
use crate::timer::DelayedTask;

// =============================================================================
// Slot
// =============================================================================

/// The single toast slot and its pending task.
#[derive(Debug, Default)]
pub struct Slot {
    pub is_presenting: bool,
    pub config: Option<Arc<ToastConfig>>,

    /// Bumped on every show and every dismiss.
    pub generation: u64,

    /// Auto-dismiss timer while presenting, grace clear while dismissing.
    pub pending: Option<DelayedTask>,
}

impl Slot {
    /// Cancel the pending task, if any.
    pub fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            toast_log!(
                "Cancelled {:?} timer (generation {})",
                task.kind(),
                task.generation()
            );
            task.cancel();
        }
    }

    /// Start a new generation, invalidating every task armed before it.
    pub fn next_generation(&mut self) -> u64 {
        self.cancel_pending();
        self.generation += 1;
        self.generation
    }

    fn snapshot(&self) -> PresentationState {
        PresentationState {
            is_presenting: self.is_presenting,
            config: self.config.clone(),
        }
    }
}

// =============================================================================
// ObservablePresentation
// =============================================================================

/// A presentation slot that broadcasts every change.
///
/// ## Thread Safety
///
/// Uses `parking_lot::Mutex` for the slot (never poisons) and
/// `tokio::sync::watch` for broadcasts. The snapshot is published while the
/// lock is held, so subscribers see changes in the order they happened.
/// Do not hold a `watch::Ref` across a call into the manager.
pub struct ObservablePresentation {
    inner: Mutex<Slot>,
    tx: watch::Sender<PresentationState>,
    rx: watch::Receiver<PresentationState>,
}

impl ObservablePresentation {
    /// Create an empty slot.
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(PresentationState::default());
        Self {
            inner: Mutex::new(Slot::default()),
            tx,
            rx,
        }
    }

    /// Mutate the slot and broadcast the result if it changed.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Slot) -> R,
    {
        let mut inner = self.inner.lock();
        let result = f(&mut inner);
        let snapshot = inner.snapshot();
        self.tx.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
        result
    }

    /// Read the slot with a closure.
    pub fn with_slot<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Slot) -> R,
    {
        let inner = self.inner.lock();
        f(&inner)
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> PresentationState {
        self.inner.lock().snapshot()
    }

    /// Subscribe to changes.
    ///
    /// The receiver sees the current state immediately and every later
    /// change. Clone it for multiple subscribers.
    pub fn subscribe(&self) -> watch::Receiver<PresentationState> {
        self.rx.clone()
    }

    /// Drop the pending task without broadcasting.
    pub fn cancel_pending(&mut self) {
        self.inner.get_mut().cancel_pending();
    }
}

impl Default for ObservablePresentation {
    fn default() -> Self {
        Self::new()
    }
}
