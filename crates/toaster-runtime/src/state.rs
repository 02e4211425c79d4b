//! Observable presentation state.

use std::sync::Arc;

use toaster_core::ToastConfig;

/// Where the manager is in the show/dismiss cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPhase {
    /// Nothing shown.
    #[default]
    Idle,
    /// A toast is on screen.
    Presenting,
    /// Dismissed; the config is kept until the grace period ends so the
    /// overlay can play its exit transition.
    Dismissing,
}

/// Snapshot of what the overlay should show.
///
/// Two snapshots are equal when they agree on `is_presenting` and hold the
/// same config instance.
#[derive(Debug, Clone, Default)]
pub struct PresentationState {
    pub is_presenting: bool,
    pub config: Option<Arc<ToastConfig>>,
}

impl PresentationState {
    pub fn phase(&self) -> ToastPhase {
        match (self.is_presenting, &self.config) {
            (true, _) => ToastPhase::Presenting,
            (false, Some(_)) => ToastPhase::Dismissing,
            (false, None) => ToastPhase::Idle,
        }
    }

    /// Whether the full-screen tap layer should be shown.
    pub fn shows_intercept_layer(&self) -> bool {
        self.is_presenting
            && self
                .config
                .as_ref()
                .is_some_and(|config| config.is_full_screen())
    }
}

impl PartialEq for PresentationState {
    fn eq(&self, other: &Self) -> bool {
        self.is_presenting == other.is_presenting
            && match (&self.config, &other.config) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}
