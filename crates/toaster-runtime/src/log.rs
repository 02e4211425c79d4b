//! Process-wide debug log toggle.
//!
//! Transition logs are off by default. The toggle only decides whether
//! `toast_log!` emits anything; it never changes how the manager behaves.

use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_LOG: AtomicBool = AtomicBool::new(false);

/// Turn on transition logging.
pub fn enable_debug_log() {
    DEBUG_LOG.store(true, Ordering::Relaxed);
}

/// Turn off transition logging.
pub fn disable_debug_log() {
    DEBUG_LOG.store(false, Ordering::Relaxed);
}

/// Whether transition logging is on.
pub fn is_debug_log_enabled() -> bool {
    DEBUG_LOG.load(Ordering::Relaxed)
}

/// Log a transition when the debug toggle is on.
///
/// Emitted at INFO under the `toaster` target; the toggle is the filter.
macro_rules! toast_log {
    ($($arg:tt)*) => {
        if $crate::log::is_debug_log_enabled() {
            tracing::info!(target: "toaster", $($arg)*);
        }
    };
}

pub(crate) use toast_log;
