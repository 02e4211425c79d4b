//! Presentation runtime for the Toaster notification overlay.
//!
//! This crate provides:
//! - `ToastManager` - the single-slot show/dismiss state machine
//! - Observable presentation state over `tokio::sync::watch`
//! - Generation-keyed auto-dismiss and grace-period timers
//! - Overlay glue for hosts that draw the toast
//! - `ToastContext` and the process-wide `toast` facade

pub mod context;
pub mod log;
pub mod manager;
mod observable_state;
pub mod overlay;
pub mod state;
mod timer;
pub mod toast;

// Re-export commonly used types
pub use context::ToastContext;
pub use log::{disable_debug_log, enable_debug_log, is_debug_log_enabled};
pub use manager::ToastManager;
pub use overlay::{pump_overlay, OverlayBinding, OverlayFrame, OverlaySurface, TapTarget};
pub use state::{PresentationState, ToastPhase};

// Re-export toaster_core types for convenience
pub use toaster_core::{
    Leading, OpaqueRenderable, Presets, Renderable, ToastConfig, ToastError, ToastImageKind,
    ToastLayout, ToastSettings,
};
