//! Overlay integration.
//!
//! This module provides the bridge between the manager and whatever draws
//! the toast. The [`OverlaySurface`] trait is UI-independent and mockable
//! for testing.
//!
//! ## Reactive State
//!
//! [`pump_overlay`] follows the manager's watch channel and pushes each new
//! state into a surface until the manager is dropped. Taps travel the other
//! way through [`OverlayBinding::tap`].

use std::sync::Arc;

use tokio::sync::watch;

use toaster_core::{ToastConfig, ToastLayout};

use crate::log::toast_log;
use crate::manager::ToastManager;
use crate::state::PresentationState;

// =============================================================================
// Overlay Frame
// =============================================================================

/// What the overlay should draw right now.
#[derive(Debug, Clone)]
pub struct OverlayFrame {
    /// Show the transparent full-screen tap layer.
    pub intercept_layer: bool,

    /// The toast is leaving; play the exit transition.
    pub exiting: bool,

    pub config: Arc<ToastConfig>,
}

impl OverlayFrame {
    /// Build a frame from a state snapshot. `None` means draw nothing.
    pub fn from_state(state: &PresentationState) -> Option<Self> {
        let config = state.config.clone()?;
        Some(Self {
            intercept_layer: state.shows_intercept_layer(),
            exiting: !state.is_presenting,
            config,
        })
    }

    pub fn layout(&self) -> ToastLayout<'_> {
        self.config.layout()
    }
}

// =============================================================================
// Overlay Surface
// =============================================================================

/// Something that can draw the toast overlay.
#[cfg_attr(test, mockall::automock)]
pub trait OverlaySurface {
    /// Draw (or redraw) the toast.
    fn present(&mut self, frame: &OverlayFrame);

    /// Remove everything from the overlay.
    fn clear(&mut self);
}

fn render<S: OverlaySurface + ?Sized>(surface: &mut S, state: &PresentationState) {
    match OverlayFrame::from_state(state) {
        Some(frame) => surface.present(&frame),
        None => surface.clear(),
    }
}

/// Drive `surface` from a manager subscription.
///
/// Renders the current state, then every change. Returns the surface once
/// the manager is gone.
pub async fn pump_overlay<S: OverlaySurface>(
    mut rx: watch::Receiver<PresentationState>,
    mut surface: S,
) -> S {
    let state = rx.borrow_and_update().clone();
    render(&mut surface, &state);

    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();
        render(&mut surface, &state);
    }

    tracing::debug!("Overlay pump stopped: manager dropped");
    surface
}

// =============================================================================
// Taps
// =============================================================================

/// Where a tap landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapTarget {
    /// The transparent full-screen layer.
    InterceptLayer,
    /// The toast itself.
    ToastBody,
}

/// Routes overlay input back into a manager.
#[derive(Clone)]
pub struct OverlayBinding {
    manager: ToastManager,
}

impl OverlayBinding {
    pub fn new(manager: ToastManager) -> Self {
        Self { manager }
    }

    /// Forward a tap. Taps on the intercept layer only count while that
    /// layer is actually shown.
    pub fn tap(&self, target: TapTarget) {
        if target == TapTarget::InterceptLayer && !self.manager.state().shows_intercept_layer() {
            toast_log!("Tap on hidden intercept layer ignored");
            return;
        }
        self.manager.handle_tap();
    }

    /// Render the current state once.
    pub fn sync(&self, surface: &mut dyn OverlaySurface) {
        render(surface, &self.manager.state());
    }

    pub fn manager(&self) -> &ToastManager {
        &self.manager
    }
}
