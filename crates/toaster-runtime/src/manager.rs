//! Toast Presentation Manager
//!
//! The ToastManager owns the single toast slot and its timers:
//! - `show` replaces whatever is on screen and re-arms auto-dismiss
//! - `dismiss` starts the exit transition, then clears after a grace period
//! - `handle_tap` dismisses when the shown toast allows it
//!
//! ## State Machine
//!
//! ```text
//!            show                  dismiss
//!   Idle ───────────▶ Presenting ───────────▶ Dismissing
//!    ▲                 │     ▲ show             │     │
//!    │                 └─────┘ (replace)        │     │ show
//!    │                                          │     ▼
//!    └──────────── grace period ────────────────┘  Presenting
//! ```
//!
//! Every transition bumps the generation and cancels the pending task, so a
//! timer from an earlier toast can never dismiss or clear a later one.

use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;

use toaster_core::{Presets, Renderable, ToastConfig, ToastError, ToastImageKind, ToastSettings};

use crate::log::{self, toast_log};
use crate::observable_state::{ObservablePresentation, Slot};
use crate::state::{PresentationState, ToastPhase};
use crate::timer::{DelayedTask, TimerKind};

// =============================================================================
// Shared State
// =============================================================================

struct Shared {
    /// Slot and pending task. Mutations auto-broadcast to subscribers.
    state: ObservablePresentation,

    /// Runtime the timers are spawned on.
    runtime: Handle,

    grace_period: Duration,
}

impl Shared {
    fn show(self: &Arc<Self>, config: Arc<ToastConfig>) {
        self.state.update(|slot| {
            let generation = slot.next_generation();
            let duration = config.duration_value();

            slot.config = Some(config);
            slot.is_presenting = true;

            if !duration.is_zero() {
                slot.pending = Some(self.arm(TimerKind::AutoDismiss, generation, duration));
                toast_log!("Auto-dismiss armed for {:?} (generation {})", duration, generation);
            }
        });
    }

    fn dismiss(self: &Arc<Self>) {
        self.state.update(|slot| self.dismiss_slot(slot));
    }

    /// Presenting -> Dismissing. Returns false when nothing was presenting.
    fn dismiss_slot(self: &Arc<Self>, slot: &mut Slot) -> bool {
        if !slot.is_presenting {
            toast_log!("Dismiss ignored: nothing presenting");
            return false;
        }

        let generation = slot.next_generation();
        slot.is_presenting = false;

        let skip_transition = self.grace_period.is_zero()
            || slot
                .config
                .as_ref()
                .is_some_and(|config| config.transition_disabled());

        if skip_transition {
            slot.config = None;
            toast_log!("Toast dismissed and cleared");
        } else {
            slot.pending = Some(self.arm(TimerKind::GraceClear, generation, self.grace_period));
            toast_log!("Toast dismissed, clearing in {:?}", self.grace_period);
        }
        true
    }

    fn handle_tap(self: &Arc<Self>) {
        self.state.update(|slot| {
            let removable = slot.is_presenting
                && slot
                    .config
                    .as_ref()
                    .is_some_and(|config| config.can_tap_remove());

            if removable {
                toast_log!("Tap dismissed toast");
                self.dismiss_slot(slot);
            } else {
                toast_log!("Tap ignored: toast not removable");
            }
        });
    }

    fn arm(self: &Arc<Self>, kind: TimerKind, generation: u64, delay: Duration) -> DelayedTask {
        let weak = Arc::downgrade(self);
        DelayedTask::spawn(&self.runtime, kind, generation, delay, move |kind, generation| {
            fire(&weak, kind, generation);
        })
    }

    fn shutdown(&self) {
        self.state.update(|slot| {
            slot.next_generation();
            slot.is_presenting = false;
            slot.config = None;
        });
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        self.state.cancel_pending();
    }
}

/// Timer callback. Holds only a weak reference, so a pending timer never
/// keeps a dropped manager alive.
fn fire(weak: &Weak<Shared>, kind: TimerKind, generation: u64) {
    let Some(shared) = weak.upgrade() else {
        return;
    };

    shared.state.update(|slot| {
        if slot.generation != generation {
            toast_log!("Stale {:?} timer ignored (generation {})", kind, generation);
            return;
        }

        // This task is the pending one; release it without aborting itself.
        slot.pending.take();

        match kind {
            TimerKind::AutoDismiss => {
                toast_log!("Auto-dismiss fired");
                shared.dismiss_slot(slot);
            }
            TimerKind::GraceClear => {
                slot.config = None;
                toast_log!("Grace period over, toast cleared");
            }
        }
    });
}

// =============================================================================
// ToastManager
// =============================================================================

/// Handle to a toast presentation manager.
///
/// Cheap to clone; all clones drive the same slot. Dropping the last clone
/// cancels any pending timer.
///
/// ## Reactive State
///
/// Subscribe via [`ToastManager::subscribe`]. Every state change is broadcast
/// to subscribers; no-op calls broadcast nothing.
///
/// ## Usage
///
/// ```ignore
/// let manager = ToastManager::new(&ToastSettings::default())?;
/// let rx = manager.subscribe();
///
/// manager.show_success("Saved");
/// assert!(rx.borrow().is_presenting);
/// ```
#[derive(Clone)]
pub struct ToastManager {
    shared: Arc<Shared>,
    presets: Arc<Presets>,
}

impl ToastManager {
    /// Create a manager on the current tokio runtime.
    pub fn new(settings: &ToastSettings) -> Result<Self, ToastError> {
        let runtime = Handle::try_current().map_err(|_| ToastError::RuntimeUnavailable)?;
        Ok(Self::with_handle(settings, runtime))
    }

    /// Create a manager whose timers run on `runtime`.
    pub fn with_handle(settings: &ToastSettings, runtime: Handle) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: ObservablePresentation::new(),
                runtime,
                grace_period: settings.grace_period(),
            }),
            presets: Arc::new(Presets::from_settings(settings)),
        }
    }

    /// Whether two handles drive the same manager.
    pub fn same_instance(&self, other: &ToastManager) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }

    /// Preset factory built from this manager's settings.
    pub fn presets(&self) -> &Presets {
        &self.presets
    }

    // =========================================================================
    // Show
    // =========================================================================

    /// Show a toast, replacing any toast already shown.
    ///
    /// Text-based configs with empty text are ignored.
    pub fn show(&self, config: ToastConfig) {
        if config.has_empty_text() {
            toast_log!("Show ignored: empty text");
            return;
        }

        toast_log!("Showing toast: {:?}", config.text_content());
        self.shared.show(Arc::new(config));
    }

    /// Show text with an optional image. Stays until dismissed.
    pub fn show_text_with_image(&self, text: impl Into<String>, image: Option<ToastImageKind>) {
        self.show(ToastConfig::text(text, image));
    }

    /// Show text with custom content above it. Stays until dismissed.
    pub fn show_with_leading(&self, text: impl Into<String>, leading: Renderable) {
        self.show(ToastConfig::with_leading(text, leading));
    }

    /// Show custom content in place of the default layout. Stays until
    /// dismissed.
    pub fn show_custom(&self, content: Renderable) {
        self.show(ToastConfig::custom(content));
    }

    // =========================================================================
    // Presets
    // =========================================================================

    pub fn show_text(&self, text: impl Into<String>) {
        self.show(self.presets.text(text));
    }

    pub fn show_image(&self, text: impl Into<String>, image: ToastImageKind) {
        self.show(self.presets.image(text, image));
    }

    pub fn show_success(&self, text: impl Into<String>) {
        self.show(self.presets.success(text));
    }

    pub fn show_error(&self, text: impl Into<String>) {
        self.show(self.presets.error(text));
    }

    pub fn show_warning(&self, text: impl Into<String>) {
        self.show(self.presets.warning(text));
    }

    /// Full-screen spinner that ignores taps and stays until dismissed.
    pub fn show_loading(&self, text: Option<String>) {
        self.show(self.presets.loading(text));
    }

    pub fn show_auto_dismiss(&self, text: impl Into<String>, image: Option<ToastImageKind>) {
        self.show(self.presets.auto_dismiss(text, image));
    }

    pub fn show_full_screen(&self, text: impl Into<String>) {
        self.show(self.presets.full_screen(text));
    }

    pub fn show_timed(&self, text: impl Into<String>, duration: Duration) {
        self.show(self.presets.timed(text, duration));
    }

    // =========================================================================
    // Dismiss
    // =========================================================================

    /// Dismiss the current toast. Does nothing when none is presenting.
    pub fn dismiss(&self) {
        toast_log!("Dismiss requested");
        self.shared.dismiss();
    }

    /// Route a tap from the overlay. Dismisses only if the presented toast
    /// allows tap removal.
    pub fn handle_tap(&self) {
        self.shared.handle_tap();
    }

    /// Cancel pending timers and return to idle without a grace period.
    pub fn shutdown(&self) {
        toast_log!("Toast manager shutting down");
        self.shared.shutdown();
    }

    // =========================================================================
    // Read Methods
    // =========================================================================

    pub fn is_presenting(&self) -> bool {
        self.shared.state.with_slot(|slot| slot.is_presenting)
    }

    pub fn current_config(&self) -> Option<Arc<ToastConfig>> {
        self.shared.state.with_slot(|slot| slot.config.clone())
    }

    pub fn phase(&self) -> ToastPhase {
        self.state().phase()
    }

    pub fn state(&self) -> PresentationState {
        self.shared.state.snapshot()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<PresentationState> {
        self.shared.state.subscribe()
    }

    // =========================================================================
    // Debug Log
    // =========================================================================

    pub fn enable_debug_log() {
        log::enable_debug_log();
    }

    pub fn disable_debug_log() {
        log::disable_debug_log();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> ToastManager {
        ToastManager::new(&ToastSettings::default()).unwrap()
    }

    /// Advance virtual time, then let woken timer tasks run.
    async fn advance(duration: Duration) {
        tokio::time::sleep(duration).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    fn text_of(manager: &ToastManager) -> Option<String> {
        manager
            .current_config()
            .and_then(|config| config.text_content().map(str::to_string))
    }

    #[test]
    fn test_new_outside_runtime_fails() {
        let result = ToastManager::new(&ToastSettings::default());
        assert!(matches!(result, Err(ToastError::RuntimeUnavailable)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_presents_config() {
        let manager = manager();
        assert_eq!(manager.phase(), ToastPhase::Idle);

        manager.show_text_with_image("Hello", None);

        assert!(manager.is_presenting());
        assert_eq!(manager.phase(), ToastPhase::Presenting);
        assert_eq!(text_of(&manager).as_deref(), Some("Hello"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_text_is_ignored() {
        let manager = manager();
        let mut rx = manager.subscribe();
        rx.borrow_and_update();

        manager.show(ToastConfig::text("", None).duration_secs(1.0));
        manager.show_with_leading("", Renderable::label("*"));

        assert!(!rx.has_changed().unwrap());
        assert_eq!(manager.phase(), ToastPhase::Idle);
        assert!(manager.shared.state.with_slot(|slot| slot.pending.is_none()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_text_does_not_replace_current_toast() {
        let manager = manager();
        manager.show_timed("Keep", Duration::from_secs(2));

        manager.show_text("");

        assert_eq!(text_of(&manager).as_deref(), Some("Keep"));
        advance(Duration::from_secs(2)).await;
        assert!(!manager.is_presenting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_content_shows_without_text() {
        let manager = manager();

        manager.show_custom(Renderable::label("Custom"));

        assert!(manager.is_presenting());
        assert!(manager.current_config().unwrap().custom_content().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss_after_duration() {
        let manager = manager();

        manager.show(ToastConfig::text("Bye", None).duration_secs(2.0));

        advance(Duration::from_millis(1999)).await;
        assert!(manager.is_presenting());

        advance(Duration::from_millis(1)).await;
        assert!(!manager.is_presenting());
        assert_eq!(manager.phase(), ToastPhase::Dismissing);

        advance(Duration::from_millis(300)).await;
        assert_eq!(manager.phase(), ToastPhase::Idle);
        assert!(manager.current_config().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_duration_stays() {
        let manager = manager();

        manager.show_text_with_image("Stay", None);
        advance(Duration::from_secs(3600)).await;

        assert!(manager.is_presenting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_replace_cancels_previous_timer() {
        let manager = manager();

        manager.show(ToastConfig::text("First", None).duration_secs(5.0));
        advance(Duration::from_secs(1)).await;
        manager.show(ToastConfig::text("Second", None));

        advance(Duration::from_secs(10)).await;
        assert!(manager.is_presenting());
        assert_eq!(text_of(&manager).as_deref(), Some("Second"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_replace_scenario() {
        let manager = manager();

        manager.show(ToastConfig::text("A", None).duration_secs(2.0));
        assert!(manager.is_presenting());

        advance(Duration::from_secs(1)).await;
        manager.show(ToastConfig::text("B", None).duration_secs(5.0));
        assert_eq!(text_of(&manager).as_deref(), Some("B"));

        // t = 2: A's timer must not fire.
        advance(Duration::from_secs(1)).await;
        assert!(manager.is_presenting());
        assert_eq!(text_of(&manager).as_deref(), Some("B"));

        // t = 6: B's timer fires.
        advance(Duration::from_secs(4)).await;
        assert!(!manager.is_presenting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_latest_config_is_ever_visible() {
        let manager = manager();
        let mut rx = manager.subscribe();
        let mut seen = Vec::new();

        for name in ["one", "two", "three"] {
            manager.show(ToastConfig::text(name, None).duration_secs(1.0));
            let state = rx.borrow_and_update().clone();
            seen.push(state.config.and_then(|c| c.text_content().map(str::to_string)));
        }

        assert_eq!(
            seen,
            vec![
                Some("one".to_string()),
                Some("two".to_string()),
                Some("three".to_string())
            ]
        );

        advance(Duration::from_secs(1)).await;
        let state = rx.borrow_and_update().clone();
        assert!(!state.is_presenting);
        assert_eq!(
            state.config.as_deref().and_then(ToastConfig::text_content),
            Some("three")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_clears_after_grace_period() {
        let manager = manager();
        manager.show_text_with_image("Hi", None);

        manager.dismiss();
        assert!(!manager.is_presenting());
        assert!(manager.current_config().is_some());

        advance(Duration::from_millis(299)).await;
        assert!(manager.current_config().is_some());

        advance(Duration::from_millis(1)).await;
        assert!(manager.current_config().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_is_idempotent() {
        let manager = manager();
        manager.show_text_with_image("Hi", None);

        manager.dismiss();
        advance(Duration::from_millis(200)).await;
        manager.dismiss();

        // Second call must not push the clear back.
        advance(Duration::from_millis(100)).await;
        assert_eq!(manager.phase(), ToastPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_when_idle_is_noop() {
        let manager = manager();
        let mut rx = manager.subscribe();
        rx.borrow_and_update();

        manager.dismiss();
        manager.handle_tap();

        assert!(!rx.has_changed().unwrap());
        assert_eq!(manager.phase(), ToastPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_show_during_grace_period_survives_clear() {
        let manager = manager();
        manager.show_text_with_image("Old", None);
        manager.dismiss();

        advance(Duration::from_millis(100)).await;
        manager.show_text_with_image("New", None);
        assert_eq!(manager.phase(), ToastPhase::Presenting);

        advance(Duration::from_secs(5)).await;
        assert!(manager.is_presenting());
        assert_eq!(text_of(&manager).as_deref(), Some("New"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_dismiss_cancels_auto_dismiss() {
        let manager = manager();
        manager.show(ToastConfig::text("A", None).duration_secs(2.0));
        manager.dismiss();

        advance(Duration::from_millis(500)).await;
        manager.show_text_with_image("B", None);

        // A's 2s timer would fire here if it were still armed.
        advance(Duration::from_secs(3)).await;
        assert!(manager.is_presenting());
        assert_eq!(text_of(&manager).as_deref(), Some("B"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disable_transition_clears_immediately() {
        let manager = manager();
        manager.show(ToastConfig::text("Quick", None).disable_transition(true));

        manager.dismiss();

        assert_eq!(manager.phase(), ToastPhase::Idle);
        assert!(manager.current_config().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_grace_period_clears_immediately() {
        let settings = ToastSettings {
            grace_period_ms: 0,
            ..ToastSettings::default()
        };
        let manager = ToastManager::new(&settings).unwrap();
        manager.show_text_with_image("Hi", None);

        manager.dismiss();

        assert_eq!(manager.phase(), ToastPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tap_without_tap_remove_is_ignored() {
        let manager = manager();
        manager.show(ToastConfig::text("Sticky", None).full_screen(true));

        manager.handle_tap();

        assert!(manager.is_presenting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tap_with_tap_remove_dismisses() {
        let manager = manager();
        manager.show(ToastConfig::text("Tap me", None).tap_to_remove(true));

        manager.handle_tap();

        assert_eq!(manager.phase(), ToastPhase::Dismissing);
        advance(Duration::from_millis(300)).await;
        assert_eq!(manager.phase(), ToastPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tap_while_dismissing_is_ignored() {
        let manager = manager();
        manager.show(ToastConfig::text("Tap me", None).tap_to_remove(true));
        manager.dismiss();

        advance(Duration::from_millis(200)).await;
        manager.handle_tap();

        advance(Duration::from_millis(100)).await;
        assert_eq!(manager.phase(), ToastPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_presets() {
        let manager = manager();

        manager.show_loading(None);
        let config = manager.current_config().unwrap();
        assert_eq!(config.image(), Some(&ToastImageKind::Spinner));
        assert!(config.is_full_screen());
        manager.handle_tap();
        assert!(manager.is_presenting());

        manager.show_success("Saved");
        advance(Duration::from_millis(1999)).await;
        assert!(manager.is_presenting());
        advance(Duration::from_millis(1)).await;
        assert!(!manager.is_presenting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_timers() {
        let manager = manager();
        manager.show(ToastConfig::text("A", None).duration_secs(1.0));

        manager.shutdown();
        assert_eq!(manager.phase(), ToastPhase::Idle);

        advance(Duration::from_secs(2)).await;
        assert_eq!(manager.phase(), ToastPhase::Idle);
        assert!(manager.shared.state.with_slot(|slot| slot.pending.is_none()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_timer_does_not_keep_manager_alive() {
        let manager = manager();
        let mut rx = manager.subscribe();
        manager.show(ToastConfig::text("A", None).duration_secs(5.0));
        rx.borrow_and_update();

        drop(manager);

        // Sender side is gone once the manager is dropped.
        assert!(rx.changed().await.is_err());
        advance(Duration::from_secs(10)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_clones_share_state() {
        let a = manager();
        let b = a.clone();

        a.show_text_with_image("Shared", None);

        assert!(b.is_presenting());
        assert!(a.same_instance(&b));
        assert!(!a.same_instance(&manager()));
    }
}
