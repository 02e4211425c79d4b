//! Process-wide toast facade.
//!
//! Free functions that forward to the manager registered by
//! [`ToastContext::install_global`](crate::ToastContext::install_global).
//! At most one manager is registered per process. Calls made while none is
//! registered do nothing.

use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

use toaster_core::{Renderable, ToastConfig, ToastImageKind};

use crate::log::toast_log;
use crate::manager::ToastManager;

static GLOBAL: RwLock<Option<ToastManager>> = parking_lot::const_rwlock(None);

pub(crate) fn install(manager: ToastManager) -> bool {
    let mut global = GLOBAL.write();
    if global.is_some() {
        tracing::warn!("A toast context is already installed");
        return false;
    }
    *global = Some(manager);
    true
}

pub(crate) fn uninstall(manager: &ToastManager) {
    let mut global = GLOBAL.write();
    if global.as_ref().is_some_and(|current| current.same_instance(manager)) {
        *global = None;
    }
}

/// The registered manager, if any.
pub fn manager() -> Option<ToastManager> {
    GLOBAL.read().clone()
}

fn with_manager<F>(f: F)
where
    F: FnOnce(&ToastManager),
{
    // Clone out so the lock is not held while the manager runs.
    match manager() {
        Some(manager) => f(&manager),
        None => toast_log!("No toast context installed"),
    }
}

pub fn show(config: ToastConfig) {
    with_manager(|m| m.show(config));
}

pub fn show_text_with_image(text: impl Into<String>, image: Option<ToastImageKind>) {
    with_manager(|m| m.show_text_with_image(text, image));
}

pub fn show_with_leading(text: impl Into<String>, leading: Renderable) {
    with_manager(|m| m.show_with_leading(text, leading));
}

pub fn show_custom(content: Renderable) {
    with_manager(|m| m.show_custom(content));
}

pub fn show_text(text: impl Into<String>) {
    with_manager(|m| m.show_text(text));
}

pub fn show_image(text: impl Into<String>, image: ToastImageKind) {
    with_manager(|m| m.show_image(text, image));
}

pub fn show_success(text: impl Into<String>) {
    with_manager(|m| m.show_success(text));
}

pub fn show_error(text: impl Into<String>) {
    with_manager(|m| m.show_error(text));
}

pub fn show_warning(text: impl Into<String>) {
    with_manager(|m| m.show_warning(text));
}

pub fn show_loading(text: Option<String>) {
    with_manager(|m| m.show_loading(text));
}

pub fn show_auto_dismiss(text: impl Into<String>, image: Option<ToastImageKind>) {
    with_manager(|m| m.show_auto_dismiss(text, image));
}

pub fn show_full_screen(text: impl Into<String>) {
    with_manager(|m| m.show_full_screen(text));
}

pub fn show_timed(text: impl Into<String>, duration: Duration) {
    with_manager(|m| m.show_timed(text, duration));
}

pub fn dismiss() {
    with_manager(ToastManager::dismiss);
}

pub fn handle_tap() {
    with_manager(ToastManager::handle_tap);
}

pub fn is_presenting() -> bool {
    manager().is_some_and(|m| m.is_presenting())
}

pub fn current_config() -> Option<Arc<ToastConfig>> {
    manager().and_then(|m| m.current_config())
}
