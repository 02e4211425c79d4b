//! Application-scoped toast context.
//!
//! A host creates one `ToastContext` at startup and tears it down on exit.
//! The context owns the manager and can register it as the process-wide
//! instance used by the [`crate::toast`] facade.

use tokio::runtime::Handle;

use toaster_core::{ToastError, ToastSettings};

use crate::log;
use crate::manager::ToastManager;
use crate::toast;

/// Owns the toast manager for the lifetime of an application.
pub struct ToastContext {
    manager: ToastManager,
    settings: ToastSettings,
    torn_down: bool,
}

impl ToastContext {
    /// Start a context on the current tokio runtime.
    pub fn start(settings: ToastSettings) -> Result<Self, ToastError> {
        let runtime = Handle::try_current().map_err(|_| ToastError::RuntimeUnavailable)?;
        Ok(Self::start_with_handle(settings, runtime))
    }

    /// Start a context whose timers run on `runtime`.
    pub fn start_with_handle(settings: ToastSettings, runtime: Handle) -> Self {
        if settings.debug_log {
            log::enable_debug_log();
        }

        let manager = ToastManager::with_handle(&settings, runtime);
        tracing::info!(
            "Toast context started (grace period {:?})",
            settings.grace_period()
        );

        Self {
            manager,
            settings,
            torn_down: false,
        }
    }

    pub fn manager(&self) -> &ToastManager {
        &self.manager
    }

    pub fn settings(&self) -> &ToastSettings {
        &self.settings
    }

    /// Register this context's manager as the process-wide instance.
    ///
    /// Returns `false` if another context is already registered.
    pub fn install_global(&self) -> bool {
        toast::install(self.manager.clone())
    }

    /// Cancel timers, clear the overlay and unregister the global instance.
    pub fn shutdown(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;

        toast::uninstall(&self.manager);
        self.manager.shutdown();
        tracing::info!("Toast context shut down");
    }
}

impl Drop for ToastContext {
    fn drop(&mut self) {
        self.teardown();
    }
}
