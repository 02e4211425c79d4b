//! Preset toast configurations.
//!
//! Presets are plain [`ToastConfig`] values with preset flags filled in.
//! Callers can still adjust them with the builder setters before showing.

use std::time::Duration;

use crate::config::{IconSettings, ToastSettings};
use crate::image::ToastImageKind;
use crate::toast::ToastConfig;

/// Factory for preset configs, driven by [`ToastSettings`].
#[derive(Debug, Clone, PartialEq)]
pub struct Presets {
    duration: Duration,
    loading_text: String,
    icons: IconSettings,
}

impl Default for Presets {
    fn default() -> Self {
        Self::from_settings(&ToastSettings::default())
    }
}

impl Presets {
    pub fn from_settings(settings: &ToastSettings) -> Self {
        Self {
            duration: settings.preset_duration(),
            loading_text: settings.loading_text.clone(),
            icons: settings.icons.clone(),
        }
    }

    /// Plain text, auto-dismissed.
    pub fn text(&self, text: impl Into<String>) -> ToastConfig {
        ToastConfig::text(text, None).duration(self.duration)
    }

    /// Text with an image, auto-dismissed.
    pub fn image(&self, text: impl Into<String>, image: ToastImageKind) -> ToastConfig {
        ToastConfig::text(text, Some(image)).duration(self.duration)
    }

    pub fn success(&self, text: impl Into<String>) -> ToastConfig {
        self.image(text, ToastImageKind::system_icon(&self.icons.success))
    }

    pub fn error(&self, text: impl Into<String>) -> ToastConfig {
        self.image(text, ToastImageKind::system_icon(&self.icons.error))
    }

    /// Warnings block the screen while shown.
    pub fn warning(&self, text: impl Into<String>) -> ToastConfig {
        self.image(text, ToastImageKind::system_icon(&self.icons.warning))
            .full_screen(true)
    }

    /// Full-screen spinner that stays until dismissed and ignores taps.
    ///
    /// Falls back to the configured loading text when `text` is `None`.
    pub fn loading(&self, text: Option<String>) -> ToastConfig {
        let text = text.unwrap_or_else(|| self.loading_text.clone());
        ToastConfig::text(text, Some(ToastImageKind::Spinner)).full_screen(true)
    }

    /// Full-screen, tap-removable, auto-dismissed.
    pub fn auto_dismiss(
        &self,
        text: impl Into<String>,
        image: Option<ToastImageKind>,
    ) -> ToastConfig {
        ToastConfig::text(text, image)
            .full_screen(true)
            .tap_to_remove(true)
            .duration(self.duration)
    }

    /// Full-screen and tap-removable, stays until dismissed.
    pub fn full_screen(&self, text: impl Into<String>) -> ToastConfig {
        ToastConfig::text(text, None)
            .full_screen(true)
            .tap_to_remove(true)
    }

    /// Plain text with an explicit duration.
    pub fn timed(&self, text: impl Into<String>, duration: Duration) -> ToastConfig {
        ToastConfig::text(text, None).duration(duration)
    }
}
