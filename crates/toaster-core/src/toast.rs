//! Toast configuration.
//!
//! A [`ToastConfig`] describes one presentation request. It is built once per
//! show call and never mutated afterwards; the builder setters consume and
//! return the value.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::image::ToastImageKind;
use crate::renderable::Renderable;

// =============================================================================
// ToastConfig
// =============================================================================

/// An immutable description of one toast.
///
/// Content comes from exactly one of three sources, picked by the constructor:
/// - [`ToastConfig::text`]: text with an optional built-in image
/// - [`ToastConfig::with_leading`]: text with custom content above it
/// - [`ToastConfig::custom`]: custom content replacing the whole layout
///
/// ## Equality
///
/// `PartialEq` compares every field by value. Opaque renderables compare by
/// payload identity, so two configs built from separately created host
/// content are never equal. Use [`ToastConfig::same_layout`] for the looser
/// check that only looks at whether custom slots are filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<ToastImageKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_leading: Option<Renderable>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_content: Option<Renderable>,

    #[serde(default)]
    is_full_screen: bool,

    #[serde(default)]
    can_tap_remove: bool,

    #[serde(default)]
    disable_transition: bool,

    #[serde(default)]
    duration: Duration,
}

impl ToastConfig {
    fn blank() -> Self {
        Self {
            text: None,
            image: None,
            custom_leading: None,
            custom_content: None,
            is_full_screen: false,
            can_tap_remove: false,
            disable_transition: false,
            duration: Duration::ZERO,
        }
    }

    /// Text toast with an optional built-in image above it.
    pub fn text(text: impl Into<String>, image: Option<ToastImageKind>) -> Self {
        Self {
            text: Some(text.into()),
            image,
            ..Self::blank()
        }
    }

    /// Text toast with custom content above it.
    pub fn with_leading(text: impl Into<String>, leading: Renderable) -> Self {
        Self {
            text: Some(text.into()),
            custom_leading: Some(leading),
            ..Self::blank()
        }
    }

    /// Toast whose custom content replaces the default layout.
    pub fn custom(content: Renderable) -> Self {
        Self {
            custom_content: Some(content),
            ..Self::blank()
        }
    }

    // =========================================================================
    // Builder Setters
    // =========================================================================

    /// Cover the screen with a transparent layer that captures taps.
    pub fn full_screen(mut self, full_screen: bool) -> Self {
        self.is_full_screen = full_screen;
        self
    }

    /// Let any tap on the toast or the full-screen layer dismiss it.
    pub fn tap_to_remove(mut self, can_tap_remove: bool) -> Self {
        self.can_tap_remove = can_tap_remove;
        self
    }

    /// Skip the exit transition: dismissal clears the toast immediately.
    pub fn disable_transition(mut self, disable: bool) -> Self {
        self.disable_transition = disable;
        self
    }

    /// Auto-dismiss after `duration`. Zero keeps the toast until dismissed.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Auto-dismiss after `secs` seconds.
    ///
    /// Negative, NaN and out-of-range values are treated as zero.
    pub fn duration_secs(self, secs: f64) -> Self {
        let duration = Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO);
        self.duration(duration)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn image(&self) -> Option<&ToastImageKind> {
        self.image.as_ref()
    }

    pub fn custom_leading(&self) -> Option<&Renderable> {
        self.custom_leading.as_ref()
    }

    pub fn custom_content(&self) -> Option<&Renderable> {
        self.custom_content.as_ref()
    }

    pub fn is_full_screen(&self) -> bool {
        self.is_full_screen
    }

    pub fn can_tap_remove(&self) -> bool {
        self.can_tap_remove
    }

    pub fn transition_disabled(&self) -> bool {
        self.disable_transition
    }

    pub fn duration_value(&self) -> Duration {
        self.duration
    }

    /// Whether this config auto-dismisses.
    pub fn auto_dismisses(&self) -> bool {
        !self.duration.is_zero()
    }

    /// Whether this is a text-based toast with nothing to say.
    ///
    /// Such configs are ignored when shown.
    pub fn has_empty_text(&self) -> bool {
        self.custom_content.is_none() && self.text.as_deref().map_or(true, str::is_empty)
    }

    /// Loose comparison that ignores custom payloads.
    ///
    /// Compares text, image, flags and duration, and only whether each
    /// custom slot is filled. Two configs with different custom content
    /// still match here.
    pub fn same_layout(&self, other: &Self) -> bool {
        self.text == other.text
            && self.image == other.image
            && self.is_full_screen == other.is_full_screen
            && self.can_tap_remove == other.can_tap_remove
            && self.disable_transition == other.disable_transition
            && self.duration == other.duration
            && self.custom_leading.is_some() == other.custom_leading.is_some()
            && self.custom_content.is_some() == other.custom_content.is_some()
    }

    /// Decide what the overlay draws for this config.
    pub fn layout(&self) -> ToastLayout<'_> {
        if let Some(content) = &self.custom_content {
            return ToastLayout::Custom(content);
        }

        let leading = match (&self.image, &self.custom_leading) {
            (Some(image), _) => Some(Leading::Image(image)),
            (None, Some(custom)) => Some(Leading::Custom(custom)),
            (None, None) => None,
        };

        ToastLayout::Standard {
            leading,
            text: self.text.as_deref(),
        }
    }
}

// =============================================================================
// Layout Decision
// =============================================================================

/// What the overlay should draw for a config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastLayout<'a> {
    /// Custom content drawn as-is, without the default bubble.
    Custom(&'a Renderable),

    /// Default bubble: optional leading decoration above optional text.
    Standard {
        leading: Option<Leading<'a>>,
        text: Option<&'a str>,
    },
}

/// Decoration drawn above the text. A built-in image wins over custom
/// leading content when both are set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Leading<'a> {
    Image(&'a ToastImageKind),
    Custom(&'a Renderable),
}
