//! Built-in image kinds shown above toast text.

use serde::{Deserialize, Serialize};

/// Image shown above the toast text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastImageKind {
    /// Named icon from the platform's symbol set.
    SystemIcon(String),

    /// Named image asset bundled with the application.
    ImageAsset(String),

    /// Indeterminate progress spinner.
    Spinner,
}

impl ToastImageKind {
    /// Create a system icon kind.
    pub fn system_icon(name: impl Into<String>) -> Self {
        Self::SystemIcon(name.into())
    }

    /// Create an image asset kind.
    pub fn image_asset(name: impl Into<String>) -> Self {
        Self::ImageAsset(name.into())
    }

    /// The identifying name, if this kind carries one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::SystemIcon(name) | Self::ImageAsset(name) => Some(name),
            Self::Spinner => None,
        }
    }
}
