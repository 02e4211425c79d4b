//! Core types for the Toaster notification overlay.
//!
//! This crate contains the value types shared by the runtime and by hosts:
//! - Toast configuration and its layout decision
//! - Built-in image kinds and renderable custom content
//! - Preset configurations
//! - Settings and error types

mod config;
mod error;
mod image;
mod presets;
mod renderable;
mod toast;

pub use config::{config_dir, ensure_config_dir, settings_path, IconSettings, ToastSettings};
pub use error::{SettingsError, ToastError};
pub use image::ToastImageKind;
pub use presets::Presets;
pub use renderable::{OpaqueRenderable, Renderable};
pub use toast::{Leading, ToastConfig, ToastLayout};
