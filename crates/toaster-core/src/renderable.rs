//! Renderable content for custom toast slots.
//!
//! The closed variants cover what a toast commonly draws. Anything else is
//! carried as an [`OpaqueRenderable`] supplied by the host UI, which knows how
//! to downcast and draw it.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::image::ToastImageKind;

/// Content for the custom leading slot or the full custom content slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Renderable {
    /// A line of text.
    Label(String),

    /// A built-in image.
    Image(ToastImageKind),

    /// Children laid out top to bottom.
    Stack(Vec<Renderable>),

    /// Host-supplied content. Not serializable.
    #[serde(skip)]
    Opaque(OpaqueRenderable),
}

impl Renderable {
    /// Create a label.
    pub fn label(text: impl Into<String>) -> Self {
        Self::Label(text.into())
    }

    /// Wrap a host value as opaque content.
    pub fn opaque<T>(key: impl Into<String>, payload: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self::Opaque(OpaqueRenderable::new(key, payload))
    }

    /// Whether this content (or any child) is host-supplied.
    pub fn contains_opaque(&self) -> bool {
        match self {
            Self::Opaque(_) => true,
            Self::Stack(children) => children.iter().any(Renderable::contains_opaque),
            Self::Label(_) | Self::Image(_) => false,
        }
    }
}

impl From<ToastImageKind> for Renderable {
    fn from(kind: ToastImageKind) -> Self {
        Self::Image(kind)
    }
}

/// Host-supplied content with a descriptive key.
///
/// Two opaque values are equal only when they share the same payload
/// allocation; clones of one value compare equal, separately built payloads
/// never do.
#[derive(Clone)]
pub struct OpaqueRenderable {
    key: String,
    payload: Arc<dyn Any + Send + Sync>,
}

impl OpaqueRenderable {
    /// Create opaque content from any shareable value.
    pub fn new<T>(key: impl Into<String>, payload: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            key: key.into(),
            payload: Arc::new(payload),
        }
    }

    /// Descriptive key, used for logging and debugging.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the payload as a concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

impl PartialEq for OpaqueRenderable {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && Arc::ptr_eq(&self.payload, &other.payload)
    }
}

impl fmt::Debug for OpaqueRenderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueRenderable")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
