//! Content type descriptors and externally stored payloads.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Registry entry describing one kind of externally stored payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentTypeDescriptor {
    /// Registry-assigned identifier; payload rows reference it.
    pub id: i64,
    /// Lookup label used by unresolved content references.
    pub app_label: String,
    /// Model handle name inside the owning app.
    pub model: String,
    /// Human-readable name; its slug is the URL type token.
    pub name: String,
}

impl ContentTypeDescriptor {
    pub fn new(
        id: i64,
        app_label: impl Into<String>,
        model: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            app_label: app_label.into(),
            model: model.into(),
            name: name.into(),
        }
    }
}

impl Display for ContentTypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.app_label, self.model)
    }
}

/// Payload row fetched from the payload store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub content_type_id: i64,
    pub object_id: i64,
    /// Opaque payload body; interpretation belongs to the content type.
    pub body: String,
}
