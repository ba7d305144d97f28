//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Identifier reported for the single in-process document.
pub const DEFAULT_DOCUMENT_ID: &str = "doc-native";

/// Display name reported for the single in-process document.
pub const DEFAULT_DOCUMENT_NAME: &str = "Composition native";

/// Settings an [`Engine`](crate::Engine) is created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Initial canvas width.
    pub width: u32,
    /// Initial canvas height.
    pub height: u32,
    pub document_id: String,
    pub document_name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            document_id: DEFAULT_DOCUMENT_ID.to_string(),
            document_name: DEFAULT_DOCUMENT_NAME.to_string(),
        }
    }
}
