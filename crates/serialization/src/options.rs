//! Deserializer configuration.

use serde::{Deserialize, Serialize};

/// Options for a [`PrimitiveValueDeserializer`](crate::PrimitiveValueDeserializer).
///
/// Deserializable so host layers can embed it in their own config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeserializerOptions {
    /// Highest wire format version accepted by `read_header`. `None` accepts
    /// any version.
    pub supported_version: Option<u32>,
}

impl DeserializerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn supported_version(mut self, version: u32) -> Self {
        self.supported_version = Some(version);
        self
    }
}
