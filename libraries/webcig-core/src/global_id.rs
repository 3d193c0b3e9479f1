//! Relay global object identifiers
//!
//! A global id packs a type name and a type-local id into one opaque string so
//! a single `node(id:)` field can resolve any node-typed entity. The encoding is
//! standard base64 of `"Type:id"`, matching what relay clients expect.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;

use crate::error::{Result, WebcigError};

/// Decoded form of a global id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlobalId {
    /// Declared GraphQL type name, e.g. `User`
    pub type_name: String,

    /// Identifier within that type
    pub local_id: String,
}

impl GlobalId {
    /// Build a global id from its parts
    pub fn new(type_name: impl Into<String>, local_id: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            local_id: local_id.into(),
        }
    }

    /// Encode as base64 of `Type:id`
    pub fn encode(&self) -> String {
        STANDARD.encode(format!("{}:{}", self.type_name, self.local_id))
    }

    /// Decode an opaque global id.
    ///
    /// Splits on the first `:` so local ids may themselves contain colons.
    pub fn decode(encoded: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| WebcigError::invalid_global_id(format!("{encoded:?} is not base64: {e}")))?;

        let raw = String::from_utf8(bytes)
            .map_err(|_| WebcigError::invalid_global_id(format!("{encoded:?} is not UTF-8")))?;

        let (type_name, local_id) = raw.split_once(':').ok_or_else(|| {
            WebcigError::invalid_global_id(format!("{encoded:?} has no type separator"))
        })?;

        if type_name.is_empty() {
            return Err(WebcigError::invalid_global_id(format!(
                "{encoded:?} has an empty type name"
            )));
        }

        Ok(Self::new(type_name, local_id))
    }
}

impl fmt::Display for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
