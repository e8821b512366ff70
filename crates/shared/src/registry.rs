//! Application ID to customization document mapping
//!
//! The registry is built once at startup and never mutated afterwards.
//! Resolution is an exact string match; a miss is not an error, it means
//! the widget falls back to its own defaults.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

/// Errors raised while constructing a [`CustomizationRegistry`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// An empty application ID would let requests without an explicit ID
    /// match a document, so it is rejected at construction time.
    #[error("Application ID must not be empty")]
    EmptyAppId,

    #[error("Duplicate application ID: {0}")]
    DuplicateAppId(String),
}

/// Immutable mapping from application ID to customization document.
#[derive(Debug, Clone, Default)]
pub struct CustomizationRegistry {
    documents: HashMap<String, Value>,
}

impl CustomizationRegistry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Look up the customization document for an application ID.
    ///
    /// Returns `None` when the ID is absent, empty, or unmapped. Absence is
    /// the designed pass-through result, not a failure.
    pub fn resolve(&self, app_id: Option<&str>) -> Option<&Value> {
        match app_id {
            Some(id) if !id.is_empty() => self.documents.get(id),
            _ => None,
        }
    }

    /// All configured application IDs, for diagnostics. Order is not
    /// guaranteed.
    pub fn app_ids(&self) -> Vec<&str> {
        self.documents.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Builder enforcing the registry invariants: non-empty, unique keys.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    documents: HashMap<String, Value>,
}

impl RegistryBuilder {
    /// Map an application ID to its customization document.
    pub fn document(
        mut self,
        app_id: impl Into<String>,
        document: Value,
    ) -> Result<Self, RegistryError> {
        let app_id = app_id.into();
        if app_id.is_empty() {
            return Err(RegistryError::EmptyAppId);
        }
        if self.documents.contains_key(&app_id) {
            return Err(RegistryError::DuplicateAppId(app_id));
        }
        self.documents.insert(app_id, document);
        Ok(self)
    }

    pub fn build(self) -> CustomizationRegistry {
        CustomizationRegistry {
            documents: self.documents,
        }
    }
}
