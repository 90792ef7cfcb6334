//! Startup-time attribute registry keyed by `(type name, field name)`.
//!
//! ```rust
//! use gamework_inspector::attribute::{FloatAttribute, SliderAttribute};
//! use gamework_inspector::AttributeRegistry;
//!
//! let registry = AttributeRegistry::builder()
//!     .field("Ship", "speed", FloatAttribute::new(10.0).with_range(0.0, 100.0))
//!     .field("Ship", "crew", SliderAttribute::new(5.0).with_range(0.0, 10.0).integer())
//!     .build()
//!     .unwrap();
//! assert!(registry.get("Ship", "speed").is_some());
//! assert!(registry.get("Ship", "name").is_none());
//! ```

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::attribute::{Attribute, FieldKind};
use crate::reflect::Reflect;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("attribute for {type_name}.{field} declared twice")]
    Duplicate { type_name: String, field: String },
    #[error("failed to read attribute file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid attribute file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A registered attribute that does not fit the object it describes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryIssue {
    #[error("{type_name}.{field}: no such field")]
    MissingField { type_name: String, field: String },
    #[error("{type_name}.{field}: {attribute} attribute on a {storage} field")]
    KindMismatch {
        type_name: String,
        field: String,
        attribute: FieldKind,
        storage: FieldKind,
    },
}

#[derive(Debug, Clone, Default)]
pub struct AttributeRegistry {
    entries: HashMap<(String, String), Attribute>,
}

impl AttributeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn insert(
        &mut self,
        type_name: impl Into<String>,
        field: impl Into<String>,
        attribute: impl Into<Attribute>,
    ) -> Result<(), RegistryError> {
        let key = (type_name.into(), field.into());
        if self.entries.contains_key(&key) {
            let (type_name, field) = key;
            return Err(RegistryError::Duplicate { type_name, field });
        }
        self.entries.insert(key, attribute.into());
        Ok(())
    }

    pub fn get(&self, type_name: &str, field: &str) -> Option<&Attribute> {
        // tuple keys can't be borrowed as (&str, &str); the allocation is the
        // price of a plain HashMap here
        self.entries.get(&(type_name.to_string(), field.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add every entry of `other`, failing on the first duplicate.
    pub fn merge(&mut self, other: AttributeRegistry) -> Result<(), RegistryError> {
        for ((type_name, field), attribute) in other.entries {
            self.insert(type_name, field, attribute)?;
        }
        Ok(())
    }

    /// Parse a TOML document of `[Type.field]` tables, each tagged by `kind`.
    pub fn from_toml_str(text: &str) -> Result<Self, RegistryError> {
        let tables: HashMap<String, HashMap<String, Attribute>> = toml::from_str(text)?;
        let mut registry = Self::new();
        for (type_name, fields) in tables {
            for (field, attribute) in fields {
                registry.insert(type_name.clone(), field, attribute)?;
            }
        }
        Ok(registry)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let registry = Self::from_toml_str(&text)?;
        log::debug!("loaded {} attributes from {}", registry.len(), path.display());
        Ok(registry)
    }

    /// Check every attribute registered for `object`'s type against its
    /// fields. Issues are sorted by field name.
    pub fn validate(&self, object: &dyn Reflect) -> Vec<RegistryIssue> {
        let type_name = object.type_name();
        let mut fields: Vec<(&str, &Attribute)> = self
            .entries
            .iter()
            .filter(|((t, _), _)| t == type_name)
            .map(|((_, f), a)| (f.as_str(), a))
            .collect();
        fields.sort_by_key(|(f, _)| *f);

        fields
            .into_iter()
            .filter_map(|(field, attribute)| match object.field_kind(field) {
                None => Some(RegistryIssue::MissingField {
                    type_name: type_name.to_string(),
                    field: field.to_string(),
                }),
                Some(storage) if storage != attribute.storage_kind() => {
                    Some(RegistryIssue::KindMismatch {
                        type_name: type_name.to_string(),
                        field: field.to_string(),
                        attribute: attribute.kind(),
                        storage,
                    })
                }
                Some(_) => None,
            })
            .collect()
    }
}

/// Fluent construction; duplicates surface from [`build`](Self::build).
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    pending: Vec<(String, String, Attribute)>,
}

impl RegistryBuilder {
    pub fn field(
        mut self,
        type_name: impl Into<String>,
        field: impl Into<String>,
        attribute: impl Into<Attribute>,
    ) -> Self {
        self.pending
            .push((type_name.into(), field.into(), attribute.into()));
        self
    }

    pub fn build(self) -> Result<AttributeRegistry, RegistryError> {
        let mut registry = AttributeRegistry::new();
        for (type_name, field, attribute) in self.pending {
            registry.insert(type_name, field, attribute)?;
        }
        Ok(registry)
    }
}
