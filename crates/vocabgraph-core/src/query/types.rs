//! Single-type lookup

use serde::Serialize;

use super::hierarchy::HierarchyResolver;
use crate::error::{Error, Result};
use crate::graph::{GraphStore, TypeRef};

/// Details of one vocabulary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSummary {
    pub name: String,
    pub description: String,
    pub id: String,
    /// Raw `@type` tags
    #[serde(rename = "type")]
    pub kinds: Vec<String>,
    pub super_types: Vec<TypeRef>,
    pub url: String,
}

/// Resolves caller-supplied names to [`TypeSummary`] records
#[derive(Debug, Clone, Copy)]
pub struct TypeLookup<'a> {
    store: &'a GraphStore,
}

impl<'a> TypeLookup<'a> {
    pub fn new(store: &'a GraphStore) -> Self {
        Self { store }
    }

    /// Look up any entity by bare name, qualified id or qualified label
    pub fn get_type(&self, name: &str) -> Result<TypeSummary> {
        if name.trim().is_empty() {
            return Err(Error::InvalidQuery("type name must be a non-empty string".to_string()));
        }

        let entity = self
            .store
            .lookup(name)
            .ok_or_else(|| Error::TypeNotFound(name.to_string()))?;
        let label = self.store.label_of(entity);

        Ok(TypeSummary {
            url: self.store.url_for(&label),
            name: label,
            description: entity.description(),
            id: entity.id.clone(),
            kinds: entity.kinds.tags.clone(),
            super_types: HierarchyResolver::new(self.store).parents_of(entity),
        })
    }
}
