//! Vocabulary entity types
//!
//! An entity is a node in the vocabulary graph: a class, a property, or
//! anything else the source document declares with an `@id`. Raw shapes are
//! normalized at ingestion so nothing downstream branches on JSON layout.

use serde::{Deserialize, Serialize};

/// Normalized category tags of an entity
///
/// The raw `@type` field may be a string or an array, and in malformed input
/// an entity may be both class-like and property-like. Both flags are kept
/// independently alongside the original tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityKinds {
    /// Raw tags in document order, deduplicated
    pub tags: Vec<String>,
    /// Tagged with one of the configured class kinds
    pub class: bool,
    /// Tagged with one of the configured property kinds
    pub property: bool,
}

impl EntityKinds {
    /// Classify raw tags against the configured class and property kinds
    pub fn classify(tags: Vec<String>, class_kinds: &[String], property_kinds: &[String]) -> Self {
        let class = tags.iter().any(|t| class_kinds.contains(t));
        let property = tags.iter().any(|t| property_kinds.contains(t));
        Self {
            tags,
            class,
            property,
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A node in the vocabulary graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier, e.g. `schema:Person`
    pub id: String,
    pub kinds: EntityKinds,
    pub label: Option<String>,
    pub comment: Option<String>,
    /// Direct superclasses, ordered and without duplicates
    pub super_ids: Vec<String>,
    /// Classes this property applies to (property entities only)
    pub domain_ids: Vec<String>,
    /// Expected value types (property entities only)
    pub range_ids: Vec<String>,
}

impl Entity {
    /// Create a bare entity with no kinds or relations
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kinds: EntityKinds::default(),
            label: None,
            comment: None,
            super_ids: Vec::new(),
            domain_ids: Vec::new(),
            range_ids: Vec::new(),
        }
    }

    pub fn is_class(&self) -> bool {
        self.kinds.class
    }

    pub fn is_property(&self) -> bool {
        self.kinds.property
    }

    /// Label, or the namespace-stripped identifier when the label is missing
    pub fn display_label(&self, namespace: &str) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => local_name(&self.id, namespace).to_string(),
        }
    }

    /// Comment text, or the stock placeholder when absent
    pub fn description(&self) -> String {
        self.comment
            .clone()
            .unwrap_or_else(|| NO_DESCRIPTION.to_string())
    }
}

/// Placeholder used wherever an entity has no comment
pub const NO_DESCRIPTION: &str = "No description available";

/// Reference to another entity, annotated with its resolved label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    pub id: String,
    pub label: String,
}

/// Strip the namespace prefix from an identifier
///
/// Identifiers outside the namespace fall back to the segment after the last
/// `/`, `#` or `:` so that full IRIs and foreign prefixes still produce a
/// readable name.
pub fn local_name<'a>(id: &'a str, namespace: &str) -> &'a str {
    if let Some(rest) = id.strip_prefix(namespace) {
        if !rest.is_empty() {
            return rest;
        }
    }
    match id.rfind(['/', '#', ':']) {
        Some(pos) if pos + 1 < id.len() => &id[pos + 1..],
        _ => id,
    }
}

/// Qualify a bare type name with the namespace prefix
///
/// Names that already carry the prefix are returned unchanged.
pub fn qualify(name: &str, namespace: &str) -> String {
    if name.starts_with(namespace) {
        name.to_string()
    } else {
        format!("{}{}", namespace, name)
    }
}
