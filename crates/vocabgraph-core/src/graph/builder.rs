//! One-pass ingestion of a JSON-LD vocabulary document

use std::collections::HashMap;

use serde_json::Value;
use tracing::{info, warn};

use super::entity::{Entity, EntityKinds};
use super::store::{GraphStore, StoreOptions};
use crate::config::VocabConfig;
use crate::error::{Error, Result};

/// Raw document keys
pub mod keys {
    pub const GRAPH: &str = "@graph";
    pub const ID: &str = "@id";
    pub const TYPE: &str = "@type";
    pub const VALUE: &str = "@value";
    pub const LABEL: &str = "rdfs:label";
    pub const COMMENT: &str = "rdfs:comment";
    pub const SUB_CLASS_OF: &str = "rdfs:subClassOf";
    pub const DOMAIN_INCLUDES: &str = "schema:domainIncludes";
    pub const RANGE_INCLUDES: &str = "schema:rangeIncludes";
}

/// Builds a [`GraphStore`] from a parsed vocabulary document
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    options: StoreOptions,
    class_kinds: Vec<String>,
    property_kinds: Vec<String>,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::from_config(&VocabConfig::default())
    }
}

impl IndexBuilder {
    /// Create a builder using the vocabulary settings of a config
    pub fn from_config(config: &VocabConfig) -> Self {
        let vocabulary = &config.vocabulary;
        Self {
            options: StoreOptions {
                namespace: vocabulary.namespace.clone(),
                site_url: vocabulary.site_url.clone(),
            },
            class_kinds: vocabulary.class_kinds.clone(),
            property_kinds: vocabulary.property_kinds.clone(),
        }
    }

    /// Ingest a document and build all indexes
    ///
    /// Fails if the document has no `@graph` array or if no item in it has a
    /// usable `@id`. No partially built store is ever returned.
    pub fn build(&self, document: &Value) -> Result<GraphStore> {
        let items = document
            .get(keys::GRAPH)
            .and_then(Value::as_array)
            .ok_or_else(|| Error::Ingest("missing @graph array".to_string()))?;

        let mut entities: Vec<Entity> = Vec::with_capacity(items.len());
        let mut by_id: HashMap<String, usize> = HashMap::with_capacity(items.len());
        let mut skipped = 0usize;

        for item in items {
            let Some(entity) = self.normalize(item) else {
                skipped += 1;
                continue;
            };
            // Last write wins, but the first occurrence keeps its position.
            match by_id.get(&entity.id) {
                Some(&pos) => entities[pos] = entity,
                None => {
                    by_id.insert(entity.id.clone(), entities.len());
                    entities.push(entity);
                }
            }
        }

        if entities.is_empty() {
            return Err(Error::Ingest(format!(
                "no usable entities in @graph ({} items skipped)",
                skipped
            )));
        }

        if skipped > 0 {
            warn!(skipped, "Skipped @graph items without a usable @id");
        }

        let store = self.index(entities, by_id);
        let stats = store.stats();
        info!(
            entities = stats.entities,
            classes = stats.classes,
            properties = stats.properties,
            "Vocabulary index built"
        );

        Ok(store)
    }

    fn index(&self, entities: Vec<Entity>, by_id: HashMap<String, usize>) -> GraphStore {
        let mut by_label = HashMap::new();
        let mut classes = Vec::new();
        let mut properties = Vec::new();
        let mut domain_properties: HashMap<String, Vec<usize>> = HashMap::new();
        let mut subclasses: HashMap<String, Vec<usize>> = HashMap::new();

        for (pos, entity) in entities.iter().enumerate() {
            if let Some(label) = &entity.label {
                by_label.insert(format!("{}{}", self.options.namespace, label), pos);
            }
            if entity.is_class() {
                classes.push(pos);
                for super_id in &entity.super_ids {
                    subclasses.entry(super_id.clone()).or_default().push(pos);
                }
            }
            if entity.is_property() {
                properties.push(pos);
                for domain_id in &entity.domain_ids {
                    domain_properties
                        .entry(domain_id.clone())
                        .or_default()
                        .push(pos);
                }
            }
        }

        GraphStore {
            options: self.options.clone(),
            entities,
            by_id,
            by_label,
            classes,
            properties,
            domain_properties,
            subclasses,
        }
    }

    /// Normalize one raw item; `None` if it has no usable identifier
    fn normalize(&self, item: &Value) -> Option<Entity> {
        let object = item.as_object()?;
        let id = object.get(keys::ID)?.as_str()?.trim();
        if id.is_empty() {
            return None;
        }

        let tags = ordered_set(string_list(object.get(keys::TYPE)));
        let kinds = EntityKinds::classify(tags, &self.class_kinds, &self.property_kinds);

        Some(Entity {
            id: id.to_string(),
            kinds,
            label: object.get(keys::LABEL).and_then(text_value),
            comment: object.get(keys::COMMENT).and_then(text_value),
            super_ids: ordered_set(reference_list(object.get(keys::SUB_CLASS_OF))),
            domain_ids: ordered_set(reference_list(object.get(keys::DOMAIN_INCLUDES))),
            range_ids: ordered_set(reference_list(object.get(keys::RANGE_INCLUDES))),
        })
    }
}

/// Plain string, a language-tagged `{"@value": ...}` object, or the first
/// usable entry of an array of either
fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map.get(keys::VALUE).and_then(Value::as_str).map(str::to_string),
        Value::Array(items) => items.iter().find_map(text_value),
        _ => None,
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// `{"@id": ...}`, a bare string, or an array of either
fn reference_list(value: Option<&Value>) -> Vec<String> {
    fn one(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Object(map) => map.get(keys::ID).and_then(Value::as_str).map(str::to_string),
            _ => None,
        }
    }

    match value {
        Some(Value::Array(items)) => items.iter().filter_map(one).collect(),
        Some(other) => one(other).into_iter().collect(),
        None => Vec::new(),
    }
}

fn ordered_set(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !value.is_empty() && !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
