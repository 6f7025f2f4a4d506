//! Immutable in-memory vocabulary graph

use std::collections::HashMap;

use super::entity::{Entity, TypeRef, local_name, qualify};

/// Settings a store was built with, carried so resolvers agree on naming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    pub namespace: String,
    pub site_url: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            namespace: "schema:".to_string(),
            site_url: "https://schema.org/".to_string(),
        }
    }
}

/// Normalized vocabulary graph with its lookup indexes
///
/// Built once by [`IndexBuilder`](super::IndexBuilder) and never mutated
/// afterwards. Entities live in a single vector in document order; every
/// index stores positions into that vector, so iteration over any bucket
/// preserves document order.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    pub(crate) options: StoreOptions,
    pub(crate) entities: Vec<Entity>,
    pub(crate) by_id: HashMap<String, usize>,
    pub(crate) by_label: HashMap<String, usize>,
    pub(crate) classes: Vec<usize>,
    pub(crate) properties: Vec<usize>,
    /// Domain class id -> properties declaring it, in document order
    pub(crate) domain_properties: HashMap<String, Vec<usize>>,
    /// Superclass id -> classes listing it in `super_ids`, in document order
    pub(crate) subclasses: HashMap<String, Vec<usize>>,
}

/// Summary counts for a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct StoreStats {
    pub entities: usize,
    pub classes: usize,
    pub properties: usize,
    pub labels: usize,
}

impl GraphStore {
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn namespace(&self) -> &str {
        &self.options.namespace
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            entities: self.entities.len(),
            classes: self.classes.len(),
            properties: self.properties.len(),
            labels: self.by_label.len(),
        }
    }

    /// All entities in document order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Class bucket in document order
    pub fn classes(&self) -> impl Iterator<Item = &Entity> {
        self.classes.iter().map(|&i| &self.entities[i])
    }

    /// Property bucket in document order
    pub fn properties(&self) -> impl Iterator<Item = &Entity> {
        self.properties.iter().map(|&i| &self.entities[i])
    }

    /// Look up an entity by its exact identifier
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.by_id.get(id).map(|&i| &self.entities[i])
    }

    /// Look up an entity by its namespace-qualified label
    pub fn get_by_label(&self, qualified_label: &str) -> Option<&Entity> {
        self.by_label.get(qualified_label).map(|&i| &self.entities[i])
    }

    /// Resolve a caller-supplied type name
    ///
    /// An exact identifier is tried as given, then the name is qualified with
    /// the namespace. Identifier matches win over label matches.
    pub fn lookup(&self, name: &str) -> Option<&Entity> {
        if let Some(entity) = self.get(name) {
            return Some(entity);
        }
        let key = qualify(name, &self.options.namespace);
        self.get(&key).or_else(|| self.get_by_label(&key))
    }

    /// Resolve a name to an entity in the class bucket
    pub fn lookup_class(&self, name: &str) -> Option<&Entity> {
        self.lookup(name).filter(|e| e.is_class())
    }

    /// Resolve a referenced id to `{id, label}`, never failing
    ///
    /// Dangling references produce a record whose label is the
    /// namespace-stripped identifier.
    pub fn resolve_ref(&self, id: &str) -> TypeRef {
        let label = match self.get(id) {
            Some(entity) => entity.display_label(&self.options.namespace),
            None => local_name(id, &self.options.namespace).to_string(),
        };
        TypeRef {
            id: id.to_string(),
            label,
        }
    }

    /// Label for any entity, with the namespace-stripped fallback
    pub fn label_of(&self, entity: &Entity) -> String {
        entity.display_label(&self.options.namespace)
    }

    /// Public URL for a label
    pub fn url_for(&self, label: &str) -> String {
        format!("{}{}", self.options.site_url, label)
    }

    /// Properties whose domain lists `class_id`, in document order
    pub(crate) fn properties_with_domain(&self, class_id: &str) -> impl Iterator<Item = &Entity> {
        self.domain_properties
            .get(class_id)
            .into_iter()
            .flatten()
            .map(|&i| &self.entities[i])
    }

    /// Classes listing `class_id` as a direct superclass, in document order
    pub(crate) fn direct_subclasses(&self, class_id: &str) -> impl Iterator<Item = &Entity> {
        self.subclasses
            .get(class_id)
            .into_iter()
            .flatten()
            .map(|&i| &self.entities[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::IndexBuilder;
    use serde_json::json;

    fn store() -> GraphStore {
        IndexBuilder::default()
            .build(&json!({
                "@graph": [
                    {"@id": "schema:Thing", "@type": "rdfs:Class", "rdfs:label": "Thing"},
                    {"@id": "schema:Person", "@type": "rdfs:Class", "rdfs:label": "Human",
                     "rdfs:subClassOf": {"@id": "schema:Thing"}},
                    {"@id": "schema:name", "@type": "rdf:Property", "rdfs:label": "name",
                     "schema:domainIncludes": {"@id": "schema:Thing"}}
                ]
            }))
            .unwrap()
    }

    #[test]
    fn test_lookup_by_id_and_label() {
        let store = store();
        assert_eq!(store.lookup("Person").unwrap().id, "schema:Person");
        assert_eq!(store.lookup("schema:Person").unwrap().id, "schema:Person");
        assert_eq!(store.lookup("Human").unwrap().id, "schema:Person");
        assert!(store.lookup("Nobody").is_none());
    }

    #[test]
    fn test_lookup_ids_outside_namespace() {
        let store = IndexBuilder::default()
            .build(&json!({
                "@graph": [
                    {"@id": "https://schema.org/Person", "@type": "rdfs:Class", "rdfs:label": "Person"},
                    {"@id": "ex:Widget", "@type": "rdfs:Class"}
                ]
            }))
            .unwrap();

        let by_id = store.lookup("https://schema.org/Person").unwrap();
        assert_eq!(by_id.id, "https://schema.org/Person");
        assert_eq!(store.lookup("Person").unwrap().id, "https://schema.org/Person");
        assert_eq!(store.lookup("ex:Widget").unwrap().id, "ex:Widget");
        assert!(store.lookup("Widget").is_none());
    }

    #[test]
    fn test_lookup_class_excludes_properties() {
        let store = store();
        assert!(store.lookup("name").is_some());
        assert!(store.lookup_class("name").is_none());
        assert!(store.lookup_class("Thing").is_some());
    }

    #[test]
    fn test_resolve_ref_dangling() {
        let store = store();
        let resolved = store.resolve_ref("schema:Person");
        assert_eq!(resolved.label, "Human");

        let dangling = store.resolve_ref("schema:Ghost");
        assert_eq!(dangling.id, "schema:Ghost");
        assert_eq!(dangling.label, "Ghost");
    }

    #[test]
    fn test_stats_and_buckets() {
        let store = store();
        let stats = store.stats();
        assert_eq!(stats.entities, 3);
        assert_eq!(stats.classes, 2);
        assert_eq!(stats.properties, 1);
        assert_eq!(stats.labels, 3);
        assert_eq!(
            store.classes().map(|e| e.id.as_str()).collect::<Vec<_>>(),
            vec!["schema:Thing", "schema:Person"]
        );
        assert_eq!(store.url_for("Thing"), "https://schema.org/Thing");
    }

    #[test]
    fn test_adjacency_indexes() {
        let store = store();
        let props: Vec<_> = store.properties_with_domain("schema:Thing").map(|e| &e.id).collect();
        assert_eq!(props, vec!["schema:name"]);
        let subs: Vec<_> = store.direct_subclasses("schema:Thing").map(|e| &e.id).collect();
        assert_eq!(subs, vec!["schema:Person"]);
        assert_eq!(store.properties_with_domain("schema:Person").count(), 0);
    }
}
