//! Class hierarchy traversal

use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{Entity, GraphStore, TypeRef};

/// A type with its direct parents and children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeHierarchy {
    pub name: String,
    pub id: String,
    pub parents: Vec<TypeRef>,
    pub children: Vec<TypeRef>,
}

/// Read-only hierarchy queries over a [`GraphStore`]
#[derive(Debug, Clone, Copy)]
pub struct HierarchyResolver<'a> {
    store: &'a GraphStore,
}

impl<'a> HierarchyResolver<'a> {
    pub fn new(store: &'a GraphStore) -> Self {
        Self { store }
    }

    fn class(&self, name: &str) -> Result<&'a Entity> {
        self.store
            .lookup_class(name)
            .ok_or_else(|| Error::TypeNotFound(name.to_string()))
    }

    /// Direct superclasses of an entity, dangling references included
    pub(crate) fn parents_of(&self, entity: &Entity) -> Vec<TypeRef> {
        entity
            .super_ids
            .iter()
            .map(|id| self.store.resolve_ref(id))
            .collect()
    }

    /// Direct superclasses in document order
    pub fn ancestors(&self, name: &str) -> Result<Vec<TypeRef>> {
        let entity = self.class(name)?;
        Ok(self.parents_of(entity))
    }

    fn children_of(&self, entity: &Entity) -> Vec<TypeRef> {
        self.store
            .direct_subclasses(&entity.id)
            .map(|child| TypeRef {
                id: child.id.clone(),
                label: self.store.label_of(child),
            })
            .collect()
    }

    /// Direct subclasses in index order
    pub fn descendants(&self, name: &str) -> Result<Vec<TypeRef>> {
        let entity = self.class(name)?;
        Ok(self.children_of(entity))
    }

    /// Name, id, direct parents and direct children in one record
    pub fn hierarchy(&self, name: &str) -> Result<TypeHierarchy> {
        let entity = self.class(name)?;
        Ok(TypeHierarchy {
            name: self.store.label_of(entity),
            id: entity.id.clone(),
            parents: self.parents_of(entity),
            children: self.children_of(entity),
        })
    }

    /// Every transitive superclass, nearest first
    ///
    /// Breadth-first over `super_ids`; each ancestor appears once and cyclic
    /// input terminates because visited ids are never expanded again.
    pub fn lineage(&self, name: &str) -> Result<Vec<TypeRef>> {
        let start = self.class(name)?;
        Ok(self.walk_up(start))
    }

    /// The type itself followed by its [`lineage`](Self::lineage)
    pub fn lineage_path(&self, name: &str) -> Result<Vec<TypeRef>> {
        let start = self.class(name)?;
        let mut path = vec![TypeRef {
            id: start.id.clone(),
            label: self.store.label_of(start),
        }];
        path.extend(self.walk_up(start));
        Ok(path)
    }

    fn walk_up(&self, start: &'a Entity) -> Vec<TypeRef> {
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(start.id.as_str());
        let mut queue: VecDeque<&'a Entity> = VecDeque::from([start]);
        let mut chain = Vec::new();

        while let Some(current) = queue.pop_front() {
            for super_id in &current.super_ids {
                if !visited.insert(super_id.as_str()) {
                    continue;
                }
                chain.push(self.store.resolve_ref(super_id));
                if let Some(parent) = self.store.get(super_id) {
                    queue.push_back(parent);
                }
            }
        }

        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::IndexBuilder;
    use crate::query::fixtures;
    use serde_json::json;

    fn ids(refs: &[TypeRef]) -> Vec<&str> {
        refs.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_ancestors_in_document_order_with_dangling_fallback() {
        let store = fixtures::store();
        let resolver = HierarchyResolver::new(&store);

        let parents = resolver.ancestors("Employee").unwrap();
        assert_eq!(
            parents,
            vec![
                TypeRef { id: "schema:Person".into(), label: "Person".into() },
                TypeRef { id: "schema:Worker".into(), label: "Worker".into() },
            ]
        );
    }

    #[test]
    fn test_root_has_no_ancestors() {
        let store = fixtures::store();
        let resolver = HierarchyResolver::new(&store);
        assert!(resolver.ancestors("Thing").unwrap().is_empty());
    }

    #[test]
    fn test_descendants_are_direct_only() {
        let store = fixtures::store();
        let resolver = HierarchyResolver::new(&store);

        let children = resolver.descendants("Thing").unwrap();
        assert_eq!(
            ids(&children),
            vec!["schema:Person", "schema:Organization", "schema:CreativeWork"]
        );
        assert!(!ids(&children).contains(&"schema:Employee"));
    }

    #[test]
    fn test_unknown_or_non_class_is_not_found() {
        let store = fixtures::store();
        let resolver = HierarchyResolver::new(&store);

        assert!(matches!(resolver.ancestors("Unicorn"), Err(Error::TypeNotFound(n)) if n == "Unicorn"));
        assert!(resolver.descendants("Unicorn").unwrap_err().is_not_found());
        assert!(resolver.ancestors("name").unwrap_err().is_not_found());
    }

    #[test]
    fn test_hierarchy_record() {
        let store = fixtures::store();
        let resolver = HierarchyResolver::new(&store);

        let hierarchy = resolver.hierarchy("schema:Article").unwrap();
        assert_eq!(hierarchy.name, "Article");
        assert_eq!(hierarchy.id, "schema:Article");
        assert_eq!(ids(&hierarchy.parents), vec!["schema:CreativeWork"]);
        assert_eq!(ids(&hierarchy.children), vec!["schema:NewsArticle"]);
    }

    #[test]
    fn test_lineage_walks_to_the_root() {
        let store = fixtures::store();
        let resolver = HierarchyResolver::new(&store);

        let chain = resolver.lineage("NewsArticle").unwrap();
        assert_eq!(
            ids(&chain),
            vec!["schema:Article", "schema:CreativeWork", "schema:Thing"]
        );

        let chain = resolver.lineage("Employee").unwrap();
        assert_eq!(ids(&chain), vec!["schema:Person", "schema:Worker", "schema:Thing"]);
    }

    #[test]
    fn test_lineage_path_starts_with_the_type() {
        let store = fixtures::store();
        let resolver = HierarchyResolver::new(&store);

        let path = resolver.lineage_path("NewsArticle").unwrap();
        let labels: Vec<&str> = path.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["NewsArticle", "Article", "CreativeWork", "Thing"]);
        assert!(resolver.lineage_path("Unicorn").unwrap_err().is_not_found());
    }

    #[test]
    fn test_lineage_terminates_on_cycles() {
        let store = IndexBuilder::default()
            .build(&json!({"@graph": [
                {"@id": "schema:A", "@type": "rdfs:Class", "rdfs:subClassOf": {"@id": "schema:B"}},
                {"@id": "schema:B", "@type": "rdfs:Class", "rdfs:subClassOf": {"@id": "schema:C"}},
                {"@id": "schema:C", "@type": "rdfs:Class", "rdfs:subClassOf": {"@id": "schema:A"}}
            ]}))
            .unwrap();
        let resolver = HierarchyResolver::new(&store);

        let chain = resolver.lineage("A").unwrap();
        assert_eq!(ids(&chain), vec!["schema:B", "schema:C"]);
        assert_eq!(ids(&resolver.ancestors("C").unwrap()), vec!["schema:A"]);
        assert_eq!(ids(&resolver.descendants("A").unwrap()), vec!["schema:C"]);
    }

    #[test]
    fn test_ids_outside_namespace_resolve_by_id() {
        let store = IndexBuilder::default()
            .build(&json!({"@graph": [
                {"@id": "https://schema.org/Thing", "@type": "rdfs:Class", "rdfs:label": "Thing"},
                {"@id": "https://schema.org/Person", "@type": "rdfs:Class", "rdfs:label": "Person",
                 "rdfs:subClassOf": {"@id": "https://schema.org/Thing"}}
            ]}))
            .unwrap();
        let resolver = HierarchyResolver::new(&store);

        for entity in store.classes() {
            assert!(resolver.ancestors(&entity.id).is_ok(), "{}", entity.id);
        }
        assert_eq!(
            ids(&resolver.ancestors("https://schema.org/Person").unwrap()),
            vec!["https://schema.org/Thing"]
        );
        assert_eq!(resolver.descendants("Thing").unwrap()[0].label, "Person");
    }

    #[test]
    fn test_self_loop() {
        let store = IndexBuilder::default()
            .build(&json!({"@graph": [
                {"@id": "schema:Loop", "@type": "rdfs:Class", "rdfs:subClassOf": {"@id": "schema:Loop"}}
            ]}))
            .unwrap();
        let resolver = HierarchyResolver::new(&store);

        assert!(resolver.lineage("Loop").unwrap().is_empty());
        assert_eq!(ids(&resolver.descendants("Loop").unwrap()), vec!["schema:Loop"]);
    }
}
