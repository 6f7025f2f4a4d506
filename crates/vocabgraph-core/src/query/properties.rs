//! Property resolution for classes

use std::collections::HashSet;

use serde::Serialize;

use super::hierarchy::HierarchyResolver;
use crate::graph::{Entity, GraphStore, qualify};

/// A property applicable to a class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    pub name: String,
    pub description: String,
    pub id: String,
    /// Labels of the range types, in declaration order
    pub expected_type_names: Vec<String>,
    /// Label of the direct superclass this property was inherited from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<String>,
}

/// Read-only property queries over a [`GraphStore`]
#[derive(Debug, Clone, Copy)]
pub struct PropertyResolver<'a> {
    store: &'a GraphStore,
}

impl<'a> PropertyResolver<'a> {
    pub fn new(store: &'a GraphStore) -> Self {
        Self { store }
    }

    /// Properties whose domain includes the type, optionally with those of
    /// its direct superclasses
    ///
    /// Inheritance is one level deep. Each property id is emitted once, the
    /// first source wins. Output is sorted by name. An unknown type yields an
    /// empty list rather than an error.
    pub fn properties(&self, name: &str, include_inherited: bool) -> Vec<PropertyDescriptor> {
        let entity = self.store.lookup(name);
        let type_id = match entity {
            Some(entity) => entity.id.clone(),
            None => qualify(name, self.store.namespace()),
        };

        let mut seen: HashSet<&'a str> = HashSet::new();
        let mut descriptors = Vec::new();

        for property in self.store.properties_with_domain(&type_id) {
            if seen.insert(property.id.as_str()) {
                descriptors.push(self.describe(property, None));
            }
        }

        if include_inherited {
            if let Some(entity) = entity {
                for parent in HierarchyResolver::new(self.store).parents_of(entity) {
                    for property in self.store.properties_with_domain(&parent.id) {
                        if seen.insert(property.id.as_str()) {
                            descriptors.push(self.describe(property, Some(parent.label.clone())));
                        }
                    }
                }
            }
        }

        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }

    fn describe(&self, property: &Entity, inherited_from: Option<String>) -> PropertyDescriptor {
        PropertyDescriptor {
            name: self.store.label_of(property),
            description: property.description(),
            id: property.id.clone(),
            expected_type_names: property
                .range_ids
                .iter()
                .map(|id| self.store.resolve_ref(id).label)
                .collect(),
            inherited_from,
        }
    }
}
