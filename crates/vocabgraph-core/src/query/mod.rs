//! Read-only query engines over a [`GraphStore`](crate::graph::GraphStore)
//!
//! Each resolver borrows the store it is given and holds no other state, so
//! any number of them can run concurrently against one shared snapshot.
//!
//! ```text
//!                   ┌──────────────┐
//!                   │  GraphStore  │
//!                   └──────┬───────┘
//!        ┌─────────────┬───┴─────────┬──────────────┐
//!        ↓             ↓             ↓              ↓
//!   TypeLookup   HierarchyResolver  PropertyResolver  SearchEngine
//!        └─────────────┬─────────────┘
//!                      ↓
//!             ExampleSynthesizer
//! ```

mod example;
mod hierarchy;
mod properties;
mod search;
mod types;

pub use example::{ExampleSynthesizer, placeholder_value};
pub use hierarchy::{HierarchyResolver, TypeHierarchy};
pub use properties::{PropertyDescriptor, PropertyResolver};
pub use search::{DEFAULT_SEARCH_LIMIT, SearchEngine, SearchHit, clamp_limit};
pub use types::{TypeLookup, TypeSummary};

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{Value, json};

    use crate::graph::{GraphStore, IndexBuilder};

    /// A small slice of schema.org
    pub fn document() -> Value {
        json!({
            "@context": {"schema": "https://schema.org/"},
            "@graph": [
                {"@id": "schema:Thing", "@type": "rdfs:Class", "rdfs:label": "Thing",
                 "rdfs:comment": "The most generic type of item."},
                {"@id": "schema:Person", "@type": "rdfs:Class", "rdfs:label": "Person",
                 "rdfs:comment": "A person (alive, dead, undead, or fictional).",
                 "rdfs:subClassOf": {"@id": "schema:Thing"}},
                {"@id": "schema:Organization", "@type": "rdfs:Class", "rdfs:label": "Organization",
                 "rdfs:comment": "An organization such as a school, NGO, corporation, club, etc.",
                 "rdfs:subClassOf": {"@id": "schema:Thing"}},
                {"@id": "schema:Employee", "@type": "rdfs:Class", "rdfs:label": "Employee",
                 "rdfs:comment": "A person working for an organization.",
                 "rdfs:subClassOf": [{"@id": "schema:Person"}, {"@id": "schema:Worker"}]},
                {"@id": "schema:CreativeWork", "@type": "rdfs:Class", "rdfs:label": "CreativeWork",
                 "rdfs:comment": "The most generic kind of creative work, including books, movies, photographs and articles.",
                 "rdfs:subClassOf": {"@id": "schema:Thing"}},
                {"@id": "schema:Article", "@type": "rdfs:Class", "rdfs:label": "Article",
                 "rdfs:comment": "An article, such as a news article or piece of investigative report.",
                 "rdfs:subClassOf": {"@id": "schema:CreativeWork"}},
                {"@id": "schema:NewsArticle", "@type": "rdfs:Class", "rdfs:label": "NewsArticle",
                 "rdfs:comment": "A NewsArticle is an article whose content reports news.",
                 "rdfs:subClassOf": {"@id": "schema:Article"}},
                {"@id": "schema:ImageObject", "@type": "rdfs:Class", "rdfs:label": "ImageObject",
                 "rdfs:comment": "An image file.",
                 "rdfs:subClassOf": {"@id": "schema:CreativeWork"}},
                {"@id": "schema:Text", "@type": ["schema:DataType", "rdfs:Class"], "rdfs:label": "Text",
                 "rdfs:comment": "Data type: Text."},
                {"@id": "schema:URL", "@type": "rdfs:Class", "rdfs:label": "URL",
                 "rdfs:comment": "Data type: URL.",
                 "rdfs:subClassOf": {"@id": "schema:Text"}},
                {"@id": "schema:Date", "@type": ["schema:DataType", "rdfs:Class"], "rdfs:label": "Date",
                 "rdfs:comment": "A date value in ISO 8601 date format."},
                {"@id": "schema:name", "@type": "rdf:Property", "rdfs:label": "name",
                 "rdfs:comment": "The name of the item.",
                 "schema:domainIncludes": {"@id": "schema:Thing"},
                 "schema:rangeIncludes": {"@id": "schema:Text"}},
                {"@id": "schema:description", "@type": "rdf:Property", "rdfs:label": "description",
                 "rdfs:comment": "A description of the item.",
                 "schema:domainIncludes": {"@id": "schema:Thing"},
                 "schema:rangeIncludes": {"@id": "schema:Text"}},
                {"@id": "schema:url", "@type": "rdf:Property", "rdfs:label": "url",
                 "rdfs:comment": "URL of the item.",
                 "schema:domainIncludes": {"@id": "schema:Thing"},
                 "schema:rangeIncludes": {"@id": "schema:URL"}},
                {"@id": "schema:image", "@type": "rdf:Property", "rdfs:label": "image",
                 "rdfs:comment": "An image of the item.",
                 "schema:domainIncludes": {"@id": "schema:Thing"},
                 "schema:rangeIncludes": [{"@id": "schema:ImageObject"}, {"@id": "schema:URL"}]},
                {"@id": "schema:identifier", "@type": "rdf:Property", "rdfs:label": "identifier",
                 "rdfs:comment": "The identifier property represents any kind of identifier.",
                 "schema:domainIncludes": {"@id": "schema:Thing"},
                 "schema:rangeIncludes": [{"@id": "schema:PropertyValue"}, {"@id": "schema:Text"}, {"@id": "schema:URL"}]},
                {"@id": "schema:birthDate", "@type": "rdf:Property", "rdfs:label": "birthDate",
                 "rdfs:comment": "Date of birth.",
                 "schema:domainIncludes": {"@id": "schema:Person"},
                 "schema:rangeIncludes": {"@id": "schema:Date"}},
                {"@id": "schema:jobTitle", "@type": "rdf:Property", "rdfs:label": "jobTitle",
                 "rdfs:comment": "The job title of the person.",
                 "schema:domainIncludes": [{"@id": "schema:Person"}, {"@id": "schema:Person"}],
                 "schema:rangeIncludes": {"@id": "schema:Text"}}
            ]
        })
    }

    pub fn store() -> GraphStore {
        IndexBuilder::default()
            .build(&document())
            .expect("fixture document is valid")
    }
}
