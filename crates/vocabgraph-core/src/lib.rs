//! Vocabgraph Core Library
//!
//! This crate indexes a schema.org-style JSON-LD vocabulary and answers
//! read-only queries over it:
//! - Type lookup by bare name, qualified id or label
//! - Keyword search over class labels and descriptions
//! - Direct parents/children and the full ancestor chain of a class
//! - Property resolution with one level of inheritance
//! - Example instance synthesis
//!
//! A [`GraphStore`](graph::GraphStore) is built once from a parsed document
//! and never mutated. Resolvers borrow it; [`Vocabulary`] wraps it for shared
//! use and atomic refresh.

pub mod config;
pub mod error;
pub mod graph;
pub mod query;
pub mod vocabulary;

pub use error::{Error, Result};
pub use vocabulary::Vocabulary;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::VocabConfig;
    pub use crate::error::{Error, Result};
    pub use crate::graph::{GraphStore, IndexBuilder, TypeRef};
    pub use crate::query::{PropertyDescriptor, SearchHit, TypeHierarchy, TypeSummary};
    pub use crate::vocabulary::Vocabulary;
}
