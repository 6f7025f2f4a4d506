//! Vocabulary graph storage and ingestion
//!
//! - **Entity**: normalized node (class, property, or other tagged item)
//! - **GraphStore**: immutable store with by-id, by-label, by-kind,
//!   domain-to-property and superclass-to-subclass indexes
//! - **IndexBuilder**: single pass from a JSON-LD `@graph` document to a store

mod builder;
mod entity;
mod store;

pub use builder::{IndexBuilder, keys};
pub use entity::{Entity, EntityKinds, NO_DESCRIPTION, TypeRef, local_name, qualify};
pub use store::{GraphStore, StoreOptions, StoreStats};
