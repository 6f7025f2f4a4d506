//! Shared vocabulary handle
//!
//! [`Vocabulary`] owns the current [`GraphStore`] snapshot and exposes every
//! query operation. Readers work against an `Arc` snapshot, so a
//! [`refresh`](Vocabulary::refresh) never disturbs queries already running.

use std::sync::{Arc, RwLock};

use serde_json::{Map, Value};
use tracing::info;

use crate::config::VocabConfig;
use crate::error::{Error, Result};
use crate::graph::{GraphStore, IndexBuilder, StoreStats, TypeRef};
use crate::query::{
    ExampleSynthesizer, HierarchyResolver, PropertyDescriptor, PropertyResolver, SearchEngine,
    SearchHit, TypeHierarchy, TypeLookup, TypeSummary,
};

/// Query facade over an atomically replaceable store
#[derive(Debug)]
pub struct Vocabulary {
    config: VocabConfig,
    builder: IndexBuilder,
    current: RwLock<Arc<GraphStore>>,
}

impl Vocabulary {
    /// Build a vocabulary from a parsed document using default settings
    pub fn from_document(document: &Value) -> Result<Self> {
        Self::with_config(document, VocabConfig::default())
    }

    /// Build a vocabulary from a parsed document
    pub fn with_config(document: &Value, config: VocabConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| Error::ConfigError(e.to_string()))?;

        let builder = IndexBuilder::from_config(&config);
        let store = builder.build(document)?;
        Ok(Self {
            config,
            builder,
            current: RwLock::new(Arc::new(store)),
        })
    }

    /// Wrap an already built store
    ///
    /// The namespace and site URL the store was built with replace those in
    /// `config`, so later refreshes index the same way.
    pub fn from_store(store: GraphStore, mut config: VocabConfig) -> Result<Self> {
        let options = store.options();
        config.vocabulary.namespace = options.namespace.clone();
        config.vocabulary.site_url = options.site_url.clone();
        config
            .validate()
            .map_err(|e| Error::ConfigError(e.to_string()))?;

        Ok(Self {
            builder: IndexBuilder::from_config(&config),
            config,
            current: RwLock::new(Arc::new(store)),
        })
    }

    pub fn config(&self) -> &VocabConfig {
        &self.config
    }

    /// The store currently visible to readers
    pub fn snapshot(&self) -> Arc<GraphStore> {
        // The lock only guards an Arc swap, so a poisoned lock still holds a
        // complete store.
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Rebuild from a new document and swap it in
    ///
    /// On failure the previous store stays in place.
    pub fn refresh(&self, document: &Value) -> Result<StoreStats> {
        let store = Arc::new(self.builder.build(document)?);
        let stats = store.stats();

        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = store;

        info!(
            entities = stats.entities,
            classes = stats.classes,
            "Vocabulary store refreshed"
        );
        Ok(stats)
    }

    pub fn stats(&self) -> StoreStats {
        self.snapshot().stats()
    }

    pub fn get_type(&self, name: &str) -> Result<TypeSummary> {
        TypeLookup::new(&self.snapshot()).get_type(name)
    }

    pub fn search(&self, query: &str, limit: Option<usize>) -> Result<Vec<SearchHit>> {
        SearchEngine::new(&self.snapshot())
            .with_default_limit(self.config.search.default_limit)
            .search(query, limit)
    }

    pub fn ancestors(&self, name: &str) -> Result<Vec<TypeRef>> {
        HierarchyResolver::new(&self.snapshot()).ancestors(name)
    }

    pub fn descendants(&self, name: &str) -> Result<Vec<TypeRef>> {
        HierarchyResolver::new(&self.snapshot()).descendants(name)
    }

    pub fn hierarchy(&self, name: &str) -> Result<TypeHierarchy> {
        HierarchyResolver::new(&self.snapshot()).hierarchy(name)
    }

    pub fn lineage(&self, name: &str) -> Result<Vec<TypeRef>> {
        HierarchyResolver::new(&self.snapshot()).lineage(name)
    }

    pub fn lineage_path(&self, name: &str) -> Result<Vec<TypeRef>> {
        HierarchyResolver::new(&self.snapshot()).lineage_path(name)
    }

    pub fn properties(&self, name: &str, include_inherited: bool) -> Vec<PropertyDescriptor> {
        PropertyResolver::new(&self.snapshot()).properties(name, include_inherited)
    }

    pub fn synthesize(
        &self,
        name: &str,
        overrides: Option<&Map<String, Value>>,
    ) -> Result<Map<String, Value>> {
        ExampleSynthesizer::new(&self.snapshot())
            .with_config(self.config.examples.clone())
            .synthesize(name, overrides)
    }
}
