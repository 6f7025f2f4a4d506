//! Example instance synthesis

use serde_json::{Map, Value, json};

use super::properties::{PropertyDescriptor, PropertyResolver};
use super::types::TypeLookup;
use crate::config::ExampleConfig;
use crate::error::Result;
use crate::graph::GraphStore;

const EXAMPLE_URL: &str = "https://example.com";
const EXAMPLE_IMAGE_URL: &str = "https://example.com/image.jpg";
const EXAMPLE_DATE: &str = "2024-01-01";
const EXAMPLE_DATE_TIME: &str = "2024-01-01T12:00:00Z";
const EXAMPLE_NUMBER: i64 = 42;

/// Placeholder value for a property, keyed on its first expected type
pub fn placeholder_value(property: &PropertyDescriptor) -> Value {
    let generic = || Value::String(format!("Example {}", property.name));

    let Some(expected) = property.expected_type_names.first() else {
        return generic();
    };

    match expected.as_str() {
        "URL" => Value::String(EXAMPLE_URL.to_string()),
        "Date" => Value::String(EXAMPLE_DATE.to_string()),
        "DateTime" => Value::String(EXAMPLE_DATE_TIME.to_string()),
        "Number" | "Integer" | "Float" => Value::from(EXAMPLE_NUMBER),
        "Boolean" => Value::Bool(true),
        "ImageObject" => json!({
            "@type": "ImageObject",
            "url": EXAMPLE_IMAGE_URL,
            "contentUrl": EXAMPLE_IMAGE_URL,
        }),
        _ => generic(),
    }
}

/// Builds a representative instance of a type
#[derive(Debug, Clone)]
pub struct ExampleSynthesizer<'a> {
    store: &'a GraphStore,
    config: ExampleConfig,
}

impl<'a> ExampleSynthesizer<'a> {
    pub fn new(store: &'a GraphStore) -> Self {
        Self {
            store,
            config: ExampleConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ExampleConfig) -> Self {
        self.config = config;
        self
    }

    /// Synthesize an attribute map for `name`
    ///
    /// Only direct properties on the common allow-list are filled in.
    /// `overrides` are applied last and win on every key, including
    /// `@context` and `@type`.
    pub fn synthesize(&self, name: &str, overrides: Option<&Map<String, Value>>) -> Result<Map<String, Value>> {
        let summary = TypeLookup::new(self.store).get_type(name)?;

        let mut example = Map::new();
        example.insert("@context".to_string(), Value::String(self.config.context.clone()));
        example.insert("@type".to_string(), Value::String(summary.name));

        for property in PropertyResolver::new(self.store).properties(&summary.id, false) {
            if self.config.common_properties.contains(&property.name) {
                example.insert(property.name.clone(), placeholder_value(&property));
            }
        }

        if let Some(overrides) = overrides {
            for (key, value) in overrides {
                example.insert(key.clone(), value.clone());
            }
        }

        Ok(example)
    }
}
