//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Hard upper bound on search results, regardless of configuration
pub const MAX_SEARCH_LIMIT: usize = 100;

/// Vocabgraph configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabConfig {
    pub vocabulary: VocabularyConfig,
    pub search: SearchConfig,
    pub examples: ExampleConfig,
}

/// How raw documents are interpreted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Prefix used to qualify bare type names, e.g. `schema:`
    pub namespace: String,
    /// Base URL for human-facing links
    pub site_url: String,
    /// `@type` tags that place an entity in the class bucket
    pub class_kinds: Vec<String>,
    /// `@type` tags that place an entity in the property bucket
    pub property_kinds: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub default_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleConfig {
    /// Value of `@context` in synthesized instances
    pub context: String,
    /// Property names that are filled in when synthesizing
    pub common_properties: Vec<String>,
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            vocabulary: VocabularyConfig::default(),
            search: SearchConfig { default_limit: 10 },
            examples: ExampleConfig::default(),
        }
    }
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            namespace: "schema:".to_string(),
            site_url: "https://schema.org/".to_string(),
            class_kinds: vec!["rdfs:Class".to_string()],
            property_kinds: vec!["rdf:Property".to_string()],
        }
    }
}

impl Default for ExampleConfig {
    fn default() -> Self {
        Self {
            context: "https://schema.org".to_string(),
            common_properties: ["name", "description", "url", "identifier", "image"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl VocabConfig {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("VOCABGRAPH_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("vocabgraph")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, or fall back to defaults if it doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(VocabConfig::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: VocabConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.vocabulary.namespace.is_empty() {
            return Err(anyhow!("vocabulary.namespace must not be empty"));
        }
        if self.vocabulary.class_kinds.is_empty() {
            return Err(anyhow!("vocabulary.class_kinds must list at least one tag"));
        }
        if self.vocabulary.property_kinds.is_empty() {
            return Err(anyhow!("vocabulary.property_kinds must list at least one tag"));
        }
        if !(1..=MAX_SEARCH_LIMIT).contains(&self.search.default_limit) {
            return Err(anyhow!(
                "search.default_limit must be between 1 and {}",
                MAX_SEARCH_LIMIT
            ));
        }
        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        match key {
            "vocabulary.namespace" => Ok(self.vocabulary.namespace.clone()),
            "vocabulary.site_url" => Ok(self.vocabulary.site_url.clone()),
            "vocabulary.class_kinds" => Ok(self.vocabulary.class_kinds.join(", ")),
            "vocabulary.property_kinds" => Ok(self.vocabulary.property_kinds.join(", ")),
            "search.default_limit" => Ok(self.search.default_limit.to_string()),
            "examples.context" => Ok(self.examples.context.clone()),
            "examples.common_properties" => Ok(self.examples.common_properties.join(", ")),
            _ => Err(anyhow!(
                "Unknown configuration key: {}. Use `vocabgraph config list` to see available keys.",
                key
            )),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "vocabulary.namespace" => {
                if value.trim().is_empty() {
                    return Err(anyhow!("Namespace must not be empty"));
                }
                self.vocabulary.namespace = value.trim().to_string();
            }
            "vocabulary.site_url" => {
                self.vocabulary.site_url = value.trim().to_string();
            }
            "vocabulary.class_kinds" => {
                let kinds = split_list(value);
                if kinds.is_empty() {
                    return Err(anyhow!("At least one class kind is required"));
                }
                self.vocabulary.class_kinds = kinds;
            }
            "vocabulary.property_kinds" => {
                let kinds = split_list(value);
                if kinds.is_empty() {
                    return Err(anyhow!("At least one property kind is required"));
                }
                self.vocabulary.property_kinds = kinds;
            }
            "search.default_limit" => {
                let limit: usize = value
                    .parse()
                    .with_context(|| format!("Invalid default_limit value: {}", value))?;
                if !(1..=MAX_SEARCH_LIMIT).contains(&limit) {
                    return Err(anyhow!(
                        "Default limit must be between 1 and {}",
                        MAX_SEARCH_LIMIT
                    ));
                }
                self.search.default_limit = limit;
            }
            "examples.context" => {
                self.examples.context = value.trim().to_string();
            }
            "examples.common_properties" => {
                self.examples.common_properties = split_list(value);
            }
            _ => {
                return Err(anyhow!(
                    "Unknown configuration key: {}. Use `vocabgraph config list` to see available keys.",
                    key
                ));
            }
        }
        Ok(())
    }

    /// List all configuration keys and their values
    pub fn list(&self) -> anyhow::Result<Vec<(String, String)>> {
        let keys = [
            "vocabulary.namespace",
            "vocabulary.site_url",
            "vocabulary.class_kinds",
            "vocabulary.property_kinds",
            "search.default_limit",
            "examples.context",
            "examples.common_properties",
        ];

        keys.into_iter()
            .map(|key| {
                let value = self.get(key)?;
                Ok((key.to_string(), value))
            })
            .collect()
    }

    /// Reset configuration to defaults
    pub fn reset() -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
        }
        Ok(())
    }
}
