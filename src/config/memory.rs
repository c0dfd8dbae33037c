//! In-Memory Configuration Provider
//!
//! Provides a simple in-memory key-value store for configuration.
//! Useful for testing and code-defined configuration.

use std::collections::HashMap;

use dashmap::DashMap;

use super::ConfigResult;
use super::provider::ConfigProvider;

/// In-memory configuration provider
#[derive(Debug)]
pub struct MemoryConfigProvider {
    data: DashMap<String, String>,
    name: String,
}

impl MemoryConfigProvider {
    /// Create a new empty memory provider
    pub fn new() -> Self {
        Self::named("memory")
    }

    /// Create a memory provider with a custom name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            data: DashMap::new(),
            name: name.into(),
        }
    }

    /// Create a memory provider with initial data
    pub fn from_data(data: HashMap<String, String>) -> Self {
        Self {
            data: data.into_iter().collect(),
            name: "memory".to_string(),
        }
    }

    /// Add an initial value during construction (builder pattern)
    pub fn value(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a value
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    /// Remove a value, returning whether it existed
    pub fn remove(&self, key: &str) -> bool {
        self.data.remove(key).is_some()
    }

    /// Get the number of stored values
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Clear all values
    pub fn clear(&self) {
        self.data.clear();
    }
}

impl Default for MemoryConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider for MemoryConfigProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.data.get(key).map(|entry| entry.value().clone()))
    }
}
