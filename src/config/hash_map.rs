//! Configuration for [`ChainedHashMap`](crate::hash_map::ChainedHashMap).

use super::{parse_env_var, Config};
use crate::error::{ChainTableError, Result};
use crate::hash_map::{HashFunctionKind, DEFAULT_CAPACITY};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Largest accepted initial bucket request
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

/// Construction parameters for a chained hash map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainedHashMapConfig {
    /// Requested bucket count, rounded up to a prime on construction
    pub initial_capacity: usize,
    /// Hash function used for bucket selection
    pub hash_function: HashFunctionKind,
}

impl Default for ChainedHashMapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            hash_function: HashFunctionKind::Additive,
        }
    }
}

impl Config for ChainedHashMapConfig {
    fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(ChainTableError::configuration(
                "initial_capacity must be greater than 0",
            ));
        }
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ChainTableError::configuration(format!(
                "initial_capacity {} exceeds maximum {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.initial_capacity = parse_env_var(
            &format!("{}HASH_MAP_INITIAL_CAPACITY", prefix),
            config.initial_capacity,
        );
        if let Ok(name) = env::var(format!("{}HASH_MAP_HASH_FUNCTION", prefix)) {
            config.hash_function = name.parse()?;
        }
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            initial_capacity: 1021,
            hash_function: HashFunctionKind::Positional,
        }
    }

    fn memory_preset() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            hash_function: HashFunctionKind::Additive,
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            ChainTableError::configuration(format!("Failed to serialize hash map config: {}", e))
        })?;
        std::fs::write(path, serialized).map_err(|e| {
            ChainTableError::configuration(format!("Failed to write hash map config file: {}", e))
        })?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ChainTableError::configuration(format!("Failed to read hash map config file: {}", e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ChainTableError::configuration(format!("Failed to parse hash map config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
