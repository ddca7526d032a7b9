//! Configuration APIs for chaintable
//!
//! Configuration types implement the [`Config`] trait, which provides
//! validation, initialization from environment variables, presets and JSON
//! file persistence.
//!
//! # Environment Initialization
//!
//! ```rust
//! use chaintable::config::{ChainedHashMapConfig, Config};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads CHAINTABLE_HASH_MAP_INITIAL_CAPACITY and CHAINTABLE_HASH_MAP_HASH_FUNCTION
//! let config = ChainedHashMapConfig::from_env()?;
//! assert!(config.initial_capacity > 0);
//! # Ok(())
//! # }
//! ```
//!
//! # Presets
//!
//! ```rust
//! use chaintable::config::{ChainedHashMapConfig, Config};
//!
//! let small = ChainedHashMapConfig::memory_preset();
//! let large = ChainedHashMapConfig::performance_preset();
//! assert!(small.initial_capacity < large.initial_capacity);
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod hash_map;


pub use hash_map::{ChainedHashMapConfig, MAX_INITIAL_CAPACITY};

/// Environment variable prefix used by [`Config::from_env`]
pub const ENV_PREFIX: &str = "CHAINTABLE_";

/// Common configuration trait providing validation, environment initialization,
/// presets and file persistence.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Variables use the format `CHAINTABLE_{COMPONENT}_{FIELD}`, for example
    /// `CHAINTABLE_HASH_MAP_INITIAL_CAPACITY=101`.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Initialize configuration from environment variables with a custom prefix.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Preset favoring fewer collisions over memory.
    fn performance_preset() -> Self;

    /// Preset favoring a small footprint.
    fn memory_preset() -> Self;

    /// Balanced preset; the default configuration.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Parse an environment variable, falling back to `default` when it is unset
/// or unparsable.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
