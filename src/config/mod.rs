//! Configuration loading and parsing for runenv.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layered merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use runenv::config::load_project_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".runenv");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(
//!     dir.join("config.yml"),
//!     "runtime_environments:\n  host:\n    enabled: true\n",
//! )
//! .unwrap();
//!
//! let config = load_project_config(temp.path()).unwrap();
//! assert!(config.runtime_environments["host"].enabled);
//! ```

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    find_project_root, load_config, load_config_value, load_project_config, ConfigPaths,
    CONFIG_DIR,
};
pub use merger::{merge_into, merge_layers};
pub use schema::{ActivationConfig, EnvironmentConfig, RunenvConfig};
