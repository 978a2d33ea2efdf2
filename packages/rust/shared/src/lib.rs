//! Shared types, error model, and configuration for webchurn.
//!
//! This crate is the foundation depended on by the other webchurn crates.
//! It provides:
//! - [`WebchurnError`], the unified error type
//! - The [`Article`] domain type
//! - Configuration ([`AppConfig`], [`FetchConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, FetchConfig, config_dir, config_file_path, load_config, load_config_from,
};
pub use error::{Result, WebchurnError};
pub use types::Article;
