//! Configuration loading and layering.
//!
//! Handles `~/.config/cdsfetch/config.toml` loading, environment variable
//! resolution, and CLI flag merging with proper priority ordering. CDS API
//! credentials are resolved separately by [`crate::credentials`].

pub mod loader;

pub use loader::{Config, ConfigError, CountriesConfig, DownloadConfig};
