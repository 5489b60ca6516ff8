//! cdsfetch — Copernicus Climate Data Store download helper (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod credentials;
pub mod env;
pub mod geo;
pub mod models;
pub mod output;
pub mod plan;
pub mod request;
pub mod storage;
