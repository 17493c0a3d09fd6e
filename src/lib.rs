//! Library entrypoint for iotdb-init.
//!
//! This file exists mainly to make the initializer easy to test
//! (integration tests under `tests/` can import the config, models and
//! services and run initialization against a database of their choosing).

pub mod config;
pub mod models;
pub mod services;
