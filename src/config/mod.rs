//! Configuration for the wallets client.
//!
//! Values come from `config.toml`, with CLI and environment overrides
//! applied on top by the binary.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ConfigOverrides, EndpointConfig, QueryFilters, UiConfig, DEFAULT_ENDPOINT};
