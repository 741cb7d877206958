//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

pub use mock_server::{MockResponse, MockWalletsServer};

use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;
use walletview::config::EndpointConfig;
use walletview::fetch::WalletsClient;

/// A local URL nothing listens on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/api/v1/wallets/", port)
}

pub fn client_for(url: &str) -> WalletsClient {
    client_with(EndpointConfig {
        url: url.to_string(),
        ..EndpointConfig::default()
    })
}

pub fn client_with(config: EndpointConfig) -> WalletsClient {
    WalletsClient::from_config(&config).expect("Failed to build client")
}

/// Writes `content` to `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
