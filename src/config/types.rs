use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Endpoint used when neither the config file nor the CLI names one.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/v1/wallets/";

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where and how the wallets list is fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Absolute http(s) URL of the wallets list.
    #[serde(default = "default_url")]
    pub url: String,
    /// Total request timeout in seconds. Unset means the request may wait forever.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// Connection timeout in seconds. Unset leaves it to the OS.
    #[serde(default)]
    pub connect_timeout_seconds: Option<u64>,
    /// Filters forwarded to the list endpoint as query parameters.
    #[serde(default)]
    pub query: QueryFilters,
}

/// Filters understood by the wallets list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryFilters {
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub owner_id: Option<u64>,
    #[serde(default)]
    pub co_owner_id: Option<u64>,
    /// Passed through verbatim, e.g. `2024-01-31`.
    #[serde(default)]
    pub created_before: Option<String>,
    #[serde(default)]
    pub created_after: Option<String>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_url() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_seconds: None,
            connect_timeout_seconds: None,
            query: QueryFilters::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl EndpointConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_seconds.map(Duration::from_secs)
    }
}

impl QueryFilters {
    /// Non-empty filters as `(name, value)` pairs, in a stable order.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.user_id {
            pairs.push(("user_id", id.to_string()));
        }
        if let Some(id) = self.owner_id {
            pairs.push(("owner_id", id.to_string()));
        }
        if let Some(id) = self.co_owner_id {
            pairs.push(("co_owner_id", id.to_string()));
        }
        if let Some(before) = &self.created_before {
            pairs.push(("created_before", before.clone()));
        }
        if let Some(after) = &self.created_after {
            pairs.push(("created_after", after.clone()));
        }
        pairs
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

/// Values supplied on the command line or through the environment.
///
/// Any field left as `None` keeps the value from the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl Config {
    /// Applies CLI/env overrides on top of the loaded file.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(url) = &overrides.endpoint {
            self.endpoint.url = url.clone();
        }
        if let Some(secs) = overrides.timeout_seconds {
            self.endpoint.timeout_seconds = Some(secs);
        }
    }
}
