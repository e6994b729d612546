//! Configuration schema for wasm-ports
//!
//! Configuration is stored at `~/.config/wasm-ports/config.toml`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Host build settings
    pub build: BuildConfig,

    /// Per-port option tables, keyed by port name
    pub ports: BTreeMap<String, BTreeMap<String, toml::Value>>,
}

impl Config {
    /// Options configured for `port`, as strings ready for validation
    ///
    /// TOML booleans and integers are accepted alongside strings, so
    /// `disableWarning = true` and `optimizationLevel = 3` both work.
    pub fn port_options(&self, port: &str) -> BTreeMap<String, String> {
        self.ports
            .get(port)
            .map(|table| {
                table
                    .iter()
                    .map(|(k, v)| (k.clone(), value_to_string(v)))
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn value_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Host build settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Build with threading enabled
    pub pthreads: bool,

    /// Root where port sources are unpacked
    pub ports_dir: Option<PathBuf>,

    /// Sysroot include directory
    pub include_dir: Option<PathBuf>,
}
