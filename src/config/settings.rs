//! Settings structures for baidu-search configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Main settings structure, mirrors the layout of `baidu-search.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchSettings,
    pub outgoing: OutgoingSettings,
    pub output: OutputSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (BAIDU_SEARCH_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("BAIDU_SEARCH_BASE_URL") {
            self.search.base_url = val;
        }
        if let Ok(val) = std::env::var("BAIDU_SEARCH_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.outgoing.request_timeout = timeout;
            }
        }
        if let Ok(val) = std::env::var("BAIDU_SEARCH_PROXY") {
            self.outgoing.proxies.all = Some(val);
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Where search requests are sent. Result links are still
    /// absolutized against the public Baidu origin.
    pub base_url: String,
    /// Result count used when `--num` is not given
    pub default_num_results: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: crate::BAIDU_ORIGIN.to_string(),
            default_num_results: crate::DEFAULT_NUM_RESULTS,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Fixed user agent (none = random desktop browser)
    pub useragent: Option<String>,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            useragent: None,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Rendering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Characters of an abstract shown before the ellipsis in text mode
    pub abstract_max_chars: usize,
    /// Emit an empty JSON result object instead of the "no results" notice
    pub empty_json: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            abstract_max_chars: crate::ABSTRACT_MAX_CHARS,
            empty_json: false,
        }
    }
}
