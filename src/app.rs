//! Startup: settings plus the search gateway

use crate::config::{self, Settings};
use crate::engines::BaiduGateway;
use anyhow::Result;
use std::path::Path;

/// Everything a run needs, built once before any query is attempted
pub struct App {
    pub settings: Settings,
    pub gateway: BaiduGateway,
}

impl App {
    /// Load settings and build the gateway. An error here means the search
    /// capability is unavailable.
    pub fn init(config_path: Option<&Path>) -> Result<Self> {
        Self::from_settings(config::load(config_path)?)
    }

    pub fn from_settings(settings: Settings) -> Result<Self> {
        let gateway = BaiduGateway::from_settings(&settings)?;
        Ok(Self { settings, gateway })
    }
}
