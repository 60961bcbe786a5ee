//! Configuration module for baidu-search
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "BAIDU_SEARCH_SETTINGS_PATH";

/// Load settings, preferring an explicit path over the default locations.
///
/// Lookup order: `explicit`, `$BAIDU_SEARCH_SETTINGS_PATH`, `./baidu-search.yml`,
/// `<config dir>/baidu-search/settings.yml`. Falls back to defaults when none
/// exists. Environment overrides are applied last in every case.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let env_path = std::env::var_os(SETTINGS_PATH_ENV).map(PathBuf::from);
    load_from(explicit, env_path.as_deref())
}

/// [`load`] with the environment path passed in.
///
/// A path named explicitly or through the environment must exist; only the
/// default locations are optional.
pub fn load_from(explicit: Option<&Path>, env_path: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit.or(env_path) {
        return from_path(path);
    }

    for path in default_paths() {
        if path.exists() {
            return from_path(&path);
        }
    }

    debug!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

fn from_path(path: &Path) -> Result<Settings> {
    debug!("Loading settings from: {}", path.display());
    let mut settings = Settings::from_file(path)
        .with_context(|| format!("failed to load settings from {}", path.display()))?;
    settings.merge_env();
    Ok(settings)
}

fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("baidu-search.yml")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("baidu-search/settings.yml"));
    }
    paths
}
