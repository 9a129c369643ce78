//! Switcher configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default quiet period before a query recomputation commits.
pub const DEFAULT_DEBOUNCE_MS: u64 = 50;
/// Default cursor stride for page-up/page-down navigation.
pub const DEFAULT_PAGE_JUMP: usize = 10;

/// Which windows contribute candidates to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchScope {
    /// Only tabs in the window the overlay was invoked from.
    CurrentWindow,
    /// Tabs across every window the privileged process reports.
    AllWindows,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitcherConfig {
    #[serde(default = "default_scope")]
    pub scope: SearchScope,
    /// Debounce quiet period in milliseconds.
    #[serde(default = "default_debounce_ms", rename = "debounceMs")]
    pub debounce_ms: u64,
    /// Rows skipped by page-up/page-down.
    #[serde(default = "default_page_jump", rename = "pageJump")]
    pub page_jump: usize,
}

fn default_scope() -> SearchScope {
    SearchScope::CurrentWindow
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_page_jump() -> usize {
    DEFAULT_PAGE_JUMP
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            scope: default_scope(),
            debounce_ms: default_debounce_ms(),
            page_jump: default_page_jump(),
        }
    }
}

impl SwitcherConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Load from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("parsing config from {}", path.display()))?;
        info!(path = %path.display(), "loaded switcher config");
        Ok(config)
    }

    /// Load from the given path, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "using default switcher config");
                Self::default()
            }
        }
    }
}

/// Default config location: `~/.tab-omnibar/config.json`.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tab-omnibar")
        .join("config.json")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
