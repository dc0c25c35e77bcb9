//! Navigation engine configuration
//!
//! Stores user preferences in `~/.config/vdata-nav/config.yaml`

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::scheduler::REBUILD_DEBOUNCE_MS;
use crate::schema::SCHEMA_TTL_HOURS;

pub const DEFAULT_DOCS_BASE_URL: &str = "https://s2v.app/SchemaExplorer/deadlock/server.dll";
pub const DEFAULT_DECLARATION_KEY: &str = "_class";

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Quiet period after the last edit before the outline is rebuilt
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Documentation pages live at `<docs_base_url>/<schema name>`
    #[serde(default = "default_docs_base_url")]
    pub docs_base_url: String,
    /// Reserved key whose quoted value anchors an outline section
    #[serde(default = "default_declaration_key")]
    pub declaration_key: String,
    /// Persisted schema selections older than this are ignored
    #[serde(default = "default_schema_ttl_hours")]
    pub schema_ttl_hours: u64,
}

fn default_debounce_ms() -> u64 {
    REBUILD_DEBOUNCE_MS
}

fn default_docs_base_url() -> String {
    DEFAULT_DOCS_BASE_URL.to_string()
}

fn default_declaration_key() -> String {
    DEFAULT_DECLARATION_KEY.to_string()
}

fn default_schema_ttl_hours() -> u64 {
    SCHEMA_TTL_HOURS
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            docs_base_url: default_docs_base_url(),
            declaration_key: default_declaration_key(),
            schema_ttl_hours: default_schema_ttl_hours(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        match crate::config_paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory available, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from an explicit path, or return defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
