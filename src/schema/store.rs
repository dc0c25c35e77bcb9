//! Persistent "last viewed schema" record
//!
//! Stored as JSON in `~/.config/vdata-nav/schema.json`. Storage problems are
//! never fatal: callers log and carry on with nothing selected.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Records older than this are ignored on load
pub const SCHEMA_TTL_HOURS: u64 = 6;

const MS_PER_HOUR: u64 = 60 * 60 * 1000;

/// The single persisted record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRecord {
    pub name: String,
    /// Unix epoch milliseconds when the schema was selected
    pub ts: u64,
}

impl SchemaRecord {
    /// Whether the record is younger than `ttl_hours` at `now_ms`
    pub fn is_fresh(&self, now_ms: u64, ttl_hours: u64) -> bool {
        now_ms.saturating_sub(self.ts) < ttl_hours.saturating_mul(MS_PER_HOUR)
    }
}

pub fn now_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Durable key/value storage for the schema record
pub trait SchemaStore {
    fn load(&self) -> anyhow::Result<Option<SchemaRecord>>;
    fn save(&mut self, record: &SchemaRecord) -> anyhow::Result<()>;
}

/// JSON file backed store
#[derive(Debug, Clone)]
pub struct FileSchemaStore {
    path: Option<PathBuf>,
}

impl FileSchemaStore {
    /// Store at the default config location (may be unavailable)
    pub fn new() -> Self {
        Self {
            path: crate::config_paths::schema_file(),
        }
    }

    /// Store at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for FileSchemaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaStore for FileSchemaStore {
    fn load(&self) -> anyhow::Result<Option<SchemaRecord>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save(&mut self, record: &SchemaRecord) -> anyhow::Result<()> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No config directory available"))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(record)?)?;
        tracing::debug!("Saved schema {} to {}", record.name, path.display());
        Ok(())
    }
}

/// In-memory store, used when no config directory exists and in tests
#[derive(Debug, Clone, Default)]
pub struct MemorySchemaStore {
    pub record: Option<SchemaRecord>,
    pub writes: usize,
}

impl SchemaStore for MemorySchemaStore {
    fn load(&self) -> anyhow::Result<Option<SchemaRecord>> {
        Ok(self.record.clone())
    }

    fn save(&mut self, record: &SchemaRecord) -> anyhow::Result<()> {
        self.record = Some(record.clone());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freshness_boundary() {
        let record = SchemaRecord {
            name: "Foo".to_string(),
            ts: 1_000,
        };
        assert!(record.is_fresh(1_000, SCHEMA_TTL_HOURS));
        assert!(record.is_fresh(1_000 + 6 * MS_PER_HOUR - 1, SCHEMA_TTL_HOURS));
        assert!(!record.is_fresh(1_000 + 6 * MS_PER_HOUR, SCHEMA_TTL_HOURS));
        // Clock going backwards counts as fresh
        assert!(record.is_fresh(0, SCHEMA_TTL_HOURS));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileSchemaStore::at(dir.path().join("nested").join("schema.json"));
        assert_eq!(store.load().unwrap(), None);

        let record = SchemaRecord {
            name: "CAbility_Foo_VData".to_string(),
            ts: 42,
        };
        store.save(&record).unwrap();
        assert_eq!(store.load().unwrap(), Some(record));
    }

    #[test]
    fn test_file_store_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(FileSchemaStore::at(path).load().is_err());
    }

    #[test]
    fn test_record_json_shape() {
        let record = SchemaRecord {
            name: "Foo".to_string(),
            ts: 5,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Foo", "ts": 5}));
    }

    #[test]
    fn test_memory_store_counts_writes() {
        let mut store = MemorySchemaStore::default();
        store
            .save(&SchemaRecord {
                name: "A".to_string(),
                ts: 0,
            })
            .unwrap();
        assert_eq!(store.writes, 1);
        assert_eq!(store.load().unwrap().unwrap().name, "A");
    }
}
