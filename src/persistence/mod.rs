//! Progress persistence
//!
//! Features:
//! - `ProgressStore`: flat key-value storage (LocalStorage on web, memory elsewhere)
//! - Typed reads that degrade to safe zero values on missing or corrupt data
//! - `PersistentProgress`: monotonic high score, completed-level set, bonus flag

#[cfg(target_arch = "wasm32")]
mod local_storage;
mod progress;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;
pub use progress::PersistentProgress;

/// Storage keys, compatible with saves from the JavaScript build
pub const HIGH_SCORE_KEY: &str = "bumpyDashHighScore";
pub const COMPLETED_LEVELS_KEY: &str = "completedLevels";
pub const BONUS_UNLOCKED_KEY: &str = "bonusUnlocked";

/// A value as it is written to storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoredValue {
    Scalar(f64),
    List(Vec<u32>),
    Flag(bool),
}

impl StoredValue {
    /// Text form stored under a key
    pub fn encode(&self) -> String {
        match self {
            StoredValue::Scalar(v) => v.to_string(),
            StoredValue::List(ids) => {
                // Vec<u32> always serializes
                serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string())
            }
            StoredValue::Flag(b) => b.to_string(),
        }
    }
}

/// Durable key-value storage behind the game core
///
/// Implementors only move raw strings; the typed helpers never fail and fall
/// back to zero values, so a first run and a corrupted store look the same.
pub trait ProgressStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);

    /// Finite number stored under `key`
    fn load_scalar(&self, key: &str) -> Option<f64> {
        let raw = self.read(key)?;
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => {
                log::warn!("Ignoring non-numeric value for {}: {:?}", key, raw);
                None
            }
        }
    }

    /// Id list stored as a JSON array; empty when missing or malformed
    fn load_list(&self, key: &str) -> Vec<u32> {
        let Some(raw) = self.read(key) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<u32>>(&raw) {
            Ok(ids) => ids,
            Err(e) => {
                log::warn!("Ignoring malformed list for {}: {}", key, e);
                Vec::new()
            }
        }
    }

    /// Only the literal `true` counts as set
    fn load_flag(&self, key: &str) -> bool {
        self.read(key).is_some_and(|raw| raw.trim() == "true")
    }

    fn save(&mut self, key: &str, value: &StoredValue) {
        self.write(key, &value.encode());
    }
}

/// In-memory store for native builds and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed raw text, as if written by an earlier session
    pub fn with_raw(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl ProgressStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
