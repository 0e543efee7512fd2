//! File-backed settings store.
//!
//! One record per key: an 8-byte little-endian `f64` in its own file
//! under the settings directory. Reads are existence-checked (absent key
//! → `None`); writes overwrite unconditionally. This mirrors the
//! single-value persist record the watch firmware kept.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Settings key for the observer's east-positive longitude in degrees.
pub const KEY_LONGITUDE: &str = "longitude";

/// A directory-backed store of single-f64 settings records.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: &Path) -> Result<Self, ConfigError> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    /// Whether a record exists for `key`.
    pub fn exists(&self, key: &str) -> bool {
        self.record_path(key).exists()
    }

    /// Read the f64 record for `key`, or `None` if it was never written.
    pub fn read_f64(&self, key: &'static str) -> Result<Option<f64>, ConfigError> {
        let path = self.record_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path)?;
        let arr: [u8; 8] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| ConfigError::MalformedRecord {
                key,
                len: bytes.len(),
            })?;
        Ok(Some(f64::from_le_bytes(arr)))
    }

    /// Write the f64 record for `key`, replacing any previous value.
    pub fn write_f64(&self, key: &'static str, value: f64) -> Result<(), ConfigError> {
        fs::write(self.record_path(key), value.to_le_bytes())?;
        Ok(())
    }
}

/// Observer settings read at the start of each conversion cycle.
///
/// Passed by reference into the pipeline; the store is only touched
/// when loading or when a configuration message arrives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    /// East-positive longitude in degrees. Defaults to 0.0 (Greenwich)
    /// when nothing has been persisted.
    pub longitude_deg: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self { longitude_deg: 0.0 }
    }
}

impl ObserverConfig {
    /// Load from the store, applying the 0.0° default for an absent record.
    pub fn load(store: &SettingsStore) -> Result<Self, ConfigError> {
        let longitude_deg = store.read_f64(KEY_LONGITUDE)?.unwrap_or(0.0);
        Ok(Self { longitude_deg })
    }

    /// Persist this configuration (unconditional overwrite).
    pub fn save(&self, store: &SettingsStore) -> Result<(), ConfigError> {
        store.write_f64(KEY_LONGITUDE, self.longitude_deg)
    }
}
