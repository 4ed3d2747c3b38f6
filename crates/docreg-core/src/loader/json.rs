// crates/docreg-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use super::common_io;
use crate::error::Result;
use crate::model::{Dataset, Record};
use std::io::Read;
use std::path::Path;

impl Dataset {
    /// Parse a register from any reader yielding the JSON array.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_reader(reader)?;
        tracing::debug!(records = records.len(), "parsed register");
        Ok(Dataset::new(records))
    }

    /// Parse a register held in memory.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_slice(json.as_bytes())
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_slice(bytes)?;
        tracing::debug!(records = records.len(), "parsed register");
        Ok(Dataset::new(records))
    }

    /// Load a register file (`.json`, or `.json.gz` with the `compact` feature).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let dataset = Self::from_reader(reader)?;
        tracing::debug!(path = %path.display(), records = dataset.len(), "register loaded");
        Ok(dataset)
    }
}
