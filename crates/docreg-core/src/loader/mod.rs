// crates/docreg-core/src/loader/mod.rs

//! # Register Loader
//!
//! Handles the physical layer (file I/O, gzip, HTTP) and parses the register
//! JSON: an array of objects with the attributes `Country`, `Document_Type`,
//! `Price`, `Source` and `Link`.

use crate::model::Dataset;
use std::path::PathBuf;

pub mod common_io;
mod fetch;
mod json;

/// File name of the bundled register.
pub const DEFAULT_DATASET_FILENAME: &str = "Company-Documents-Register.json";

/// Path the page fetches the register from.
pub const DATASET_URL_PATH: &str = "/Company-Documents-Register.json";

#[cfg(feature = "json")]
static DATASET_CACHE: once_cell::sync::OnceCell<Dataset> = once_cell::sync::OnceCell::new();

impl Dataset {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        DEFAULT_DATASET_FILENAME
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(DEFAULT_DATASET_FILENAME)
    }

    /// Load the bundled register.
    ///
    /// Parsed at most once per process; later calls share the same records.
    /// A failed load is not cached, so the next call tries again.
    #[cfg(feature = "json")]
    pub fn load() -> crate::Result<Self> {
        DATASET_CACHE
            .get_or_try_init(|| Self::load_from_path(Self::default_dataset_path()))
            .cloned()
    }
}
