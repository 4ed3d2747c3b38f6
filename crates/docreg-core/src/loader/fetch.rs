// crates/docreg-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

use crate::error::{DocRegError, Result};
use crate::model::Dataset;

impl Dataset {
    /// Download and parse a register over HTTP (blocking).
    ///
    /// Single attempt: no retry, no custom timeout.
    pub fn fetch(url: &str) -> Result<Self> {
        tracing::debug!(%url, "fetching register");
        let response = reqwest::blocking::get(url)
            .and_then(|r| r.error_for_status())
            .map_err(|e| DocRegError::Fetch(format!("{url}: {e}")))?;
        let body = response
            .bytes()
            .map_err(|e| DocRegError::Fetch(format!("{url}: {e}")))?;
        Self::from_slice(&body)
    }
}
