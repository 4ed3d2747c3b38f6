// crates/docreg-core/src/lib.rs

//! docreg-core
//! ===========
//!
//! Core of the Worldwide Company Documents register: the record model, the
//! register loader, the country-name to flag-code resolver, case-insensitive
//! substring search, and the search state shared by the text box and the map.
//!
//! ```rust
//! use docreg_core::prelude::*;
//!
//! let mut state = SearchState::new();
//! state.load(Dataset::new(vec![Record::new(
//!     "Brazil", "Certificate", 50.0, "Registry X", "http://x",
//! )]));
//!
//! state.select_country("Brazil"); // what a map click does
//! assert_eq!(state.search_term(), "Brazil");
//! assert_eq!(state.visible().len(), 1);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api;
pub mod common;
pub mod country;
pub mod error;
pub mod geography;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod state;

// Re-exports
pub use crate::common::DatasetStats;
pub use crate::country::{resolve, RegionCode};
pub use crate::error::{DocRegError, Result};
#[cfg(feature = "json")]
pub use crate::geography::MapRegions;
pub use crate::model::{Dataset, Price, Record, SearchField};
pub use crate::search::{filter, RecordSearch, SearchIndex};
pub use crate::state::{DisplayState, Event, SearchState};
