//! docreg prelude: bring common types and traits into scope.

pub use crate::api::{PageView, RowView};
pub use crate::common::DatasetStats;
pub use crate::country::{flag_for, resolve, RegionCode};
pub use crate::error::{DocRegError, Result};
#[cfg(feature = "json")]
pub use crate::geography::MapRegions;
pub use crate::loader::{DATASET_URL_PATH, DEFAULT_DATASET_FILENAME};
pub use crate::model::{Dataset, Price, Record, SearchField};
pub use crate::search::{filter, matches, RecordSearch, SearchIndex};
pub use crate::state::{DisplayState, Event, SearchState, NO_RESULTS_MESSAGE};
