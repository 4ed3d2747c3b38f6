// crates/docreg-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a loaded register.
///
/// Returned by [`Dataset::stats`](crate::Dataset::stats). Prices are `None`
/// when the register is empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub records: usize,
    pub countries: usize,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}
