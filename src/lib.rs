//! docreg-rs: umbrella crate re-exporting [`docreg_core`] so the demos can
//! `use docreg_rs::prelude::*`.

pub use docreg_core::*;
