//! docreg-cli
//! ==========
//!
//! Command-line interface for the `docreg-core` company documents register.
//!
//! This crate primarily provides a binary (`docreg`). The library target only
//! exists so that docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! docreg list
//! docreg search certificate
//! docreg country Brazil
//! docreg resolve "United States of America"
//! docreg --input ./register.json.gz stats
//! ```
//!
//! For programmatic access use the `docreg-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
