//! Basic usage example for docreg-rs
//!
//! This example demonstrates how to:
//! - Load the bundled register
//! - Search it by free text
//! - Resolve flag codes for the country column

use docreg_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== docreg-rs Basic Usage Example ===\n");

    println!("Loading register...");
    let ds = Dataset::load()?;
    println!("✓ Register loaded: {} records\n", ds.len());

    println!("--- Example 1: Countries in the register ---");
    for country in ds.countries() {
        let code = resolve(country);
        println!("{} {} ({})", code.flag().unwrap_or_default(), country, code);
    }
    println!();

    println!("--- Example 2: Free-text search ---");
    for term in ["certificate", "HANDELSREGISTER", "15", "france"] {
        let hits = filter(ds.records(), term);
        println!("{term:?}: {} hit(s)", hits.len());
        for r in hits {
            println!("  - {} / {} / {}", r.country, r.document_type, r.price);
        }
    }
    println!();

    println!("--- Example 3: Prepared index ---");
    let index = SearchIndex::from(&ds);
    println!("\"gov\" matches {} record(s)", index.count_matches("gov"));

    Ok(())
}
