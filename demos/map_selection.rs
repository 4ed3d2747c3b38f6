//! Map selection example for docreg-rs
//!
//! A map click and typing into the search box drive the same search term.
//! This walks through both paths, including a map label that the register
//! spells differently.

use docreg_rs::prelude::*;

fn show(state: &SearchState) {
    let page = PageView::from(state);
    println!("term = {:?}, state = {:?}", page.search_term, page.state);
    for row in &page.rows {
        println!("  {} {} — {}", row.flag.as_deref().unwrap_or("  "), row.country, row.document_type);
    }
    if let Some(msg) = page.message {
        println!("  {msg}");
    }
}

fn main() -> Result<()> {
    let mut state = SearchState::new();
    state.load(Dataset::load()?);
    show(&state);

    println!("\n--- Map click: Brazil ---");
    state.select_country("Brazil");
    show(&state);

    println!("\n--- Map click: United States of America ---");
    // The register says "United States"; the map label does not match.
    state.select_country("United States of America");
    show(&state);

    println!("\n--- Typed: united ---");
    state.set_search_term("united");
    show(&state);

    state.clear();
    println!("\nCleared: {} rows visible", state.visible().len());
    Ok(())
}
