// crates/docreg-core/src/state.rs

//! # Search State
//!
//! The one piece of session state behind the page: the loaded register, the
//! search term, and the rows currently shown. Typing in the search box and
//! clicking a country on the map both end up as a term update, so the two
//! input modalities cannot drift apart.
//!
//! Transitions are pure: [`SearchState::apply`] takes the state by value and
//! returns the next one. The `&mut self` helpers are thin wrappers for
//! callers that own the state in place (the wasm session, the CLI).

use crate::error::Result;
use crate::model::{Dataset, Record};
use crate::search::{RecordSearch, SearchIndex};
use serde::{Deserialize, Serialize};

/// Message shown when a non-empty term matches nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results found. Try a different search term.";

/// Input events that change the session state.
#[derive(Clone, Debug)]
pub enum Event {
    /// The register finished loading.
    Loaded(Dataset),
    /// The register could not be loaded. Nothing changes; the reason is
    /// logged.
    LoadFailed(String),
    /// The user edited the search box. An empty string clears the search.
    TermChanged(String),
    /// The map reported a click on a region with this display name.
    CountryClicked(String),
}

/// What the result table is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    /// No active search: every record is listed.
    ShowingAll,
    /// Non-empty term with at least one matching row.
    Filtered,
    /// Non-empty term that matched nothing. Also covers map names that are
    /// spelled differently from the register; the two cases look the same.
    NoResults,
}

/// Session state shared by the text input and the map.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    dataset: Dataset,
    index: Option<SearchIndex>,
    term: String,
    visible: Vec<Record>,
}

impl SearchState {
    /// Initial state: nothing loaded, empty term, zero rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and return the next state.
    pub fn apply(mut self, event: Event) -> Self {
        match event {
            Event::Loaded(dataset) => {
                tracing::debug!(records = dataset.len(), "register loaded into session");
                self.index = Some(SearchIndex::from(&dataset));
                self.dataset = dataset;
            }
            Event::LoadFailed(reason) => {
                tracing::warn!(%reason, "register failed to load");
                return self;
            }
            Event::TermChanged(term) => self.term = term,
            Event::CountryClicked(name) => {
                tracing::debug!(country = %name, "map selection");
                self.term = name;
            }
        }
        self.recompute();
        self
    }

    /// Replace the register. The rows are recomputed against the current term.
    pub fn load(&mut self, dataset: Dataset) {
        self.update(Event::Loaded(dataset));
    }

    /// Record a failed load. The register, term and rows stay as they are.
    pub fn load_failed(&mut self, reason: impl Into<String>) {
        self.update(Event::LoadFailed(reason.into()));
    }

    /// Feed the outcome of a loader call into the session.
    pub fn load_result(&mut self, result: Result<Dataset>) {
        match result {
            Ok(dataset) => self.load(dataset),
            Err(err) => self.load_failed(err.to_string()),
        }
    }

    /// Text-input path: set the term exactly as typed.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.update(Event::TermChanged(term.into()));
    }

    /// Map-click path: the term becomes exactly the region's display name.
    ///
    /// The name is not checked against the register.
    pub fn select_country(&mut self, name: impl Into<String>) {
        self.update(Event::CountryClicked(name.into()));
    }

    /// Clear the search box.
    pub fn clear(&mut self) {
        self.set_search_term(String::new());
    }

    fn update(&mut self, event: Event) {
        *self = std::mem::take(self).apply(event);
    }

    fn recompute(&mut self) {
        self.visible = match &self.index {
            Some(index) => index.search(&self.term),
            None => Vec::new(),
        };
    }

    pub fn search_term(&self) -> &str {
        &self.term
    }

    /// The full register, in source order.
    pub fn records(&self) -> &[Record] {
        self.dataset.records()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Rows currently shown in the table.
    pub fn visible(&self) -> &[Record] {
        &self.visible
    }

    pub fn is_loaded(&self) -> bool {
        self.index.is_some()
    }

    pub fn display_state(&self) -> DisplayState {
        if self.term.is_empty() {
            DisplayState::ShowingAll
        } else if self.visible.is_empty() {
            DisplayState::NoResults
        } else {
            DisplayState::Filtered
        }
    }

    /// The no-results message, when it should be shown.
    pub fn message(&self) -> Option<&'static str> {
        (self.display_state() == DisplayState::NoResults).then_some(NO_RESULTS_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::filter;

    fn brazil_only() -> Dataset {
        Dataset::new(vec![Record::new(
            "Brazil",
            "Certificate",
            50.0,
            "Registry X",
            "http://x",
        )])
    }

    #[test]
    fn starts_empty() {
        let state = SearchState::new();
        assert_eq!(state.search_term(), "");
        assert!(state.visible().is_empty());
        assert!(!state.is_loaded());
        assert_eq!(state.display_state(), DisplayState::ShowingAll);
        assert_eq!(state.message(), None);
    }

    #[test]
    fn load_shows_every_record() {
        let state = SearchState::new().apply(Event::Loaded(brazil_only()));
        assert_eq!(state.visible(), state.records());
        assert_eq!(state.display_state(), DisplayState::ShowingAll);
    }

    #[test]
    fn term_typed_before_load_applies_once_data_arrives() {
        let state = SearchState::new()
            .apply(Event::TermChanged("france".into()))
            .apply(Event::Loaded(brazil_only()));
        assert!(state.visible().is_empty());
        assert_eq!(state.display_state(), DisplayState::NoResults);
    }

    #[test]
    fn certificate_and_france_scenario() {
        let mut state = SearchState::new();
        state.load(brazil_only());

        state.set_search_term("certificate");
        assert_eq!(state.visible(), brazil_only().records());
        assert_eq!(state.display_state(), DisplayState::Filtered);

        state.set_search_term("france");
        assert!(state.visible().is_empty());
        assert_eq!(state.message(), Some(NO_RESULTS_MESSAGE));

        state.clear();
        assert_eq!(state.visible().len(), 1);
        assert_eq!(state.message(), None);
    }

    #[test]
    fn map_click_equals_typing() {
        let typed = SearchState::new()
            .apply(Event::Loaded(brazil_only()))
            .apply(Event::TermChanged("Brazil".into()));
        let clicked = SearchState::new()
            .apply(Event::Loaded(brazil_only()))
            .apply(Event::CountryClicked("Brazil".into()));

        assert_eq!(clicked.search_term(), "Brazil");
        assert_eq!(clicked.visible(), typed.visible());
        assert_eq!(clicked.visible(), filter(clicked.records(), "Brazil"));
    }

    #[test]
    fn failed_load_keeps_state() {
        let before = SearchState::new()
            .apply(Event::Loaded(brazil_only()))
            .apply(Event::TermChanged("cert".into()));
        let after = before.clone().apply(Event::LoadFailed("HTTP 404".into()));

        assert_eq!(after.search_term(), "cert");
        assert_eq!(after.visible(), before.visible());
        assert_eq!(after.dataset(), before.dataset());
        assert!(after.is_loaded());
    }

    #[test]
    fn mismatched_map_name_is_just_no_results() {
        let mut state = SearchState::new();
        state.load(brazil_only());
        state.select_country("Brasil");
        assert_eq!(state.search_term(), "Brasil");
        assert_eq!(state.display_state(), DisplayState::NoResults);
    }
}
