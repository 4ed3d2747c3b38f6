// crates/docreg-core/src/api.rs

//! Serializable views of the session state, consumed by the wasm page and
//! the CLI printer.

use crate::country::resolve;
use crate::model::Record;
use crate::state::{DisplayState, SearchState};
use serde::Serialize;

pub const HERO_TITLE: &str = "Worldwide Company Documents";
pub const HERO_SUBTITLE: &str = "Find registration details and documents from around the world 🌍";
pub const SEARCH_PLACEHOLDER: &str = "Search for country, document type, or source...";

/// One table row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RowView<'a> {
    /// Flag glyph; `None` renders no flag.
    pub flag: Option<String>,
    pub region_code: String,
    pub country: &'a str,
    pub document_type: &'a str,
    pub price: String,
    pub source: &'a str,
    pub link: &'a str,
}

impl<'a> From<&'a Record> for RowView<'a> {
    fn from(r: &'a Record) -> Self {
        let code = resolve(&r.country);
        RowView {
            flag: code.flag(),
            region_code: code.to_string(),
            country: &r.country,
            document_type: &r.document_type,
            price: r.price.to_string(),
            source: &r.source,
            link: &r.link,
        }
    }
}

/// Everything the page needs to render one frame.
#[derive(Clone, Debug, Serialize)]
pub struct PageView<'a> {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub placeholder: &'static str,
    pub search_term: &'a str,
    pub state: DisplayState,
    pub columns: [&'static str; 5],
    pub rows: Vec<RowView<'a>>,
    pub message: Option<&'static str>,
}

impl<'a> From<&'a SearchState> for PageView<'a> {
    fn from(s: &'a SearchState) -> Self {
        PageView {
            title: HERO_TITLE,
            subtitle: HERO_SUBTITLE,
            placeholder: SEARCH_PLACEHOLDER,
            search_term: s.search_term(),
            state: s.display_state(),
            columns: crate::model::SearchField::ALL.map(|f| f.label()),
            rows: s.visible().iter().map(RowView::from).collect(),
            message: s.message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dataset;

    #[test]
    fn rows_carry_flags_when_resolvable() {
        let mut state = SearchState::new();
        state.load(Dataset::new(vec![
            Record::new("Brazil", "Certificate", 50.0, "Registry X", "http://x"),
            Record::new("Xanadu", "Scroll", 1.0, "Khan", ""),
        ]));
        let page = PageView::from(&state);
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.rows[0].flag.as_deref(), Some("🇧🇷"));
        assert_eq!(page.rows[0].price, "50");
        assert_eq!(page.rows[1].flag, None);
        assert_eq!(page.rows[1].region_code, "XA");
        assert_eq!(page.columns[1], "Document Type");
        assert_eq!(page.message, None);
    }

    #[test]
    fn no_results_page_has_message() {
        let mut state = SearchState::new();
        state.load(Dataset::new(vec![Record::new("Brazil", "Certificate", 50.0, "Registry X", "")]));
        state.set_search_term("france");
        let page = PageView::from(&state);
        assert!(page.rows.is_empty());
        assert_eq!(page.state, DisplayState::NoResults);
        assert_eq!(page.message, Some(crate::state::NO_RESULTS_MESSAGE));
    }
}
