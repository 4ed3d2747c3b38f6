use docreg_core::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const ONE_BRAZIL: &str = r#"[
  {"Country": "Brazil", "Document_Type": "Certificate", "Price": 50, "Source": "Registry X", "Link": "http://x"}
]"#;

fn write_register(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn bundled_register_loads_in_file_order() {
    let ds = Dataset::load().unwrap();
    assert!(!ds.is_empty());
    assert_eq!(ds.records()[0].country, "Brazil");
    assert_eq!(ds.records().last().unwrap().country, "Singapore");
    // Cached: same allocation on the second call.
    let again = Dataset::load().unwrap();
    assert!(std::sync::Arc::ptr_eq(&ds.shared(), &again.shared()));
}

#[test]
fn loads_from_path() {
    let file = write_register(ONE_BRAZIL, ".json");
    let ds = Dataset::load_from_path(file.path()).unwrap();
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.records()[0].price, Price::new(50.0));
    assert_eq!(ds.records()[0].link, "http://x");
}

#[cfg(feature = "compact")]
#[test]
fn loads_gzip_register() {
    use flate2::{write::GzEncoder, Compression};

    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(ONE_BRAZIL.as_bytes()).unwrap();
    let bytes = enc.finish().unwrap();

    let mut file = tempfile::Builder::new().suffix(".json.gz").tempfile().unwrap();
    file.write_all(&bytes).unwrap();

    let ds = Dataset::load_from_path(file.path()).unwrap();
    assert_eq!(ds.records()[0].country, "Brazil");
}

#[test]
fn missing_link_defaults_to_empty() {
    let ds = Dataset::from_json_str(
        r#"[{"Country": "Chile", "Document_Type": "Certificado", "Price": 0, "Source": "CBR"}]"#,
    )
    .unwrap();
    assert_eq!(ds.records()[0].link, "");
}

#[test]
fn null_text_fields_read_as_empty() {
    let ds = Dataset::from_json_str(
        r#"[
  {"Country": "Brazil", "Document_Type": "Certificate", "Price": 50, "Source": "Registry X", "Link": "http://x"},
  {"Country": "Chile", "Document_Type": null, "Price": 12, "Source": null, "Link": null}
]"#,
    )
    .unwrap();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.records()[0].link, "http://x");
    let chile = &ds.records()[1];
    assert_eq!(chile.link, "");
    assert_eq!(chile.document_type, "");
    assert_eq!(chile.source, "");
    assert_eq!(filter(ds.records(), "chile").len(), 1);
}

#[test]
fn negative_price_is_rejected() {
    let err = Dataset::from_json_str(
        r#"[{"Country": "Chile", "Document_Type": "x", "Price": -5, "Source": "y", "Link": ""}]"#,
    )
    .unwrap_err();
    assert!(matches!(err, DocRegError::Json(_)));
    assert!(err.to_string().contains("non-negative"));
}

#[test]
fn missing_country_is_still_an_error() {
    let err = Dataset::from_json_str(
        r#"[{"Document_Type": "x", "Price": 1, "Source": "y", "Link": ""}]"#,
    )
    .unwrap_err();
    assert!(matches!(err, DocRegError::Json(_)));
}

#[test]
fn attribute_names_are_case_sensitive() {
    let err = Dataset::from_json_str(
        r#"[{"country": "Chile", "document_type": "x", "price": 1, "source": "y", "link": ""}]"#,
    )
    .unwrap_err();
    assert!(matches!(err, DocRegError::Json(_)));
}

#[test]
fn malformed_json_is_an_error() {
    let file = write_register("[{\"Country\": ", ".json");
    let err = Dataset::load_from_path(file.path()).unwrap_err();
    assert!(matches!(err, DocRegError::Json(_)));
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dataset::load_from_path(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, DocRegError::NotFound(_)));
}

#[test]
fn failed_load_leaves_session_empty() {
    let mut state = SearchState::new();
    state.set_search_term("brazil");
    state.load_result(Dataset::from_json_str("not json"));

    assert!(!state.is_loaded());
    assert!(state.visible().is_empty());
    assert_eq!(state.search_term(), "brazil");
    assert_eq!(state.display_state(), DisplayState::NoResults);
}

#[test]
fn failed_reload_keeps_the_loaded_register() {
    let mut state = SearchState::new();
    state.load_result(Dataset::from_json_str(ONE_BRAZIL));
    state.set_search_term("cert");
    assert_eq!(state.visible().len(), 1);

    let dir = tempfile::tempdir().unwrap();
    state.load_result(Dataset::load_from_path(dir.path().join("gone.json")));

    assert_eq!(state.records().len(), 1);
    assert_eq!(state.visible().len(), 1);
    assert_eq!(state.search_term(), "cert");
}

#[test]
fn filter_laws_hold_on_bundled_register() {
    let ds = Dataset::load().unwrap();
    let records = ds.records();

    assert_eq!(filter(records, ""), records);

    for term in ["brazil", "CERT", "15", "handelsregister", ".gov", "zzz", "a"] {
        let once = filter(records, term);

        // Order-preserving sub-sequence.
        let mut it = records.iter();
        for hit in &once {
            assert!(it.any(|r| r == hit), "{term:?} reordered or invented a row");
        }

        assert_eq!(filter(&once, term), once, "not idempotent for {term:?}");
        assert_eq!(filter(records, &term.to_uppercase()), once);
        assert_eq!(filter(records, &term.to_lowercase()), once);
        assert_eq!(SearchIndex::from(&ds).search(term), once);
    }
}

#[test]
fn price_150_matches_15() {
    let ds = Dataset::load().unwrap();
    let hits = filter(ds.records(), "15");
    assert!(hits.iter().any(|r| r.price == Price::new(150.0)));
}

#[test]
fn select_country_matches_typed_search() {
    let ds = Dataset::from_json_str(ONE_BRAZIL).unwrap();

    let mut state = SearchState::new();
    state.load(ds.clone());
    state.select_country("Brazil");
    assert_eq!(state.search_term(), "Brazil");
    assert_eq!(state.visible(), filter(ds.records(), "Brazil"));

    state.set_search_term("certificate");
    assert_eq!(state.visible(), ds.records());

    state.set_search_term("france");
    assert!(state.visible().is_empty());
    assert_eq!(state.message(), Some(NO_RESULTS_MESSAGE));
}

#[test]
fn resolver_examples() {
    assert_eq!(resolve("Brazil"), "BR");
    assert_eq!(resolve("Atlantis"), "AT");
}

#[test]
fn map_region_names_drive_selection() {
    let topo = std::fs::read_to_string(
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/map_sample.topojson"),
    )
    .unwrap();
    let regions = MapRegions::from_topojson(&topo).unwrap();
    assert_eq!(regions.len(), 6);

    let ds = Dataset::load().unwrap();
    let mut state = SearchState::new();
    state.load(ds.clone());

    for name in regions.names() {
        state.select_country(name.as_str());
        assert_eq!(state.search_term(), name);
        assert_eq!(state.visible(), filter(ds.records(), name));
    }

    state.select_country(regions.names()[0].as_str());
    assert_eq!(state.visible().len(), 2);
    assert!(state.visible().iter().all(|r| r.country == "Brazil"));

    // Spelled differently in the register ("United States").
    state.select_country("United States of America");
    assert_eq!(state.display_state(), DisplayState::NoResults);
    assert_eq!(resolve("United States of America"), "US");
}
