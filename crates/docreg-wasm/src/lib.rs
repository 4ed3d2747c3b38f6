//! docreg-wasm — WebAssembly bindings for docreg-core
//!
//! This crate holds the page session (the loaded register plus the search
//! term) and exposes it to the page's JavaScript. The map component and the
//! search box both write the same term, so clicking "Brazil" on the map and
//! typing "Brazil" render the same table.
//!
//! What it provides
//! ----------------
//! - Panic hook and a console banner on module load (via `#[wasm_bindgen(start)]`)
//! - Register loading, once per page: `start_loading(url)` (fire and forget),
//!   `load_register(url)` (awaitable), `load_register_json(text)`
//! - Input handlers: `set_search_term(term)` for the text box,
//!   `select_country(name)` for map clicks
//! - Map: `map_region_names(topojson)` lists the names region clicks report
//! - Views: `page()` returns the hero text, rows, flags and the no-results
//!   message as a plain JS object
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { start_loading, set_search_term, select_country, page } from 'docreg-wasm';
//!
//! async function main() {
//!   await init();
//!   start_loading('/Company-Documents-Register.json');
//!   input.oninput = (e) => render(set_search_term(e.target.value));
//!   map.onRegionClick = (name) => render(select_country(name));
//!   render(page());
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - A failed load is logged with `console.error`; the table stays empty and
//!   nothing retries.
//! - See `www/index.html` for a minimal page wired to these bindings.

use std::cell::RefCell;
use std::result::Result;

use docreg_core::api::PageView;
use docreg_core::loader::DATASET_URL_PATH;
use docreg_core::prelude::*;
use serde::Serialize;
use serde_json::json;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Where the one allowed register load stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Idle,
    InFlight,
    Loaded,
    Failed,
}

struct Session {
    state: SearchState,
    status: LoadStatus,
}

thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session {
        state: SearchState::new(),
        status: LoadStatus::Idle,
    });
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing docreg WASM module...".into());
}

/* --------------------------------------------------------------------------
   Loading
-------------------------------------------------------------------------- */

/// Claim the single load slot. Fails if a load already started.
fn begin_load() -> Result<(), JsValue> {
    SESSION.with(|s| {
        let mut s = s.borrow_mut();
        if s.status != LoadStatus::Idle {
            return Err(JsValue::from_str(&DocRegError::AlreadyLoaded.to_string()));
        }
        s.status = LoadStatus::InFlight;
        Ok(())
    })
}

fn finish_load(result: Result<Dataset, String>) -> Result<usize, JsValue> {
    SESSION.with(|s| {
        let mut s = s.borrow_mut();
        match result {
            Ok(dataset) => {
                let count = dataset.len();
                s.state.load(dataset);
                s.status = LoadStatus::Loaded;
                web_sys::console::log_1(&format!("✓ Loaded {count} register entries").into());
                Ok(count)
            }
            Err(msg) => {
                s.status = LoadStatus::Failed;
                s.state.load_failed(msg.as_str());
                web_sys::console::error_1(&format!("Error fetching data: {msg}").into());
                Err(JsValue::from_str(&msg))
            }
        }
    })
}

async fn fetch_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("{url}: {e:?}"))?;
    let resp: Response = resp.dyn_into().map_err(|_| "not a Response".to_string())?;
    if !resp.ok() {
        return Err(format!("{url}: HTTP {}", resp.status()));
    }
    let text = JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{url}: {e:?}"))?;
    text.as_string()
        .ok_or_else(|| format!("{url}: body is not text"))
}

/// Fetch and parse the register. Resolves to the number of records.
///
/// `url` defaults to `/Company-Documents-Register.json`. Only the first call
/// per page does anything; later calls reject.
#[wasm_bindgen]
pub async fn load_register(url: Option<String>) -> Result<usize, JsValue> {
    begin_load()?;
    let url = url.unwrap_or_else(|| DATASET_URL_PATH.to_string());
    let result = match fetch_text(&url).await {
        Ok(body) => Dataset::from_json_str(&body).map_err(|e| e.to_string()),
        Err(e) => Err(e),
    };
    finish_load(result)
}

/// Start loading without waiting. The table stays empty until it lands.
#[wasm_bindgen]
pub fn start_loading(url: Option<String>) {
    wasm_bindgen_futures::spawn_local(async move {
        // Failures are already reported on the console.
        let _ = load_register(url).await;
    });
}

/// Load the register from JSON text the page obtained itself.
#[wasm_bindgen]
pub fn load_register_json(json: &str) -> Result<usize, JsValue> {
    begin_load()?;
    finish_load(Dataset::from_json_str(json).map_err(|e| e.to_string()))
}

#[wasm_bindgen]
pub fn load_status() -> JsValue {
    SESSION
        .with(|s| to_value(&s.borrow().status))
        .unwrap_or(JsValue::NULL)
}

/* --------------------------------------------------------------------------
   Input handlers
-------------------------------------------------------------------------- */

/// Text box handler. Returns the page view after the change.
#[wasm_bindgen]
pub fn set_search_term(term: &str) -> Result<JsValue, JsValue> {
    SESSION.with(|s| s.borrow_mut().state.set_search_term(term));
    page()
}

/// Map click handler: the term becomes exactly `name`.
#[wasm_bindgen]
pub fn select_country(name: &str) -> Result<JsValue, JsValue> {
    SESSION.with(|s| s.borrow_mut().state.select_country(name));
    page()
}

#[wasm_bindgen]
pub fn search_term() -> String {
    SESSION.with(|s| s.borrow().state.search_term().to_string())
}

/* --------------------------------------------------------------------------
   Views
-------------------------------------------------------------------------- */

/// Current page: hero text, columns, rows with flags, and the message.
#[wasm_bindgen]
pub fn page() -> Result<JsValue, JsValue> {
    SESSION.with(|s| {
        let s = s.borrow();
        let view = to_value(&PageView::from(&s.state)).map_err(JsValue::from);
        view
    })
}

#[wasm_bindgen]
pub fn visible_count() -> usize {
    SESSION.with(|s| s.borrow().state.visible().len())
}

#[wasm_bindgen]
pub fn record_count() -> usize {
    SESSION.with(|s| s.borrow().state.records().len())
}

/// Distinct register countries, in file order.
#[wasm_bindgen]
pub fn countries() -> js_sys::Array {
    SESSION.with(|s| {
        s.borrow()
            .state
            .dataset()
            .countries()
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    })
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    let stats = SESSION.with(|s| s.borrow().state.dataset().stats());
    let stats = json!({
        "records": stats.records,
        "countries": stats.countries,
        "minPrice": stats.min_price,
        "maxPrice": stats.max_price,
    });
    to_value(&stats).map_err(JsValue::from)
}

/* --------------------------------------------------------------------------
   Map
-------------------------------------------------------------------------- */

/// Names a map click can report, read from the map's TopoJSON.
#[wasm_bindgen]
pub fn map_region_names(topojson: &str) -> Result<js_sys::Array, JsValue> {
    let regions =
        MapRegions::from_topojson(topojson).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(regions.names().iter().map(|n| JsValue::from_str(n)).collect())
}

/* --------------------------------------------------------------------------
   Country codes
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn resolve_country_code(name: &str) -> String {
    resolve(name).to_string()
}

/// Flag glyph for a country name, or `undefined` when there is none.
#[wasm_bindgen]
pub fn country_flag(name: &str) -> Option<String> {
    flag_for(name)
}
