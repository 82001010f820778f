//! JavaScript-facing list view API
//!
//! The host loads the module, constructs the active view once per list
//! view instantiation, and then drives cell formatting and toolbar clicks
//! through it. The active view is WASM-owned, guarded by a mutex for the
//! lifetime of the view.

use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize};
use crate::errors::ListViewError;
use crate::listview::{store_listview_settings, ListView};
use crate::models::StoreRecord;
use crate::{wasm_error, wasm_info, wasm_log};

// WASM-owned active view (one per host list view)
lazy_static! {
    static ref VIEW: Mutex<Option<ListView>> = Mutex::new(None);
}

fn lock_view() -> Result<MutexGuard<'static, Option<ListView>>, JsValue> {
    VIEW.lock()
        .map_err(|e| JsValue::from_str(&format!("View lock poisoned: {}", e)))
}

fn require_view<'a>(
    guard: &'a MutexGuard<'static, Option<ListView>>,
) -> Result<&'a ListView, JsValue> {
    guard.as_ref().ok_or_else(|| {
        let err = ListViewError::ViewNotLoaded;
        wasm_error!("{}", err);
        JsValue::from_str(&err.to_string())
    })
}

/// Construct and load the Online Store list view.
///
/// `link_base` is the host's route prefix for store rows
/// (e.g. `/app/online-store`). Called once per view instantiation; the
/// toolbar registered here persists for the lifetime of the view.
#[wasm_bindgen(js_name = loadListView)]
pub fn load_list_view(link_base: &str) -> Result<(), JsValue> {
    wasm_info!("loadListView called with link_base='{}'", link_base);

    let mut view = ListView::new(store_listview_settings(link_base));
    view.load();
    wasm_log!("  {} toolbar action(s) registered", view.toolbar().len());

    let mut guard = lock_view()?;
    *guard = Some(view);
    Ok(())
}

/// The view descriptor the host consumes at construction time:
/// entity key, extra fields to fetch, hidden columns, formatted fields.
#[wasm_bindgen(js_name = listViewConfig)]
pub fn list_view_config() -> Result<JsValue, JsValue> {
    let guard = lock_view()?;
    let view = require_view(&guard)?;

    serialize(&view.settings().descriptor(), "Failed to serialize view descriptor")
}

/// Format one cell. `field` is the column name, `record` the full row
/// object; the result carries the content string and its kind tag.
#[wasm_bindgen(js_name = formatCell)]
pub fn format_cell(field: &str, record: JsValue) -> Result<JsValue, JsValue> {
    let record: StoreRecord = deserialize(record, "Invalid store record")?;

    let guard = lock_view()?;
    let view = require_view(&guard)?;

    let fragment = view.format_cell(field, &record);
    serialize(&fragment, "Failed to serialize cell fragment")
}

/// Format every field the view carries a formatter for, returned as a
/// `{ field: fragment }` object.
#[wasm_bindgen(js_name = formatRow)]
pub fn format_row(record: JsValue) -> Result<JsValue, JsValue> {
    let record: StoreRecord = deserialize(record, "Invalid store record")?;

    let guard = lock_view()?;
    let view = require_view(&guard)?;

    let fragments = js_sys::Object::new();
    for (field, fragment) in view.format_row(&record) {
        let value = serialize(&fragment, "Failed to serialize cell fragment")?;
        js_sys::Reflect::set(&fragments, &JsValue::from_str(field), &value)
            .map_err(|_| JsValue::from_str("Failed to build row object"))?;
    }
    Ok(fragments.into())
}

/// Labels of the registered toolbar actions, in registration order
#[wasm_bindgen(js_name = toolbarActions)]
pub fn toolbar_actions() -> Result<JsValue, JsValue> {
    let guard = lock_view()?;
    let view = require_view(&guard)?;

    let labels = js_sys::Array::new();
    for label in view.toolbar().labels() {
        labels.push(&JsValue::from_str(label));
    }
    Ok(labels.into())
}

/// Dispatch a toolbar click to the handler bound to `label`
#[wasm_bindgen(js_name = clickToolbarAction)]
pub fn click_toolbar_action(label: &str) -> Result<(), JsValue> {
    wasm_log!("clickToolbarAction('{}')", label);

    let guard = lock_view()?;
    let view = require_view(&guard)?;

    view.toolbar().click(label).map_err(|e| {
        wasm_error!("{}", e);
        JsValue::from_str(&e.to_string())
    })
}
