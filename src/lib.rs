//! Online Store List View WASM Module
//!
//! Declarative cell rendering for the Online Store list view: platform
//! icon badges, the linked store identity card, status pills, and the
//! view's toolbar actions. The host list-view framework drives the module
//! through the `api` layer.

pub mod api;
pub mod errors;
pub mod listview;
pub mod models;
pub mod render;

// Re-export commonly used types
pub use errors::ListViewError;
pub use listview::{store_listview_settings, ListView, ListViewSettings, Toolbar};
pub use models::StoreRecord;
pub use render::{CellFragment, ContentKind, IconRule, IdentityCardBuilder};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Online store list view WASM module initialized");
}
