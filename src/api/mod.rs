//! Online Store list view WASM API
//!
//! This module provides the JavaScript-facing API for the list view:
//!
//! - `helpers`: shared utilities for serialization, error handling, and
//!   console logging
//! - `view`: view construction, per-cell formatting, and toolbar dispatch

pub mod helpers;
pub mod view;

// Re-export the public endpoints
pub use view::{
    click_toolbar_action, format_cell, format_row, list_view_config, load_list_view,
    toolbar_actions,
};
