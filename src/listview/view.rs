//! List view instance
//!
//! `ListView` binds a settings object to a toolbar for the lifetime of one
//! host view. The host calls `load` once after construction and
//! `format_cell` once per (row, column) pair during each render pass.

use crate::models::StoreRecord;
use crate::render::CellFragment;

use super::settings::ListViewSettings;
use super::toolbar::Toolbar;

/// One live list view instance
pub struct ListView {
    settings: ListViewSettings,
    toolbar: Toolbar,
    loaded: bool,
}

impl ListView {
    /// Construct a view from its settings
    pub fn new(settings: ListViewSettings) -> Self {
        Self {
            settings,
            toolbar: Toolbar::new(),
            loaded: false,
        }
    }

    /// Run the onload hook. Idempotent: only the first call populates the
    /// toolbar; later calls are no-ops.
    pub fn load(&mut self) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        self.settings.run_onload(&mut self.toolbar);
        log::debug!(
            "list view '{}' loaded with {} toolbar action(s)",
            self.settings.doctype,
            self.toolbar.len()
        );
    }

    /// Whether `load` has run
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Format one cell.
    ///
    /// Fields without a formatter pass through as plain text; unknown
    /// fields render as empty cells. Total over any record.
    pub fn format_cell(&self, field: &str, record: &StoreRecord) -> CellFragment {
        let value = record.field_value(field);
        match self.settings.formatter_for(field) {
            Some(f) => f(value, record),
            None => CellFragment::plain(value.unwrap_or("")),
        }
    }

    /// Format every field that carries a formatter, in stable order
    pub fn format_row(&self, record: &StoreRecord) -> Vec<(&'static str, CellFragment)> {
        self.settings
            .formatted_fields()
            .into_iter()
            .map(|field| (field, self.format_cell(field, record)))
            .collect()
    }

    /// The view's settings
    pub fn settings(&self) -> &ListViewSettings {
        &self.settings
    }

    /// The view's toolbar
    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }
}
