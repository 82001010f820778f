//! List view configuration
//!
//! `ListViewSettings` is an explicit configuration object handed to
//! `ListView::new`: the fields to fetch, which default columns to
//! suppress, a field-to-formatter table, and an onload hook that populates
//! the toolbar. The host asks for the serializable `ViewDescriptor` part
//! at view construction time.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::StoreRecord;
use crate::render::{
    render_platform_icon, render_status_badge, CellFragment, IdentityCardBuilder,
    PLATFORM_ICON_RULES,
};

use super::toolbar::Toolbar;

/// A per-field cell formatter
pub type Formatter = Box<dyn Fn(Option<&str>, &StoreRecord) -> CellFragment + Send>;

/// Hook run once per view instantiation, after the toolbar exists
pub type LoadHook = Box<dyn Fn(&mut Toolbar) + Send>;

/// Declarative settings for one entity type's list view
pub struct ListViewSettings {
    /// Entity type key the host registers this view under
    pub doctype: &'static str,

    /// Extra fields the host must fetch beyond its defaults
    pub add_fields: Vec<&'static str>,

    /// Suppress the host's default identity column
    pub hide_name_column: bool,

    formatters: BTreeMap<&'static str, Formatter>,
    onload: Option<LoadHook>,
}

/// The serializable part of the settings, consumed by the host at
/// view-construction time
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ViewDescriptor {
    pub doctype: &'static str,
    pub add_fields: Vec<&'static str>,
    pub hide_name_column: bool,
    pub formatted_fields: Vec<&'static str>,
}

impl ListViewSettings {
    /// Create empty settings for an entity type
    pub fn new(doctype: &'static str) -> Self {
        Self {
            doctype,
            add_fields: Vec::new(),
            hide_name_column: false,
            formatters: BTreeMap::new(),
            onload: None,
        }
    }

    /// Declare an extra field the host should fetch
    pub fn add_field(mut self, field: &'static str) -> Self {
        self.add_fields.push(field);
        self
    }

    /// Suppress the host's default identity column
    pub fn hide_name_column(mut self, hide: bool) -> Self {
        self.hide_name_column = hide;
        self
    }

    /// Attach a formatter to a field
    pub fn formatter(
        mut self,
        field: &'static str,
        f: impl Fn(Option<&str>, &StoreRecord) -> CellFragment + Send + 'static,
    ) -> Self {
        self.formatters.insert(field, Box::new(f));
        self
    }

    /// Attach the onload hook
    pub fn on_load(mut self, hook: impl Fn(&mut Toolbar) + Send + 'static) -> Self {
        self.onload = Some(Box::new(hook));
        self
    }

    /// Look up the formatter for a field
    pub fn formatter_for(&self, field: &str) -> Option<&Formatter> {
        self.formatters.get(field)
    }

    /// Fields that carry a formatter, in stable order
    pub fn formatted_fields(&self) -> Vec<&'static str> {
        self.formatters.keys().copied().collect()
    }

    /// Run the onload hook, if any
    pub(crate) fn run_onload(&self, toolbar: &mut Toolbar) {
        if let Some(hook) = &self.onload {
            hook(toolbar);
        }
    }

    /// The serializable descriptor the host consumes
    pub fn descriptor(&self) -> ViewDescriptor {
        ViewDescriptor {
            doctype: self.doctype,
            add_fields: self.add_fields.clone(),
            hide_name_column: self.hide_name_column,
            formatted_fields: self.formatted_fields(),
        }
    }
}

/// Canonical settings for the "Online Store" list view.
///
/// `link_base` is the host's route prefix for store rows
/// (e.g. `/app/online-store`).
pub fn store_listview_settings(link_base: &str) -> ListViewSettings {
    let card = IdentityCardBuilder::new(link_base);

    ListViewSettings::new("Online Store")
        .add_field("store_type")
        .add_field("shop_logo_url")
        .add_field("region")
        .add_field("shop_id")
        .hide_name_column(true)
        .formatter("store_type", |value, record| {
            // Fall back to the platform token derived from the
            // integration key when the field itself is blank
            match value.filter(|v| !v.is_empty()) {
                Some(v) => render_platform_icon(Some(v), &PLATFORM_ICON_RULES),
                None => render_platform_icon(record.platform().as_deref(), &PLATFORM_ICON_RULES),
            }
        })
        .formatter("name", move |_value, record| card.render(record))
        .formatter("status", |value, _record| render_status_badge(value))
        .on_load(|toolbar| {
            toolbar.add_inner_button("Sync Stores", || {
                // Placeholder: the actual sync trigger lives server-side
                // and is wired up separately
                log::info!("Store sync requested; sync backend is not configured yet");
            });
        })
}
