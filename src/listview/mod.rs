//! List view configuration and dispatch
//!
//! This module replaces the host's ambient registration global with an
//! explicit configuration object: settings are built once, handed to a
//! `ListView`, and the host drives rendering and toolbar clicks through
//! that instance.

pub mod settings;
pub mod toolbar;
pub mod view;

pub use settings::{store_listview_settings, Formatter, ListViewSettings, ViewDescriptor};
pub use toolbar::{ActionHandler, Toolbar, ToolbarAction};
pub use view::ListView;
