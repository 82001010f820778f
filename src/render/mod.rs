//! Cell renderers for the Online Store list view
//!
//! This module turns record field values into content-kind-tagged fragments
//! the host list view inserts into row cells.

pub mod escape;
pub mod fragment;
pub mod icon;
pub mod identity;
pub mod status;

pub use escape::{escape_html, percent_encode_segment};
pub use fragment::{CellFragment, ContentKind};
pub use icon::{render_platform_icon, IconRule, PLATFORM_ICON_RULES};
pub use identity::IdentityCardBuilder;
pub use status::render_status_badge;
