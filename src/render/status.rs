//! Sync status badge rendering
//!
//! The sync pipeline writes a small closed vocabulary of status values on
//! stores, products and orders. Known statuses render as a coloured pill;
//! anything else falls back to plain text the same way the icon renderer
//! does.

use super::escape::escape_html;
use super::fragment::CellFragment;

/// Pill colour for a normalized status value
fn badge_color(status: &str) -> Option<&'static str> {
    match status {
        "active" | "completed" => Some("green"),
        "inactive" | "pending" => Some("orange"),
        "processing" => Some("blue"),
        "shipped" => Some("purple"),
        "hidden" => Some("gray"),
        "delisted" | "cancelled" => Some("red"),
        "refunded" => Some("yellow"),
        _ => None,
    }
}

/// Render the status badge for a cell value
pub fn render_status_badge(value: Option<&str>) -> CellFragment {
    let raw = match value {
        Some(v) => v,
        None => return CellFragment::empty(),
    };

    let normalized = raw.trim().to_lowercase();
    match badge_color(&normalized) {
        Some(color) => CellFragment::html(format!(
            "<span class=\"indicator-pill {}\">{}</span>",
            color,
            escape_html(&normalized)
        )),
        None => CellFragment::plain(raw),
    }
}
