//! Platform icon rendering
//!
//! Maps a categorical platform value ("Shopee", "Lazada", ...) to a small
//! icon badge. Rules are scanned in order and the first case-insensitive
//! substring match wins, so more specific matchers belong earlier.

use once_cell::sync::Lazy;

use super::fragment::CellFragment;

/// One platform icon rule
#[derive(Clone, Debug)]
pub struct IconRule {
    /// Lowercase substring matched against the lowercased field value
    pub matcher: &'static str,

    /// Framework-relative icon asset path (operator-supplied, trusted)
    pub icon_path: &'static str,

    /// Accessible label shown as alt text and tooltip
    pub label: &'static str,
}

/// Default platform rules, scanned in order; first match wins
pub static PLATFORM_ICON_RULES: Lazy<Vec<IconRule>> = Lazy::new(|| {
    vec![
        IconRule {
            matcher: "shopee",
            icon_path: "/assets/storelist/images/shopee.png",
            label: "Shopee",
        },
        IconRule {
            matcher: "lazada",
            icon_path: "/assets/storelist/images/lazada.png",
            label: "Lazada",
        },
    ]
});

/// Render the 32x32 icon badge for a categorical platform value.
///
/// Unmatched values come back tagged as plain text so the host escapes
/// them before display; a missing value renders as an empty cell. Never
/// fails: no rule matching is not an error.
pub fn render_platform_icon(value: Option<&str>, rules: &[IconRule]) -> CellFragment {
    let raw = match value {
        Some(v) => v,
        None => return CellFragment::empty(),
    };

    let lowered = raw.to_lowercase();
    for rule in rules {
        if lowered.contains(rule.matcher) {
            return CellFragment::html(format!(
                "<img src=\"{path}\" alt=\"{label}\" title=\"{label}\" \
                 style=\"width:32px;height:32px;object-fit:contain;\">",
                path = rule.icon_path,
                label = rule.label,
            ));
        }
    }

    CellFragment::plain(raw)
}
