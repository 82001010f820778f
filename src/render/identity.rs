//! Store identity card rendering
//!
//! Builds the linked logo + title + subtitle card shown in place of the
//! default name column. All record-derived text is escaped and the row
//! identifier is percent-encoded into the href; only the static markup
//! skeleton below is trusted verbatim.

use crate::models::StoreRecord;

use super::escape::{escape_html, percent_encode_segment};
use super::fragment::CellFragment;

const LINE_STYLE: &str = "overflow:hidden;text-overflow:ellipsis;white-space:nowrap;";

/// Builder for the store identity card
pub struct IdentityCardBuilder {
    link_base: String,
}

impl IdentityCardBuilder {
    /// Create a builder for rows linked under `link_base`
    /// (e.g. `/app/online-store`)
    pub fn new(link_base: impl Into<String>) -> Self {
        Self {
            link_base: link_base.into(),
        }
    }

    /// Render the identity card for one record.
    ///
    /// Total over missing fields: an absent logo degrades to a neutral
    /// placeholder block, absent title/subtitle to empty lines.
    pub fn render(&self, record: &StoreRecord) -> CellFragment {
        let title = escape_html(record.shop_id.as_deref().unwrap_or(""));
        let subtitle = escape_html(record.region.as_deref().unwrap_or(""));
        let href = format!(
            "{}/{}",
            self.link_base,
            percent_encode_segment(&record.name)
        );

        let logo = match record.shop_logo_url.as_deref().filter(|u| !u.is_empty()) {
            // Decorative image: empty alt keeps screen readers quiet
            Some(url) => format!(
                "<img src=\"{}\" alt=\"\" \
                 style=\"width:28px;height:28px;border-radius:4px;object-fit:cover;flex-shrink:0;\">",
                escape_html(url)
            ),
            None => "<span style=\"display:inline-block;width:28px;height:28px;\
                     border-radius:4px;background:var(--control-bg);flex-shrink:0;\"></span>"
                .to_string(),
        };

        CellFragment::html(format!(
            "<a href=\"{href}\" \
             style=\"display:flex;align-items:center;gap:8px;text-decoration:none;\">\
             {logo}\
             <span style=\"display:flex;flex-direction:column;min-width:0;\">\
             <span style=\"{LINE_STYLE}\">{title}</span>\
             <span style=\"{LINE_STYLE}color:var(--text-muted);font-size:0.85em;\">{subtitle}</span>\
             </span></a>"
        ))
    }
}
