//! Tooltip metadata decoding and rendering.
//!
//! Hover targets carry their column metadata inline, as two JSON string
//! arrays in `data-columns` / `data-types`. Decoding is deliberately
//! permissive: a missing attribute or malformed JSON yields the empty list
//! rather than an error, because one bad attribute must not break hovering
//! for the rest of the page. The rendered fragment always includes the
//! header row, even with no columns to show.

use pulldown_cmark_escape::escape_html_body_text;
use smol_str::SmolStr;

/// Column metadata decoded from one hover target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableMeta {
    pub columns: Vec<SmolStr>,
    pub types: Vec<SmolStr>,
}

impl TableMeta {
    /// Decode the two data attribute values as read from the element.
    pub fn from_attrs(columns: Option<&str>, types: Option<&str>) -> Self {
        TableMeta {
            columns: decode_list(columns),
            types: decode_list(types),
        }
    }

    /// Pair each column with the type at the same index. Columns beyond the
    /// end of the type list pair with the empty string; surplus types are
    /// dropped.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().enumerate().map(|(i, column)| {
            let ty = self.types.get(i).map(SmolStr::as_str).unwrap_or("");
            (column.as_str(), ty)
        })
    }
}

fn decode_list(attr: Option<&str>) -> Vec<SmolStr> {
    let Some(text) = attr else {
        return Vec::new();
    };
    match serde_json::from_str(text) {
        Ok(list) => list,
        Err(err) => {
            tracing::warn!(%err, attr = text, "ignoring malformed column metadata");
            Vec::new()
        }
    }
}

/// Render the tooltip fragment for a hovered table name.
///
/// A bold title line carrying the hovered text, then a two-column table
/// with a Column/Type header and one row per column. Everything
/// interpolated is escaped.
pub fn render_tooltip_html(table_name: &str, meta: &TableMeta) -> String {
    let mut html = String::new();
    html.push_str("<strong>Table: ");
    let _ = escape_html_body_text(&mut html, table_name);
    html.push_str("</strong><br><table><tr><th>Column</th><th>Type</th></tr>");
    for (column, ty) in meta.rows() {
        html.push_str("<tr><td>");
        let _ = escape_html_body_text(&mut html, column);
        html.push_str("</td><td>");
        let _ = escape_html_body_text(&mut html, ty);
        html.push_str("</td></tr>");
    }
    html.push_str("</table>");
    html
}
