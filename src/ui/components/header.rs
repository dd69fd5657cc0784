//! Header bar renderer.
//!
//! ```text
//! MyApp™ Custom App                      time 12:00:01 • status custom • users 42
//! ────────────────────────────────────────────────────────────────────────────────
//! ```
//!
//! Status fields that do not fit are dropped from the end. Compact mode keeps
//! only the first row.

use crate::layout::{LayoutMode, Rect};
use crate::ui::styler::{Styler, TextStyle};
use crate::ui::text::{fit, visible_width};
use crate::ui::viewmodel::HeaderView;

const FIELD_SEPARATOR: &str = " • ";

/// Renders `rect.height` header rows, each exactly `rect.width` columns.
pub fn render_header(
    header: Option<&HeaderView>,
    rect: Rect,
    mode: LayoutMode,
    styler: &dyn Styler,
) -> Vec<String> {
    let blank = " ".repeat(rect.width);
    let mut rows = vec![blank; rect.height];
    let Some(header) = header else {
        return rows;
    };
    if rows.is_empty() {
        return rows;
    }

    rows[0] = title_row(header, rect.width, styler);
    if mode == LayoutMode::Normal && rows.len() > 1 {
        rows[1] = styler.style(TextStyle::Border, &"─".repeat(rect.width));
    }
    rows
}

fn title_row(header: &HeaderView, width: usize, styler: &dyn Styler) -> String {
    let mut left = styler.gradient(&header.brand);
    if !header.app.is_empty() {
        left.push(' ');
        left.push_str(&styler.style(TextStyle::Text, &header.app));
    }
    let left_width = visible_width(&left);

    let budget = width.saturating_sub(left_width + 1);
    let right = status_fields(header, budget, styler);
    let right_width = visible_width(&right);

    let gap = width.saturating_sub(left_width + right_width);
    fit(&format!("{left}{}{right}", " ".repeat(gap)), width)
}

/// Joins as many leading status fields as fit in `budget` columns.
fn status_fields(header: &HeaderView, budget: usize, styler: &dyn Styler) -> String {
    let mut out = String::new();
    let mut used = 0;
    for (label, value) in header.status.iter() {
        let value = value.to_string();
        let sep = if used == 0 { 0 } else { FIELD_SEPARATOR.chars().count() };
        let field_width = visible_width(label) + 1 + visible_width(&value);
        if used + sep + field_width > budget {
            break;
        }
        if sep > 0 {
            out.push_str(&styler.style(TextStyle::Subtle, FIELD_SEPARATOR));
        }
        out.push_str(&styler.style(TextStyle::Muted, label));
        out.push(' ');
        out.push_str(&styler.style(TextStyle::Text, &value));
        used += sep + field_width;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatusData;
    use crate::ui::styler::PlainStyler;

    fn view() -> HeaderView {
        HeaderView {
            brand: "MyApp™".to_string(),
            app: "Custom App".to_string(),
            status: StatusData::new()
                .with("status", "custom")
                .with("users", 42)
                .with("version", "v2.1.0"),
        }
    }

    #[test]
    fn normal_header_has_title_and_rule() {
        let rect = Rect::new(0, 0, 80, 2);
        let rows = render_header(Some(&view()), rect, LayoutMode::Normal, &PlainStyler);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("MyApp™ Custom App"));
        assert!(rows[0].ends_with("status custom • users 42 • version v2.1.0"));
        assert_eq!(visible_width(&rows[0]), 80);
        assert_eq!(rows[1], "─".repeat(80));
    }

    #[test]
    fn narrow_header_drops_trailing_fields() {
        let rect = Rect::new(0, 0, 40, 1);
        let rows = render_header(Some(&view()), rect, LayoutMode::Compact, &PlainStyler);
        assert!(rows[0].contains("status custom"));
        assert!(!rows[0].contains("version"));
        assert_eq!(visible_width(&rows[0]), 40);
    }

    #[test]
    fn missing_header_renders_blank_rows() {
        let rows = render_header(None, Rect::new(0, 0, 10, 2), LayoutMode::Normal, &PlainStyler);
        assert_eq!(rows, vec![" ".repeat(10); 2]);
    }
}
