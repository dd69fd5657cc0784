//! Content region renderer.

use crate::layout::Rect;
use crate::ui::text::fit;

/// Cuts provider output into exactly `rect.height` rows of `rect.width`.
///
/// Extra lines are dropped, missing lines are blank, and every line is
/// clipped or padded. A trailing newline does not count as an extra row.
pub fn render_content(content: &str, rect: Rect) -> Vec<String> {
    let mut rows: Vec<String> = content
        .lines()
        .take(rect.height)
        .map(|line| fit(line, rect.width))
        .collect();
    rows.resize(rect.height, " ".repeat(rect.width));
    rows
}
