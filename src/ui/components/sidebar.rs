//! Sidebar renderer.
//!
//! Each section occupies one slot: a title row, its items, then blank rows.
//! Every row starts with a rule and a space, the gutter.

use crate::domain::SidebarItem;
use crate::layout::{Rect, SIDEBAR_GUTTER};
use crate::ui::styler::{Styler, TextStyle};
use crate::ui::text::{fit, visible_width};
use crate::ui::viewmodel::SectionView;

/// Renders the sidebar as `sidebar.height` rows of `sidebar.width` columns.
///
/// `slots` and `sections` are paired in order; extra slots stay blank.
pub fn render_sidebar(
    sidebar: Rect,
    slots: &[Rect],
    sections: &[SectionView],
    styler: &dyn Styler,
) -> Vec<String> {
    let inner = sidebar.width.saturating_sub(SIDEBAR_GUTTER);
    let gutter = format!("{} ", styler.style(TextStyle::Border, "│"));

    let mut body: Vec<String> = Vec::with_capacity(sidebar.height);
    for (i, slot) in slots.iter().enumerate() {
        let mut rows = sections
            .get(i)
            .map(|section| section_rows(section, inner, styler))
            .unwrap_or_default();
        rows.resize(slot.height, String::new());
        body.extend(rows);
    }
    body.resize(sidebar.height, String::new());

    body.into_iter()
        .map(|row| fit(&format!("{gutter}{}", fit(&row, inner)), sidebar.width))
        .collect()
}

fn section_rows(section: &SectionView, width: usize, styler: &dyn Styler) -> Vec<String> {
    std::iter::once(styler.style(TextStyle::Title, &section.title))
        .chain(section.items.iter().map(|item| item_row(item, width, styler)))
        .collect()
}

/// `{icon} {text}` on the left, `{value}` right-aligned.
fn item_row(item: &SidebarItem, width: usize, styler: &dyn Styler) -> String {
    let left_width = visible_width(&item.icon) + 1 + visible_width(&item.text);
    let value_width = visible_width(&item.value);
    let gap = width.saturating_sub(left_width + value_width).max(1);

    format!(
        "{} {}{}{}",
        styler.status(item.status, &item.icon),
        styler.style(TextStyle::Text, &item.text),
        " ".repeat(gap),
        styler.style(TextStyle::Muted, &item.value),
    )
}
