use crate::providers::ContentProvider;
use crate::ui::styler::{Styler, TextStyle};
use crate::ui::text::{center, visible_width};

/// Margin subtracted from each dimension before centering.
const MARGIN: usize = 6;

const BODY: &[&str] = &[
    "This demonstrates how to create a custom application",
    "using the reusable dashboard framework:",
    "",
    "• Custom content provider",
    "• Custom sidebar sections",
    "• Custom header data",
    "• Shared theme styling",
    "",
    "The framework handles all the layout, styling,",
    "and responsive behavior automatically.",
];

/// A static welcome panel: gradient title, subtitle and a bullet list,
/// centered both ways inside the region minus a six-cell margin.
#[derive(Debug, Clone)]
pub struct CenteredTextContent {
    title: String,
}

impl CenteredTextContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl ContentProvider for CenteredTextContent {
    fn render_content(&self, width: usize, height: usize, styler: &dyn Styler) -> String {
        let available_width = width.saturating_sub(MARGIN);
        let available_height = height.saturating_sub(MARGIN);
        if available_width == 0 || available_height == 0 {
            return String::new();
        }

        let mut lines = vec![
            styler.gradient(&self.title),
            styler.style(TextStyle::Muted, "Custom Application Example"),
            String::new(),
        ];
        lines.extend(BODY.iter().map(|line| match line {
            l if l.starts_with('•') => styler.style(TextStyle::Success, l),
            l if l.is_empty() => String::new(),
            l => styler.style(TextStyle::Text, l),
        }));

        let top = available_height.saturating_sub(lines.len()) / 2;
        std::iter::repeat(String::new())
            .take(top)
            .chain(lines.iter().map(|line| {
                if visible_width(line) < available_width {
                    center(line, available_width)
                } else {
                    line.clone()
                }
            }))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PlainStyler;

    #[test]
    fn too_small_region_renders_nothing() {
        let content = CenteredTextContent::new("APP");
        assert_eq!(content.render_content(6, 40, &PlainStyler), "");
        assert_eq!(content.render_content(80, 5, &PlainStyler), "");
    }

    #[test]
    fn title_is_centered_horizontally_and_vertically() {
        let content = CenteredTextContent::new("APP");
        let out = content.render_content(66, 36, &PlainStyler);
        let lines: Vec<&str> = out.lines().collect();
        // 30 rows available, 13 lines of text.
        assert_eq!(lines[8], format!("{}APP", " ".repeat(28)));
        assert!(lines.iter().any(|l| l.trim() == "• Custom header data"));
    }
}
