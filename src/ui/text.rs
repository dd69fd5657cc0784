//! ANSI-aware text measurement and fitting.
//!
//! Provider output and styler output contain SGR escape sequences. Layout only
//! cares about visible columns, so these helpers skip escape sequences while
//! measuring and keep them intact while clipping. Other control characters
//! would move the terminal cursor, so they never reach a frame: tabs become
//! spaces and the rest are dropped.

use std::borrow::Cow;
use unicode_width::UnicodeWidthChar;

const ESC: char = '\u{1b}';
const RESET: &str = "\u{1b}[0m";
const TAB_STOP: usize = 8;

/// Marker appended to labels shortened by [`truncate_with_marker`].
pub const TRUNCATION_MARKER: &str = "...";

/// Splits `text` into escape sequences and visible characters.
///
/// Yields `(segment, visible)` pairs. CSI sequences (`ESC [ ... final`) are one
/// non-visible segment; every other character is its own visible segment.
fn segments(text: &str) -> impl Iterator<Item = (&str, bool)> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let len = if first == ESC {
            escape_len(rest)
        } else {
            first.len_utf8()
        };
        let (segment, tail) = rest.split_at(len);
        rest = tail;
        Some((segment, first != ESC))
    })
}

/// Byte length of the escape sequence at the start of `text`.
fn escape_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    if bytes.get(1) != Some(&b'[') {
        return 1;
    }
    bytes
        .iter()
        .enumerate()
        .skip(2)
        .find(|(_, b)| (0x40..=0x7e).contains(*b))
        .map_or(bytes.len(), |(i, _)| i + 1)
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// `true` for segments a terminal would act on instead of printing.
fn is_unsafe(segment: &str, visible: bool) -> bool {
    if visible {
        segment.starts_with(char::is_control)
    } else {
        segment.len() < 3 || !segment.ends_with(|c: char| ('\u{40}'..='\u{7e}').contains(&c))
    }
}

/// Makes `text` safe to place at a fixed position on screen.
///
/// Tabs expand to spaces up to the next 8-column stop, counted from the start
/// of `text`. Newlines, carriage returns and every other control character are
/// dropped, as are escapes that are not CSI sequences. Clean text is borrowed.
///
/// ```
/// use dashframe::ui::text::sanitize;
///
/// assert_eq!(sanitize("a\tb"), "a       b");
/// assert_eq!(sanitize("line1\nline2"), "line1line2");
/// ```
#[must_use]
pub fn sanitize(text: &str) -> Cow<'_, str> {
    if !segments(text).any(|(s, visible)| is_unsafe(s, visible)) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for (segment, visible) in segments(text) {
        if segment == "\t" {
            let pad = TAB_STOP - column % TAB_STOP;
            out.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else if !is_unsafe(segment, visible) {
            if visible {
                column += segment.chars().map(char_width).sum::<usize>();
            }
            out.push_str(segment);
        }
    }
    Cow::Owned(out)
}

/// Number of terminal columns `text` occupies, ignoring escape sequences.
///
/// ```
/// use dashframe::ui::text::visible_width;
///
/// assert_eq!(visible_width("\u{1b}[1mhey\u{1b}[0m"), 3);
/// assert_eq!(visible_width("日本"), 4);
/// ```
#[must_use]
pub fn visible_width(text: &str) -> usize {
    segments(&sanitize(text))
        .filter(|(_, visible)| *visible)
        .flat_map(|(s, _)| s.chars())
        .map(char_width)
        .sum()
}

/// Cuts `text` to at most `width` visible columns.
///
/// Escape sequences are preserved; if anything was cut from styled text, a
/// reset is appended so styling does not bleed into the next region. Wide
/// characters that would straddle the limit are dropped. Control characters
/// are handled as in [`sanitize`].
#[must_use]
pub fn clip(text: &str, width: usize) -> String {
    let text = sanitize(text);
    if visible_width(&text) <= width {
        return text.into_owned();
    }

    let mut out = String::with_capacity(text.len());
    let mut used = 0;
    let mut styled = false;
    for (segment, visible) in segments(&text) {
        if !visible {
            styled = true;
            out.push_str(segment);
            continue;
        }
        let w = segment.chars().map(char_width).sum::<usize>();
        if used + w > width {
            break;
        }
        used += w;
        out.push_str(segment);
    }
    if styled {
        out.push_str(RESET);
    }
    out
}

/// Clips or right-pads `text` so it occupies exactly `width` columns.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let mut out = clip(text, width);
    let used = visible_width(&out);
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Shortens plain `text` to at most `max` columns, ending with `...` when cut.
///
/// When `max` is too small to hold the marker the text is hard-cut instead.
///
/// ```
/// use dashframe::ui::text::truncate_with_marker;
///
/// assert_eq!(truncate_with_marker("Documentation", 10), "Documen...");
/// assert_eq!(truncate_with_marker("Testing", 10), "Testing");
/// assert_eq!(truncate_with_marker("Testing", 2), "Te");
/// ```
#[must_use]
pub fn truncate_with_marker(text: &str, max: usize) -> String {
    if visible_width(text) <= max {
        return text.to_string();
    }
    let marker_width = TRUNCATION_MARKER.len();
    if max <= marker_width {
        return clip(text, max);
    }
    let mut out = clip(text, max - marker_width);
    out.push_str(TRUNCATION_MARKER);
    out
}

/// Left-pads `text` so it sits centered within `width` columns.
///
/// Text wider than `width` is returned unchanged; callers clip afterwards.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let used = visible_width(text);
    if used >= width {
        return text.to_string();
    }
    format!("{}{text}", " ".repeat((width - used) / 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_sgr_sequences() {
        let styled = "\u{1b}[38;2;1;2;3mab\u{1b}[0mc";
        assert_eq!(visible_width(styled), 3);
    }

    #[test]
    fn clip_keeps_escapes_and_resets() {
        let styled = "\u{1b}[1mhello\u{1b}[0m";
        let clipped = clip(styled, 3);
        assert_eq!(visible_width(&clipped), 3);
        assert!(clipped.starts_with("\u{1b}[1mhel"));
        assert!(clipped.ends_with(RESET));
    }

    #[test]
    fn clip_of_fitting_text_is_identity() {
        assert_eq!(clip("abc", 3), "abc");
        assert_eq!(clip("", 0), "");
    }

    #[test]
    fn clip_drops_straddling_wide_char() {
        assert_eq!(clip("a日b", 2), "a");
    }

    #[test]
    fn fit_pads_to_exact_width() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abcd");
        assert_eq!(fit("x", 0), "");
    }

    #[test]
    fn truncate_respects_limit_for_every_small_width() {
        for max in 0..8 {
            let out = truncate_with_marker("Design Review", max);
            assert!(visible_width(&out) <= max, "max={max} out={out:?}");
        }
    }

    #[test]
    fn tabs_expand_to_the_next_stop() {
        assert_eq!(sanitize("\tx"), "        x");
        assert_eq!(sanitize("abc\tx"), "abc     x");
        assert_eq!(visible_width("col1\tcol2"), 12);
    }

    #[test]
    fn cursor_moving_characters_are_dropped() {
        assert_eq!(sanitize("a\r\nb\u{7}c\u{7f}"), "abc");
        assert_eq!(sanitize("\u{1b}cx"), "cx");
        assert_eq!(sanitize("x\u{1b}["), "x");
        assert!(matches!(sanitize("\u{1b}[1mplain\u{1b}[0m"), Cow::Borrowed(_)));
    }

    #[test]
    fn fit_never_emits_control_characters() {
        let row = fit("col1\tcol2\tcol3\nnext", 20);
        assert_eq!(visible_width(&row), 20);
        assert_eq!(row.chars().count(), 20);
        assert!(!row.contains(|c: char| c.is_control()));
    }

    #[test]
    fn center_pads_left_only() {
        assert_eq!(center("ab", 6), "  ab");
        assert_eq!(center("abcdef", 3), "abcdef");
    }
}
