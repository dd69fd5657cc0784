//! Translation from crossterm events to dashboard events.

use crate::domain::{Event, Key, Mouse, MouseKind};
use crossterm::event::{
    Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

/// Maps a raw terminal event, or `None` if the dashboard has no use for it
/// (focus changes, pastes, key releases, unsupported keys).
#[must_use]
pub fn map_event(event: TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) => map_key(key).map(Event::Key),
        TermEvent::Mouse(mouse) => map_mouse(mouse).map(Event::Mouse),
        TermEvent::Resize(width, height) => Some(Event::Resize {
            width: usize::from(width),
            height: usize::from(height),
        }),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<Key> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let key = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Key::Ctrl(c.to_ascii_lowercase())
        }
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::F(n) => Key::F(n),
        _ => return None,
    };
    Some(key)
}

fn map_mouse(mouse: MouseEvent) -> Option<Mouse> {
    let kind = match mouse.kind {
        MouseEventKind::Down(_) => MouseKind::Down,
        MouseEventKind::Up(_) => MouseKind::Up,
        MouseEventKind::Drag(_) => MouseKind::Drag,
        MouseEventKind::Moved => MouseKind::Moved,
        MouseEventKind::ScrollUp => MouseKind::ScrollUp,
        MouseEventKind::ScrollDown => MouseKind::ScrollDown,
        _ => return None,
    };
    Some(Mouse {
        column: usize::from(mouse.column),
        row: usize::from(mouse.row),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::MouseButton;

    #[test]
    fn maps_control_chords_lower_case() {
        let event = TermEvent::Key(KeyEvent::new(KeyCode::Char('B'), KeyModifiers::CONTROL));
        assert_eq!(map_event(event), Some(Event::Key(Key::Ctrl('b'))));
    }

    #[test]
    fn maps_plain_and_named_keys() {
        let char_event = TermEvent::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(map_event(char_event), Some(Event::Key(Key::Char('q'))));
        let f5 = TermEvent::Key(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE));
        assert_eq!(map_event(f5), Some(Event::Key(Key::F(5))));
    }

    #[test]
    fn ignores_key_releases() {
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event(TermEvent::Key(release)), None);
    }

    #[test]
    fn maps_resize_and_mouse() {
        assert_eq!(
            map_event(TermEvent::Resize(120, 40)),
            Some(Event::Resize { width: 120, height: 40 })
        );
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 90,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            map_event(TermEvent::Mouse(click)),
            Some(Event::Mouse(Mouse { column: 90, row: 5, kind: MouseKind::Down }))
        );
    }

    #[test]
    fn drops_focus_events() {
        assert_eq!(map_event(TermEvent::FocusGained), None);
    }
}
