//! Backend-independent key representation.
//!
//! Keys are produced by the terminal runner from raw backend events and parsed
//! from settings strings such as `"ctrl+b"` or `"esc"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single key press.
///
/// Serializes as its textual description so settings files can say
/// `quit_key = "ctrl+c"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    /// A printable character, already shifted (`'K'` for shift+k).
    Char(char),
    /// A character pressed together with Control, stored lower-case.
    Ctrl(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Function key `F1`..`F24`.
    F(u8),
}

impl FromStr for Key {
    type Err = String;

    /// Parses a key description.
    ///
    /// Accepts single characters (`"q"`), control chords (`"ctrl+b"`, `"c-b"`),
    /// named keys (`"enter"`, `"esc"`, `"pgup"`, ...) and function keys (`"f5"`).
    /// Matching of names is case-insensitive; single characters are taken as is.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let mut chars = raw.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Self::Char(c));
        }

        let lower = raw.to_lowercase();
        if let Some(rest) = lower
            .strip_prefix("ctrl+")
            .or_else(|| lower.strip_prefix("ctrl-"))
            .or_else(|| lower.strip_prefix("c-"))
        {
            let mut rest_chars = rest.chars();
            return match (rest_chars.next(), rest_chars.next()) {
                (Some(c), None) => Ok(Self::Ctrl(c)),
                _ => Err(format!("invalid control chord: {raw}")),
            };
        }

        let key = match lower.as_str() {
            "enter" | "return" => Self::Enter,
            "esc" | "escape" => Self::Esc,
            "tab" => Self::Tab,
            "backtab" | "shift+tab" => Self::BackTab,
            "backspace" => Self::Backspace,
            "delete" | "del" => Self::Delete,
            "up" => Self::Up,
            "down" => Self::Down,
            "left" => Self::Left,
            "right" => Self::Right,
            "home" => Self::Home,
            "end" => Self::End,
            "pageup" | "pgup" => Self::PageUp,
            "pagedown" | "pgdown" => Self::PageDown,
            "space" => Self::Char(' '),
            other => {
                let number = other
                    .strip_prefix('f')
                    .and_then(|n| n.parse::<u8>().ok())
                    .filter(|n| (1..=24).contains(n));
                match number {
                    Some(n) => Self::F(n),
                    None => return Err(format!("unknown key: {raw}")),
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(' ') => f.write_str("space"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Ctrl(c) => write!(f, "ctrl+{c}"),
            Self::Enter => f.write_str("enter"),
            Self::Esc => f.write_str("esc"),
            Self::Tab => f.write_str("tab"),
            Self::BackTab => f.write_str("backtab"),
            Self::Backspace => f.write_str("backspace"),
            Self::Delete => f.write_str("delete"),
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
            Self::Home => f.write_str("home"),
            Self::End => f.write_str("end"),
            Self::PageUp => f.write_str("pgup"),
            Self::PageDown => f.write_str("pgdown"),
            Self::F(n) => write!(f, "f{n}"),
        }
    }
}

impl TryFrom<String> for Key {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_characters_verbatim() {
        assert_eq!("q".parse::<Key>(), Ok(Key::Char('q')));
        assert_eq!("K".parse::<Key>(), Ok(Key::Char('K')));
    }

    #[test]
    fn parses_control_chords() {
        assert_eq!("ctrl+b".parse::<Key>(), Ok(Key::Ctrl('b')));
        assert_eq!("Ctrl-C".parse::<Key>(), Ok(Key::Ctrl('c')));
        assert_eq!("c-x".parse::<Key>(), Ok(Key::Ctrl('x')));
        assert!("ctrl+".parse::<Key>().is_err());
    }

    #[test]
    fn parses_named_and_function_keys() {
        assert_eq!("ESC".parse::<Key>(), Ok(Key::Esc));
        assert_eq!("pgdown".parse::<Key>(), Ok(Key::PageDown));
        assert_eq!("f12".parse::<Key>(), Ok(Key::F(12)));
        assert!("f25".parse::<Key>().is_err());
        assert!("hyper".parse::<Key>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for key in [Key::Ctrl('b'), Key::Esc, Key::F(3), Key::Char(' '), Key::PageUp] {
            assert_eq!(key.to_string().parse::<Key>(), Ok(key));
        }
    }
}
