//! Header status data.
//!
//! Header providers report an ordered list of labelled values. Values are a
//! small closed set of kinds so the header can format them consistently.

use super::event::Timestamp;
use std::fmt;

/// A single status value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusValue {
    Text(String),
    Integer(i64),
    /// Displayed as `HH:MM:SS`.
    Timestamp(Timestamp),
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Timestamp(t) => write!(f, "{}", t.format("%H:%M:%S")),
        }
    }
}

impl From<&str> for StatusValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StatusValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for StatusValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for StatusValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<Timestamp> for StatusValue {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}

/// Insertion-ordered `label → value` list.
///
/// ```
/// use dashframe::StatusData;
///
/// let data = StatusData::new().with("status", "custom").with("users", 42);
/// let labels: Vec<&str> = data.iter().map(|(label, _)| label).collect();
/// assert_eq!(labels, ["status", "users"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusData {
    entries: Vec<(String, StatusValue)>,
}

impl StatusData {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends a field, replacing the value in place if the label already exists.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<StatusValue>) {
        let label = label.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(l, _)| *l == label) {
            slot.1 = value;
        } else {
            self.entries.push((label, value));
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, label: impl Into<String>, value: impl Into<StatusValue>) -> Self {
        self.insert(label, value);
        self
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&StatusValue> {
        self.entries.iter().find(|(l, _)| l == label).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatusValue)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_format_as_clock_time() {
        let at = chrono::Local
            .with_ymd_and_hms(2024, 5, 1, 9, 4, 7)
            .single()
            .expect("unambiguous local time");
        assert_eq!(StatusValue::from(at).to_string(), "09:04:07");
    }

    #[test]
    fn insert_keeps_first_position_on_replace() {
        let mut data = StatusData::new().with("a", 1).with("b", "two");
        data.insert("a", 3);
        let rendered: Vec<String> = data.iter().map(|(l, v)| format!("{l}={v}")).collect();
        assert_eq!(rendered, ["a=3", "b=two"]);
        assert_eq!(data.len(), 2);
    }
}
