use crate::domain::{FollowUp, ItemStatus, SidebarItem, Timestamp};
use crate::providers::{truncate_label, SidebarSection};
use chrono::TimeDelta;

/// A built-in section with dashboard uptime and refresh bookkeeping.
///
/// The first refresh marks the start; uptime is measured from there.
#[derive(Debug, Clone, Default)]
pub struct StatusSection {
    started: Option<Timestamp>,
    last_refresh: Option<Timestamp>,
    refreshes: u64,
}

impl StatusSection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn format_uptime(elapsed: TimeDelta) -> String {
    let secs = elapsed.num_seconds().max(0);
    match (secs / 3600, (secs % 3600) / 60, secs % 60) {
        (0, 0, s) => format!("{s}s"),
        (0, m, s) => format!("{m}m {s:02}s"),
        (h, m, _) => format!("{h}h {m:02}m"),
    }
}

impl SidebarSection for StatusSection {
    fn title(&self) -> String {
        "Status".to_string()
    }

    fn render_items(&self, max_items: usize, width: usize) -> Vec<SidebarItem> {
        let (uptime, last) = match (self.started, self.last_refresh) {
            (Some(start), Some(last)) => (
                format_uptime(last - start),
                last.format("%H:%M:%S").to_string(),
            ),
            _ => ("-".to_string(), "never".to_string()),
        };
        let health = if self.last_refresh.is_some() {
            ("●", "healthy", ItemStatus::Success)
        } else {
            ("○", "starting", ItemStatus::Muted)
        };

        [
            SidebarItem::new(health.0, truncate_label("Health", width), health.1, health.2),
            SidebarItem::new("◷", truncate_label("Uptime", width), uptime, ItemStatus::Info),
            SidebarItem::new("↻", truncate_label("Refreshed", width), last, ItemStatus::Muted),
            SidebarItem::new(
                "#",
                truncate_label("Refreshes", width),
                self.refreshes.to_string(),
                ItemStatus::Muted,
            ),
        ]
        .into_iter()
        .take(max_items)
        .collect()
    }

    fn refresh_section(&mut self, at: Timestamp) -> Vec<FollowUp> {
        self.started.get_or_insert(at);
        self.last_refresh = Some(at);
        self.refreshes += 1;
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn uptime_formats_by_magnitude() {
        assert_eq!(format_uptime(TimeDelta::seconds(9)), "9s");
        assert_eq!(format_uptime(TimeDelta::seconds(65)), "1m 05s");
        assert_eq!(format_uptime(TimeDelta::seconds(7_380)), "2h 03m");
    }

    #[test]
    fn refresh_tracks_uptime() {
        let mut section = StatusSection::new();
        assert_eq!(section.render_items(4, 32)[0].value, "starting");

        let t0 = Local.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).single().expect("valid time");
        section.refresh_section(t0);
        section.refresh_section(t0 + TimeDelta::seconds(90));

        let items = section.render_items(4, 32);
        assert_eq!(items[1].value, "1m 30s");
        assert_eq!(items[2].value, "08:01:30");
        assert_eq!(items[3].value, "2");
        assert_eq!(section.render_items(2, 32).len(), 2);
    }
}
