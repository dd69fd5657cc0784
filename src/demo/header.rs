use crate::domain::{Event, FollowUp, StatusData, StatusValue, Timestamp};
use crate::providers::HeaderDataProvider;
use std::time::Duration;

const TICK_EVERY: Duration = Duration::from_secs(1);
const NO_TIME_YET: &str = "--:--:--";

/// Header with a live clock.
///
/// Arms a one-second tick on init and re-arms it on every tick it receives,
/// so the `time` field follows the wall clock. Until the first tick arrives
/// the field shows `--:--:--`.
#[derive(Debug, Clone)]
pub struct ClockHeader {
    brand: String,
    app: String,
    last_update: Option<Timestamp>,
}

impl ClockHeader {
    pub fn new(brand: impl Into<String>, app: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            app: app.into(),
            last_update: None,
        }
    }

    #[must_use]
    pub const fn last_update(&self) -> Option<Timestamp> {
        self.last_update
    }
}

impl HeaderDataProvider for ClockHeader {
    fn brand_name(&self) -> String {
        self.brand.clone()
    }

    fn app_name(&self) -> String {
        self.app.clone()
    }

    fn status_data(&self) -> StatusData {
        let time = match self.last_update {
            Some(at) => StatusValue::from(at),
            None => StatusValue::from(NO_TIME_YET),
        };
        StatusData::new()
            .with("time", time)
            .with("status", "custom")
            .with("users", 42)
            .with("version", "v2.1.0")
    }

    fn init_header(&mut self) -> Vec<FollowUp> {
        vec![FollowUp::tick(TICK_EVERY)]
    }

    fn handle_header_update(&mut self, event: &Event) -> Vec<FollowUp> {
        match event {
            Event::Tick(tick) => {
                self.last_update = Some(tick.at);
                vec![FollowUp::tick(TICK_EVERY)]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Tick, DEFAULT_TICK_TAG};
    use chrono::{Local, TimeZone};

    fn time_field(header: &ClockHeader) -> Option<String> {
        header.status_data().get("time").map(ToString::to_string)
    }

    #[test]
    fn time_is_blank_until_the_first_tick() {
        let header = ClockHeader::new("MyApp™", "Custom App");
        assert_eq!(header.last_update(), None);
        assert_eq!(time_field(&header).as_deref(), Some("--:--:--"));
    }

    #[test]
    fn tick_updates_time_and_rearms() {
        let mut header = ClockHeader::new("MyApp™", "Custom App");
        let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 5).single().expect("valid time");

        let tick = Event::Tick(Tick { at, tag: DEFAULT_TICK_TAG });
        let followups = header.handle_header_update(&tick);
        assert_eq!(followups, vec![FollowUp::tick(TICK_EVERY)]);
        assert_eq!(header.last_update(), Some(at));
        assert_eq!(header.status_data().get("time"), Some(&StatusValue::Timestamp(at)));
        assert_eq!(time_field(&header).as_deref(), Some("09:30:05"));
    }

    #[test]
    fn resize_is_ignored() {
        let mut header = ClockHeader::new("B", "A");
        assert!(header.handle_header_update(&Event::Resize { width: 1, height: 1 }).is_empty());
    }
}
