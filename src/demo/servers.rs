use crate::domain::{FollowUp, ItemStatus, SidebarItem, Timestamp};
use crate::providers::{truncate_label, SidebarSection};
use chrono::Timelike;

#[derive(Debug, Clone)]
struct Server {
    name: &'static str,
    status: ItemStatus,
    base_latency_ms: u32,
    latency_ms: u32,
}

/// A built-in section listing a few backend services with their latency.
///
/// Latencies wobble on each refresh so the sidebar visibly updates.
#[derive(Debug, Clone)]
pub struct ServersSection {
    servers: Vec<Server>,
}

impl ServersSection {
    #[must_use]
    pub fn new() -> Self {
        let server = |name, status, base_latency_ms| Server {
            name,
            status,
            base_latency_ms,
            latency_ms: base_latency_ms,
        };
        Self {
            servers: vec![
                server("api-gateway", ItemStatus::Success, 12),
                server("auth-service", ItemStatus::Success, 8),
                server("postgres-primary", ItemStatus::Warning, 95),
                server("redis-cache", ItemStatus::Success, 2),
                server("search-index", ItemStatus::Error, 0),
            ],
        }
    }
}

impl Default for ServersSection {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarSection for ServersSection {
    fn title(&self) -> String {
        "Servers".to_string()
    }

    fn render_items(&self, max_items: usize, width: usize) -> Vec<SidebarItem> {
        self.servers
            .iter()
            .take(max_items)
            .map(|server| {
                let (icon, value) = match server.status {
                    ItemStatus::Error => ("×", "down".to_string()),
                    _ => ("●", format!("{}ms", server.latency_ms)),
                };
                SidebarItem::new(icon, truncate_label(server.name, width), value, server.status)
            })
            .collect()
    }

    fn refresh_section(&mut self, at: Timestamp) -> Vec<FollowUp> {
        let jitter = at.second() % 5;
        for server in self.servers.iter_mut().filter(|s| s.status != ItemStatus::Error) {
            server.latency_ms = server.base_latency_ms + jitter;
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn down_servers_show_no_latency() {
        let items = ServersSection::new().render_items(10, 40);
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].value, "12ms");
        assert_eq!(items[4].value, "down");
        assert_eq!(items[4].status, ItemStatus::Error);
    }

    #[test]
    fn refresh_moves_latency() {
        let mut section = ServersSection::new();
        let at = Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 3).single().expect("valid time");
        section.refresh_section(at);
        assert_eq!(section.render_items(1, 40)[0].value, "15ms");
    }
}
