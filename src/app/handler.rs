//! The dispatcher: owns the providers, routes events and composes frames.
//!
//! # Routing
//!
//! | Event            | Receivers                                              |
//! |------------------|--------------------------------------------------------|
//! | `Resize`         | layout first, then content, header, every section      |
//! | quit key         | nobody; yields [`Action::Quit`]                        |
//! | toggle key       | nobody; flips the sidebar                              |
//! | other `Key`      | content                                                |
//! | `Mouse`          | content, then the section whose slot holds the pointer |
//! | external `Tick`  | content                                                |
//! | due trigger      | the provider that armed it                             |
//! | refresh cadence  | `refresh_section` on every section                     |
//!
//! Follow-ups returned by any call are armed against the provider that
//! returned them, so every timed callback goes back to its origin.
//!
//! # Example
//!
//! ```
//! use chrono::Local;
//! use dashframe::demo::{CenteredTextContent, ClockHeader, TasksSection};
//! use dashframe::{AppConfig, Event, LayoutMode};
//!
//! let config = AppConfig::builder()
//!     .content(CenteredTextContent::new("HELLO"))
//!     .header(ClockHeader::new("MyApp™", "Demo"))
//!     .section(TasksSection::new())
//!     .compact_breakpoints(100, 25)
//!     .build()
//!     .unwrap();
//!
//! let mut app = dashframe::new_app(config);
//! let now = Local::now();
//! app.init(now);
//! app.handle_event(&Event::Resize { width: 120, height: 40 }, now);
//!
//! assert_eq!(app.layout_mode(), LayoutMode::Normal);
//! assert_eq!(app.view().height(), 40);
//! ```

use crate::app::actions::Action;
use crate::app::config::{AppConfig, Settings};
use crate::app::guard::isolate;
use crate::app::state::RootState;
use crate::domain::{Event, FollowUp, Mouse, Tick, Timestamp};
use crate::layout::{self, LayoutMode, RegionGeometry};
use crate::scheduler::{Scheduler, Target};
use crate::ui::{self, Frame, FrameInputs, HeaderView, SectionView, Styler, Theme};
use std::fmt;

/// Tag carried by ticks from the sidebar refresh cadence.
pub const REFRESH_TICK_TAG: &str = "refresh";

/// A running dashboard.
///
/// Built by [`new_app`](crate::new_app) or [`App::with_styler`], driven by the
/// runner (or a test) through [`init`](Self::init),
/// [`handle_event`](Self::handle_event), [`fire_due`](Self::fire_due) and
/// [`view`](Self::view). The clock is always passed in.
pub struct App {
    config: AppConfig,
    styler: Box<dyn Styler>,
    state: RootState,
    scheduler: Scheduler,
    initialized: bool,
}

impl App {
    /// Creates an app styled by the theme named in the settings.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let theme = Theme::resolve(
            config.settings.theme.as_deref(),
            config.settings.theme_path().as_deref(),
        );
        Self::with_styler(config, theme)
    }

    /// Creates an app with an explicit styler, e.g. [`PlainStyler`](crate::ui::PlainStyler)
    /// for tests.
    #[must_use]
    pub fn with_styler(config: AppConfig, styler: impl Styler + 'static) -> Self {
        let state = RootState::new(&config.settings);
        Self {
            config,
            styler: Box::new(styler),
            state,
            scheduler: Scheduler::new(),
            initialized: false,
        }
    }

    /// Runs every provider's init hook in order: content, header, then
    /// sections in declaration order. Arms the returned follow-ups and the
    /// sidebar refresh cadence.
    ///
    /// Calling it twice is a no-op.
    pub fn init(&mut self, now: Timestamp) -> Vec<Action> {
        if self.initialized {
            tracing::warn!("init called twice, ignoring");
            return Vec::new();
        }
        self.initialized = true;
        let _span = tracing::debug_span!("init", sections = self.config.sections.len()).entered();

        let mut actions = Vec::new();

        let content = &mut self.config.content;
        let followups = isolate("content", "init_content", || content.init_content());
        self.arm(Target::Content, followups, now, &mut actions);

        let header = &mut self.config.header;
        let followups = isolate("header", "init_header", || header.init_header());
        self.arm(Target::Header, followups, now, &mut actions);

        for index in 0..self.config.sections.len() {
            let section = &mut self.config.sections[index];
            let followups = isolate("section", "init_section", || section.init_section());
            self.arm(Target::Section(index), followups, now, &mut actions);
        }

        self.arm_refresh(now);
        tracing::info!(pending = self.scheduler.len(), "dashboard initialized");
        actions
    }

    /// Routes one event. Returns whether a re-render is needed and the
    /// actions for the runner.
    pub fn handle_event(&mut self, event: &Event, now: Timestamp) -> (bool, Vec<Action>) {
        let _span = tracing::debug_span!("handle_event", kind = event.kind()).entered();
        let mut actions = Vec::new();

        let should_render = match event {
            Event::Resize { width, height } => {
                self.state.resize(*width, *height, &self.config.settings);
                self.broadcast(event, now, &mut actions);
                true
            }
            Event::Key(key) if *key == self.config.settings.quit_key => {
                tracing::info!(%key, "quit key pressed");
                actions.push(Action::Quit);
                false
            }
            Event::Key(key) if *key == self.config.settings.sidebar_toggle_key => {
                self.state.toggle_sidebar(&self.config.settings)
            }
            Event::Key(_) | Event::Tick(_) => {
                self.send_to_content(event, now, &mut actions);
                true
            }
            Event::Mouse(mouse) => {
                self.send_to_content(event, now, &mut actions);
                if let Some(index) = self.section_at(*mouse) {
                    self.send_to_section(index, event, now, &mut actions);
                }
                true
            }
        };

        (should_render, actions)
    }

    /// Delivers every trigger due at `now` to the provider that armed it.
    ///
    /// Each delivered tick carries `now` as its timestamp. Follow-ups armed
    /// while delivering wait for a later call even if already due.
    pub fn fire_due(&mut self, now: Timestamp) -> (bool, Vec<Action>) {
        let due = self.scheduler.take_due(now);
        if due.is_empty() {
            return (false, Vec::new());
        }
        let _span = tracing::debug_span!("fire_due", triggers = due.len()).entered();

        let mut actions = Vec::new();
        for trigger in due {
            let event = Event::Tick(Tick { at: now, tag: trigger.tag });
            tracing::trace!(
                to = ?trigger.target,
                tag = trigger.tag,
                due = %trigger.due,
                "trigger fired"
            );
            match trigger.target {
                Target::Content => self.send_to_content(&event, now, &mut actions),
                Target::Header => self.send_to_header(&event, now, &mut actions),
                Target::Section(index) => self.send_to_section(index, &event, now, &mut actions),
                Target::SidebarRefresh => self.refresh_sections(now, &mut actions),
            }
        }
        (true, actions)
    }

    /// Composes the current frame. Pure with respect to app state: calling it
    /// twice without events in between yields the same frame, provided the
    /// providers render deterministically.
    #[must_use]
    pub fn view(&self) -> Frame {
        let geometry = self.state.geometry;
        let _span = tracing::trace_span!(
            "view",
            width = self.state.width,
            height = self.state.height
        )
        .entered();

        let content = if geometry.content.is_empty() {
            String::new()
        } else {
            let provider = &self.config.content;
            let styler = self.styler.as_ref();
            let rect = geometry.content;
            isolate("content", "render_content", || {
                provider.render_content(rect.width, rect.height, styler)
            })
            .unwrap_or_default()
        };

        let header = if geometry.header.is_empty() {
            None
        } else {
            let provider = &self.config.header;
            isolate("header", "status_data", || HeaderView {
                brand: provider.brand_name(),
                app: provider.app_name(),
                status: provider.status_data(),
            })
        };

        let sections = geometry
            .sidebar
            .map(|sidebar| self.section_views(sidebar))
            .unwrap_or_default();

        let inputs = FrameInputs {
            mode: self.state.mode,
            geometry,
            header,
            content,
            sections,
        };
        ui::compose(&inputs, self.styler.as_ref())
    }

    #[must_use]
    pub const fn layout_mode(&self) -> LayoutMode {
        self.state.mode
    }

    /// Whether the sidebar is on screen (not merely preferred).
    #[must_use]
    pub const fn sidebar_visible(&self) -> bool {
        self.state.sidebar_visible()
    }

    #[must_use]
    pub const fn geometry(&self) -> RegionGeometry {
        self.state.geometry
    }

    #[must_use]
    pub const fn size(&self) -> (usize, usize) {
        (self.state.width, self.state.height)
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.config.settings
    }

    /// When the runner should next call [`fire_due`](Self::fire_due).
    #[must_use]
    pub fn next_wake(&self) -> Option<Timestamp> {
        self.scheduler.next_due()
    }

    /// Number of armed triggers.
    #[must_use]
    pub fn pending_triggers(&self) -> usize {
        self.scheduler.len()
    }

    fn section_views(&self, sidebar: layout::Rect) -> Vec<SectionView> {
        let width = layout::item_width_for(sidebar.width);
        layout::sidebar_slots(sidebar, self.config.sections.len())
            .into_iter()
            .zip(&self.config.sections)
            .map(|(slot, section)| {
                let max_items = layout::max_items_for(slot);
                let view = isolate("section", "render_items", || {
                    let title = section.title();
                    let items = if slot.is_empty() || max_items == 0 {
                        Vec::new()
                    } else {
                        section.render_items(max_items, width)
                    };
                    SectionView { title, items }
                });
                let mut view = view.unwrap_or_default();
                if view.items.len() > max_items {
                    tracing::warn!(
                        section = %view.title,
                        returned = view.items.len(),
                        max_items,
                        "section returned too many items, truncating"
                    );
                    view.items.truncate(max_items);
                }
                view
            })
            .collect()
    }

    fn section_at(&self, mouse: Mouse) -> Option<usize> {
        let sidebar = self.state.geometry.sidebar?;
        layout::sidebar_slots(sidebar, self.config.sections.len())
            .iter()
            .position(|slot| slot.contains(mouse.column, mouse.row))
    }

    fn broadcast(&mut self, event: &Event, now: Timestamp, actions: &mut Vec<Action>) {
        self.send_to_content(event, now, actions);
        self.send_to_header(event, now, actions);
        for index in 0..self.config.sections.len() {
            self.send_to_section(index, event, now, actions);
        }
    }

    fn send_to_content(&mut self, event: &Event, now: Timestamp, actions: &mut Vec<Action>) {
        let provider = &mut self.config.content;
        let followups = isolate("content", "handle_content_update", || {
            provider.handle_content_update(event)
        });
        self.arm(Target::Content, followups, now, actions);
    }

    fn send_to_header(&mut self, event: &Event, now: Timestamp, actions: &mut Vec<Action>) {
        let provider = &mut self.config.header;
        let followups = isolate("header", "handle_header_update", || {
            provider.handle_header_update(event)
        });
        self.arm(Target::Header, followups, now, actions);
    }

    fn send_to_section(
        &mut self,
        index: usize,
        event: &Event,
        now: Timestamp,
        actions: &mut Vec<Action>,
    ) {
        let Some(section) = self.config.sections.get_mut(index) else {
            tracing::warn!(index, "trigger for unknown section dropped");
            return;
        };
        let followups = isolate("section", "handle_section_update", || {
            section.handle_section_update(event)
        });
        self.arm(Target::Section(index), followups, now, actions);
    }

    fn refresh_sections(&mut self, now: Timestamp, actions: &mut Vec<Action>) {
        for index in 0..self.config.sections.len() {
            let section = &mut self.config.sections[index];
            let followups = isolate("section", "refresh_section", || section.refresh_section(now));
            self.arm(Target::Section(index), followups, now, actions);
        }
        self.arm_refresh(now);
    }

    fn arm_refresh(&mut self, now: Timestamp) {
        if self.config.sections.is_empty() {
            return;
        }
        if let Some(interval) = self.config.settings.refresh_interval() {
            self.scheduler
                .schedule(now, Target::SidebarRefresh, interval, REFRESH_TICK_TAG);
        }
    }

    fn arm(
        &mut self,
        target: Target,
        followups: Option<Vec<FollowUp>>,
        now: Timestamp,
        actions: &mut Vec<Action>,
    ) {
        for followup in followups.into_iter().flatten() {
            match followup {
                FollowUp::Tick { after, tag } => {
                    self.scheduler.schedule(now, target, after, tag);
                }
                FollowUp::Quit => {
                    tracing::info!(?target, "provider requested quit");
                    if !actions.contains(&Action::Quit) {
                        actions.push(Action::Quit);
                    }
                }
            }
        }
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("pending", &self.scheduler.len())
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Key, SidebarItem, StatusData};
    use crate::providers::{ContentProvider, HeaderDataProvider, SidebarSection};
    use crate::ui::PlainStyler;
    use chrono::{Local, TimeZone};
    use std::time::Duration;

    struct Blank;

    impl ContentProvider for Blank {
        fn render_content(&self, _width: usize, _height: usize, _styler: &dyn Styler) -> String {
            "blank".to_string()
        }

        fn handle_content_update(&mut self, event: &Event) -> Vec<FollowUp> {
            match event {
                Event::Key(Key::Char('x')) => vec![FollowUp::Quit],
                _ => Vec::new(),
            }
        }
    }

    struct Title;

    impl HeaderDataProvider for Title {
        fn brand_name(&self) -> String {
            "B".to_string()
        }

        fn app_name(&self) -> String {
            "A".to_string()
        }

        fn status_data(&self) -> StatusData {
            StatusData::new()
        }
    }

    struct Greedy;

    impl SidebarSection for Greedy {
        fn title(&self) -> String {
            "Greedy".to_string()
        }

        fn render_items(&self, _max_items: usize, _width: usize) -> Vec<SidebarItem> {
            (0..50)
                .map(|i| SidebarItem::new("•", format!("item {i}"), "", Default::default()))
                .collect()
        }
    }

    fn t0() -> Timestamp {
        Local.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).single().expect("valid time")
    }

    fn app() -> App {
        let config = AppConfig::builder()
            .content(Blank)
            .header(Title)
            .section(Greedy)
            .build()
            .expect("config");
        App::with_styler(config, PlainStyler)
    }

    #[test]
    fn quit_key_is_not_forwarded() {
        let mut app = app();
        let (render, actions) = app.handle_event(&Event::Key(Key::Ctrl('c')), t0());
        assert!(!render);
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn provider_quit_becomes_action() {
        let mut app = app();
        let (_, actions) = app.handle_event(&Event::Key(Key::Char('x')), t0());
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn init_arms_refresh_cadence_once() {
        let mut app = app();
        app.init(t0());
        assert_eq!(app.pending_triggers(), 1);
        assert!(app.init(t0()).is_empty());
        assert_eq!(app.pending_triggers(), 1);
        assert_eq!(
            app.next_wake(),
            Some(t0() + chrono::TimeDelta::from_std(Duration::from_secs(1)).expect("delta"))
        );
    }

    #[test]
    fn oversized_item_lists_are_truncated() {
        let mut app = app();
        app.handle_event(&Event::Resize { width: 120, height: 24 }, t0());
        let frame = app.view();
        assert_eq!(frame.height(), 24);
        assert!(frame.contains("item 19"));
        assert!(!frame.contains("item 20"));
    }
}
