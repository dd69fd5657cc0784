//! Property tests for layout geometry and composed frames.

use chrono::{Local, TimeZone};
use dashframe::demo::{
    CenteredTextContent, ClockHeader, ServersSection, StatusSection, TasksSection,
};
use dashframe::layout::{self, LayoutMode};
use dashframe::providers::truncate_label;
use dashframe::ui::text::visible_width;
use dashframe::{App, AppConfig, Event, PlainStyler, Settings, SidebarSection};
use proptest::prelude::*;

fn settings(bw: usize, bh: usize, sidebar_width: usize, header_height: usize) -> Settings {
    Settings {
        compact_width_breakpoint: bw,
        compact_height_breakpoint: bh,
        sidebar_width,
        header_height,
        ..Settings::default()
    }
}

proptest! {
    #[test]
    fn mode_is_compact_iff_below_a_breakpoint(
        w in 0usize..300,
        h in 0usize..120,
        bw in 0usize..300,
        bh in 0usize..120,
    ) {
        let compact = LayoutMode::for_size(w, h, bw, bh) == LayoutMode::Compact;
        prop_assert_eq!(compact, w < bw || h < bh);
    }

    #[test]
    fn regions_stay_in_bounds_and_never_overlap(
        w in 0usize..300,
        h in 0usize..120,
        sidebar_width in 0usize..80,
        header_height in 0usize..6,
        visible in any::<bool>(),
        compact in any::<bool>(),
    ) {
        let mode = if compact { LayoutMode::Compact } else { LayoutMode::Normal };
        let s = settings(80, 24, sidebar_width, header_height);
        let g = layout::compute(w, h, mode, visible, &s);

        let mut regions = vec![g.header, g.content];
        regions.extend(g.sidebar);
        for r in &regions {
            prop_assert!(r.right() <= w);
            prop_assert!(r.bottom() <= h);
        }
        for (i, a) in regions.iter().enumerate() {
            for b in regions.iter().skip(i + 1) {
                prop_assert!(!a.intersects(b));
            }
        }
        if mode == LayoutMode::Compact || !visible {
            prop_assert!(g.sidebar.is_none());
        }
        if w > 0 {
            prop_assert_eq!(g.header.height + g.content.height, h);
        }
    }

    #[test]
    fn slots_partition_the_sidebar(height in 0usize..100, count in 0usize..8) {
        let sidebar = layout::Rect::new(50, 2, 30, height);
        let slots = layout::sidebar_slots(sidebar, count);
        prop_assert_eq!(slots.len(), count);
        if count > 0 {
            prop_assert_eq!(slots.iter().map(|s| s.height).sum::<usize>(), height);
        }
        for pair in slots.windows(2) {
            prop_assert!(pair[0].height >= pair[1].height);
            prop_assert!(pair[0].bottom() <= pair[1].y || pair[1].is_empty());
        }
    }

    #[test]
    fn labels_respect_their_budget(text in "[a-zA-Z ]{0,40}", width in 0usize..60) {
        let label = truncate_label(&text, width);
        prop_assert!(visible_width(&label) <= width.saturating_sub(10));
    }

    #[test]
    fn frames_fill_the_terminal_exactly(w in 1usize..220, h in 0usize..70) {
        let config = AppConfig::builder()
            .content(CenteredTextContent::new("CUSTOM APP"))
            .header(ClockHeader::new("MyApp™", "Custom App"))
            .section(TasksSection::new())
            .section(ServersSection::new())
            .section(StatusSection::new())
            .compact_breakpoints(100, 25)
            .build()
            .expect("config");
        let mut app = App::with_styler(config, PlainStyler);
        let now = Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid time");
        app.handle_event(&Event::Resize { width: w, height: h }, now);

        let frame = app.view();
        prop_assert_eq!(frame.height(), h);
        for line in &frame.lines {
            prop_assert_eq!(visible_width(line), w);
        }
    }
}

#[test]
fn built_in_sections_honour_max_items() {
    let sections: Vec<Box<dyn SidebarSection>> = vec![
        Box::new(TasksSection::new()),
        Box::new(ServersSection::new()),
        Box::new(StatusSection::new()),
    ];
    for section in &sections {
        for max_items in [0, 1, 5, 100] {
            for width in [0, 5, 20, 40] {
                let items = section.render_items(max_items, width);
                assert!(
                    items.len() <= max_items,
                    "{} returned {} items for max {max_items}",
                    section.title(),
                    items.len()
                );
            }
        }
    }
}
