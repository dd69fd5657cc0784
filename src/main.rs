//! Demo dashboard.
//!
//! Wires the sample providers the way a host application would: a custom
//! content panel, a clock header, and a custom task section mixed with the
//! built-in servers and status sections.
//!
//! # Keybindings
//!
//! - `Ctrl+b`: toggle the sidebar (configurable)
//! - `Ctrl+c`: quit (configurable)
//!
//! Settings are read from `~/.config/dashframe/config.toml` when present.
//! Keys the file leaves out use the demo's defaults: sidebar shown, Compact
//! below 100x25. Logs go to `~/.local/share/dashframe/dashframe.log`.

#![allow(clippy::multiple_crate_versions)]

use dashframe::demo::{
    CenteredTextContent, ClockHeader, ServersSection, StatusSection, TasksSection,
};
use dashframe::runner::{Program, ProgramOptions};
use dashframe::{AppConfig, Settings, SidebarSection};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error running program: {e}");
            tracing::error!(error = %e, "program failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> dashframe::Result<()> {
    let settings = Settings::load_over(demo_defaults())?;
    dashframe::observability::init_tracing(&settings);

    let span = tracing::debug_span!("startup");
    let guard = span.entered();

    let sections: Vec<Box<dyn SidebarSection>> = vec![
        Box::new(TasksSection::new()),
        Box::new(ServersSection::new()),
        Box::new(StatusSection::new()),
    ];

    let config = AppConfig::builder()
        .settings(settings)
        .content(CenteredTextContent::new("CUSTOM APP"))
        .header(ClockHeader::new("MyApp™", "Custom App"))
        .sections(sections)
        .build()?;
    tracing::debug!(?config, "config built");
    drop(guard);

    Program::new(dashframe::new_app(config))
        .with_options(ProgramOptions {
            alt_screen: true,
            mouse_cell_motion: true,
        })
        .run()?;
    Ok(())
}

fn demo_defaults() -> Settings {
    Settings {
        show_sidebar_by_default: true,
        compact_width_breakpoint: 100,
        compact_height_breakpoint: 25,
        ..Settings::default()
    }
}
