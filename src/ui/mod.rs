//! Terminal rendering layer.
//!
//! ```text
//! providers → FrameInputs → compose → Frame → runner
//! ```
//!
//! - [`viewmodel`]: per-frame snapshots and the composed [`Frame`]
//! - [`renderer`]: stacks regions into a frame
//! - [`components`]: header, content and sidebar renderers
//! - [`styler`]: the styling capability handed to providers
//! - [`theme`]: TOML color themes and ANSI escape generation
//! - [`text`]: escape-aware width, clipping and truncation

pub mod components;
pub mod renderer;
pub mod styler;
pub mod text;
pub mod theme;
pub mod viewmodel;

pub use renderer::compose;
pub use styler::{PlainStyler, Styler, TextStyle};
pub use theme::Theme;
pub use viewmodel::{Frame, FrameInputs, HeaderView, SectionView};
