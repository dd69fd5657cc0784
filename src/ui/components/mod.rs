//! Region renderers.
//!
//! Each component turns one region's data into exactly as many rows as the
//! region is tall, every row exactly as wide as the region.
//!
//! - [`header`]: brand, app name and status fields
//! - [`content`]: the host's main view, clipped to its rectangle
//! - [`sidebar`]: stacked sections with titled item lists

mod content;
mod header;
mod sidebar;

pub use content::render_content;
pub use header::render_header;
pub use sidebar::render_sidebar;
