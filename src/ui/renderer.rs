//! Frame composition.
//!
//! Stacks the header rows above the body, where each body row is the content
//! row followed by the sidebar row when the sidebar is shown:
//!
//! ```text
//! [Header .................................]
//! [Content ...................][│ Sidebar ]
//! [Content ...................][│ Sidebar ]
//! ```

use crate::layout::sidebar_slots;
use crate::ui::components::{render_content, render_header, render_sidebar};
use crate::ui::styler::Styler;
use crate::ui::viewmodel::{Frame, FrameInputs};

/// Composes a frame from already-fetched region data.
///
/// The result has `header.height + content.height` rows, which equals the
/// terminal height whenever the terminal is at least one column wide.
#[must_use]
pub fn compose(inputs: &FrameInputs, styler: &dyn Styler) -> Frame {
    let geometry = inputs.geometry;
    let _span = tracing::trace_span!(
        "compose",
        mode = ?inputs.mode,
        sidebar = geometry.sidebar.is_some()
    )
    .entered();

    let mut lines = render_header(inputs.header.as_ref(), geometry.header, inputs.mode, styler);
    let body = render_content(&inputs.content, geometry.content);

    match geometry.sidebar {
        Some(sidebar) => {
            let slots = sidebar_slots(sidebar, inputs.sections.len());
            let side = render_sidebar(sidebar, &slots, &inputs.sections, styler);
            lines.extend(body.into_iter().zip(side).map(|(left, right)| left + &right));
        }
        None => lines.extend(body),
    }

    Frame {
        mode: inputs.mode,
        geometry,
        lines,
    }
}
