//! Capabilities the title entry needs from its surroundings.
//!
//! Each trait exposes only what the entry calls. Notifications are one-way:
//! implementors must not call back into the entry while handling them.
use caption_core::{Size, TextMeasure};

/// The node that lays out around the entry.
pub trait LayoutOwner {
    /// The entry's measured size changed; recompute the owner's layout.
    fn recalculate_size(&self, child: Size);
}

/// Read-only panel mirroring the selected node's state.
pub trait SidePanel {
    fn update_node_panel(&self);
}

/// The view hosting the entry: measures text and schedules frames.
pub trait ViewSurface: TextMeasure {
    fn request_repaint(&self);
}
