//! caption-widget: the in-place title entry embedded in diagram nodes.
//!
//! The entry owns its text, caret and focus flag. Everything around it (the
//! owning node, the side panel and the view that measures and repaints) is
//! reached through the capability traits in [`collab`].

pub mod caret_renderer;
pub mod collab;
pub mod event;
pub mod style;
pub mod title_entry;

pub use collab::{LayoutOwner, SidePanel, ViewSurface};
pub use event::{EditCommand, EventHandler, EventResult, MouseButton, MouseClickEvent};
pub use style::EntryStyle;
pub use title_entry::TitleEntry;
