//! Event handling seam between the input dispatcher and editable elements.
//!
//! Platform key codes are translated into [`EditCommand`]s before they reach
//! an element, so elements only ever see semantic edits.
use caption_core::Point;

/// Result of an event handling operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was consumed and should not propagate
    Handled,
    /// Event was not consumed, the dispatcher may route it elsewhere
    Ignored,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Handled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Mouse click event data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseClickEvent {
    pub button: MouseButton,
    /// Position in viewport space
    pub position: Point,
}

impl MouseClickEvent {
    pub fn left(x: f32, y: f32) -> Self {
        Self {
            button: MouseButton::Left,
            position: Point::new(x, y),
        }
    }
}

/// Semantic single-line edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditCommand {
    MoveLeft,
    MoveRight,
    /// Backspace
    DeleteBefore,
    /// Forward delete
    DeleteAfter,
    InsertSpace,
    /// A typed character, subject to the entry's acceptance policy.
    InsertChar(char),
}

/// Unified event handler trait for interactive elements
///
/// Elements return [`EventResult`] to tell the dispatcher whether the event
/// was consumed.
pub trait EventHandler {
    /// Handle a mouse click at viewport coordinates
    fn handle_mouse_click(&mut self, event: MouseClickEvent) -> EventResult {
        let _ = event;
        EventResult::Ignored
    }

    /// Handle an edit produced by the input translation layer
    fn handle_command(&mut self, command: EditCommand) -> EventResult {
        let _ = command;
        EventResult::Ignored
    }

    /// Check if this element currently has focus
    fn is_focused(&self) -> bool {
        false
    }

    /// Set focus state for this element. Called by the focus manager only.
    fn set_focused(&mut self, focused: bool) {
        let _ = focused;
    }

    /// Check if the point in viewport coordinates is inside this element
    fn contains_point(&self, point: Point) -> bool {
        let _ = point;
        false
    }
}
