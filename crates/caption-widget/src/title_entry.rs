use std::rc::{Rc, Weak};

use caption_core::{Painter, Point, Rect, Size, TextRun};
use caption_text::{CaretBlink, can_enter, caret_offset, char_count, clamp_caret, hit_test, insert_char, remove_char};
use log::{debug, trace};

use crate::caret_renderer::{CaretRenderConfig, render_caret};
use crate::collab::{LayoutOwner, SidePanel, ViewSurface};
use crate::event::{EditCommand, EventHandler, EventResult, MouseButton, MouseClickEvent};
use crate::style::EntryStyle;

const TEXT_Z: i32 = 0;
const CARET_Z: i32 = 1;

/// Single-line, caret-based title editor living inside a diagram node.
///
/// Edits are accepted only while focused. After every accepted edit the entry
/// re-measures itself, tells its owner the new size, asks the view for a
/// repaint and refreshes the side panel, in that order.
pub struct TitleEntry {
    text: String,
    /// Code-point index, always within `0..=char_count(text)`.
    caret: usize,
    focused: bool,
    position: Point,
    size: Size,
    blink: CaretBlink,
    style: EntryStyle,
    owner: Weak<dyn LayoutOwner>,
    panel: Rc<dyn SidePanel>,
    view: Rc<dyn ViewSurface>,
}

impl TitleEntry {
    pub fn new(
        owner: Weak<dyn LayoutOwner>,
        panel: Rc<dyn SidePanel>,
        view: Rc<dyn ViewSurface>,
        style: EntryStyle,
    ) -> Self {
        let blink = style.caret_blink_state();
        let mut entry = Self {
            text: String::new(),
            caret: 0,
            focused: false,
            position: Point::zero(),
            size: Size::default(),
            blink,
            style,
            owner,
            panel,
            view,
        };
        entry.recalculate_size();
        entry
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret_index(&self) -> usize {
        self.caret
    }

    pub fn style(&self) -> &EntryStyle {
        &self.style
    }

    /// Size cached by the last `recalculate_size`.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Placed by the owner's layout pass.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    pub fn caret_visible(&self) -> bool {
        self.focused && self.blink.is_visible()
    }

    /// Replace the whole text, keeping the caret in range.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.caret.min(char_count(&self.text));
        self.commit_layout();
    }

    pub fn gain_focus(&mut self) {
        debug!("title entry gained focus");
        self.focused = true;
        self.blink.update(0.0, true);
    }

    pub fn lose_focus(&mut self) {
        debug!("title entry lost focus");
        self.focused = false;
        self.blink.update(0.0, false);
    }

    /// Measure the current text (or the placeholder when empty) and never go
    /// below the placeholder's own size.
    pub fn recalculate_size(&mut self) -> Size {
        let font = &self.style.font;
        let view = &*self.view;
        let shown = if self.text.is_empty() {
            self.style.placeholder.as_str()
        } else {
            self.text.as_str()
        };
        let content = Size::new(view.measure_width(shown, font), view.measure_height(shown, font));
        let placeholder = &self.style.placeholder;
        let floor = Size::new(
            view.measure_width(placeholder, font),
            view.measure_height(placeholder, font),
        );
        self.size = content.max(floor);
        self.size
    }

    /// Top of the caret in viewport space.
    pub fn caret_position(&self) -> Point {
        let bounds = self.bounds();
        let dx = caret_offset(&self.text, self.caret, &*self.view, &self.style.font);
        Point::new(bounds.x + dx, bounds.y)
    }

    /// Caret index nearest to a viewport-space point.
    pub fn hit_test(&self, point: Point) -> usize {
        let x_offset = point.x - self.bounds().x;
        hit_test(&self.text, x_offset, &*self.view, &self.style.font).index
    }

    /// Move the caret under a click. The text is left untouched.
    pub fn click(&mut self, point: Point) -> EventResult {
        if !self.focused {
            debug!("click ignored, title entry is not focused");
            return EventResult::Ignored;
        }
        self.caret = self.hit_test(point);
        trace!("caret moved to {} by click", self.caret);
        self.blink.reset_manual();
        self.view.request_repaint();
        EventResult::Handled
    }

    /// Apply one edit. Rejected characters and edits while unfocused report
    /// `Ignored` and change nothing.
    pub fn apply(&mut self, command: EditCommand) -> EventResult {
        if !self.focused {
            debug!("{command:?} ignored, title entry is not focused");
            return EventResult::Ignored;
        }

        let mut caret = self.caret as isize;
        match command {
            EditCommand::MoveLeft => caret -= 1,
            EditCommand::MoveRight => caret += 1,
            EditCommand::DeleteBefore => {
                if self.caret >= 1 {
                    remove_char(&mut self.text, self.caret - 1);
                    caret -= 1;
                }
            }
            EditCommand::DeleteAfter => {
                remove_char(&mut self.text, self.caret);
            }
            EditCommand::InsertSpace => {
                insert_char(&mut self.text, self.caret, ' ');
                caret += 1;
            }
            EditCommand::InsertChar(ch) => {
                if !can_enter(ch) {
                    debug!("rejected character {ch:?}");
                    return EventResult::Ignored;
                }
                insert_char(&mut self.text, self.caret, ch);
                caret += 1;
            }
        }
        self.caret = clamp_caret(&self.text, caret);
        trace!("{command:?} -> {:?} caret {}", self.text, self.caret);

        self.blink.reset_manual();
        self.commit_layout();
        self.panel.update_node_panel();
        EventResult::Handled
    }

    /// Advance the caret blink; schedules a frame when the caret flips.
    pub fn tick(&mut self, delta_time: f32) {
        if self.blink.update(delta_time, self.focused) {
            self.view.request_repaint();
        }
    }

    /// Draw the text (or the muted placeholder) with its baseline one descent
    /// above the bottom of the bounds, plus the caret while focused.
    pub fn paint(&self, painter: &mut Painter) {
        let bounds = self.bounds();
        let font = &self.style.font;
        let view = &*self.view;

        let baseline = bounds.y + bounds.h - view.measure_descent(&self.text, font);
        let (text, color) = if self.text.is_empty() {
            (self.style.placeholder.clone(), self.style.placeholder_color)
        } else {
            (self.text.clone(), self.style.text_color)
        };
        painter.text(
            TextRun {
                text,
                pos: [bounds.x, baseline],
                size: font.size_px,
                color,
            },
            TEXT_Z,
        );

        if self.focused {
            let config = CaretRenderConfig {
                origin: self.caret_position(),
                height: view.measure_height(&self.text, font),
                width: self.style.caret_width,
                color: self.style.caret_color,
                z: CARET_Z,
            };
            render_caret(painter, &self.blink, &config);
        }
    }

    fn commit_layout(&mut self) {
        let size = self.recalculate_size();
        match self.owner.upgrade() {
            Some(owner) => owner.recalculate_size(size),
            None => debug!("owning node dropped, skipping relayout"),
        }
        self.view.request_repaint();
    }
}

impl EventHandler for TitleEntry {
    fn handle_mouse_click(&mut self, event: MouseClickEvent) -> EventResult {
        if event.button != MouseButton::Left {
            return EventResult::Ignored;
        }
        self.click(event.position)
    }

    fn handle_command(&mut self, command: EditCommand) -> EventResult {
        self.apply(command)
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        if focused {
            self.gain_focus();
        } else {
            self.lose_focus();
        }
    }

    fn contains_point(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caption_core::{FixedAdvanceMeasure, FontSpec, TextMeasure};
    use std::cell::Cell;

    struct View {
        measure: FixedAdvanceMeasure,
        repaints: Cell<usize>,
    }

    impl TextMeasure for View {
        fn measure_width(&self, text: &str, font: &FontSpec) -> f32 {
            self.measure.measure_width(text, font)
        }
        fn measure_height(&self, text: &str, font: &FontSpec) -> f32 {
            self.measure.measure_height(text, font)
        }
        fn measure_descent(&self, text: &str, font: &FontSpec) -> f32 {
            self.measure.measure_descent(text, font)
        }
    }

    impl ViewSurface for View {
        fn request_repaint(&self) {
            self.repaints.set(self.repaints.get() + 1);
        }
    }

    struct Quiet;

    impl SidePanel for Quiet {
        fn update_node_panel(&self) {}
    }

    impl LayoutOwner for Quiet {
        fn recalculate_size(&self, _child: Size) {}
    }

    /// 10px per character, line height 10, descent 2.
    fn entry(owner: &Rc<Quiet>) -> (TitleEntry, Rc<View>) {
        let view = Rc::new(View {
            measure: FixedAdvanceMeasure::new(1.0, 0.8, 0.2),
            repaints: Cell::new(0),
        });
        let style = EntryStyle {
            font: FontSpec::new("Mono", 10.0),
            ..EntryStyle::default()
        };
        let weak: Weak<Quiet> = Rc::downgrade(owner);
        let entry = TitleEntry::new(weak, Rc::new(Quiet), view.clone(), style);
        (entry, view)
    }

    #[test]
    fn new_entry_is_empty_unfocused_and_placeholder_sized() {
        let owner = Rc::new(Quiet);
        let (entry, _) = entry(&owner);
        assert_eq!(entry.text(), "");
        assert_eq!(entry.caret_index(), 0);
        assert!(!entry.is_focused());
        assert_eq!(entry.size(), Size::new(50.0, 10.0));
    }

    #[test]
    fn paint_placeholder_muted_without_caret() {
        let owner = Rc::new(Quiet);
        let (mut entry, _) = entry(&owner);
        entry.set_position(Point::new(100.0, 40.0));

        let mut painter = Painter::begin_frame();
        entry.paint(&mut painter);
        let list = painter.finish();

        let runs: Vec<_> = list.text_runs().collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "TITLE");
        assert_eq!(runs[0].color, entry.style().placeholder_color);
        assert_eq!(runs[0].pos, [100.0, 48.0]);
        assert_eq!(list.rects().count(), 0);
    }

    #[test]
    fn paint_text_and_caret_when_focused() {
        let owner = Rc::new(Quiet);
        let (mut entry, _) = entry(&owner);
        entry.set_position(Point::new(100.0, 40.0));
        entry.gain_focus();
        entry.set_text("hello");
        entry.apply(EditCommand::MoveRight);
        entry.apply(EditCommand::MoveRight);

        let mut painter = Painter::begin_frame();
        entry.paint(&mut painter);
        let list = painter.finish();

        let run = list.text_runs().next().unwrap();
        assert_eq!(run.text, "hello");
        assert_eq!(run.color, entry.style().text_color);

        let (caret, color) = list.rects().next().unwrap();
        assert_eq!(*caret, Rect { x: 120.0, y: 40.0, w: 1.0, h: 10.0 });
        assert_eq!(*color, entry.style().caret_color);
    }

    #[test]
    fn caret_hidden_during_blink_off_phase() {
        let owner = Rc::new(Quiet);
        let (mut entry, view) = entry(&owner);
        entry.gain_focus();
        let before = view.repaints.get();
        entry.tick(0.5);
        assert!(!entry.caret_visible());
        assert_eq!(view.repaints.get(), before + 1);

        let mut painter = Painter::begin_frame();
        entry.paint(&mut painter);
        assert_eq!(painter.finish().rects().count(), 0);

        entry.apply(EditCommand::InsertChar('x'));
        assert!(entry.caret_visible());
    }

    #[test]
    fn set_text_clamps_caret() {
        let owner = Rc::new(Quiet);
        let (mut entry, _) = entry(&owner);
        entry.gain_focus();
        entry.set_text("abcdef");
        for _ in 0..6 {
            entry.apply(EditCommand::MoveRight);
        }
        assert_eq!(entry.caret_index(), 6);
        entry.set_text("ab");
        assert_eq!(entry.caret_index(), 2);
    }

    #[test]
    fn contains_point_uses_bounds() {
        let owner = Rc::new(Quiet);
        let (mut entry, _) = entry(&owner);
        entry.set_position(Point::new(10.0, 10.0));
        assert!(entry.contains_point(Point::new(59.0, 19.0)));
        assert!(!entry.contains_point(Point::new(61.0, 15.0)));
    }

    #[test]
    fn only_left_clicks_are_handled() {
        let owner = Rc::new(Quiet);
        let (mut entry, _) = entry(&owner);
        entry.gain_focus();
        entry.set_text("abc");
        let right = MouseClickEvent {
            button: MouseButton::Right,
            position: Point::new(0.0, 0.0),
        };
        assert_eq!(entry.handle_mouse_click(right), EventResult::Ignored);
        assert_eq!(entry.handle_mouse_click(MouseClickEvent::left(16.0, 2.0)), EventResult::Handled);
        assert_eq!(entry.caret_index(), 2);
    }

    #[test]
    fn dropped_owner_does_not_stop_edits() {
        let owner = Rc::new(Quiet);
        let (mut entry, _) = entry(&owner);
        drop(owner);
        entry.gain_focus();
        assert_eq!(entry.apply(EditCommand::InsertChar('a')), EventResult::Handled);
        assert_eq!(entry.text(), "a");
    }
}
