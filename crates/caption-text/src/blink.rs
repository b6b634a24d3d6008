/// Caret blink state for editable controls.
///
/// Controls should:
/// - call `update` each frame with `delta_time` and current focus state
/// - call `reset_manual` after edits (typing, caret moves)
#[derive(Clone, Copy, Debug)]
pub struct CaretBlink {
    visible: bool,
    enabled: bool,
    blink_time: f32,
    blink_interval: f32,
    was_focused: bool,
}

impl CaretBlink {
    pub fn new(blink_interval: f32) -> Self {
        Self {
            visible: false,
            enabled: true,
            blink_time: 0.0,
            blink_interval: blink_interval.max(0.1),
            was_focused: false,
        }
    }

    /// A caret that stays solid while focused.
    pub fn steady() -> Self {
        Self {
            enabled: false,
            ..Self::new(0.5)
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn blink_interval(&self) -> f32 {
        self.blink_interval
    }

    /// Advance the blink timer and handle focus transitions.
    /// Returns true when visibility changed.
    pub fn update(&mut self, delta_time: f32, focused: bool) -> bool {
        let before = self.visible;

        if focused && !self.was_focused {
            self.visible = true;
            self.blink_time = 0.0;
        } else if !focused && self.was_focused {
            self.visible = false;
            self.blink_time = 0.0;
        }
        self.was_focused = focused;

        if focused && self.enabled {
            self.blink_time += delta_time;
            while self.blink_time >= self.blink_interval {
                self.blink_time -= self.blink_interval;
                self.visible = !self.visible;
            }
        }

        before != self.visible
    }

    /// Make caret visible and reset blink phase (call after edits).
    pub fn reset_manual(&mut self) {
        self.visible = true;
        self.blink_time = 0.0;
    }
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self::new(0.5)
    }
}
