use caption_core::{ColorLinPremul, Painter, Point, Rect};
use caption_text::CaretBlink;

/// Configuration for rendering the text caret.
pub struct CaretRenderConfig {
    /// Top of the caret, in viewport space
    pub origin: Point,
    /// Line height of the rendered text
    pub height: f32,
    /// Caret width in pixels
    pub width: f32,
    pub color: ColorLinPremul,
    /// Z-index for drawing
    pub z: i32,
}

/// Draw the caret as a thin filled bar, unless it is in the hidden blink phase.
pub fn render_caret(painter: &mut Painter, caret_blink: &CaretBlink, config: &CaretRenderConfig) {
    if !caret_blink.is_visible() {
        return;
    }

    let rect = Rect {
        x: config.origin.x,
        y: config.origin.y,
        w: config.width,
        h: config.height,
    };
    painter.rect(rect, config.color, config.z);
}
