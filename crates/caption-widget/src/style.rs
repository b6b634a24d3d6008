use caption_config::CaptionConfig;
use caption_core::{Color, FontSpec};
use caption_text::CaretBlink;

/// Rendering parameters fixed for the lifetime of an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryStyle {
    pub font: FontSpec,
    pub placeholder: String,
    pub text_color: Color,
    pub placeholder_color: Color,
    pub caret_color: Color,
    pub caret_width: f32,
    pub caret_blink: bool,
    pub blink_interval: f32,
}

impl EntryStyle {
    pub fn caret_blink_state(&self) -> CaretBlink {
        if self.caret_blink {
            CaretBlink::new(self.blink_interval)
        } else {
            CaretBlink::steady()
        }
    }
}

impl Default for EntryStyle {
    fn default() -> Self {
        Self::from(&CaptionConfig::default())
    }
}

impl From<&CaptionConfig> for EntryStyle {
    fn from(config: &CaptionConfig) -> Self {
        let entry = &config.entry;
        Self {
            font: FontSpec::new(config.font.family.clone(), config.font.size_px),
            placeholder: entry.placeholder.clone(),
            text_color: Color::from_srgba_u8(entry.text_color),
            placeholder_color: Color::from_srgba_u8(entry.placeholder_color),
            caret_color: Color::from_srgba_u8(entry.caret_color),
            caret_width: entry.caret_width,
            caret_blink: entry.caret_blink,
            blink_interval: entry.blink_interval,
        }
    }
}
