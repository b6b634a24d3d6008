//! Font measurement capability.
//!
//! Widgets never reach for a global graphics context: they are handed a
//! [`TextMeasure`] and query string width, line height and descent through it.

use std::path::Path;

use thiserror::Error;

/// Immutable per-widget font selection.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Face family name. Measurers backed by a single face ignore it.
    pub family: String,
    /// Font size in logical pixels (px per em).
    pub size_px: f32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size_px: f32) -> Self {
        Self {
            family: family.into(),
            size_px,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Arial", 18.0)
    }
}

/// Scaled line metrics in pixels. `descent` is a positive magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
}

impl LineMetrics {
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }
}

/// String measurement under a given font.
pub trait TextMeasure {
    /// Advance width of `text` in pixels.
    fn measure_width(&self, text: &str, font: &FontSpec) -> f32;

    /// Rendered line height of `text` in pixels.
    fn measure_height(&self, text: &str, font: &FontSpec) -> f32;

    /// Distance from the baseline to the bottom of the line, in pixels.
    fn measure_descent(&self, text: &str, font: &FontSpec) -> f32;
}

#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("font I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid font data: {0}")]
    InvalidFont(String),
}

/// Measurer where every code point advances by the same amount.
///
/// All values are fractions of the em size, so the same measurer serves any
/// `FontSpec::size_px`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMeasure {
    pub advance_em: f32,
    pub ascent_em: f32,
    pub descent_em: f32,
}

impl FixedAdvanceMeasure {
    pub fn new(advance_em: f32, ascent_em: f32, descent_em: f32) -> Self {
        Self {
            advance_em,
            ascent_em,
            descent_em,
        }
    }

    fn metrics(&self, font: &FontSpec) -> LineMetrics {
        LineMetrics {
            ascent: self.ascent_em * font.size_px,
            descent: self.descent_em * font.size_px,
            line_gap: 0.0,
        }
    }
}

impl Default for FixedAdvanceMeasure {
    fn default() -> Self {
        // Rough proportions of a sans-serif face.
        Self::new(0.55, 0.8, 0.2)
    }
}

impl TextMeasure for FixedAdvanceMeasure {
    fn measure_width(&self, text: &str, font: &FontSpec) -> f32 {
        text.chars().count() as f32 * self.advance_em * font.size_px
    }

    fn measure_height(&self, _text: &str, font: &FontSpec) -> f32 {
        self.metrics(font).line_height()
    }

    fn measure_descent(&self, _text: &str, font: &FontSpec) -> f32 {
        self.metrics(font).descent
    }
}

/// Measurer backed by a single `fontdue` face.
pub struct FontdueMeasure {
    font: fontdue::Font,
}

impl FontdueMeasure {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MeasureError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| MeasureError::InvalidFont(e.to_string()))?;
        Ok(Self { font })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MeasureError> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_bytes(&bytes)
    }

    pub fn line_metrics(&self, px: f32) -> Option<LineMetrics> {
        self.font.horizontal_line_metrics(px).map(|lm| LineMetrics {
            ascent: lm.ascent,
            // fontdue reports descent as a negative number.
            descent: lm.descent.abs(),
            line_gap: lm.line_gap.max(0.0),
        })
    }
}

impl TextMeasure for FontdueMeasure {
    fn measure_width(&self, text: &str, font: &FontSpec) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, font.size_px).advance_width)
            .sum()
    }

    fn measure_height(&self, _text: &str, font: &FontSpec) -> f32 {
        self.line_metrics(font.size_px)
            .map(|m| m.line_height())
            .unwrap_or(font.size_px)
    }

    fn measure_descent(&self, _text: &str, font: &FontSpec) -> f32 {
        self.line_metrics(font.size_px)
            .map(|m| m.descent)
            .unwrap_or(font.size_px * 0.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_advance_scales_with_font_size() {
        let m = FixedAdvanceMeasure::new(0.5, 0.8, 0.2);
        let font = FontSpec::new("Mono", 20.0);
        assert_eq!(m.measure_width("abc", &font), 30.0);
        assert_eq!(m.measure_width("", &font), 0.0);
        assert_eq!(m.measure_height("abc", &font), 20.0);
        assert_eq!(m.measure_descent("abc", &font), 4.0);
    }

    #[test]
    fn fixed_advance_counts_code_points_not_bytes() {
        let m = FixedAdvanceMeasure::new(1.0, 1.0, 0.0);
        let font = FontSpec::new("Mono", 10.0);
        assert_eq!(m.measure_width("héllo", &font), 50.0);
    }

    #[test]
    fn fontdue_rejects_garbage() {
        let err = FontdueMeasure::from_bytes(b"definitely not a font").err();
        assert!(matches!(err, Some(MeasureError::InvalidFont(_))));
    }

    #[test]
    fn fontdue_missing_file_is_io_error() {
        let err = FontdueMeasure::from_path("/nonexistent/caption-font.ttf").err();
        assert!(matches!(err, Some(MeasureError::Io(_))));
    }

    #[test]
    fn default_font_spec() {
        let f = FontSpec::default();
        assert_eq!(f.family, "Arial");
        assert_eq!(f.size_px, 18.0);
    }
}
