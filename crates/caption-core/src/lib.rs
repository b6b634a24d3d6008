//! caption-core: geometry, colors, recorded draw commands and font measurement
//! shared by the caption editing crates.

pub mod color;
pub mod display_list;
pub mod painter;
pub mod scene;
pub mod text;

pub use display_list::{Command, DisplayList};
pub use painter::Painter;
pub use scene::{Color, ColorLinPremul, Point, Rect, Size, TextRun};
pub use text::{FixedAdvanceMeasure, FontSpec, FontdueMeasure, LineMetrics, MeasureError, TextMeasure};
