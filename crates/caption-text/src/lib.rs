//! caption-text: caret model, hit testing and input policy for single-line
//! text entries.
//!
//! Caret positions are code-point indices into the text, `0..=char_count`.

pub mod blink;
pub mod caret;
pub mod policy;

pub use blink::CaretBlink;
pub use caret::{byte_offset, char_count, clamp_caret, insert_char, remove_char};
pub use hit_test::{HitTestResult, caret_offset, hit_test};
pub use policy::can_enter;
