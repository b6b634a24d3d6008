use unicode_general_category::{GeneralCategory, get_general_category};

/// Whether a typed character may be inserted into a title entry.
///
/// Accepts alphabetic letters, decimal digits of any script (general
/// category Nd) and `.`, `,`, `-`. Space is not accepted here; it arrives as
/// its own edit command.
pub fn can_enter(ch: char) -> bool {
    ch.is_alphabetic() || is_decimal_digit(ch) || matches!(ch, '.' | ',' | '-')
}

fn is_decimal_digit(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::DecimalNumber
}
