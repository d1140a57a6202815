// crates/core/src/categorizer.rs
//! Per-character classification. Rules are evaluated top to bottom and the
//! first match wins.

use unicode_categories::UnicodeCategories;

use crate::{
    category::Category,
    code_points::{self, DOLLAR_SIGN, is_numeral},
    mode::Mode,
    printable::is_printable,
};

const ASCII_MAX: u32 = 127;
const ASCII_CONTROL_MAX: u32 = 31;
const EXTENDED_ASCII_MAX: u32 = 255;

/// Coarse classification used by [`Mode::Basic`].
#[must_use]
pub fn categorize_basic(ch: char) -> Category {
    if is_numeral(ch) {
        Category::Numeric
    } else if ch.is_letter() {
        Category::Alphabet
    } else if ch.is_ascii() {
        if is_printable(ch) || u32::from(ch) == ASCII_MAX {
            Category::Ascii
        } else {
            Category::AsciiControl
        }
    } else {
        Category::Other
    }
}

/// Fine-grained classification used by [`Mode::Comprehensive`].
#[must_use]
pub fn categorize_comprehensive(ch: char) -> Category {
    if is_numeral(ch) {
        return Category::Numeric;
    }
    // letters only (L*); combining vowel signs and circled letters are not
    if ch.is_letter() {
        return if ch.is_uppercase() { Category::Alphabet } else { Category::AlphabetLower };
    }
    categorize_symbol(ch, u32::from(ch))
}

/// Comprehensive classification of a raw code point.
///
/// Surrogates and values above U+10FFFF are not characters and yield
/// [`Category::Unknown`].
#[must_use]
pub fn categorize_code_point(code_point: u32) -> Category {
    char::from_u32(code_point).map_or(Category::Unknown, categorize_comprehensive)
}

/// Classifies a possibly missing value; `None` is [`Category::Null`].
#[must_use]
pub fn categorize_value(value: Option<char>, mode: Mode) -> Category {
    value.map_or(Category::Null, |ch| mode.categorize(ch))
}

fn categorize_symbol(ch: char, code_point: u32) -> Category {
    if code_point == DOLLAR_SIGN {
        return Category::Currency;
    }
    if (ASCII_CONTROL_MAX + 1..=ASCII_MAX).contains(&code_point) {
        return Category::Ascii;
    }
    if code_point <= ASCII_CONTROL_MAX {
        return Category::AsciiControl;
    }
    if let Some(category) = code_points::lookup(code_point) {
        return category;
    }

    match (code_point <= EXTENDED_ASCII_MAX, is_printable(ch)) {
        (true, true) => Category::ExtendedAscii,
        (true, false) => Category::ExtendedAsciiNonPrintable,
        (false, true) => Category::Other,
        (false, false) => Category::OtherNonPrintable,
    }
}
