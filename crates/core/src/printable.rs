// crates/core/src/printable.rs
use unicode_categories::UnicodeCategories;

/// Whether `ch` renders as a visible glyph.
///
/// Control (Cc), format (Cf), private-use (Co), separator (Zs, Zl, Zp) and
/// unassigned code points are not printable. U+0020 SPACE is the one
/// separator that is.
///
/// Category data comes from `unicode_categories`, whose tables stop at
/// Unicode 9. Characters assigned later (newer emoji among them) read as
/// unassigned here, so they are reported as non-printable.
#[must_use]
pub fn is_printable(ch: char) -> bool {
    if ch == ' ' {
        return true;
    }
    !(ch.is_other_control()
        || ch.is_other_format()
        || ch.is_other_private_use()
        || ch.is_separator()
        || is_unassigned(ch))
}

fn is_unassigned(ch: char) -> bool {
    !(ch.is_letter()
        || ch.is_mark()
        || ch.is_number()
        || ch.is_punctuation()
        || ch.is_symbol()
        || ch.is_separator()
        || ch.is_other_control()
        || ch.is_other_format()
        || ch.is_other_private_use())
}
