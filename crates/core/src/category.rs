// crates/core/src/category.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use string_analyzer_shared_kernel::{DomainError, DomainResult};

/// Category assigned to a single character.
///
/// Each variant carries a stable numeric code (see [`Category::code`]).
/// Codes 14 to 98 are free for further curated tables; 99 is reserved for
/// [`Category::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Missing value in a sequence of optional characters.
    Null,
    Numeric,
    /// Any letter in basic mode; an upper-case letter in comprehensive mode.
    Alphabet,
    AlphabetLower,
    /// Printable ASCII (32-126) and DEL (127).
    Ascii,
    /// ASCII control codes 0-31.
    AsciiControl,
    ExtendedAscii,
    ExtendedAsciiNonPrintable,
    Other,
    OtherNonPrintable,
    Currency,
    LatinLower,
    LatinUpper,
    Math,
    /// The code point could not be turned into a character.
    Unknown,
}

impl Category {
    pub const ALL: [Self; 15] = [
        Self::Null,
        Self::Numeric,
        Self::Alphabet,
        Self::AlphabetLower,
        Self::Ascii,
        Self::AsciiControl,
        Self::ExtendedAscii,
        Self::ExtendedAsciiNonPrintable,
        Self::Other,
        Self::OtherNonPrintable,
        Self::Currency,
        Self::LatinLower,
        Self::LatinUpper,
        Self::Math,
        Self::Unknown,
    ];

    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Numeric => 1,
            Self::Alphabet => 2,
            Self::AlphabetLower => 3,
            Self::Ascii => 4,
            Self::AsciiControl => 5,
            Self::ExtendedAscii => 6,
            Self::ExtendedAsciiNonPrintable => 7,
            Self::Other => 8,
            Self::OtherNonPrintable => 9,
            Self::Currency => 10,
            Self::LatinLower => 11,
            Self::LatinUpper => 12,
            Self::Math => 13,
            Self::Unknown => 99,
        }
    }

    /// Inverse of [`Category::code`].
    pub fn from_code(code: u8) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.code() == code)
            .ok_or(DomainError::UnknownCategoryCode { code })
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Numeric => "numeric",
            Self::Alphabet => "alphabet",
            Self::AlphabetLower => "alphabet_lower",
            Self::Ascii => "ascii",
            Self::AsciiControl => "ascii_control",
            Self::ExtendedAscii => "extended_ascii",
            Self::ExtendedAsciiNonPrintable => "extended_ascii_non_printable",
            Self::Other => "other",
            Self::OtherNonPrintable => "other_non_printable",
            Self::Currency => "currency",
            Self::LatinLower => "latin_lower",
            Self::LatinUpper => "latin_upper",
            Self::Math => "math",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
