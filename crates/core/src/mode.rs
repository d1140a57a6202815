// crates/core/src/mode.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    bucket::Bucket,
    categorizer::{categorize_basic, categorize_comprehensive},
    category::Category,
};

/// Selects the categorizer and the bucket scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// `numeric`, `alphabet`, `non_alphanumeric`, `other`.
    #[default]
    Basic,
    /// Splits letters by case and non-alphanumerics by origin.
    Comprehensive,
}

const BASIC_BUCKETS: &[Bucket] = &[Bucket::Numeric, Bucket::Alphabet, Bucket::NonAlphanumeric, Bucket::Other];

const COMPREHENSIVE_BUCKETS: &[Bucket] = &[
    Bucket::Numeric,
    Bucket::LowerLetter,
    Bucket::UpperLetter,
    Bucket::Ascii,
    Bucket::ExtendedAscii,
    Bucket::ExtendedAlphabet,
    Bucket::Symbols,
    Bucket::Other,
];

impl Mode {
    #[must_use]
    pub const fn from_comprehensive(comprehensive: bool) -> Self {
        if comprehensive { Self::Comprehensive } else { Self::Basic }
    }

    #[must_use]
    pub fn categorize(self, ch: char) -> Category {
        match self {
            Self::Basic => categorize_basic(ch),
            Self::Comprehensive => categorize_comprehensive(ch),
        }
    }

    /// Buckets reported by this mode, in reporting order.
    #[must_use]
    pub const fn buckets(self) -> &'static [Bucket] {
        match self {
            Self::Basic => BASIC_BUCKETS,
            Self::Comprehensive => COMPREHENSIVE_BUCKETS,
        }
    }

    /// Bucket a category is counted under. Total over every category, so any
    /// category stream partitions into this mode's buckets.
    #[must_use]
    pub const fn bucket_for(self, category: Category) -> Bucket {
        match self {
            Self::Basic => match category {
                Category::Numeric => Bucket::Numeric,
                Category::Alphabet | Category::AlphabetLower | Category::LatinLower | Category::LatinUpper => {
                    Bucket::Alphabet
                }
                Category::Ascii => Bucket::NonAlphanumeric,
                Category::Null
                | Category::AsciiControl
                | Category::ExtendedAscii
                | Category::ExtendedAsciiNonPrintable
                | Category::Other
                | Category::OtherNonPrintable
                | Category::Currency
                | Category::Math
                | Category::Unknown => Bucket::Other,
            },
            Self::Comprehensive => match category {
                Category::Numeric => Bucket::Numeric,
                Category::AlphabetLower => Bucket::LowerLetter,
                Category::Alphabet => Bucket::UpperLetter,
                Category::Ascii => Bucket::Ascii,
                Category::ExtendedAscii => Bucket::ExtendedAscii,
                Category::LatinLower | Category::LatinUpper => Bucket::ExtendedAlphabet,
                Category::Currency | Category::Math => Bucket::Symbols,
                Category::Null
                | Category::AsciiControl
                | Category::ExtendedAsciiNonPrintable
                | Category::Other
                | Category::OtherNonPrintable
                | Category::Unknown => Bucket::Other,
            },
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Comprehensive => "comprehensive",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
