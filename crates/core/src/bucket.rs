// crates/core/src/bucket.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use string_analyzer_shared_kernel::{DomainError, DomainResult};

/// Named aggregate reported to the caller.
///
/// Declaration order is reporting order; both bucket schemes list their
/// buckets as a subsequence of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Numeric,
    Alphabet,
    LowerLetter,
    UpperLetter,
    NonAlphanumeric,
    Ascii,
    ExtendedAscii,
    /// Latin-1 letters from the curated tables. Always zero from
    /// [`analyze`](crate::analyze), whose letter test claims them first;
    /// only [`Profile::tally`](crate::Profile::tally) over a hand-built
    /// category stream fills it.
    ExtendedAlphabet,
    Symbols,
    Other,
}

impl Bucket {
    pub const ALL: [Self; 10] = [
        Self::Numeric,
        Self::Alphabet,
        Self::LowerLetter,
        Self::UpperLetter,
        Self::NonAlphanumeric,
        Self::Ascii,
        Self::ExtendedAscii,
        Self::ExtendedAlphabet,
        Self::Symbols,
        Self::Other,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Alphabet => "alphabet",
            Self::LowerLetter => "lower_letter",
            Self::UpperLetter => "upper_letter",
            Self::NonAlphanumeric => "non_alphanumeric",
            Self::Ascii => "ascii",
            Self::ExtendedAscii => "extended_ascii",
            Self::ExtendedAlphabet => "extended_alphabet",
            Self::Symbols => "symbols",
            Self::Other => "other",
        }
    }

    pub fn from_name(name: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|bucket| bucket.name() == name)
            .ok_or_else(|| DomainError::UnknownBucket { name: name.to_string() })
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Bucket {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
