// crates/core/src/aggregate.rs
use log::{debug, trace};

use crate::{categorizer::categorize_value, category::Category, mode::Mode, profile::Profile};

/// Categorizes every character of `input` and counts the result into the
/// buckets of `mode`.
///
/// ```
/// use string_analyzer_core::{Bucket, Mode, analyze};
///
/// let profile = analyze("abc 123!", Mode::Basic);
/// assert_eq!(profile.get(Bucket::Alphabet).unwrap(), 3usize);
/// assert_eq!(profile.get(Bucket::NonAlphanumeric).unwrap(), 2usize);
/// ```
#[must_use]
pub fn analyze(input: &str, mode: Mode) -> Profile {
    let profile = Profile::tally(mode, input.chars().map(|ch| traced(ch, mode.categorize(ch))));
    debug!("analyzed {} characters in {mode} mode", profile.total());
    profile
}

/// Like [`analyze`] for sequences that may contain missing values, which are
/// counted as [`Category::Null`].
pub fn analyze_values<I>(values: I, mode: Mode) -> Profile
where
    I: IntoIterator<Item = Option<char>>,
{
    let profile = Profile::tally(
        mode,
        values.into_iter().map(|value| {
            let category = categorize_value(value, mode);
            trace!("{value:?} -> {category}");
            category
        }),
    );
    debug!("analyzed {} values in {mode} mode", profile.total());
    profile
}

fn traced(ch: char, category: Category) -> Category {
    trace!("{ch:?} (U+{:04X}) -> {category}", u32::from(ch));
    category
}
