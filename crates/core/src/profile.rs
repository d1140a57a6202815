// crates/core/src/profile.rs
use std::collections::BTreeMap;

use serde::Serialize;
use string_analyzer_shared_kernel::{CharCount, DomainResult};

use crate::{bucket::Bucket, category::Category, mode::Mode};

/// Per-bucket character counts for one input.
///
/// Every bucket of the mode's scheme is present, zero or not, and the counts
/// add up to the number of characters tallied. Serializes as a flat
/// `{ bucket: count }` map in reporting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Profile {
    counts: BTreeMap<Bucket, CharCount>,
    #[serde(skip)]
    mode: Mode,
    #[serde(skip)]
    categories: BTreeMap<Category, CharCount>,
}

impl Profile {
    /// All buckets of `mode` at zero.
    #[must_use]
    pub fn empty(mode: Mode) -> Self {
        let counts = mode.buckets().iter().map(|&bucket| (bucket, CharCount::ZERO)).collect();
        Self { counts, mode, categories: BTreeMap::new() }
    }

    /// Counts an already categorized stream into `mode`'s buckets.
    pub fn tally<I>(mode: Mode, categories: I) -> Self
    where
        I: IntoIterator<Item = Category>,
    {
        let mut profile = Self::empty(mode);
        for category in categories {
            profile.record(category);
        }
        profile
    }

    fn record(&mut self, category: Category) {
        let per_category = self.categories.entry(category).or_default();
        *per_category = per_category.saturating_add(1);

        let bucket = self.mode.bucket_for(category);
        let per_bucket = self.counts.entry(bucket).or_default();
        *per_bucket = per_bucket.saturating_add(1);
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Count for `bucket`, or `None` when the bucket is not part of this
    /// profile's scheme.
    #[must_use]
    pub fn get(&self, bucket: Bucket) -> Option<CharCount> {
        self.counts.get(&bucket).copied()
    }

    /// Count looked up by bucket name, e.g. `"non_alphanumeric"`.
    pub fn count(&self, name: &str) -> DomainResult<Option<usize>> {
        let bucket = Bucket::from_name(name)?;
        Ok(self.get(bucket).map(usize::from))
    }

    /// Number of characters tallied.
    #[must_use]
    pub fn total(&self) -> CharCount {
        self.counts.values().sum()
    }

    /// Share of the total held by `bucket`, as a percentage.
    #[must_use]
    pub fn ratio(&self, bucket: Bucket) -> f64 {
        self.get(bucket).unwrap_or_default().percent_of(self.total())
    }

    /// Buckets and their counts in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, CharCount)> + '_ {
        self.counts.iter().map(|(&bucket, &count)| (bucket, count))
    }

    /// Raw per-category frequencies behind the bucket counts. Only
    /// categories that occurred are listed.
    #[must_use]
    pub const fn categories(&self) -> &BTreeMap<Category, CharCount> {
        &self.categories
    }

    /// Bucket names mapped to plain counts.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, usize> {
        self.iter().map(|(bucket, count)| (bucket.name(), count.value())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_lists_every_bucket() {
        let profile = Profile::empty(Mode::Comprehensive);
        let buckets: Vec<_> = profile.iter().map(|(bucket, _)| bucket).collect();
        assert_eq!(buckets, Mode::Comprehensive.buckets());
        assert!(profile.total().is_zero());
        assert!(profile.categories().is_empty());
    }

    #[test]
    fn tally_groups_categories() {
        let profile = Profile::tally(
            Mode::Comprehensive,
            [Category::Currency, Category::Math, Category::LatinUpper, Category::Unknown, Category::Null],
        );
        assert_eq!(profile.get(Bucket::Symbols), Some(CharCount::from(2)));
        assert_eq!(profile.get(Bucket::ExtendedAlphabet), Some(CharCount::from(1)));
        assert_eq!(profile.get(Bucket::Other), Some(CharCount::from(2)));
        assert_eq!(profile.total(), 5usize);
        assert_eq!(profile.categories()[&Category::Unknown], 1usize);
    }

    #[test]
    fn buckets_outside_the_scheme_are_absent() {
        let profile = Profile::empty(Mode::Basic);
        assert_eq!(profile.get(Bucket::Symbols), None);
        assert_eq!(profile.count("symbols").unwrap(), None);
        assert!(profile.count("bogus").is_err());
    }

    #[test]
    fn ratio_of_empty_profile_is_zero() {
        let profile = Profile::empty(Mode::Basic);
        assert!(profile.ratio(Bucket::Numeric).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_as_flat_map_in_reporting_order() {
        let profile = Profile::tally(Mode::Basic, [Category::Numeric, Category::Ascii]);
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"numeric":1,"alphabet":0,"non_alphanumeric":1,"other":0}"#);
    }
}
