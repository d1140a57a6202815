// crates/core/src/lib.rs
//! Character categorization and aggregation.
//!
//! [`analyze`] maps every character of a string to one [`Category`] and
//! folds the categories into the [`Bucket`]s of the selected [`Mode`].
#![allow(clippy::multiple_crate_versions)]

pub mod aggregate;
pub mod bucket;
pub mod categorizer;
pub mod category;
pub mod code_points;
pub mod mode;
pub mod printable;
pub mod profile;

pub use aggregate::{analyze, analyze_values};
pub use bucket::Bucket;
pub use categorizer::{categorize_basic, categorize_code_point, categorize_comprehensive, categorize_value};
pub use category::Category;
pub use mode::Mode;
pub use printable::is_printable;
pub use profile::Profile;
pub use string_analyzer_shared_kernel::CharCount;
