// src/output/utils.rs
use string_analyzer_core::{Bucket, Profile};

pub(crate) fn format_ratio(profile: &Profile, bucket: Bucket) -> String {
    format!("{:.1}", profile.ratio(bucket))
}

/// Input echoed on a single line; control characters are escaped so the
/// echo cannot break the surrounding layout.
pub(crate) fn display_input(input: &str) -> String {
    let mut echoed = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_control() {
            echoed.extend(ch.escape_default());
        } else {
            echoed.push(ch);
        }
    }
    echoed
}

pub(crate) fn safe_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
