// src/options.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// `input_string: ...` followed by `{bucket: count, ...}`.
    #[default]
    Text,
    Table,
    Json,
    Yaml,
    Csv,
    Tsv,
    Md,
}
