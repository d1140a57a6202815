// src/output/formatters.rs
mod delimited;
mod markdown;
mod structured;
mod table;
mod text;

pub use delimited::output_delimited;
pub use markdown::output_markdown;
pub use structured::{output_json, output_yaml};
pub use table::output_table;
pub use text::output_text;
