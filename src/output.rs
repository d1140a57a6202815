// src/output.rs
pub mod formatters;
mod utils;
mod writer;

use formatters::{output_delimited, output_json, output_markdown, output_table, output_text, output_yaml};
use string_analyzer_core::Profile;
use string_analyzer_shared_kernel::{ErrorContext, Result};

use crate::{config::Config, options::OutputFormat};

/// Emit the profile in the configured output format.
pub fn emit(profile: &Profile, config: &Config) -> Result<()> {
    let mut writer = writer::OutputWriter::create(config)?;
    render(profile, config, &mut writer)?;
    writer.finish().context("flushing output")
}

/// Render the profile into any writer.
pub fn render(profile: &Profile, config: &Config, out: &mut impl std::io::Write) -> Result<()> {
    match config.format {
        OutputFormat::Text => output_text(profile, config, out),
        OutputFormat::Table => output_table(profile, config, out),
        OutputFormat::Json => output_json(profile, config, out),
        OutputFormat::Yaml => output_yaml(profile, config, out),
        OutputFormat::Csv => output_delimited(profile, config, ',', out),
        OutputFormat::Tsv => output_delimited(profile, config, '\t', out),
        OutputFormat::Md => output_markdown(profile, config, out),
    }
}
