// src/app.rs
use log::info;
use string_analyzer_core::analyze;
use string_analyzer_shared_kernel::Result;

use crate::{config::Config, output};

/// Analyzes the configured input and emits the report.
pub fn run(config: &Config) -> Result<()> {
    let profile = analyze(&config.input, config.mode);
    info!("{} characters profiled in {} mode", profile.total(), profile.mode());
    output::emit(&profile, config)
}
