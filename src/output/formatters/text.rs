// src/output/formatters/text.rs
use std::io::Write;

use string_analyzer_core::Profile;
use string_analyzer_shared_kernel::Result;

use crate::{config::Config, output::utils::display_input};

pub fn output_text(profile: &Profile, config: &Config, out: &mut impl Write) -> Result<()> {
    if config.echo_input {
        writeln!(out, "input_string: {}", display_input(&config.input))?;
    }
    let pairs: Vec<String> = profile.iter().map(|(bucket, count)| format!("{bucket}: {count}")).collect();
    writeln!(out, "{{{}}}", pairs.join(", "))?;
    Ok(())
}
