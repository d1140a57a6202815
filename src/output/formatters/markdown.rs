// src/output/formatters/markdown.rs
use std::io::Write;

use string_analyzer_core::Profile;
use string_analyzer_shared_kernel::Result;

use crate::{
    config::Config,
    output::utils::{display_input, format_ratio, safe_cell},
};

pub fn output_markdown(profile: &Profile, config: &Config, out: &mut impl Write) -> Result<()> {
    writeln!(out, "### String Profile ({})", profile.mode())?;
    writeln!(out)?;
    if config.echo_input {
        writeln!(out, "Input: {}", safe_cell(&display_input(&config.input)))?;
        writeln!(out)?;
    }

    if config.ratio {
        writeln!(out, "| BUCKET | COUNT | RATIO% |\n|:---|---:|---:|")?;
    } else {
        writeln!(out, "| BUCKET | COUNT |\n|:---|---:|")?;
    }
    for (bucket, count) in profile.iter() {
        if config.ratio {
            writeln!(out, "| {bucket} | {count} | {} |", format_ratio(profile, bucket))?;
        } else {
            writeln!(out, "| {bucket} | {count} |")?;
        }
    }
    if config.ratio {
        let share = if profile.total().is_zero() { "0.0" } else { "100.0" };
        writeln!(out, "| **total** | {} | {share} |", profile.total())?;
    } else {
        writeln!(out, "| **total** | {} |", profile.total())?;
    }
    Ok(())
}
