// src/output/formatters/delimited.rs
use std::io::Write;

use string_analyzer_core::Profile;
use string_analyzer_shared_kernel::Result;

use crate::{config::Config, output::utils::format_ratio};

pub fn output_delimited(profile: &Profile, config: &Config, sep: char, out: &mut impl Write) -> Result<()> {
    write_delimited_header(config, sep, out)?;
    for (bucket, count) in profile.iter() {
        if config.ratio {
            writeln!(out, "{bucket}{sep}{count}{sep}{}", format_ratio(profile, bucket))?;
        } else {
            writeln!(out, "{bucket}{sep}{count}")?;
        }
    }
    Ok(())
}

fn write_delimited_header(config: &Config, sep: char, out: &mut impl Write) -> Result<()> {
    if config.ratio {
        writeln!(out, "bucket{sep}count{sep}ratio")?;
    } else {
        writeln!(out, "bucket{sep}count")?;
    }
    Ok(())
}
