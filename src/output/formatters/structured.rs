// src/output/formatters/structured.rs
use std::{collections::BTreeMap, io::Write};

use serde::Serialize;
use string_analyzer_core::{Category, Mode, Profile};
use string_analyzer_shared_kernel::{CharCount, Result};

use crate::config::Config;

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<&'a str>,
    mode: Mode,
    total: CharCount,
    counts: &'a Profile,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<&'a BTreeMap<Category, CharCount>>,
}

pub fn output_json(profile: &Profile, config: &Config, out: &mut impl Write) -> Result<()> {
    let output = build_json_output(profile, config);
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}

pub fn output_yaml(profile: &Profile, config: &Config, out: &mut impl Write) -> Result<()> {
    let output = build_json_output(profile, config);
    let yaml_str = serde_yaml::to_string(&output)?;
    write!(out, "{yaml_str}")?;
    Ok(())
}

fn build_json_output<'a>(profile: &'a Profile, config: &'a Config) -> JsonOutput<'a> {
    JsonOutput {
        version: crate::VERSION,
        input: config.echo_input.then_some(config.input.as_str()),
        mode: profile.mode(),
        total: profile.total(),
        counts: profile,
        categories: config.categories.then(|| profile.categories()),
    }
}
