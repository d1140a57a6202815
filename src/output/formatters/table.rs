// src/output/formatters/table.rs
use std::io::Write;

use comfy_table::{CellAlignment, Table, presets::ASCII_FULL};
use string_analyzer_core::Profile;
use string_analyzer_shared_kernel::Result;

use crate::{
    config::Config,
    output::utils::{display_input, format_ratio},
};

pub fn output_table(profile: &Profile, config: &Config, out: &mut impl Write) -> Result<()> {
    writeln!(out, "string_analyzer v{} · mode={}", crate::VERSION, profile.mode())?;
    if config.echo_input {
        writeln!(out, "input_string: {}", display_input(&config.input))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", bucket_table(profile, config))?;

    if config.categories {
        writeln!(out)?;
        writeln!(out, "{}", category_table(profile))?;
    }
    Ok(())
}

fn bucket_table(profile: &Profile, config: &Config) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    if config.ratio {
        table.set_header(vec!["BUCKET", "COUNT", "RATIO%"]);
    } else {
        table.set_header(vec!["BUCKET", "COUNT"]);
    }

    for (bucket, count) in profile.iter() {
        let mut row = vec![bucket.to_string(), count.to_string()];
        if config.ratio {
            row.push(format_ratio(profile, bucket));
        }
        table.add_row(row);
    }

    let mut total = vec!["TOTAL".to_string(), profile.total().to_string()];
    if config.ratio {
        total.push(if profile.total().is_zero() { "0.0" } else { "100.0" }.to_string());
    }
    table.add_row(total);

    align_numbers(&mut table, if config.ratio { 3 } else { 2 });
    table
}

fn category_table(profile: &Profile) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["CATEGORY", "CODE", "COUNT"]);
    for (category, count) in profile.categories() {
        table.add_row(vec![category.to_string(), category.code().to_string(), count.to_string()]);
    }
    align_numbers(&mut table, 3);
    table
}

fn align_numbers(table: &mut Table, columns: usize) {
    for index in 1..columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}
