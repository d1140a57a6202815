use string_analyzer::{
    config::{Config, ConfigBuilder},
    options::OutputFormat,
    output::render,
};
use string_analyzer_core::{Mode, analyze};

fn config(input: &str, format: OutputFormat) -> ConfigBuilder {
    let mut builder = ConfigBuilder::default();
    builder.input(input).format(format);
    builder
}

fn render_to_string(config: &Config) -> String {
    let profile = analyze(&config.input, config.mode);
    let mut out = Vec::new();
    render(&profile, config, &mut out).expect("renders");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn text_escapes_control_characters_in_echo() {
    let cfg = config("a\tb", OutputFormat::Text).build().unwrap();
    let text = render_to_string(&cfg);
    assert_eq!(text, "input_string: a\\tb\n{numeric: 0, alphabet: 2, non_alphanumeric: 0, other: 1}\n");
}

#[test]
fn tsv_with_ratio() {
    let cfg = config("a1!!", OutputFormat::Tsv).ratio(true).build().unwrap();
    let text = render_to_string(&cfg);
    assert_eq!(
        text,
        "bucket\tcount\tratio\nnumeric\t1\t25.0\nalphabet\t1\t25.0\nnon_alphanumeric\t2\t50.0\nother\t0\t0.0\n"
    );
}

#[test]
fn markdown_lists_every_bucket_and_total() {
    let cfg = config("Ab", OutputFormat::Md).mode(Mode::Comprehensive).echo_input(false).build().unwrap();
    let text = render_to_string(&cfg);
    assert!(text.starts_with("### String Profile (comprehensive)\n"));
    assert!(text.contains("| lower_letter | 1 |"));
    assert!(text.contains("| upper_letter | 1 |"));
    assert!(text.contains("| extended_alphabet | 0 |"));
    assert!(text.contains("| **total** | 2 |"));
    assert!(!text.contains("Input:"));
}

#[test]
fn table_includes_totals_and_categories() {
    let cfg = config("x$", OutputFormat::Table).mode(Mode::Comprehensive).categories(true).build().unwrap();
    let text = render_to_string(&cfg);
    assert!(text.contains("mode=comprehensive"));
    assert!(text.contains("input_string: x$"));
    assert!(text.contains("BUCKET"));
    assert!(text.contains("TOTAL"));
    assert!(text.contains("CATEGORY"));
    assert!(text.contains("currency"));
}

#[test]
fn yaml_has_flat_counts() {
    let cfg = config("1", OutputFormat::Yaml).echo_input(false).build().unwrap();
    let text = render_to_string(&cfg);
    assert!(text.contains("mode: basic"));
    assert!(text.contains("counts:\n  numeric: 1\n  alphabet: 0\n"));
    assert!(!text.contains("input:"));
}

#[test]
fn empty_input_renders_zero_ratios() {
    let cfg = config("", OutputFormat::Csv).ratio(true).build().unwrap();
    let text = render_to_string(&cfg);
    assert!(text.lines().skip(1).all(|line| line.ends_with(",0,0.0")));
}
