// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use string_analyzer_core::Mode;
use string_analyzer_shared_kernel::{PresentationError, PresentationResult};

use crate::{cli::Args, options::OutputFormat};

/// Resolved settings for one run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub input: String,
    #[builder(default)]
    pub mode: Mode,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub ratio: bool,
    #[builder(default)]
    pub categories: bool,
    #[builder(default = "true")]
    pub echo_input: bool,
    #[builder(default)]
    pub output: Option<PathBuf>,
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> PresentationResult<Self> {
        if let Some(path) = args.output.as_deref()
            && path.is_dir()
        {
            return Err(PresentationError::InvalidValue {
                flag: "--output".to_string(),
                value: path.display().to_string(),
                reason: "is a directory".to_string(),
            });
        }

        let mode = args.mode.map_or_else(|| Mode::from_comprehensive(args.comprehensive), Mode::from);

        ConfigBuilder::default()
            .input(args.input_string)
            .mode(mode)
            .format(OutputFormat::from(args.format))
            .ratio(args.ratio)
            .categories(args.categories)
            .echo_input(!args.hide_input)
            .output(args.output)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}
