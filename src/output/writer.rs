// src/output/writer.rs
use std::{
    fs::File,
    io::{BufWriter, Write},
};

use string_analyzer_shared_kernel::{InfraResult, InfrastructureError};

use crate::config::Config;

pub(crate) struct OutputWriter(Box<dyn Write>);

impl OutputWriter {
    pub(crate) fn create(config: &Config) -> InfraResult<Self> {
        let writer: Box<dyn Write> = if let Some(path) = &config.output {
            let file = File::create(path)
                .map_err(|source| InfrastructureError::FileWrite { path: path.clone(), source })?;
            Box::new(BufWriter::new(file))
        } else {
            Box::new(BufWriter::new(std::io::stdout()))
        };
        Ok(Self(writer))
    }

    pub(crate) fn finish(mut self) -> InfraResult<()> {
        self.0.flush().map_err(InfrastructureError::from)
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}
