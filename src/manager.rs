use crate::extractor::extract_numbers;
use crate::report::Report;
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::{Path, PathBuf},
};

/// Runs the read, extract, average and print pipeline over one input file.
pub struct Manager {
    input_file: PathBuf,
}

impl Manager {
    pub fn new<P: AsRef<Path>>(input_file: P) -> Self {
        let input_file = input_file.as_ref().to_path_buf();
        Self { input_file }
    }

    /// Read the whole input file into a string.
    ///
    /// The file is closed when the reader goes out of scope, whether or not the read succeeds.
    pub fn read_input(&self) -> Result<String> {
        let file = &self.input_file;
        let file = File::open(file).with_context(|| format!("failed to open {file:?}"))?;
        let mut reader = BufReader::new(file);

        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .with_context(|| format!("failed to read {:?}", self.input_file))?;
        log::info!("read {} bytes from {:?}", text.len(), self.input_file);

        Ok(text)
    }

    pub fn build_report(&self) -> Result<Report> {
        let text = self.read_input().context("failed to read input")?;

        let numbers = extract_numbers(&text).context("failed to extract numbers")?;
        log::info!("extracted {} numbers", numbers.len());

        Report::new(numbers)
    }

    /// Build the report and write it to `writer`.
    ///
    /// Nothing is written unless the report was built successfully.
    pub fn run<W: Write>(&self, writer: W) -> Result<()> {
        let report = self.build_report()?;
        report.write_to(writer)?;
        Ok(())
    }
}
