use crate::stats::compute_mean;
use anyhow::{Context, Result};
use std::io::Write;

/// Extracted numbers together with their mean.
///
/// Only constructed once the mean is known, so a `Report` is always printable.
#[derive(Debug, PartialEq)]
pub struct Report {
    pub numbers: Vec<f64>,
    pub avg: f64,
}

impl Report {
    pub fn new(numbers: Vec<f64>) -> Result<Self> {
        let avg = compute_mean(&numbers).context("failed to compute average")?;
        Ok(Self { numbers, avg })
    }

    /// Write the `numbers:` and `avg:` lines.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "numbers: {:?}", self.numbers).context("failed to write report")?;
        writeln!(writer, "avg: {:?}", self.avg).context("failed to write report")?;
        writer.flush().context("failed to flush writer stream")?;
        Ok(())
    }
}
