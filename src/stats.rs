use anyhow::{Result, bail};

/// Compute the arithmetic mean of `vals`.
///
/// # Errors
/// Returns an error if `vals` is empty instead of yielding `NaN`.
pub fn compute_mean(vals: &[f64]) -> Result<f64> {
    if vals.is_empty() {
        bail!("cannot compute the mean of an empty sequence (division by zero)");
    }
    Ok(vals.iter().sum::<f64>() / vals.len() as f64)
}
