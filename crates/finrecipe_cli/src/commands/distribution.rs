//! `cnd` command: cumulative and density values of the standard normal.

use finrecipe_models::analytical::{normdist, try_cnd};
use tracing::debug;

use crate::config::CliConfig;
use crate::output::{write_report, DistributionPoint};
use crate::Result;

/// Evaluates N(x) and n(x) at each point.
///
/// Fails on the first NaN or infinite point.
pub fn points(xs: &[f64]) -> Result<Vec<DistributionPoint>> {
    xs.iter()
        .map(|&x| -> Result<DistributionPoint> {
            Ok(DistributionPoint {
                x,
                cdf: try_cnd(x)?,
                pdf: normdist(x),
            })
        })
        .collect()
}

/// Run the cnd command
pub fn run(xs: &[f64], config: &CliConfig) -> Result<()> {
    debug!(count = xs.len(), "evaluating normal distribution");
    let rows = points(xs)?;
    write_report(&mut std::io::stdout().lock(), &rows, config)
}
