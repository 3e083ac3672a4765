//! Demo command: a European call and an American call term structure.

use finrecipe_models::analytical::OptionParams;
use tracing::info;

use super::price::quote;
use crate::config::CliConfig;
use crate::output::{write_report, Model, OptionKind, Quote};
use crate::Result;

/// Expiries of the American term structure, in trading years.
pub const TERM_STRUCTURE: [f64; 5] = [0.25, 0.5, 0.75, 1.0, 2.0];

/// Builds the demo quotes.
///
/// - European call: S = 100, X = 100, T = 5, r = 10%, v = 30%
/// - American calls: S = 42, X = 40, r = 4%, b = -4%, v = 35% over
///   [`TERM_STRUCTURE`]
pub fn quotes() -> Result<Vec<Quote>> {
    let mut quotes = Vec::with_capacity(1 + TERM_STRUCTURE.len());

    let european = OptionParams::new(100.0, 100.0, 5.0, 0.1, 0.1, 0.3)?;
    quotes.push(quote(Model::BlackScholes, OptionKind::Call, european)?);

    for &t in &TERM_STRUCTURE {
        let params = OptionParams::new(42.0, 40.0, t, 0.04, -0.04, 0.35)?;
        quotes.push(quote(Model::BjerksundStensland, OptionKind::Call, params)?);
    }

    Ok(quotes)
}

/// Run the demo command
pub fn run(config: &CliConfig) -> Result<()> {
    info!("Running pricing demo");
    let rows = quotes()?;
    write_report(&mut std::io::stdout().lock(), &rows, config)
}
