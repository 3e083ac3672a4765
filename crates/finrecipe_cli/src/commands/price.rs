//! Price command implementation
//!
//! Prices a single option with one of the analytical formulas.

use finrecipe_models::analytical::OptionParams;
use tracing::info;

use crate::config::CliConfig;
use crate::output::{write_report, Model, OptionKind, Quote};
use crate::Result;

/// Prices `params` with `model`.
///
/// American quotes carry the generalised European value of the same contract
/// alongside the approximation.
pub fn quote(model: Model, kind: OptionKind, params: OptionParams) -> Result<Quote> {
    let is_call = kind.is_call();
    let (price, european) = match model {
        Model::BlackScholes => (params.black_scholes(is_call)?, None),
        Model::Generalized => (params.gbs(is_call)?, None),
        Model::BjerksundStensland => (params.american(is_call)?, Some(params.gbs(is_call)?)),
    };

    Ok(Quote {
        model,
        kind,
        params,
        price,
        european,
    })
}

/// Run the price command
pub fn run(
    model: Model,
    kind: OptionKind,
    params: OptionParams,
    config: &CliConfig,
) -> Result<()> {
    info!(%model, %kind, spot = params.spot, strike = params.strike, "pricing option");
    let q = quote(model, kind, params)?;
    info!(price = q.price, "pricing complete");
    write_report(&mut std::io::stdout().lock(), &[q], config)
}
