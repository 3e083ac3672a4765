//! finrecipe CLI - option pricing formulas from the command line
//!
//! # Commands
//!
//! - `finrecipe cnd <x>...` - standard normal distribution values
//! - `finrecipe european -s <S> -x <X> -t <T> -r <r> -v <v>` - Black-Scholes price
//! - `finrecipe gbs ... -b <b>` - generalised Black-Scholes price
//! - `finrecipe american ... -b <b>` - Bjerksund-Stensland American price
//! - `finrecipe demo` - reference European and American values
//!
//! Settings come from defaults, an optional TOML file, `FINRECIPE_*`
//! environment variables and flags, in increasing order of precedence.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use finrecipe_models::analytical::OptionParams;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, LogLevel};
use output::{Model, OptionKind};

/// finrecipe option pricing CLI
#[derive(Parser)]
#[command(name = "finrecipe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(long, global = true)]
    format: Option<String>,

    /// Decimals shown for computed values in table output
    #[arg(long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

/// Contract inputs shared by every pricing command.
#[derive(Args)]
struct OptionArgs {
    /// Price a put instead of a call
    #[arg(long)]
    put: bool,

    /// Spot price
    #[arg(short = 's', long)]
    spot: f64,

    /// Strike price
    #[arg(short = 'x', long)]
    strike: f64,

    /// Time to expiry in trading years
    #[arg(short = 't', long)]
    expiry: f64,

    /// Risk-free rate
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    rate: f64,

    /// Volatility
    #[arg(short = 'v', long, allow_negative_numbers = true)]
    volatility: f64,
}

#[derive(Args)]
struct CarryArgs {
    #[command(flatten)]
    option: OptionArgs,

    /// Cost of carry
    #[arg(short = 'b', long = "carry", allow_negative_numbers = true)]
    cost_of_carry: f64,
}

impl OptionArgs {
    fn kind(&self) -> OptionKind {
        OptionKind::from_put_flag(self.put)
    }

    fn params(&self, cost_of_carry: f64) -> Result<OptionParams> {
        Ok(OptionParams::new(
            self.spot,
            self.strike,
            self.expiry,
            self.rate,
            cost_of_carry,
            self.volatility,
        )?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Standard normal cumulative distribution and density
    Cnd {
        /// Points to evaluate
        #[arg(required = true, allow_negative_numbers = true)]
        x: Vec<f64>,
    },

    /// Black-Scholes European price (no cost of carry)
    European(OptionArgs),

    /// Generalised Black-Scholes European price
    Gbs(CarryArgs),

    /// Bjerksund-Stensland American price
    American(CarryArgs),

    /// Reference European call and American call term structure
    Demo,
}

fn init_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let args = CliArgs {
        config_file: cli.config,
        log_level: cli.log_level,
        format: cli.format,
        precision: cli.precision,
        verbose: cli.verbose,
    };
    let config = build_config(&args)?;

    init_tracing(config.log_level);
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Cnd { x } => commands::distribution::run(&x, &config),
        Commands::European(option) => {
            // Plain Black-Scholes has no carry term; b = r records a stock
            let params = option.params(option.rate)?;
            commands::price::run(Model::BlackScholes, option.kind(), params, &config)
        }
        Commands::Gbs(CarryArgs {
            option,
            cost_of_carry,
        }) => {
            let params = option.params(cost_of_carry)?;
            commands::price::run(Model::Generalized, option.kind(), params, &config)
        }
        Commands::American(CarryArgs {
            option,
            cost_of_carry,
        }) => {
            let params = option.params(cost_of_carry)?;
            commands::price::run(Model::BjerksundStensland, option.kind(), params, &config)
        }
        Commands::Demo => commands::demo::run(&config),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
