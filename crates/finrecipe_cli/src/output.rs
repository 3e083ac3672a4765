//! Report rows and their table/JSON renderings.

use std::fmt;
use std::io::Write;

use finrecipe_models::analytical::OptionParams;
use serde::Serialize;

use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Pricing formula that produced a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Model {
    /// Plain Black-Scholes, no cost of carry.
    BlackScholes,
    /// Generalised Black-Scholes.
    Generalized,
    /// Bjerksund-Stensland American approximation.
    BjerksundStensland,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::BlackScholes => write!(f, "black-scholes"),
            Model::Generalized => write!(f, "gbs"),
            Model::BjerksundStensland => write!(f, "bjerksund-stensland"),
        }
    }
}

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Right to buy.
    Call,
    /// Right to sell.
    Put,
}

impl OptionKind {
    /// Maps the `--put` flag onto a kind.
    pub fn from_put_flag(put: bool) -> Self {
        if put {
            OptionKind::Put
        } else {
            OptionKind::Call
        }
    }

    /// True for calls.
    pub fn is_call(self) -> bool {
        self == OptionKind::Call
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "call"),
            OptionKind::Put => write!(f, "put"),
        }
    }
}

/// One priced option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub model: Model,
    pub kind: OptionKind,
    #[serde(flatten)]
    pub params: OptionParams,
    pub price: f64,
    /// European value of the same contract, quoted next to American prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub european: Option<f64>,
}

/// Normal distribution values at one point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionPoint {
    pub x: f64,
    pub cdf: f64,
    pub pdf: f64,
}

/// Rows that can be laid out in a fixed-column table.
pub trait Tabular {
    /// Column titles.
    const HEADERS: &'static [&'static str];

    /// Cell text for this row; `precision` applies to computed values.
    fn cells(&self, precision: usize) -> Vec<String>;
}

impl Tabular for Quote {
    const HEADERS: &'static [&'static str] = &[
        "Model", "Kind", "S", "X", "T", "r", "b", "v", "Price", "European",
    ];

    fn cells(&self, precision: usize) -> Vec<String> {
        let p = &self.params;
        vec![
            self.model.to_string(),
            self.kind.to_string(),
            p.spot.to_string(),
            p.strike.to_string(),
            p.expiry.to_string(),
            p.rate.to_string(),
            p.cost_of_carry.to_string(),
            p.volatility.to_string(),
            format!("{:.*}", precision, self.price),
            self.european
                .map(|e| format!("{:.*}", precision, e))
                .unwrap_or_else(|| "-".to_string()),
        ]
    }
}

impl Tabular for DistributionPoint {
    const HEADERS: &'static [&'static str] = &["x", "N(x)", "n(x)"];

    fn cells(&self, precision: usize) -> Vec<String> {
        vec![
            self.x.to_string(),
            format!("{:.*}", precision, self.cdf),
            format!("{:.*}", precision, self.pdf),
        ]
    }
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}\n", segments.join(&mid.to_string()))
}

fn line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!(" {cell:<w$} "))
        .collect();
    format!("│{}│\n", padded.join("│"))
}

/// Lays rows out as a box-drawn table.
pub fn render_table<T: Tabular>(rows: &[T], precision: usize) -> String {
    let headers: Vec<String> = T::HEADERS.iter().map(|h| h.to_string()).collect();
    let body: Vec<Vec<String>> = rows.iter().map(|row| row.cells(precision)).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for cells in &body {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = border(&widths, '┌', '┬', '┐');
    out.push_str(&line(&headers, &widths));
    out.push_str(&border(&widths, '├', '┼', '┤'));
    for cells in &body {
        out.push_str(&line(cells, &widths));
    }
    out.push_str(&border(&widths, '└', '┴', '┘'));
    out
}

/// Writes rows in the configured format.
pub fn write_report<T, W>(out: &mut W, rows: &[T], config: &CliConfig) -> Result<()>
where
    T: Tabular + Serialize,
    W: Write,
{
    match config.format {
        OutputFormat::Table => out.write_all(render_table(rows, config.precision).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
