//! rPontoCsv library root.
//! Exposes the CLI parser, the high-level run() function and the pipeline
//! stages (parser, grouper, formatter, csv writer).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{AggregateLogic, AggregateReport, AggregateRequest, range::DateRange};
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Build the run request from parsed arguments, the already validated
/// date window and the configuration.
pub fn build_request(cli: &Cli, range: DateRange, cfg: &Config) -> AggregateRequest {
    let output = cli
        .output
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(|| PathBuf::from(&cfg.default_output));

    AggregateRequest {
        input: expand_tilde(&cli.file),
        output,
        range,
        print_rows: !cli.quiet,
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<AggregateReport> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ rifiuta subito mesi malformati, prima di leggere qualsiasi file
    let range = DateRange::from_months(cli.start.as_deref(), cli.end.as_deref())?;

    // 3️⃣ carica config UNA sola volta
    let cfg = match &cli.config {
        Some(path) => Config::load_from(&expand_tilde(path))?,
        None => Config::load()?,
    };

    // 4️⃣ esegue la pipeline
    let req = build_request(&cli, range, &cfg);
    AggregateLogic::run(&req, &cfg)
}
