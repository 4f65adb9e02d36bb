mod app;
mod input;
mod output;

use std::fs;
use std::io::{self, BufWriter, Read, Write};

use anyhow::Context;
use clap::Parser;
use fulkerson::{Solver, SolverConfig};

use crate::app::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // info+ on stderr; --verbose enables debug; RUST_LOG overrides
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("fulkerson", level)
        .filter_module("solver", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();

    let text = match &cli.input {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("reading stdin")?;
            text
        }
    };

    let mut network = input::parse_network(&text)?;
    let config = SolverConfig {
        augmentation_limit: cli.limit,
        record_augmentations: false,
    };
    let mut solver = Solver::from(&mut network).with_config(config);

    let mut out = BufWriter::new(io::stdout().lock());
    if cli.trace {
        output::write_trace(&mut out, &mut solver)?;
    } else {
        let solution = solver.solve()?;
        output::write_report(&mut out, &solution)?;
    }
    out.flush()?;

    Ok(())
}
