use std::path::PathBuf;

use clap::Parser;

/// solver - maximum flow and minimum cut by shortest augmenting paths
///
/// Input is `n m s t` followed by `m` arcs `u v c`, whitespace separated, vertices numbered from 1.
#[derive(Debug, Parser)]
#[command(name = "solver", version, about)]
pub struct Cli {
    /// Network description; read from stdin when omitted.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Print the residual capacities and augmenting path of every round instead of the final report.
    #[arg(short, long)]
    pub trace: bool,

    /// Give up after this many augmentations.
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long)]
    pub verbose: bool,
}
