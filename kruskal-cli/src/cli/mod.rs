//! Command-line interface for the Kruskal engine.
//!
//! `trace` prints the step-by-step JSON decision trace and `mst` prints the
//! classic minimum spanning tree. Both read the whitespace-separated graph
//! format from a file or stdin.

mod commands;

pub use commands::{
    Cli, CliError, Command, CommandOutput, InputArgs, MstArgs, OutputFormat, TraceArgs,
    render_output, run_cli,
};
