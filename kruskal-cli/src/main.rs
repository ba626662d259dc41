//! `kruskal` binary.
//!
//! `kruskal trace` prints the JSON decision trace of a graph and `kruskal mst`
//! prints its minimum spanning tree. Output goes to stdout; diagnostics go to
//! stderr through `tracing`. Any failure exits with status 1 after logging
//! the stable error code carried by the failure, if there is one.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use kruskal_cli::{
    cli::{Cli, CliError, render_output, run_cli},
    logging::{self, LoggingError},
};
use kruskal_core::GraphErrorCode;
use kruskal_providers_text::TextGraphErrorCode;
use tracing::{error, field};

fn execute(cli: Cli) -> Result<()> {
    let output = run_cli(cli).context("failed to execute command")?;
    let mut stdout = BufWriter::new(io::stdout().lock());
    render_output(&output, &mut stdout).context("failed to render output")?;
    stdout.flush().context("failed to flush output")
}

/// Codes of the text and graph errors behind `err`, when it wraps one.
fn failure_codes(err: &anyhow::Error) -> (Option<TextGraphErrorCode>, Option<GraphErrorCode>) {
    match err.downcast_ref::<CliError>() {
        Some(CliError::Text(text)) => (Some(text.code()), text.graph_code()),
        Some(CliError::Io { .. }) | None => (None, None),
    }
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    let Err(err) = execute(Cli::parse()) else {
        return ExitCode::SUCCESS;
    };
    let (code, graph_code) = failure_codes(&err);
    error!(
        error = %err,
        code = code.map(|code| field::display(code.as_str())),
        graph_code = graph_code.map(|code| field::display(code.as_str())),
        "kruskal command failed"
    );
    ExitCode::FAILURE
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is unavailable when its own initialisation fails"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("kruskal: cannot initialise logging: {err}");
}
