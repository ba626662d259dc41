//! Command implementations and argument parsing for the `kruskal` CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use kruskal_core::{Edge, KruskalGraph, KruskalTrace, MinimumSpanningTree};
use kruskal_providers_text::{TextGraphError, parse_graph_from_reader};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const STDIN_MARKER: &str = "-";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kruskal",
    about = "Compute deterministic minimum spanning trees and decision traces."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the step-by-step JSON trace of Kruskal's algorithm.
    Trace(TraceArgs),
    /// Print the minimum spanning tree and its total cost.
    Mst(MstArgs),
}

/// Graph input shared by every command.
#[derive(Debug, Args, Clone, Default)]
pub struct InputArgs {
    /// Graph file to read; omit or pass `-` to read stdin.
    pub path: Option<PathBuf>,
}

impl InputArgs {
    /// Returns the file to read, or `None` when stdin is requested.
    #[must_use]
    pub fn file(&self) -> Option<&Path> {
        self.path
            .as_deref()
            .filter(|path| *path != Path::new(STDIN_MARKER))
    }
}

/// Options accepted by the `trace` command.
#[derive(Debug, Args, Clone, Default)]
pub struct TraceArgs {
    /// Graph input.
    #[command(flatten)]
    pub input: InputArgs,

    /// Emit indented JSON instead of the compact form.
    #[arg(long)]
    pub pretty: bool,
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone, Default)]
pub struct MstArgs {
    /// Graph input.
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format for the spanning tree.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Rendering formats for the `mst` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary lines followed by one tab-separated line per edge.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The graph file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph input was malformed or unreadable.
    #[error(transparent)]
    Text(#[from] TextGraphError),
}

/// Result of executing a command, ready for [`render_output`].
#[derive(Debug, Clone)]
pub enum CommandOutput {
    /// Output of the `trace` command.
    Trace {
        /// Recorded decisions.
        trace: KruskalTrace,
        /// Whether to indent the JSON.
        pretty: bool,
    },
    /// Output of the `mst` command.
    Mst {
        /// Classic spanning tree result.
        tree: MinimumSpanningTree,
        /// Requested rendering.
        format: OutputFormat,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MstReport<'a> {
    total_cost: i64,
    edge_count: usize,
    skipped: usize,
    edges: &'a [Edge],
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be opened or parsed.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Cli, Command, CommandOutput, InputArgs, TraceArgs, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "2 1\nA B\ne1 A B 4\n")?;
/// let cli = Cli {
///     command: Command::Trace(TraceArgs {
///         input: InputArgs {
///             path: Some(file.path().to_path_buf()),
///         },
///         pretty: false,
///     }),
/// };
/// let CommandOutput::Trace { trace, .. } = run_cli(cli)? else {
///     panic!("trace command must produce a trace");
/// };
/// assert_eq!(trace.mst_weight, 4);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    match cli.command {
        Command::Trace(args) => {
            Span::current().record("command", "trace");
            run_trace(args)
        }
        Command::Mst(args) => {
            Span::current().record("command", "mst");
            run_mst(args)
        }
    }
}

#[instrument(name = "cli.trace", err, skip(args), fields(pretty = args.pretty))]
pub(super) fn run_trace(args: TraceArgs) -> Result<CommandOutput, CliError> {
    let graph = read_graph(&args.input)?;
    let trace = graph.minimum_spanning_trace();
    info!(
        steps = trace.steps.len(),
        mst_weight = trace.mst_weight,
        "trace completed"
    );
    Ok(CommandOutput::Trace {
        trace,
        pretty: args.pretty,
    })
}

#[instrument(name = "cli.mst", err, skip(args), fields(format = field::Empty))]
pub(super) fn run_mst(args: MstArgs) -> Result<CommandOutput, CliError> {
    let label = match args.format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "json",
    };
    Span::current().record("format", label);
    let graph = read_graph(&args.input)?;
    let tree = graph.minimum_spanning_tree();
    info!(
        edges = tree.edges().len(),
        total_cost = tree.total_cost(),
        skipped = tree.skipped(),
        "spanning tree completed"
    );
    Ok(CommandOutput::Mst {
        tree,
        format: args.format,
    })
}

#[instrument(name = "cli.read_graph", err, skip(input), fields(source = field::Empty))]
pub(super) fn read_graph(input: &InputArgs) -> Result<KruskalGraph, CliError> {
    let span = Span::current();
    let graph = match input.file() {
        Some(path) => {
            span.record("source", field::display(path.display()));
            parse_graph_from_reader(open_graph_file(path)?)?
        }
        None => {
            span.record("source", "stdin");
            parse_graph_from_reader(io::stdin().lock())?
        }
    };
    Ok(graph)
}

fn open_graph_file(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Renders `output` to `writer`, terminated by a newline.
///
/// # Errors
/// Returns [`io::Error`] if writing or serialisation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{CommandOutput, render_output};
/// # use kruskal_core::KruskalTrace;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let output = CommandOutput::Trace {
///     trace: KruskalTrace::default(),
///     pretty: false,
/// };
/// let mut buffer = Vec::new();
/// render_output(&output, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "{\"steps\":[],\"mstWeight\":0}\n");
/// # Ok(())
/// # }
/// ```
pub fn render_output(output: &CommandOutput, mut writer: impl Write) -> io::Result<()> {
    match output {
        CommandOutput::Trace { trace, pretty } => {
            if *pretty {
                trace.write_json_pretty(&mut writer)?;
            } else {
                trace.write_json(&mut writer)?;
            }
        }
        CommandOutput::Mst {
            tree,
            format: OutputFormat::Text,
        } => return render_tree_text(tree, writer),
        CommandOutput::Mst {
            tree,
            format: OutputFormat::Json,
        } => {
            let report = MstReport {
                total_cost: tree.total_cost(),
                edge_count: tree.edges().len(),
                skipped: tree.skipped(),
                edges: tree.edges(),
            };
            serde_json::to_writer(&mut writer, &report)?;
        }
    }
    writeln!(writer)
}

fn render_tree_text(tree: &MinimumSpanningTree, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "total cost: {}", tree.total_cost())?;
    writeln!(writer, "edges: {}", tree.edges().len())?;
    for edge in tree.edges() {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            edge.id(),
            edge.src(),
            edge.dst(),
            edge.weight()
        )?;
    }
    Ok(())
}
