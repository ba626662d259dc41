//! Text provider building a [`KruskalGraph`] from the whitespace-separated
//! graph format.
//!
//! The input is a stream of tokens:
//!
//! ```text
//! V E
//! <V vertex names; a name's position is its index>
//! <E edges, each: edgeId src dst weight>
//! ```
//!
//! Tokens may be split across lines freely and anything after the last edge
//! is ignored.
use std::io::{self, Read};

use kruskal_core::{GraphError, KruskalGraph, define_error_codes};
use thiserror::Error;
use tracing::debug;

/// Tokens per edge record: id, source, destination, weight.
const EDGE_TOKENS: usize = 4;

/// Errors raised while reading the text graph format.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextGraphError {
    /// The input contained no tokens.
    #[error("graph input is empty")]
    EmptyInput,
    /// A header count was not a non-negative integer.
    #[error("invalid {field} count `{token}` on line {line}")]
    InvalidCount {
        /// Which count was malformed (`vertex` or `edge`).
        field: &'static str,
        /// The offending token.
        token: String,
        /// One-based line number of the token.
        line: usize,
    },
    /// The input ended before all declared items were read.
    #[error("input ended while reading {expected}")]
    UnexpectedEnd {
        /// Description of the missing token.
        expected: String,
    },
    /// An edge weight was not an integer.
    #[error("edge `{edge_id}` has invalid weight `{token}` on line {line}")]
    InvalidWeight {
        /// Identifier of the edge.
        edge_id: String,
        /// The offending token.
        token: String,
        /// One-based line number of the token.
        line: usize,
    },
    /// Reading the input failed.
    #[error("failed to read graph input: {0}")]
    Io(#[from] io::Error),
    /// The graph rejected a vertex registration.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The trace could not be serialised.
    #[error("failed to serialise trace: {0}")]
    Serialise(#[from] serde_json::Error),
}

define_error_codes! {
    /// Stable codes describing [`TextGraphError`] variants.
    enum TextGraphErrorCode for TextGraphError {
        /// The input contained no tokens.
        EmptyInput => EmptyInput => "TEXT_EMPTY_INPUT",
        /// A header count was malformed.
        InvalidCount => InvalidCount { .. } => "TEXT_INVALID_COUNT",
        /// The input ended early.
        UnexpectedEnd => UnexpectedEnd { .. } => "TEXT_UNEXPECTED_END",
        /// An edge weight was malformed.
        InvalidWeight => InvalidWeight { .. } => "TEXT_INVALID_WEIGHT",
        /// Reading the input failed.
        Io => Io(..) => "TEXT_IO",
        /// The graph rejected a vertex registration.
        Graph => Graph(..) => "TEXT_GRAPH",
        /// The trace could not be serialised.
        Serialise => Serialise(..) => "TEXT_SERIALISE",
    }
}

impl TextGraphError {
    /// Returns the wrapped graph error code, if any.
    #[must_use]
    pub const fn graph_code(&self) -> Option<kruskal_core::GraphErrorCode> {
        match self {
            Self::Graph(err) => Some(err.code()),
            _ => None,
        }
    }
}

struct Token<'a> {
    text: &'a str,
    line: usize,
}

/// Line-tracking cursor over whitespace-separated tokens.
struct Tokens<'a> {
    tokens: std::vec::IntoIter<Token<'a>>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        let tokens: Vec<Token<'a>> = input
            .lines()
            .enumerate()
            .flat_map(|(index, line)| {
                line.split_whitespace().map(move |text| Token {
                    text,
                    line: index + 1,
                })
            })
            .collect();
        Self {
            tokens: tokens.into_iter(),
        }
    }

    fn next(&mut self, expected: impl FnOnce() -> String) -> Result<Token<'a>, TextGraphError> {
        self.tokens
            .next()
            .ok_or_else(|| TextGraphError::UnexpectedEnd {
                expected: expected(),
            })
    }

    fn remaining(&self) -> usize {
        self.tokens.len()
    }

    fn count(&mut self, field: &'static str) -> Result<usize, TextGraphError> {
        let token = self.next(|| format!("the {field} count"))?;
        token
            .text
            .parse::<usize>()
            .map_err(|_| TextGraphError::InvalidCount {
                field,
                token: token.text.to_owned(),
                line: token.line,
            })
    }
}

/// Parses `input` into a graph.
///
/// # Errors
/// Returns [`TextGraphError`] when the input is empty, a count or weight is
/// malformed, tokens are missing, or a vertex name repeats.
///
/// # Examples
/// ```
/// use kruskal_providers_text::parse_graph;
///
/// let graph = parse_graph("2 1\nA B\ne1 A B 7\n")?;
/// assert_eq!(graph.vertex_index("B"), Some(1));
/// assert_eq!(graph.minimum_spanning_tree().total_cost(), 7);
/// # Ok::<(), kruskal_providers_text::TextGraphError>(())
/// ```
pub fn parse_graph(input: &str) -> Result<KruskalGraph, TextGraphError> {
    let mut tokens = Tokens::new(input);
    if tokens.remaining() == 0 {
        return Err(TextGraphError::EmptyInput);
    }

    let vertex_count = tokens.count("vertex")?;
    let edge_count = tokens.count("edge")?;

    // Header counts are untrusted: size nothing beyond what the input holds.
    let available = tokens.remaining();
    if available < vertex_count {
        return Err(TextGraphError::UnexpectedEnd {
            expected: format!("vertex {} of {vertex_count}", available + 1),
        });
    }
    let edge_budget = edge_count.min((available - vertex_count) / EDGE_TOKENS);
    let mut graph = KruskalGraph::new(vertex_count, edge_budget);

    for index in 0..vertex_count {
        let name = tokens.next(|| format!("vertex {} of {vertex_count}", index + 1))?;
        graph.add_vertex(name.text, index)?;
    }

    for position in 0..edge_count {
        let describe = |field: &str| format!("the {field} of edge {} of {edge_count}", position + 1);
        let id = tokens.next(|| describe("id"))?;
        let src = tokens.next(|| describe("source"))?;
        let dst = tokens.next(|| describe("destination"))?;
        let weight_token = tokens.next(|| describe("weight"))?;
        let weight =
            weight_token
                .text
                .parse::<i64>()
                .map_err(|_| TextGraphError::InvalidWeight {
                    edge_id: id.text.to_owned(),
                    token: weight_token.text.to_owned(),
                    line: weight_token.line,
                })?;
        graph.add_edge(id.text, weight, src.text, dst.text);
    }

    debug!(
        vertices = vertex_count,
        edges = edge_count,
        trailing_tokens = tokens.remaining(),
        "parsed text graph"
    );
    Ok(graph)
}

/// Reads all of `reader` and parses it with [`parse_graph`].
///
/// # Errors
/// Returns [`TextGraphError::Io`] when reading fails or the input is not
/// UTF-8, and any [`parse_graph`] error otherwise.
pub fn parse_graph_from_reader(mut reader: impl Read) -> Result<KruskalGraph, TextGraphError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_graph(&input)
}

/// Parses `input` and returns the compact JSON trace of Kruskal's algorithm.
///
/// # Errors
/// Returns [`TextGraphError`] when parsing or serialisation fails.
///
/// # Examples
/// ```
/// use kruskal_providers_text::run_kruskal_steps_json;
///
/// let json = run_kruskal_steps_json("2 1\nA B\ne1 A B 7\n")?;
/// assert!(json.ends_with(r#""mstWeight":7}"#));
/// # Ok::<(), kruskal_providers_text::TextGraphError>(())
/// ```
pub fn run_kruskal_steps_json(input: &str) -> Result<String, TextGraphError> {
    let graph = parse_graph(input)?;
    Ok(graph.minimum_spanning_trace().to_json()?)
}
