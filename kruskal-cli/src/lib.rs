//! Support library for the `kruskal` binary.
//!
//! Exposes the command pipeline and logging set-up so tests can exercise them
//! without spawning a subprocess.

pub mod cli;
pub mod logging;
