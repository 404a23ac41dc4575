//! Advent of Code puzzle workbench.
//!
//! Every puzzle day is its own module under [`days`] with its own parsing and
//! algorithm. The rest of the crate is the web shell around them: a registry
//! used for routing, the sample input helper, HTML rendering and the server.

pub mod config;
pub mod days;
pub mod error;
pub mod input;
pub mod puzzles;
pub mod render;
pub mod report;
pub mod routes;
pub mod server;

/// Crate version, shown on the health endpoint
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
