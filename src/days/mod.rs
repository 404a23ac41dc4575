//! One module per puzzle day. Each exposes
//! `solve(input, options) -> Result<Report, PuzzleError>` and otherwise keeps
//! its parsing and algorithm to itself.

pub mod y2022;
pub mod y2023;
