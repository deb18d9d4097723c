//! Generic graph search and memoization over caller-defined state spaces
//!
//! Problems plug in by implementing small capability traits on a driver
//! object; the engines own nothing but the search bookkeeping. Included are
//! best-first search with single-best and all-best modes, sequential and
//! parallel batched breadth-first optimisation, and two memoizing solvers for
//! recursively defined values.

#![forbid(unsafe_code)]

/// Character maps and the grid problems built on them
pub mod grid;
/// Command-line surface, input sources and error handling
pub mod io;
/// Memoized solvers for recursively defined problems
pub mod memo;
/// Best-first and breadth-first search engines
pub mod search;

pub use io::error::{Result, SearchError};
