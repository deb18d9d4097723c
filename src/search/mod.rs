//! Graph search engines over driver-defined state spaces
//!
//! This module contains:
//! - Capability traits a driver implements for its states
//! - Best-first search with single-best and all-best modes
//! - Sequential and parallel batched breadth-first optimisation

/// Breadth-first exhaustive optimisation on one thread
pub mod breadth;
/// Capability traits consumed by the engines
pub mod capability;
/// Driver-based point-to-point path search
pub mod driver;
/// Priority frontier and dominance table
pub mod frontier;
/// Search results and work counters
pub mod outcome;
/// Batched breadth-first optimisation on a worker pool
pub mod parallel;
/// Best-first priority search
pub mod priority;
/// Epoch-based wake-up signal for idle workers
pub mod signal;

pub use breadth::{breadth_first, breadth_first_unpruned};
pub use capability::{Explorable, Identifiable, Prioritized, Scored, Successors};
pub use driver::{PathDriver, PathSearch, PathState};
pub use outcome::{SearchOutcome, SearchStats};
pub use parallel::ParallelBfs;
pub use priority::{search_all_best, search_all_best_unpruned, search_best, search_best_unpruned};
