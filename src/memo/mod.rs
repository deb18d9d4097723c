//! Memoized solvers for recursively defined problems
//!
//! Both solvers share the [`Solvable`] contract and keep a permanent cache
//! per instance. They differ in execution model and in how they treat
//! dependency cycles.

/// Worklist solver without cycle detection
pub mod callback;
/// Single-threaded LIFO unit-of-work executor
pub mod executor;
/// Problem contract and resolution outcomes
pub mod resolution;
/// Solver work counters
pub mod stats;
/// Unit-of-work solver with placeholder cycle breaking
pub mod task;

pub use callback::CallbackMemoSolver;
pub use resolution::{Delegation, Resolution, Solvable};
pub use stats::MemoStats;
pub use task::TaskMemoSolver;
