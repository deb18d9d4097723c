//! Iterative memoized evaluation of recursively defined problems
//!
//! The dependency graph is walked with an explicit stack of pending states
//! rather than native recursion, so deep dependency chains cannot overflow
//! the call stack. A state is popped, each of its required sub-states is
//! looked up, resolved or parked, and the state is either combined or pushed
//! back underneath the dependencies it is still waiting on.
//!
//! There is no cycle detection. A state whose unresolved dependencies
//! include itself, directly or transitively, never completes and the solve
//! does not return; callers must only submit problems whose dependency
//! graph bottoms out in immediate values.

use std::collections::HashMap;

use tracing::debug;

use crate::memo::resolution::{Delegation, Resolution, Solvable};
use crate::memo::stats::MemoStats;

/// Worklist-driven memo solver with a permanent per-instance cache
pub struct CallbackMemoSolver<S: Solvable> {
    solutions: HashMap<S, S::Value>,
    parked: HashMap<S, Delegation<S, S::Value>>,
    stats: MemoStats,
}

impl<S: Solvable> Default for CallbackMemoSolver<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Solvable> CallbackMemoSolver<S> {
    /// Create a solver with an empty cache
    pub fn new() -> Self {
        Self {
            solutions: HashMap::new(),
            parked: HashMap::new(),
            stats: MemoStats::default(),
        }
    }

    /// Fully resolve `state`, reusing every value solved by earlier calls
    ///
    /// Each distinct state is resolved at most once over the solver's
    /// lifetime.
    pub fn solve(&mut self, state: &S) -> S::Value {
        if let Some(value) = self.solutions.get(state) {
            self.stats.cache_hits += 1;
            return value.clone();
        }

        let resolutions_before = self.stats.resolutions;
        if !self.parked.contains_key(state) {
            self.stats.resolutions += 1;
            match state.resolve() {
                Resolution::Immediate(value) => {
                    self.solutions.insert(state.clone(), value.clone());
                    return value;
                }
                Resolution::Delegate(delegation) => {
                    self.parked.insert(state.clone(), delegation);
                }
            }
        }

        let mut stack = vec![state.clone()];
        let mut missing = Vec::new();

        while let Some(current) = stack.pop() {
            if self.solutions.contains_key(&current) {
                continue;
            }
            let Some(delegation) = self.parked.remove(&current) else {
                continue;
            };

            let mut values = Vec::with_capacity(delegation.required().len());
            for required in delegation.required() {
                if let Some(value) = self.solutions.get(required) {
                    self.stats.cache_hits += 1;
                    values.push(value.clone());
                    continue;
                }

                if *required != current && !self.parked.contains_key(required) {
                    self.stats.resolutions += 1;
                    match required.resolve() {
                        Resolution::Immediate(value) => {
                            self.solutions.insert(required.clone(), value.clone());
                            values.push(value);
                            continue;
                        }
                        Resolution::Delegate(inner) => {
                            self.parked.insert(required.clone(), inner);
                        }
                    }
                }
                missing.push(required.clone());
            }

            if missing.is_empty() {
                let value = delegation.combine(values);
                self.solutions.insert(current, value);
            } else {
                // Retry once everything it is waiting on has been combined
                self.parked.insert(current.clone(), delegation);
                stack.push(current);
                stack.extend(missing.drain(..));
            }
        }

        debug!(
            resolved = self.stats.resolutions - resolutions_before,
            cached = self.solutions.len(),
            "callback memo solve finished"
        );

        match self.solutions.get(state) {
            Some(value) => value.clone(),
            None => unreachable!("the worklist only empties once the requested state is combined"),
        }
    }

    /// Value already solved for `state`
    pub fn cached(&self, state: &S) -> Option<&S::Value> {
        self.solutions.get(state)
    }

    /// Number of solved states
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Whether nothing has been solved yet
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Lifetime work counters
    pub const fn stats(&self) -> MemoStats {
        self.stats
    }
}
