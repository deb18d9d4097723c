//! Memoized evaluation built from deferred units of work
//!
//! Requesting a state schedules a unit that resolves it. A delegating state
//! schedules a combining unit followed by one unit per dependency; because
//! the executor is LIFO, every dependency (and everything it depends on)
//! finishes before the combining unit runs.
//!
//! A state is marked as started when its unit first runs. A request for a
//! state that has started but not yet completed can only come from one of
//! its own dependencies, so it is a cycle: that request is answered with the
//! placeholder value instead of re-entering the state.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::memo::executor::StackExecutor;
use crate::memo::resolution::{Resolution, Solvable};
use crate::memo::stats::MemoStats;

struct Progress<S: Solvable> {
    solutions: HashMap<S, S::Value>,
    started: HashSet<S>,
    placeholder: S::Value,
    stats: MemoStats,
}

impl<S: Solvable> Progress<S> {
    fn value_or_placeholder(&mut self, state: &S) -> S::Value {
        if let Some(value) = self.solutions.get(state) {
            value.clone()
        } else {
            self.stats.cycles_broken += 1;
            self.placeholder.clone()
        }
    }
}

/// Memo solver that breaks dependency cycles with a placeholder value
pub struct TaskMemoSolver<S: Solvable> {
    progress: Progress<S>,
}

impl<S> Default for TaskMemoSolver<S>
where
    S: Solvable,
    S::Value: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> TaskMemoSolver<S>
where
    S: Solvable,
    S::Value: Default,
{
    /// Create a solver whose cycle placeholder is `Value::default()`
    pub fn new() -> Self {
        Self::with_placeholder(S::Value::default())
    }
}

impl<S: Solvable> TaskMemoSolver<S> {
    /// Create a solver answering re-entrant requests with `placeholder`
    pub fn with_placeholder(placeholder: S::Value) -> Self {
        Self {
            progress: Progress {
                solutions: HashMap::new(),
                started: HashSet::new(),
                placeholder,
                stats: MemoStats::default(),
            },
        }
    }

    /// Resolve `state` by draining every unit of work it schedules
    pub fn solve(&mut self, state: &S) -> S::Value {
        if let Some(value) = self.progress.solutions.get(state) {
            self.progress.stats.cache_hits += 1;
            return value.clone();
        }

        let mut executor = StackExecutor::new();
        schedule_resolution(&mut executor, state.clone());
        let units = executor.drain(&mut self.progress);
        self.progress.stats.units_run += units;

        debug!(units, cached = self.progress.solutions.len(), "task memo solve finished");

        // Every started state is combined before the drain returns
        self.progress.value_or_placeholder(state)
    }

    /// Value already solved for `state`
    pub fn cached(&self, state: &S) -> Option<&S::Value> {
        self.progress.solutions.get(state)
    }

    /// Number of solved states
    pub fn len(&self) -> usize {
        self.progress.solutions.len()
    }

    /// Whether nothing has been solved yet
    pub fn is_empty(&self) -> bool {
        self.progress.solutions.is_empty()
    }

    /// Value handed to re-entrant requests
    pub const fn placeholder(&self) -> &S::Value {
        &self.progress.placeholder
    }

    /// Lifetime work counters
    pub const fn stats(&self) -> MemoStats {
        self.progress.stats
    }
}

fn schedule_resolution<'a, S>(executor: &mut StackExecutor<'a, Progress<S>>, state: S)
where
    S: Solvable + 'a,
    S::Value: 'a,
{
    executor.schedule(move |progress, executor| {
        if progress.solutions.contains_key(&state) {
            progress.stats.cache_hits += 1;
            return;
        }
        if !progress.started.insert(state.clone()) {
            return;
        }

        progress.stats.resolutions += 1;
        match state.resolve() {
            Resolution::Immediate(value) => {
                progress.solutions.insert(state, value);
            }
            Resolution::Delegate(delegation) => {
                let required = delegation.required().to_vec();
                executor.schedule(move |progress, _| {
                    let values = delegation
                        .required()
                        .iter()
                        .map(|dependency| progress.value_or_placeholder(dependency))
                        .collect();
                    let value = delegation.combine(values);
                    progress.solutions.insert(state, value);
                });
                // Reversed so dependencies run in the order they were listed
                for dependency in required.into_iter().rev() {
                    schedule_resolution(executor, dependency);
                }
            }
        }
    });
}
