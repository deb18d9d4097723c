use std::fmt;
use std::ops::AddAssign;

/// Work counters collected while a search runs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States whose successors were generated
    pub expanded: usize,
    /// States pushed onto the frontier or queue, including the initial state
    pub enqueued: usize,
    /// Successors discarded because they already exceed the best terminal score
    pub pruned_by_bound: usize,
    /// Successors discarded because their identity was known at an equal or better score
    pub pruned_by_dominance: usize,
}

impl AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.expanded += other.expanded;
        self.enqueued += other.enqueued;
        self.pruned_by_bound += other.pruned_by_bound;
        self.pruned_by_dominance += other.pruned_by_dominance;
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} expanded, {} enqueued, {} pruned by bound, {} pruned by dominance",
            self.expanded, self.enqueued, self.pruned_by_bound, self.pruned_by_dominance
        )
    }
}

/// Result of a search call together with its work counters
#[derive(Clone, Debug)]
pub struct SearchOutcome<T> {
    /// What the search produced
    pub solution: T,
    /// How much work it took
    pub stats: SearchStats,
}

impl<T> SearchOutcome<T> {
    /// Pair a solution with its counters
    pub const fn new(solution: T, stats: SearchStats) -> Self {
        Self { solution, stats }
    }

    /// Discard the counters
    pub fn into_solution(self) -> T {
        self.solution
    }

    /// Transform the solution, keeping the counters
    pub fn map<U, F>(self, f: F) -> SearchOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        SearchOutcome {
            solution: f(self.solution),
            stats: self.stats,
        }
    }
}
