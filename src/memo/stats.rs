use std::fmt;

/// Work counters kept by a memo solver over its whole lifetime
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Calls made to [`Solvable::resolve`](crate::memo::Solvable::resolve)
    pub resolutions: usize,
    /// Requests answered straight from the cache
    pub cache_hits: usize,
    /// Re-entrant requests answered with the placeholder value
    pub cycles_broken: usize,
    /// Deferred units of work executed (task-based solver only)
    pub units_run: usize,
}

impl fmt::Display for MemoStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} resolutions, {} cache hits, {} cycles broken, {} units run",
            self.resolutions, self.cache_hits, self.cycles_broken, self.units_run
        )
    }
}
