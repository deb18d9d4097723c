//! Batched breadth-first optimisation on a pool of worker threads
//!
//! Workers share one FIFO queue, one dominance table and an active-worker
//! counter. A worker that finds the queue empty leaves the active set; the
//! last one to leave declares quiescence and closes the [`ReadySignal`] so
//! every idle worker returns. Queue contents, the counter and the done flag
//! are only touched under the same lock, which makes the "last worker"
//! decision exact.

use std::collections::VecDeque;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;

use tracing::{debug, trace};

use crate::io::configuration::{DEFAULT_BATCH_SIZE, DEFAULT_DOMINANCE_CAPACITY, FALLBACK_WORKERS};
use crate::io::error::{Result, SearchError, invalid_parameter};
use crate::search::capability::{Explorable, Identifiable, Scored};
use crate::search::frontier::DominanceTable;
use crate::search::outcome::{SearchOutcome, SearchStats};
use crate::search::signal::{ReadySignal, Wake};

/// Parallel breadth-first search configuration
#[derive(Clone, Copy, Debug)]
pub struct ParallelBfs {
    workers: Option<usize>,
    batch_size: usize,
    table_capacity: usize,
}

impl Default for ParallelBfs {
    fn default() -> Self {
        Self::new()
    }
}

struct Pending<S> {
    queue: VecDeque<S>,
    active: usize,
    done: bool,
}

struct Shared<S, F, I, C> {
    pending: Mutex<Pending<S>>,
    dominance: Option<(F, Mutex<DominanceTable<I, C>>)>,
    ready: ReadySignal,
    batch_size: usize,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ParallelBfs {
    /// One worker per available hardware thread, default batch size
    pub const fn new() -> Self {
        Self {
            workers: None,
            batch_size: DEFAULT_BATCH_SIZE,
            table_capacity: DEFAULT_DOMINANCE_CAPACITY,
        }
    }

    /// Use exactly `workers` threads
    #[must_use]
    pub const fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Drain at most `batch_size` states from the shared queue per round
    #[must_use]
    pub const fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Reserve room for `capacity` identities in the shared dominance table
    #[must_use]
    pub const fn table_capacity(mut self, capacity: usize) -> Self {
        self.table_capacity = capacity;
        self
    }

    /// Number of worker threads a run will start
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(|| {
            thread::available_parallelism().map_or(FALLBACK_WORKERS, NonZeroUsize::get)
        })
    }

    /// Explore every reachable state, skipping identities already seen at an equal or better score
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The worker count or batch size is zero
    /// - A worker panics while generating successors or comparing states
    pub fn run<P>(&self, problem: &P, initial: P::State) -> Result<SearchOutcome<P::State>>
    where
        P: Explorable + Identifiable + Scored + Sync,
        P::State: Clone + Send,
        P::Identity: Send,
        P::Score: Send,
    {
        self.execute(
            problem,
            initial,
            Some(|state: &P::State| (problem.identity(state), problem.score(state))),
        )
    }

    /// Explore every reachable state without duplicate pruning
    ///
    /// Only terminates when the reachable space is a finite tree or DAG.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The worker count or batch size is zero
    /// - A worker panics while generating successors or comparing states
    pub fn run_unpruned<P>(&self, problem: &P, initial: P::State) -> Result<SearchOutcome<P::State>>
    where
        P: Explorable + Sync,
        P::State: Clone + Send,
    {
        self.execute(problem, initial, None::<fn(&P::State) -> ((), ())>)
    }

    fn validate(&self) -> Result<usize> {
        let workers = self.worker_count();
        if workers == 0 {
            return Err(invalid_parameter(
                "workers",
                &workers,
                &"at least one worker is required",
            ));
        }
        if self.batch_size == 0 {
            return Err(invalid_parameter(
                "batch_size",
                &self.batch_size,
                &"workers must be able to take at least one state per batch",
            ));
        }
        Ok(workers)
    }

    fn execute<P, F, I, C>(
        &self,
        problem: &P,
        initial: P::State,
        keyed: Option<F>,
    ) -> Result<SearchOutcome<P::State>>
    where
        P: Explorable + Sync,
        P::State: Clone + Send,
        F: Fn(&P::State) -> (I, C) + Sync,
        I: Eq + Hash + Send,
        C: Ord + Send,
    {
        let workers = self.validate()?;

        let dominance = keyed.map(|keyed| {
            let mut table = DominanceTable::with_capacity(self.table_capacity);
            let (identity, score) = keyed(&initial);
            table.admit(identity, score);
            (keyed, Mutex::new(table))
        });

        let shared = Shared {
            pending: Mutex::new(Pending {
                queue: VecDeque::from([initial.clone()]),
                active: workers,
                done: false,
            }),
            dominance,
            ready: ReadySignal::new(),
            batch_size: self.batch_size,
        };

        let joined: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    let shared = &shared;
                    scope.spawn(move || work(problem, shared))
                })
                .collect();
            handles.into_iter().map(|handle| handle.join()).collect()
        });

        let mut best = initial;
        let mut stats = SearchStats {
            enqueued: 1,
            ..SearchStats::default()
        };
        for (worker, result) in joined.into_iter().enumerate() {
            let (local_best, local_stats) =
                result.map_err(|_payload| SearchError::WorkerPanicked { worker })?;
            stats += local_stats;
            if let Some(candidate) = local_best {
                if problem.is_better(&candidate, &best) {
                    best = candidate;
                }
            }
        }

        debug!(%stats, workers, batch_size = self.batch_size, "parallel breadth-first search reached quiescence");
        Ok(SearchOutcome::new(best, stats))
    }
}

/// Releases the other workers if this one unwinds
struct CloseOnPanic<'a, S> {
    pending: &'a Mutex<Pending<S>>,
    ready: &'a ReadySignal,
}

impl<S> Drop for CloseOnPanic<'_, S> {
    fn drop(&mut self) {
        if thread::panicking() {
            let mut pending = lock(self.pending);
            pending.queue.clear();
            pending.done = true;
            drop(pending);
            self.ready.close();
        }
    }
}

fn work<P, F, I, C>(problem: &P, shared: &Shared<P::State, F, I, C>) -> (Option<P::State>, SearchStats)
where
    P: Explorable,
    F: Fn(&P::State) -> (I, C),
    I: Eq + Hash,
    C: Ord,
{
    let _guard = CloseOnPanic {
        pending: &shared.pending,
        ready: &shared.ready,
    };

    let mut best: Option<P::State> = None;
    let mut stats = SearchStats::default();
    let mut batch = Vec::with_capacity(shared.batch_size);
    let mut candidates = Vec::new();
    let mut keyed = Vec::new();

    while take_batch(shared, &mut batch) {
        for state in batch.drain(..) {
            problem.successors(&state, &mut candidates);
            stats.expanded += 1;
            if best
                .as_ref()
                .is_none_or(|incumbent| problem.is_better(&state, incumbent))
            {
                best = Some(state);
            }
        }

        // Identities and scores are computed before the table lock is taken
        if let Some((key_of, table)) = &shared.dominance {
            keyed.extend(candidates.drain(..).map(|state| {
                let (identity, score) = key_of(&state);
                (state, identity, score)
            }));

            let mut table = lock(table);
            for (state, identity, score) in keyed.drain(..) {
                if table.admit(identity, score) {
                    candidates.push(state);
                } else {
                    stats.pruned_by_dominance += 1;
                }
            }
        }

        if candidates.is_empty() {
            continue;
        }

        let mut pending = lock(&shared.pending);
        if pending.done {
            candidates.clear();
            break;
        }
        stats.enqueued += candidates.len();
        pending.queue.extend(candidates.drain(..));
        drop(pending);
        shared.ready.set();
    }

    (best, stats)
}

/// Fill `batch` from the shared queue, blocking while other workers may still produce work
///
/// Returns `false` once the run is quiescent or has been closed by a failed worker.
fn take_batch<S, F, I, C>(shared: &Shared<S, F, I, C>, batch: &mut Vec<S>) -> bool {
    let mut pending = lock(&shared.pending);
    loop {
        if pending.done {
            return false;
        }

        let take = pending.queue.len().min(shared.batch_size);
        if take > 0 {
            batch.extend(pending.queue.drain(..take));
            return true;
        }

        pending.active -= 1;
        if pending.active == 0 {
            pending.done = true;
            drop(pending);
            trace!("last active worker found the queue empty");
            shared.ready.close();
            return false;
        }

        // Subscribe before releasing the queue so a push after this point always wakes us
        let epoch = shared.ready.subscribe();
        drop(pending);
        trace!("worker idle");
        if shared.ready.wait(epoch) == Wake::Closed {
            return false;
        }

        pending = lock(&shared.pending);
        pending.active += 1;
    }
}
