//! Exhaustive breadth-first optimisation
//!
//! Visits the whole reachable space in FIFO order and reports the best state
//! seen according to [`Explorable::is_better`]. There is no goal test and no
//! early exit.

use std::collections::VecDeque;
use std::hash::Hash;

use tracing::debug;

use crate::search::capability::{Explorable, Identifiable, Scored};
use crate::search::frontier::DominanceTable;
use crate::search::outcome::{SearchOutcome, SearchStats};

/// Explore every reachable state, skipping identities already seen at an equal or better score
pub fn breadth_first<P>(problem: &P, initial: P::State) -> SearchOutcome<P::State>
where
    P: Explorable + Identifiable + Scored,
{
    run(
        problem,
        initial,
        Some(|state: &P::State| (problem.identity(state), problem.score(state))),
    )
}

/// Explore every reachable state without duplicate pruning
///
/// Only terminates when the reachable space is a finite tree or DAG.
pub fn breadth_first_unpruned<P>(problem: &P, initial: P::State) -> SearchOutcome<P::State>
where
    P: Explorable,
{
    run(problem, initial, None::<fn(&P::State) -> ((), ())>)
}

fn run<P, I, C, F>(problem: &P, initial: P::State, keyed: Option<F>) -> SearchOutcome<P::State>
where
    P: Explorable,
    I: Eq + Hash,
    C: Ord,
    F: Fn(&P::State) -> (I, C),
{
    let mut stats = SearchStats::default();
    let mut dominance = keyed.map(|f| (f, DominanceTable::new()));
    let mut queue = VecDeque::new();
    let mut successors = Vec::new();

    if let Some((keyed, table)) = dominance.as_mut() {
        let (identity, score) = keyed(&initial);
        table.admit(identity, score);
    }

    problem.successors(&initial, &mut successors);
    stats.expanded += 1;
    stats.enqueued += 1;
    let mut best = initial;
    enqueue_admitted(&mut successors, &mut queue, &mut dominance, &mut stats);

    while let Some(state) = queue.pop_front() {
        problem.successors(&state, &mut successors);
        stats.expanded += 1;
        if problem.is_better(&state, &best) {
            best = state;
        }
        enqueue_admitted(&mut successors, &mut queue, &mut dominance, &mut stats);
    }

    debug!(%stats, "breadth-first search exhausted its queue");
    SearchOutcome::new(best, stats)
}

fn enqueue_admitted<S, I, C, F>(
    successors: &mut Vec<S>,
    queue: &mut VecDeque<S>,
    dominance: &mut Option<(F, DominanceTable<I, C>)>,
    stats: &mut SearchStats,
) where
    I: Eq + Hash,
    C: Ord,
    F: Fn(&S) -> (I, C),
{
    for next in successors.drain(..) {
        if let Some((keyed, table)) = dominance.as_mut() {
            let (identity, score) = keyed(&next);
            if !table.admit(identity, score) {
                stats.pruned_by_dominance += 1;
                continue;
            }
        }
        queue.push_back(next);
        stats.enqueued += 1;
    }
}
