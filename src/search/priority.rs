//! Best-first search over a driver-defined state graph
//!
//! The frontier is ordered by [`Prioritized::priority`]. In single-best mode
//! the first terminal state popped is returned, which is optimal whenever the
//! priority never overestimates the remaining cost. In all-best mode the
//! frontier is drained completely and every terminal state tied at the best
//! score is kept, with successors already worse than that score discarded.

use std::cmp::Ordering;
use std::hash::Hash;

use tracing::debug;

use crate::search::capability::{Identifiable, Prioritized};
use crate::search::frontier::{DominanceTable, Frontier};
use crate::search::outcome::{SearchOutcome, SearchStats};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    FirstTerminal,
    AllTied,
}

/// Find one optimal terminal state, pruning duplicates by identity
///
/// `None` means the reachable space was exhausted without meeting the end
/// condition.
pub fn search_best<P>(problem: &P, initial: P::State) -> SearchOutcome<Option<P::State>>
where
    P: Prioritized + Identifiable,
{
    run(
        problem,
        initial,
        Mode::FirstTerminal,
        Some(|state: &P::State| problem.identity(state)),
    )
    .map(|found| found.into_iter().next())
}

/// Find every terminal state tied at the optimal score, pruning duplicates by identity
///
/// An identity reached a second time at an equal score is discarded, so
/// terminal states sharing one identity contribute at most one entry.
pub fn search_all_best<P>(problem: &P, initial: P::State) -> SearchOutcome<Vec<P::State>>
where
    P: Prioritized + Identifiable,
{
    run(
        problem,
        initial,
        Mode::AllTied,
        Some(|state: &P::State| problem.identity(state)),
    )
}

/// Find one optimal terminal state without duplicate pruning
///
/// Terminates only when the reachable space is finite or a terminal state
/// is eventually popped.
pub fn search_best_unpruned<P>(problem: &P, initial: P::State) -> SearchOutcome<Option<P::State>>
where
    P: Prioritized,
{
    run(problem, initial, Mode::FirstTerminal, None::<fn(&P::State)>)
        .map(|found| found.into_iter().next())
}

/// Find every tied optimal terminal state without duplicate pruning
pub fn search_all_best_unpruned<P>(problem: &P, initial: P::State) -> SearchOutcome<Vec<P::State>>
where
    P: Prioritized,
{
    run(problem, initial, Mode::AllTied, None::<fn(&P::State)>)
}

fn run<P, I, F>(
    problem: &P,
    initial: P::State,
    mode: Mode,
    identify: Option<F>,
) -> SearchOutcome<Vec<P::State>>
where
    P: Prioritized,
    I: Eq + Hash,
    F: Fn(&P::State) -> I,
{
    let mut stats = SearchStats::default();
    let mut frontier = Frontier::new();
    let mut dominance = identify.map(|f| (f, DominanceTable::new()));

    if let Some((identify, table)) = dominance.as_mut() {
        table.admit(identify(&initial), problem.score(&initial));
    }
    let priority = problem.priority(&initial);
    frontier.push(initial, priority);
    stats.enqueued += 1;

    let mut threshold: Option<P::Score> = None;
    let mut tied = Vec::new();
    let mut successors = Vec::new();

    while let Some((state, _)) = frontier.pop() {
        if problem.is_end(&state) {
            if mode == Mode::FirstTerminal {
                debug!(%stats, "priority search reached a terminal state");
                return SearchOutcome::new(vec![state], stats);
            }

            let score = problem.score(&state);
            match threshold.as_ref().map(|best| score.cmp(best)) {
                None | Some(Ordering::Less) => {
                    tied.clear();
                    tied.push(state);
                    threshold = Some(score);
                }
                Some(Ordering::Equal) => tied.push(state),
                Some(Ordering::Greater) => {}
            }
            continue;
        }

        stats.expanded += 1;
        successors.clear();
        problem.successors(&state, &mut successors);

        for next in successors.drain(..) {
            let score = problem.score(&next);
            if threshold.as_ref().is_some_and(|best| score > *best) {
                stats.pruned_by_bound += 1;
                continue;
            }

            if let Some((identify, table)) = dominance.as_mut() {
                if !table.admit(identify(&next), score) {
                    stats.pruned_by_dominance += 1;
                    continue;
                }
            }

            let priority = problem.priority(&next);
            frontier.push(next, priority);
            stats.enqueued += 1;
        }
    }

    debug!(%stats, solutions = tied.len(), "priority search drained its frontier");
    SearchOutcome::new(tied, stats)
}
