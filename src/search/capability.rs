//! Capability traits a search driver implements over its plain state type
//!
//! States are value records with no behaviour. The driver owns successor
//! generation, scoring and identity, and the engines are generic over the
//! capabilities they need rather than over a base type.

use std::hash::Hash;

/// Successor generation
pub trait Successors {
    /// Plain state record explored by the engines
    type State;

    /// Append every successor of `state` to `out`
    ///
    /// Must not mutate `state`; `out` may already contain entries that belong
    /// to other expansions and must be left in place.
    fn successors(&self, state: &Self::State, out: &mut Vec<Self::State>);
}

/// Accumulated cost of a state
///
/// The score order is the `Ord` implementation and lower is better. Wrap the
/// score in [`std::cmp::Reverse`] to maximise instead.
pub trait Scored: Successors {
    /// Comparable accumulated cost
    type Score: Ord + Clone;

    /// Accumulated cost of reaching `state`
    fn score(&self, state: &Self::State) -> Self::Score;
}

/// Deduplication key of a state
pub trait Identifiable: Successors {
    /// Hashable identity; states sharing it are duplicates of each other
    type Identity: Eq + Hash;

    /// Identity used by the dominance table
    fn identity(&self, state: &Self::State) -> Self::Identity;
}

/// Best-first ordering and goal test
pub trait Prioritized: Scored {
    /// Frontier ordering key; smaller values are expanded first
    type Priority: Ord;

    /// Frontier key of `state`, typically score plus an admissible estimate
    fn priority(&self, state: &Self::State) -> Self::Priority;

    /// Whether `state` satisfies the end condition
    fn is_end(&self, state: &Self::State) -> bool;
}

/// Strict state comparator for exhaustive breadth-first optimisation
pub trait Explorable: Successors {
    /// Whether `candidate` is strictly better than `incumbent`
    fn is_better(&self, candidate: &Self::State, incumbent: &Self::State) -> bool;
}
