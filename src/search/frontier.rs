use std::cmp::{Ordering, Reverse};
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

/// Heap entry ordered by priority, then by insertion order
struct FrontierEntry<S, P> {
    priority: P,
    sequence: u64,
    state: S,
}

impl<S, P: Ord> PartialEq for FrontierEntry<S, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S, P: Ord> Eq for FrontierEntry<S, P> {}

impl<S, P: Ord> PartialOrd for FrontierEntry<S, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, P: Ord> Ord for FrontierEntry<S, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Min-priority work queue for best-first search
///
/// Several entries may share an identity. Among equal priorities, states
/// leave in the order they were pushed.
pub struct Frontier<S, P> {
    heap: BinaryHeap<Reverse<FrontierEntry<S, P>>>,
    pushed: u64,
}

impl<S, P: Ord> Default for Frontier<S, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, P: Ord> Frontier<S, P> {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushed: 0,
        }
    }

    /// Queue a state under the given priority
    pub fn push(&mut self, state: S, priority: P) {
        let sequence = self.pushed;
        self.pushed += 1;
        self.heap.push(Reverse(FrontierEntry {
            priority,
            sequence,
            state,
        }));
    }

    /// Remove the state with the smallest priority
    pub fn pop(&mut self) -> Option<(S, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.state, entry.priority))
    }

    /// Number of queued states
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no states are queued
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of pushes over the frontier's lifetime
    pub const fn total_pushed(&self) -> u64 {
        self.pushed
    }
}

/// Best known score per identity
///
/// Entries only ever improve: a score is recorded when the identity is new
/// or when it is strictly lower than the one already held.
pub struct DominanceTable<I, C> {
    best: HashMap<I, C>,
}

impl<I: Eq + Hash, C: Ord> Default for DominanceTable<I, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Eq + Hash, C: Ord> DominanceTable<I, C> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            best: HashMap::new(),
        }
    }

    /// Create an empty table with room for `capacity` identities
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            best: HashMap::with_capacity(capacity),
        }
    }

    /// Record `score` for `identity` if it improves on what is known
    ///
    /// Returns `false` when an equal or better score was already recorded,
    /// meaning the candidate is dominated and should be discarded.
    pub fn admit(&mut self, identity: I, score: C) -> bool {
        match self.best.entry(identity) {
            Entry::Occupied(mut entry) => {
                if score < *entry.get() {
                    entry.insert(score);
                    true
                } else {
                    false
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(score);
                true
            }
        }
    }

    /// Best score recorded for `identity`
    pub fn best(&self, identity: &I) -> Option<&C> {
        self.best.get(identity)
    }

    /// Number of identities seen
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Whether no identity has been recorded
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
