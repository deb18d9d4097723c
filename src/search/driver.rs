//! Point-to-point path search driven by a separate driver object
//!
//! A [`PathDriver`] knows how to move between nodes and what each move costs.
//! [`PathSearch`] pairs a driver with a goal and implements the search
//! capabilities over plain [`PathState`] records, so the states themselves
//! carry no behaviour and no reference back to the driver.

use std::hash::Hash;
use std::ops::Add;

use num_traits::Zero;

use crate::search::capability::{Identifiable, Prioritized, Scored, Successors};
use crate::search::outcome::SearchOutcome;
use crate::search::priority::{search_all_best, search_best};

/// Movement rules for a point-to-point search
pub trait PathDriver {
    /// Location in the searched space
    type Node: Clone + Eq + Hash;
    /// Additive, non-negative step cost
    type Cost: Copy + Ord + Zero + Add<Output = Self::Cost>;

    /// Cost of stepping from `from` directly to `to`
    fn cost(&self, from: &Self::Node, to: &Self::Node) -> Self::Cost;

    /// Append every node reachable in one step from `from`
    fn neighbors(&self, from: &Self::Node, out: &mut Vec<Self::Node>);

    /// Lower bound on the remaining cost from `from` to `goal`
    ///
    /// Defaults to zero, which turns the search into uniform-cost search.
    /// The default is not the direct step cost `cost(from, goal)`: that
    /// overestimates whenever several short steps cost less than one long
    /// one. Drivers whose direct cost is a lower bound can return it here.
    fn estimate(&self, _from: &Self::Node, _goal: &Self::Node) -> Self::Cost {
        Self::Cost::zero()
    }

    /// Whether `node` satisfies the goal
    fn reached_goal(&self, node: &Self::Node, goal: &Self::Node) -> bool {
        node == goal
    }
}

/// A node together with the cost accumulated reaching it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathState<N, C> {
    /// Current location
    pub node: N,
    /// Total cost from the start
    pub cost: C,
}

/// A driver bound to a goal, searchable by the priority engine
pub struct PathSearch<'d, D: PathDriver> {
    driver: &'d D,
    goal: D::Node,
}

impl<'d, D: PathDriver> PathSearch<'d, D> {
    /// Search towards `goal` using `driver`'s movement rules
    pub const fn new(driver: &'d D, goal: D::Node) -> Self {
        Self { driver, goal }
    }

    /// Goal node of this search
    pub const fn goal(&self) -> &D::Node {
        &self.goal
    }

    /// Zero-cost state at `start`
    pub fn start(start: D::Node) -> PathState<D::Node, D::Cost> {
        PathState {
            node: start,
            cost: D::Cost::zero(),
        }
    }

    /// Cheapest way to reach the goal from `start`
    pub fn shortest(&self, start: D::Node) -> SearchOutcome<Option<PathState<D::Node, D::Cost>>> {
        search_best(self, Self::start(start))
    }

    /// Every goal state reachable at the optimal cost
    ///
    /// Goal states are deduplicated by node, so a driver whose goal test
    /// accepts several nodes yields one state per accepted node.
    pub fn all_shortest(&self, start: D::Node) -> SearchOutcome<Vec<PathState<D::Node, D::Cost>>> {
        search_all_best(self, Self::start(start))
    }
}

impl<D: PathDriver> Successors for PathSearch<'_, D> {
    type State = PathState<D::Node, D::Cost>;

    fn successors(&self, state: &Self::State, out: &mut Vec<Self::State>) {
        let mut nodes = Vec::new();
        self.driver.neighbors(&state.node, &mut nodes);
        out.extend(nodes.into_iter().map(|node| {
            let cost = state.cost + self.driver.cost(&state.node, &node);
            PathState { node, cost }
        }));
    }
}

impl<D: PathDriver> Scored for PathSearch<'_, D> {
    type Score = D::Cost;

    fn score(&self, state: &Self::State) -> D::Cost {
        state.cost
    }
}

impl<D: PathDriver> Identifiable for PathSearch<'_, D> {
    type Identity = D::Node;

    fn identity(&self, state: &Self::State) -> D::Node {
        state.node.clone()
    }
}

impl<D: PathDriver> Prioritized for PathSearch<'_, D> {
    type Priority = D::Cost;

    fn priority(&self, state: &Self::State) -> D::Cost {
        state.cost + self.driver.estimate(&state.node, &self.goal)
    }

    fn is_end(&self, state: &Self::State) -> bool {
        self.driver.reached_goal(&state.node, &self.goal)
    }
}
