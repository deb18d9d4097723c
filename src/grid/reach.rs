use std::cmp::Reverse;

use crate::grid::char_map::{CharMap, manhattan};
use crate::search::capability::{Explorable, Identifiable, Scored, Successors};
use crate::search::driver::PathDriver;

/// A cell reached after a number of unit steps
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reach {
    /// Cell reached
    pub cell: [i32; 2],
    /// Steps taken from the origin
    pub steps: u64,
}

/// Breadth-first search for the reachable cell farthest from an origin
///
/// Distance is measured as the Manhattan distance between the cell and the
/// origin, so the answer depends only on which cells are reachable and not
/// on the order they are visited in. States are deduplicated by cell with
/// fewer steps dominating. Equally distant cells are ordered by position.
pub struct FarthestReach<'m> {
    map: &'m CharMap,
    origin: [i32; 2],
}

impl<'m> FarthestReach<'m> {
    /// Explore `map` from `origin` under the map's own movement rule
    pub const fn new(map: &'m CharMap, origin: [i32; 2]) -> Self {
        Self { map, origin }
    }

    /// Zero-step state at the origin
    pub const fn start(&self) -> Reach {
        Reach {
            cell: self.origin,
            steps: 0,
        }
    }

    /// Manhattan distance from the origin to the state's cell
    pub const fn span(&self, state: &Reach) -> u64 {
        manhattan(self.origin, state.cell)
    }
}

impl Successors for FarthestReach<'_> {
    type State = Reach;

    fn successors(&self, state: &Reach, out: &mut Vec<Reach>) {
        let mut cells = Vec::new();
        self.map.neighbors(&state.cell, &mut cells);
        out.extend(cells.into_iter().map(|cell| Reach {
            cell,
            steps: state.steps + 1,
        }));
    }
}

impl Identifiable for FarthestReach<'_> {
    type Identity = [i32; 2];

    fn identity(&self, state: &Reach) -> [i32; 2] {
        state.cell
    }
}

impl Scored for FarthestReach<'_> {
    type Score = u64;

    fn score(&self, state: &Reach) -> u64 {
        state.steps
    }
}

impl Explorable for FarthestReach<'_> {
    fn is_better(&self, candidate: &Reach, incumbent: &Reach) -> bool {
        (self.span(candidate), Reverse(candidate.cell)) > (self.span(incumbent), Reverse(incumbent.cell))
    }
}
