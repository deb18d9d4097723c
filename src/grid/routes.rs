use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::grid::char_map::CharMap;
use crate::memo::resolution::{Resolution, Solvable};

/// Count of down/right routes from a cell to a goal, as a memo problem
///
/// Each open cell delegates to the cell below and the cell to its right and
/// sums their counts; the goal counts one route and blocked cells or cells
/// past the goal count none. Equality and hashing ignore the shared map.
#[derive(Clone, Debug)]
pub struct RouteCount {
    map: Rc<CharMap>,
    cell: [i32; 2],
    goal: [i32; 2],
}

impl RouteCount {
    /// Routes from `cell` to `goal` across `map`
    pub const fn new(map: Rc<CharMap>, cell: [i32; 2], goal: [i32; 2]) -> Self {
        Self { map, cell, goal }
    }

    /// Cell this problem starts from
    pub const fn cell(&self) -> [i32; 2] {
        self.cell
    }

    fn moved(&self, offset: [i32; 2]) -> Self {
        Self {
            map: Rc::clone(&self.map),
            cell: [self.cell[0] + offset[0], self.cell[1] + offset[1]],
            goal: self.goal,
        }
    }
}

impl PartialEq for RouteCount {
    fn eq(&self, other: &Self) -> bool {
        self.cell == other.cell && self.goal == other.goal
    }
}

impl Eq for RouteCount {}

impl Hash for RouteCount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.cell.hash(state);
        self.goal.hash(state);
    }
}

impl Solvable for RouteCount {
    type Value = u64;

    fn resolve(&self) -> Resolution<Self, u64> {
        if self.cell == self.goal {
            return Resolution::immediate(1);
        }
        if self.cell[0] > self.goal[0]
            || self.cell[1] > self.goal[1]
            || !self.map.is_open(self.cell)
        {
            return Resolution::immediate(0);
        }
        Resolution::combine(self.moved([1, 0]), self.moved([0, 1]), u64::saturating_add)
    }
}
