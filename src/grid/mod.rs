//! Grid search spaces
//!
//! This module contains:
//! - Character maps usable as path search drivers
//! - Unit-cost distance flood fill
//! - Farthest-cell exploration and route counting over maps

/// Character grid with blocking cells and Manhattan step costs
pub mod char_map;
/// Breadth-first distance fill over grids
pub mod distance;
/// Farthest reachable cell as a breadth-first problem
pub mod reach;
/// Down/right route counting as a memo problem
pub mod routes;

pub use char_map::CharMap;
pub use distance::distance_fill;
pub use reach::{FarthestReach, Reach};
pub use routes::RouteCount;
