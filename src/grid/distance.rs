use std::collections::VecDeque;

use ndarray::Array2;

/// Unit-cost flood fill from `start` over a grid of the given `(rows, cols)` shape
///
/// `moves` lists the cells reachable in one step from a cell. Cells outside
/// the grid are ignored. Each cell receives the number of steps on the
/// shortest route from `start`; unreachable cells stay `None`.
pub fn distance_fill<F, I>(shape: (usize, usize), start: [usize; 2], mut moves: F) -> Array2<Option<u64>>
where
    F: FnMut([usize; 2]) -> I,
    I: IntoIterator<Item = [usize; 2]>,
{
    let mut distances = Array2::from_elem(shape, None);
    let Some(origin) = distances.get_mut(start) else {
        return distances;
    };
    *origin = Some(0);

    let mut queue = VecDeque::from([(start, 0_u64)]);
    while let Some((cell, distance)) = queue.pop_front() {
        for target in moves(cell) {
            if let Some(slot) = distances.get_mut(target).filter(|slot| slot.is_none()) {
                *slot = Some(distance + 1);
                queue.push_back((target, distance + 1));
            }
        }
    }

    distances
}

/// Largest finite distance in a filled grid together with its cell
pub fn farthest(distances: &Array2<Option<u64>>) -> Option<([usize; 2], u64)> {
    distances
        .indexed_iter()
        .filter_map(|((row, col), distance)| distance.map(|d| ([row, col], d)))
        .max_by_key(|&(_, distance)| distance)
}

/// Number of cells a fill reached, including the start
pub fn reached(distances: &Array2<Option<u64>>) -> usize {
    distances.iter().filter(|distance| distance.is_some()).count()
}
