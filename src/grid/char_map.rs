//! Character grids as search spaces
//!
//! A [`CharMap`] holds one byte per cell. Cells whose byte is in the
//! blocking set cannot be entered, and everything outside the grid counts as
//! blocking. Moves go to the four orthogonal neighbours, or to all eight
//! when diagonals are allowed, and cost their Manhattan length.

use bitvec::prelude::{BitArr, bitarr};
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::grid::distance::distance_fill;
use crate::io::configuration::{DEFAULT_BLOCKING, END_MARKER, OPEN_CELL, START_MARKER};
use crate::io::error::{Result, SearchError, invalid_input, invalid_parameter};
use crate::search::driver::PathDriver;

/// Row and column offsets of the four orthogonal neighbours
pub const ORTHOGONAL: [[i32; 2]; 4] = [[-1, 0], [0, 1], [1, 0], [0, -1]];

/// Row and column offsets of all eight neighbours
pub const EIGHT_WAY: [[i32; 2]; 8] = [
    [-1, 0],
    [-1, 1],
    [0, 1],
    [1, 1],
    [1, 0],
    [1, -1],
    [0, -1],
    [-1, -1],
];

type ByteSet = BitArr!(for 256);

/// Rectangular grid of byte cells with a movement rule
#[derive(Clone, Debug)]
pub struct CharMap {
    cells: Array2<u8>,
    blocking: ByteSet,
    allow_diagonals: bool,
}

/// Manhattan distance between two cells
pub const fn manhattan(a: [i32; 2], b: [i32; 2]) -> u64 {
    (a[0].abs_diff(b[0]) + a[1].abs_diff(b[1])) as u64
}

impl CharMap {
    /// Build a map from equally long text lines
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are no lines or the first line is empty
    /// - A line contains a non-ASCII character
    /// - A line differs in length from the first
    pub fn from_lines<L: AsRef<str>>(lines: &[L]) -> Result<Self> {
        let Some(first) = lines.first() else {
            return Err(invalid_input(0, &"map has no lines"));
        };
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(invalid_input(0, &"map rows must not be empty"));
        }

        let mut bytes = Vec::with_capacity(cols * lines.len());
        for (line_number, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if let Some(column) = line.find(|c: char| !c.is_ascii()) {
                return Err(invalid_input(
                    line_number,
                    &format!("non-ASCII character at byte {column}; maps hold one byte per cell"),
                ));
            }
            let line = line.as_bytes();
            if line.len() != cols {
                return Err(invalid_input(
                    line_number,
                    &format!("expected {cols} columns, found {}", line.len()),
                ));
            }
            bytes.extend_from_slice(line);
        }

        let cells = Array2::from_shape_vec((lines.len(), cols), bytes)
            .map_err(|error| invalid_input(0, &error))?;
        Ok(Self::from_cells(cells))
    }

    /// Wrap an existing byte grid, blocking on `#`
    pub fn from_cells(cells: Array2<u8>) -> Self {
        let mut blocking = bitarr![0; 256];
        blocking.set(usize::from(DEFAULT_BLOCKING), true);
        Self {
            cells,
            blocking,
            allow_diagonals: false,
        }
    }

    /// Generate a reproducible random map with start and end markers in opposite corners
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or `wall_density` is outside `[0, 1]`
    pub fn random(rows: usize, cols: usize, wall_density: f64, seed: u64) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(invalid_parameter(
                "dimensions",
                &format!("{rows}x{cols}"),
                &"maps need at least one row and one column",
            ));
        }
        if !(0.0..=1.0).contains(&wall_density) {
            return Err(invalid_parameter(
                "wall_density",
                &wall_density,
                &"density must lie between 0 and 1",
            ));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut cells = Array2::from_shape_simple_fn((rows, cols), || {
            if rng.random_bool(wall_density) {
                DEFAULT_BLOCKING
            } else {
                OPEN_CELL
            }
        });
        if let Some(start) = cells.get_mut([0, 0]) {
            *start = START_MARKER;
        }
        if let Some(end) = cells.get_mut([rows - 1, cols - 1]) {
            *end = END_MARKER;
        }
        Ok(Self::from_cells(cells))
    }

    /// Replace the blocking set; an empty slice keeps `#` as the only blocker
    #[must_use]
    pub fn with_blocking(mut self, blocking: &[u8]) -> Self {
        if blocking.is_empty() {
            return self;
        }
        self.blocking = bitarr![0; 256];
        for &byte in blocking {
            self.blocking.set(usize::from(byte), true);
        }
        self
    }

    /// Allow or forbid diagonal moves
    #[must_use]
    pub const fn with_diagonals(mut self, allow: bool) -> Self {
        self.allow_diagonals = allow;
        self
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Underlying byte grid
    pub const fn cells(&self) -> &Array2<u8> {
        &self.cells
    }

    /// Array index of a cell, if it lies inside the grid
    pub fn index(&self, cell: [i32; 2]) -> Option<[usize; 2]> {
        let row = usize::try_from(cell[0]).ok()?;
        let col = usize::try_from(cell[1]).ok()?;
        (row < self.rows() && col < self.cols()).then_some([row, col])
    }

    /// Byte at `cell`, or `None` outside the grid
    pub fn get(&self, cell: [i32; 2]) -> Option<u8> {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Whether `byte` blocks movement
    pub fn is_blocking(&self, byte: u8) -> bool {
        self.blocking.get(usize::from(byte)).as_deref() == Some(&true)
    }

    /// Whether `cell` lies inside the grid and can be entered
    pub fn is_open(&self, cell: [i32; 2]) -> bool {
        self.get(cell).is_some_and(|byte| !self.is_blocking(byte))
    }

    /// First cell in row-major order holding `marker`
    pub fn find(&self, marker: u8) -> Option<[i32; 2]> {
        self.cells
            .indexed_iter()
            .find(|&(_, &byte)| byte == marker)
            .map(|((row, col), _)| [row as i32, col as i32])
    }

    /// Like [`find`](Self::find), reporting a missing marker as an error
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingMarker`] if no cell holds `marker`
    pub fn locate(&self, marker: u8) -> Result<[i32; 2]> {
        self.find(marker).ok_or(SearchError::MissingMarker {
            marker: char::from(marker),
        })
    }

    /// Neighbour offsets permitted by the movement rule
    pub fn directions(&self) -> &'static [[i32; 2]] {
        if self.allow_diagonals {
            &EIGHT_WAY
        } else {
            &ORTHOGONAL
        }
    }

    /// Steps from `start` to every reachable cell
    pub fn distances_from(&self, start: [i32; 2]) -> Array2<Option<u64>> {
        let shape = (self.rows(), self.cols());
        let Some(origin) = self.index(start) else {
            return Array2::from_elem(shape, None);
        };

        distance_fill(shape, origin, move |[row, col]| {
            let from = [row as i32, col as i32];
            self.directions()
                .iter()
                .map(move |d| [from[0] + d[0], from[1] + d[1]])
                .filter(move |&cell| self.is_open(cell))
                .filter_map(move |cell| self.index(cell))
        })
    }

    /// Render the map back to text lines
    pub fn to_lines(&self) -> Vec<String> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&byte| char::from(byte)).collect())
            .collect()
    }
}

impl PathDriver for CharMap {
    type Node = [i32; 2];
    type Cost = u64;

    fn cost(&self, from: &[i32; 2], to: &[i32; 2]) -> u64 {
        manhattan(*from, *to)
    }

    fn neighbors(&self, from: &[i32; 2], out: &mut Vec<[i32; 2]>) {
        out.extend(
            self.directions()
                .iter()
                .map(|d| [from[0] + d[0], from[1] + d[1]])
                .filter(|&cell| self.is_open(cell)),
        );
    }

    fn estimate(&self, from: &[i32; 2], goal: &[i32; 2]) -> u64 {
        manhattan(*from, *goal)
    }
}
