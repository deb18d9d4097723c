//! Engine constants and runtime configuration defaults

// Parallel breadth-first search
/// Maximum number of states a worker drains from the shared queue at once
pub const DEFAULT_BATCH_SIZE: usize = 2000;
/// Initial capacity reserved for the shared dominance table
pub const DEFAULT_DOMINANCE_CAPACITY: usize = 1 << 16;
/// Worker count used when hardware parallelism cannot be queried
pub const FALLBACK_WORKERS: usize = 1;

// Character map conventions
/// Character that blocks movement when no blocking set is given
pub const DEFAULT_BLOCKING: u8 = b'#';
/// Character marking the start cell in map files
pub const START_MARKER: u8 = b'S';
/// Character marking the goal cell in map files
pub const END_MARKER: u8 = b'E';
/// Character used for open cells in generated maps
pub const OPEN_CELL: u8 = b'.';

// Random map generation
/// Fixed seed for reproducible map generation
pub const DEFAULT_SEED: u64 = 42;
/// Default fraction of generated cells that are walls
pub const DEFAULT_WALL_DENSITY: f64 = 0.25;
/// Default generated map height
pub const DEFAULT_ROWS: usize = 32;
/// Default generated map width
pub const DEFAULT_COLS: usize = 64;

// Progress display settings
/// Spinner redraw interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 80;
