//! Hex cell geometry defaults.

/// Distance from a cell's center to its corners
pub const HEX_OUTER_RADIUS: f32 = 10.0;
/// Ratio between the inner (edge) and outer (corner) radius, sqrt(3) / 2
pub const HEX_OUTER_TO_INNER: f32 = 0.866025404;
/// Number of cell columns per chunk
pub const HEX_CHUNK_SIZE_X: i32 = 5;

/// Default map width in cells
pub const MAP_DEFAULT_CELL_COUNT_X: i32 = 40;
/// Default map height in cells
pub const MAP_DEFAULT_CELL_COUNT_Z: i32 = 30;
