//! Grid size limits and fixed rendering parameters.
//!
//! The limits bound memory allocation at grid construction; the cell
//! pixel size and zoom range parameterize the coordinate transforms.

/// Maximum width in cells (columns)
pub const MAX_GRID_WIDTH: i32 = 2000;

/// Maximum height in cells (rows)
pub const MAX_GRID_HEIGHT: i32 = 600;

/// Pixel width of one cell at zoom 1.0
pub const DEFAULT_CELL_WIDTH: f32 = 9.0;

/// Pixel height of one cell at zoom 1.0
pub const DEFAULT_CELL_HEIGHT: f32 = 17.0;

/// Smallest permitted zoom factor
pub const MIN_ZOOM: f32 = 0.25;

/// Largest permitted zoom factor
pub const MAX_ZOOM: f32 = 4.0;

/// Check if grid dimensions are within safe limits.
///
/// Pointer-derived coordinates are clamped to a one-cell border inside
/// the grid, so both axes need at least 3 cells.
#[inline]
pub fn is_within_limits(width: i32, height: i32) -> bool {
    width >= 3 && width <= MAX_GRID_WIDTH && height >= 3 && height <= MAX_GRID_HEIGHT
}

/// Clamp dimensions to safe limits
#[inline]
pub fn clamp_dimensions(width: i32, height: i32) -> (i32, i32) {
    (width.clamp(3, MAX_GRID_WIDTH), height.clamp(3, MAX_GRID_HEIGHT))
}
