//! Pure coordinate calculations between pointer, plane and cell space.
//!
//! Three spaces are involved:
//! - **pointer space**: device pixels, origin at the viewport top-left;
//! - **plane space**: logical drawing-plane pixels, related to pointer
//!   space by the current pan offset and zoom factor;
//! - **cell space**: integer grid indices.
//!
//! These functions have no side effects and no dependencies on GPU, UI
//! frameworks, or global state.

use crate::{EngineError, EngineResult, Position, Size, Vec2, limits};

/// Coordinate transform state for one grid view: per-cell pixel size,
/// viewport size, zoom and pan offset.
#[derive(Clone, Debug, PartialEq)]
pub struct GridCalc {
    grid_size: Size,
    cell_size: Vec2,
    viewport_size: Vec2,
    zoom: f32,
    offset: Vec2,
}

impl GridCalc {
    /// Transform state for a grid of `grid_size` cells viewed through a
    /// viewport of `viewport_size` pixels, initially centered on the
    /// middle of the drawing plane at zoom 1.0.
    pub fn new(grid_size: Size, viewport_size: Vec2) -> EngineResult<Self> {
        Self::with_cell_size(
            grid_size,
            viewport_size,
            Vec2::new(limits::DEFAULT_CELL_WIDTH, limits::DEFAULT_CELL_HEIGHT),
        )
    }

    pub fn with_cell_size(grid_size: Size, viewport_size: Vec2, cell_size: Vec2) -> EngineResult<Self> {
        if !limits::is_within_limits(grid_size.width, grid_size.height) {
            return Err(EngineError::InvalidGridSize {
                width: grid_size.width,
                height: grid_size.height,
            }
            .into());
        }
        if cell_size.x <= 0.0 || cell_size.y <= 0.0 {
            return Err(EngineError::InvalidCellSize {
                width: cell_size.x,
                height: cell_size.y,
            }
            .into());
        }
        let offset = Vec2::new(
            grid_size.width as f32 * cell_size.x / 2.0,
            grid_size.height as f32 * cell_size.y / 2.0,
        );
        Ok(GridCalc {
            grid_size,
            cell_size,
            viewport_size,
            zoom: 1.0,
            offset,
        })
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the zoom factor, clamped to the permitted range.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(limits::MIN_ZOOM, limits::MAX_ZOOM);
    }

    /// Current pan offset: the plane-space point shown at the viewport
    /// center.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Move the view by `delta` plane pixels.
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    pub fn viewport_size(&self) -> Vec2 {
        self.viewport_size
    }

    pub fn set_viewport_size(&mut self, viewport_size: Vec2) {
        self.viewport_size = viewport_size;
    }

    fn viewport_center(&self) -> Vec2 {
        self.viewport_size * 0.5
    }

    /// Pointer pixels to plane pixels. Exact inverse of
    /// [`plane_to_pointer`](Self::plane_to_pointer) up to float rounding.
    pub fn pointer_to_plane(&self, pointer: Vec2) -> Vec2 {
        (pointer - self.viewport_center()) / self.zoom + self.offset
    }

    /// Plane pixels to pointer pixels.
    pub fn plane_to_pointer(&self, plane: Vec2) -> Vec2 {
        (plane - self.offset) * self.zoom + self.viewport_center()
    }

    /// Plane pixels to the nearest cell index, clamped one cell inside
    /// the grid bounds.
    ///
    /// The one-cell border is permanently excluded from pointer-derived
    /// coordinates so that ±1 neighbor lookups from any such cell stay
    /// inside the grid, whatever the pointer position was.
    pub fn plane_to_cell(&self, plane: Vec2) -> Position {
        let x = (plane.x / self.cell_size.x).round() as i32;
        let y = (plane.y / self.cell_size.y).round() as i32;
        Position::new(
            x.clamp(1, self.grid_size.width - 2),
            y.clamp(1, self.grid_size.height - 2),
        )
    }

    /// Cell index to plane pixels. No clamping; `cell` is already known
    /// in-bounds.
    pub fn cell_to_plane(&self, cell: Position) -> Vec2 {
        Vec2::new(
            (cell.x as f32 * self.cell_size.x).round(),
            (cell.y as f32 * self.cell_size.y).round(),
        )
    }

    /// Pointer pixels straight to a cell index (hit testing).
    pub fn pointer_to_cell(&self, pointer: Vec2) -> Position {
        self.plane_to_cell(self.pointer_to_plane(pointer))
    }

    /// Cell index back to pointer pixels (visible-range culling).
    pub fn cell_to_pointer(&self, cell: Position) -> Vec2 {
        self.plane_to_pointer(self.cell_to_plane(cell))
    }
}
