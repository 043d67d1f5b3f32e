use crate::{Cell, CONNECTOR_MARKER, EngineError, EngineResult, Position, Size, limits};

/// Neighbor connectivity of a cell, from the structural connector flag
/// of the four orthogonal neighbors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CellContext {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Glyph shown for a horizontal connector run.
pub const HORIZONTAL_GLYPH: char = '-';
/// Glyph shown for a vertical connector run.
pub const VERTICAL_GLYPH: char = '|';
/// Glyph shown for every other connector context (isolated cells,
/// corners, T-junctions).
pub const JUNCTION_GLYPH: char = '+';

/// Bounded cell grid with a transient scratch overlay.
///
/// All cells are allocated once at construction and live for the grid's
/// lifetime; operations only reset their values. Scratch writes are
/// tracked in an ordered set of touched positions so that clearing or
/// committing one gesture costs time proportional to the cells touched,
/// not to the grid size.
///
/// The grid performs no bounds checking. Callers must supply in-bounds
/// coordinates; pointer-derived coordinates get this guarantee from
/// [`GridCalc`](crate::GridCalc) clamping.
pub struct Grid {
    size: Size,
    cells: Vec<Cell>,
    scratch_cells: Vec<Position>,
}

impl Grid {
    pub fn new(size: impl Into<Size>) -> EngineResult<Self> {
        let size = size.into();
        if !limits::is_within_limits(size.width, size.height) {
            return Err(EngineError::InvalidGridSize {
                width: size.width,
                height: size.height,
            }
            .into());
        }
        Ok(Grid {
            size,
            cells: vec![Cell::default(); (size.width * size.height) as usize],
            scratch_cells: Vec::new(),
        })
    }

    pub fn get_size(&self) -> Size {
        self.size
    }

    pub fn get_width(&self) -> i32 {
        self.size.width
    }

    pub fn get_height(&self) -> i32 {
        self.size.height
    }

    fn index(&self, pos: Position) -> usize {
        (pos.y * self.size.width + pos.x) as usize
    }

    /// The stable cell at `pos`. In-bounds `pos` is the caller's contract.
    pub fn get_cell(&self, pos: impl Into<Position>) -> &Cell {
        let pos = pos.into();
        &self.cells[self.index(pos)]
    }

    /// Positions touched by the gesture in progress, in write order.
    /// May contain duplicates when a stroke revisits a cell.
    pub fn scratch_cells(&self) -> &[Position] {
        &self.scratch_cells
    }

    /// Write an uncommitted preview value at `pos`.
    ///
    /// Re-drawing the same position within one gesture overwrites the
    /// previous preview; the duplicate set entry only costs a redundant
    /// revisit when the gesture is cleared or committed.
    pub fn draw_value(&mut self, pos: impl Into<Position>, value: char) {
        let pos = pos.into();
        let idx = self.index(pos);
        self.scratch_cells.push(pos);
        self.cells[idx].set_scratch(Some(value));
    }

    /// Discard the scratch overlay of the gesture in progress.
    ///
    /// Used by tools that recompute their whole preview shape on every
    /// pointer move.
    pub fn clear_draw(&mut self) {
        let touched = std::mem::take(&mut self.scratch_cells);
        for pos in touched {
            let idx = self.index(pos);
            self.cells[idx].set_scratch(None);
        }
    }

    /// Commit the scratch overlay into permanent grid state.
    ///
    /// For every touched cell the effective value (scratch if present,
    /// else committed) becomes the committed one; a single blank erases
    /// instead of storing a literal space. The only operation that
    /// mutates permanent state.
    pub fn commit_draw(&mut self) {
        let touched = std::mem::take(&mut self.scratch_cells);
        for pos in touched {
            let idx = self.index(pos);
            let cell = &mut self.cells[idx];
            let value = match cell.raw_value() {
                Some(' ') => None,
                other => other,
            };
            cell.set_committed(value);
            cell.set_scratch(None);
        }
    }

    /// The value to present for display at `pos`: the scratch overlay if
    /// present, else the committed value; connector cells resolve to a
    /// concrete glyph from their neighbors. `None` means no glyph.
    pub fn get_draw_value(&self, pos: impl Into<Position>) -> Option<char> {
        let pos = pos.into();
        match self.get_cell(pos).raw_value() {
            Some(CONNECTOR_MARKER) => Some(self.resolve_connector(pos)),
            other => other,
        }
    }

    /// Connector flags of the four orthogonal neighbors of `pos`.
    ///
    /// Uses only the structural flag, never resolved glyphs, so context
    /// lookups cannot recurse. `pos` must lie at least one cell inside
    /// the grid bounds (guaranteed for pointer-derived positions).
    pub fn get_context(&self, pos: impl Into<Position>) -> CellContext {
        let pos = pos.into();
        CellContext {
            left: self.get_cell(pos - Position::new(1, 0)).is_special(),
            right: self.get_cell(pos + Position::new(1, 0)).is_special(),
            up: self.get_cell(pos - Position::new(0, 1)).is_special(),
            down: self.get_cell(pos + Position::new(0, 1)).is_special(),
        }
    }

    /// Resolve the glyph for a connector cell from its neighbor context.
    ///
    /// Pure in the neighbor flags: evaluated fresh on every lookup,
    /// never cached, never mutating, so repeated or reordered lookups on
    /// a fixed grid snapshot agree. First match wins; a true 4-way
    /// junction collapses onto the horizontal glyph, and every remaining
    /// context (isolated, corner, T-junction) falls back to the generic
    /// junction glyph.
    fn resolve_connector(&self, pos: Position) -> char {
        let ctx = self.get_context(pos);
        if ctx.left && ctx.right && !ctx.up && !ctx.down {
            return HORIZONTAL_GLYPH;
        }
        if !ctx.left && !ctx.right && ctx.up && ctx.down {
            return VERTICAL_GLYPH;
        }
        if ctx.left && ctx.right && ctx.up && ctx.down {
            return HORIZONTAL_GLYPH;
        }
        JUNCTION_GLYPH
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut str = String::new();
        for y in 0..self.get_height() {
            str.extend(format!("{y:3}: ").chars());
            for x in 0..self.get_width() {
                str.push(self.get_draw_value((x, y)).unwrap_or(' '));
            }
            str.push('\n');
        }
        write!(f, "{str}")
    }
}
