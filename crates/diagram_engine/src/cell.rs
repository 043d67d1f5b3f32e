/// Sentinel stored in a cell that is part of a connector shape.
///
/// The concrete glyph for such a cell is resolved at read time from its
/// neighbors (`Grid::get_draw_value`), never stored. STX is used so the
/// sentinel can never collide with literal text a tool writes.
pub const CONNECTOR_MARKER: char = '\u{2}';

/// One grid unit: a committed value, an optional uncommitted preview
/// value, and the connector flag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    raw: Option<char>,
    scratch: Option<char>,
    special: bool,
}

impl Cell {
    /// Committed value with the scratch overlay applied on top.
    pub fn raw_value(&self) -> Option<char> {
        self.scratch.or(self.raw)
    }

    /// True while an uncommitted preview value is present.
    pub fn has_scratch(&self) -> bool {
        self.scratch.is_some()
    }

    /// True if this cell is part of a connector shape. Structural flag,
    /// independent of the glyph the cell resolves to.
    pub fn is_special(&self) -> bool {
        self.special
    }

    pub(crate) fn committed(&self) -> Option<char> {
        self.raw
    }

    pub(crate) fn scratch(&self) -> Option<char> {
        self.scratch
    }

    pub(crate) fn set_scratch(&mut self, value: Option<char>) {
        self.scratch = value;
        self.special = self.raw_value() == Some(CONNECTOR_MARKER);
    }

    pub(crate) fn set_committed(&mut self, value: Option<char>) {
        self.raw = value;
        self.special = self.raw_value() == Some(CONNECTOR_MARKER);
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(raw: {:?}, scratch: {:?}, special: {})",
            self.raw, self.scratch, self.special
        )
    }
}
