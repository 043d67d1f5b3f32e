//! Freeform (freehand drawing) tool.

use diagram_engine::{Grid, Position};

use super::{MouseCursor, ToolEvent, ToolHandler};
use crate::brushes;

/// Default character a fresh freeform stroke writes.
pub const DEFAULT_FREEFORM_CHAR: char = 'x';

/// Writes a literal character at the pointer as it moves, never clearing
/// between moves, so one gesture accumulates a continuous stroke.
/// Consecutive positions are interpolated to keep fast drags gap-free.
/// Drawing a blank erases on commit.
pub struct FreeformTool {
    draw_char: char,
    is_drawing: bool,
    last_pos: Option<Position>,
}

impl Default for FreeformTool {
    fn default() -> Self {
        Self {
            draw_char: DEFAULT_FREEFORM_CHAR,
            is_drawing: false,
            last_pos: None,
        }
    }
}

impl FreeformTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_char(draw_char: char) -> Self {
        Self {
            draw_char,
            ..Self::default()
        }
    }

    pub fn draw_char(&self) -> char {
        self.draw_char
    }
}

impl ToolHandler for FreeformTool {
    fn start(&mut self, grid: &mut Grid, pos: Position) -> ToolEvent {
        self.is_drawing = true;
        self.last_pos = Some(pos);
        grid.draw_value(pos, self.draw_char);
        // let the UI solicit a substitute character; it arrives later
        // through handle_key and applies to the rest of the stroke
        ToolEvent::RequestCharacterInput
    }

    fn pointer_move(&mut self, grid: &mut Grid, pos: Position) -> ToolEvent {
        let Some(last) = self.last_pos else {
            log::debug!("freeform: move without start, ignored");
            return ToolEvent::None;
        };
        for pt in brushes::line::stroke_points(last, pos) {
            grid.draw_value(pt, self.draw_char);
        }
        self.last_pos = Some(pos);
        ToolEvent::None
    }

    fn end(&mut self, grid: &mut Grid) -> ToolEvent {
        if self.is_drawing {
            grid.commit_draw();
        }
        self.is_drawing = false;
        self.last_pos = None;
        ToolEvent::None
    }

    fn cursor(&self, _pos: Position) -> MouseCursor {
        MouseCursor::Crosshair
    }

    fn handle_key(&mut self, value: char) -> ToolEvent {
        self.draw_char = value;
        ToolEvent::None
    }

    fn is_dragging(&self) -> bool {
        self.is_drawing
    }
}
