//! Rectangle tool: previews the outline of the rectangle spanned by the
//! gesture anchor and the pointer as connector cells.

use diagram_engine::{CONNECTOR_MARKER, Grid, Position};

use super::{MouseCursor, ToolEvent, ToolHandler};
use crate::brushes;

#[derive(Default)]
pub struct RectangleTool {
    anchor: Option<Position>,
}

impl RectangleTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ToolHandler for RectangleTool {
    fn start(&mut self, grid: &mut Grid, pos: Position) -> ToolEvent {
        self.anchor = Some(pos);
        grid.draw_value(pos, CONNECTOR_MARKER);
        ToolEvent::None
    }

    fn pointer_move(&mut self, grid: &mut Grid, pos: Position) -> ToolEvent {
        let Some(anchor) = self.anchor else {
            log::debug!("rectangle: move without start, ignored");
            return ToolEvent::None;
        };
        grid.clear_draw();
        for pt in brushes::rectangle::outline_points(anchor, pos) {
            grid.draw_value(pt, CONNECTOR_MARKER);
        }
        ToolEvent::None
    }

    fn end(&mut self, grid: &mut Grid) -> ToolEvent {
        if self.anchor.take().is_some() {
            grid.commit_draw();
        }
        ToolEvent::None
    }

    fn cursor(&self, _pos: Position) -> MouseCursor {
        MouseCursor::Crosshair
    }

    fn handle_key(&mut self, _value: char) -> ToolEvent {
        ToolEvent::None
    }

    fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }
}
