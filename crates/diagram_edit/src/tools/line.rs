//! Line tool: previews a single connector segment between the gesture
//! anchor and the pointer.

use diagram_engine::{CONNECTOR_MARKER, Grid, Position};

use super::{MouseCursor, ToolEvent, ToolHandler};
use crate::brushes;

#[derive(Default)]
pub struct LineTool {
    anchor: Option<Position>,
}

impl LineTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ToolHandler for LineTool {
    fn start(&mut self, grid: &mut Grid, pos: Position) -> ToolEvent {
        self.anchor = Some(pos);
        grid.draw_value(pos, CONNECTOR_MARKER);
        ToolEvent::None
    }

    fn pointer_move(&mut self, grid: &mut Grid, pos: Position) -> ToolEvent {
        let Some(anchor) = self.anchor else {
            log::debug!("line: move without start, ignored");
            return ToolEvent::None;
        };
        // the preview is recomputed from scratch on every move
        grid.clear_draw();
        for pt in brushes::line::segment_points(anchor, pos) {
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
