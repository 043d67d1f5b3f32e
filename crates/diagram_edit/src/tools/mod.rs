//! Draw tool system.
//!
//! Each tool implements [`ToolHandler`] and drives the grid through one
//! gesture via the scratch/commit contract: `start` establishes anchor
//! state, `move` updates the preview overlay, `end` commits and returns
//! to idle. The surrounding controller owns gesture-lifecycle policy
//! (drag-vs-draw disambiguation, multi-touch, character solicitation)
//! and calls the five capabilities at the right times.

mod freeform;
mod line;
mod rectangle;

pub use freeform::{DEFAULT_FREEFORM_CHAR, FreeformTool};
pub use line::LineTool;
pub use rectangle::RectangleTool;

use diagram_engine::{Grid, Position};

/// Available draw tools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Write literal characters freehand
    #[default]
    Freeform,
    /// Draw a straight connector segment
    Line,
    /// Draw a rectangle outline of connector cells
    Rectangle,
}

/// Request a tool raises to its controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolEvent {
    #[default]
    None,
    /// The tool wants an out-of-band character; the UI layer solicits it
    /// and feeds the result back through `handle_key`.
    RequestCharacterInput,
}

/// Presentation hint for the pointer; reported only, never acted on here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MouseCursor {
    #[default]
    Default,
    Crosshair,
    Text,
}

/// One draw tool's gesture capabilities.
///
/// Within one gesture the controller calls `start`, then zero or more
/// `pointer_move`, then exactly one `end`. Tools tolerate `pointer_move`
/// or `end` without a preceding `start` as no-ops, since pointer-leave
/// and multi-touch cancellation legitimately produce such sequences.
pub trait ToolHandler {
    /// Begin a gesture at `pos`.
    fn start(&mut self, grid: &mut Grid, pos: Position) -> ToolEvent;

    /// Update the preview for the pointer at `pos`.
    fn pointer_move(&mut self, grid: &mut Grid, pos: Position) -> ToolEvent;

    /// Finish the gesture, committing the preview.
    fn end(&mut self, grid: &mut Grid) -> ToolEvent;

    /// Pointer shape to present at `pos`. Pure; no mutation.
    fn cursor(&self, pos: Position) -> MouseCursor;

    /// Accept an out-of-band character (see
    /// [`ToolEvent::RequestCharacterInput`]).
    fn handle_key(&mut self, value: char) -> ToolEvent;

    /// True while a gesture is in progress.
    fn is_dragging(&self) -> bool;
}

/// The closed set of tools plus the active selection.
///
/// Dispatches the [`ToolHandler`] capabilities to the active tool and
/// provides the end-all [`cancel`](Self::cancel) entry point.
pub struct ToolSet {
    active: Tool,
    freeform: FreeformTool,
    line: LineTool,
    rectangle: RectangleTool,
}

impl Default for ToolSet {
    fn default() -> Self {
        Self {
            active: Tool::default(),
            freeform: FreeformTool::default(),
            line: LineTool::default(),
            rectangle: RectangleTool::default(),
        }
    }
}

impl ToolSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tool {
        self.active
    }

    /// Switch the active tool, force-ending any gesture in progress.
    pub fn select(&mut self, grid: &mut Grid, tool: Tool) {
        if tool != self.active {
            self.cancel(grid);
            self.active = tool;
        }
    }

    fn handler(&self) -> &dyn ToolHandler {
        match self.active {
            Tool::Freeform => &self.freeform,
            Tool::Line => &self.line,
            Tool::Rectangle => &self.rectangle,
        }
    }

    fn handler_mut(&mut self) -> &mut dyn ToolHandler {
        match self.active {
            Tool::Freeform => &mut self.freeform,
            Tool::Line => &mut self.line,
            Tool::Rectangle => &mut self.rectangle,
        }
    }

    pub fn start(&mut self, grid: &mut Grid, pos: Position) -> ToolEvent {
        self.handler_mut().start(grid, pos)
    }

    pub fn pointer_move(&mut self, grid: &mut Grid, pos: Position) -> ToolEvent {
        self.handler_mut().pointer_move(grid, pos)
    }

    pub fn end(&mut self, grid: &mut Grid) -> ToolEvent {
        self.handler_mut().end(grid)
    }

    pub fn cursor(&self, pos: Position) -> MouseCursor {
        self.handler().cursor(pos)
    }

    pub fn handle_key(&mut self, value: char) -> ToolEvent {
        self.handler_mut().handle_key(value)
    }

    /// End-all signal (pointer leaves the surface, a second touch
    /// interrupts): force-finish the active gesture. Safe to call when
    /// no gesture is active.
    pub fn cancel(&mut self, grid: &mut Grid) {
        if self.handler().is_dragging() {
            self.handler_mut().end(grid);
        }
    }
}
