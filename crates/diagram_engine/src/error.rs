//! Unified error types for diagram_engine

use thiserror::Error;

use crate::limits;

/// Main error type for diagram_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid grid size {width}x{height} (allowed: 3..={max_w} x 3..={max_h})",
        max_w = limits::MAX_GRID_WIDTH,
        max_h = limits::MAX_GRID_HEIGHT)]
    InvalidGridSize { width: i32, height: i32 },

    #[error("Invalid cell pixel size {width}x{height}")]
    InvalidCellSize { width: f32, height: f32 },
}
