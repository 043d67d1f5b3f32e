//! Point generators for the draw tools.
//!
//! These produce the cell positions a shape covers; writing values to
//! the grid is left to the tool driving the gesture.

pub mod line;
pub mod rectangle;
