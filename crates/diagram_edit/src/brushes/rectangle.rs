//! Rectangle outline point generator.

use diagram_engine::{Position, Rectangle};

/// Points on the perimeter of the rectangle spanned by two corners:
/// two horizontal and two vertical runs, each corner emitted once.
/// Degenerate rectangles (single row, column or point) collapse to the
/// matching line or point.
pub fn outline_points(p0: Position, p1: Position) -> Vec<Position> {
    let rect = Rectangle::from_pt(p0, p1);
    let mut points = Vec::new();

    for x in rect.x_range_inclusive() {
        points.push(Position::new(x, rect.top()));
        if rect.bottom() != rect.top() {
            points.push(Position::new(x, rect.bottom()));
        }
    }
    if rect.right() != rect.left() {
        for y in rect.top() + 1..rect.bottom() {
            points.push(Position::new(rect.left(), y));
            points.push(Position::new(rect.right(), y));
        }
    } else {
        for y in rect.top() + 1..rect.bottom() {
            points.push(Position::new(rect.left(), y));
        }
    }

    points
}
