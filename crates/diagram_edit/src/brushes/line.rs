//! Line point generators.
//!
//! `segment_points` yields the axis-aligned connector segment the Line
//! tool previews; `stroke_points` interpolates freehand strokes with
//! Bresenham's algorithm so fast pointer moves stay continuous.

use diagram_engine::Position;

/// Points of a single axis-aligned segment from `from` towards `to`.
///
/// The dominant axis of the delta wins; the other axis is held at the
/// anchor, so the result is always one straight horizontal or vertical
/// run (a zero delta yields just the anchor cell).
pub fn segment_points(from: Position, to: Position) -> Vec<Position> {
    let delta = to - from;
    let mut points = Vec::new();
    if delta.x.abs() >= delta.y.abs() {
        let step = if delta.x < 0 { -1 } else { 1 };
        let mut x = from.x;
        loop {
            points.push(Position::new(x, from.y));
            if x == to.x {
                break;
            }
            x += step;
        }
    } else {
        let step = if delta.y < 0 { -1 } else { 1 };
        let mut y = from.y;
        loop {
            points.push(Position::new(from.x, y));
            if y == to.y {
                break;
            }
            y += step;
        }
    }
    points
}

/// Generate all points on a line from p0 to p1 using Bresenham's algorithm
pub fn stroke_points(p0: Position, p1: Position) -> Vec<Position> {
    let dx = (p1.x - p0.x).abs();
    let dy = -(p1.y - p0.y).abs();
    let sx = if p0.x < p1.x { 1 } else { -1 };
    let sy = if p0.y < p1.y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = p0.x;
    let mut y = p0.y;
    let mut points = Vec::new();

    loop {
        points.push(Position::new(x, y));

        if x == p1.x && y == p1.y {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == p1.x {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == p1.y {
                break;
            }
            err += dx;
            y += sy;
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_prefers_dominant_axis() {
        let pts = segment_points(Position::new(2, 2), Position::new(6, 3));
        assert_eq!(
            pts,
            vec![
                Position::new(2, 2),
                Position::new(3, 2),
                Position::new(4, 2),
                Position::new(5, 2),
                Position::new(6, 2),
            ]
        );

        let pts = segment_points(Position::new(2, 2), Position::new(3, 6));
        assert!(pts.iter().all(|p| p.x == 2));
        assert_eq!(pts.len(), 5);
    }

    #[test]
    fn segment_handles_reversed_and_zero_deltas() {
        let pts = segment_points(Position::new(5, 5), Position::new(1, 5));
        assert_eq!(pts.first(), Some(&Position::new(5, 5)));
        assert_eq!(pts.last(), Some(&Position::new(1, 5)));

        assert_eq!(segment_points(Position::new(4, 4), Position::new(4, 4)), vec![Position::new(4, 4)]);
    }

    #[test]
    fn stroke_connects_endpoints() {
        let pts = stroke_points(Position::new(0, 0), Position::new(5, 3));
        assert_eq!(pts.first(), Some(&Position::new(0, 0)));
        assert_eq!(pts.last(), Some(&Position::new(5, 3)));
        for pair in pts.windows(2) {
            let d = pair[1] - pair[0];
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1);
        }
    }
}
