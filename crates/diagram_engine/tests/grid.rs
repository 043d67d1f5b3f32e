//! Integration tests for Grid - scratch overlay, commit semantics and
//! connector glyph resolution.

use diagram_engine::{CONNECTOR_MARKER, CellContext, Grid, Size, VERTICAL_GLYPH};
use pretty_assertions::assert_eq;

#[test]
fn grid_reports_its_size() {
    let grid = Grid::new(Size::new(80, 25)).unwrap();
    assert_eq!(grid.get_width(), 80);
    assert_eq!(grid.get_height(), 25);
    assert_eq!(grid.get_size(), Size::new(80, 25));
}

#[test]
fn grid_rejects_out_of_limit_sizes() {
    assert!(Grid::new((0, 25)).is_err());
    assert!(Grid::new((80, -1)).is_err());
    assert!(Grid::new((1_000_000, 25)).is_err());
    assert!(Grid::new((2, 2)).is_err());
}

#[test]
fn cells_have_stable_identity() {
    let grid = Grid::new((40, 20)).unwrap();
    for pos in [(0, 0), (5, 5), (39, 19)] {
        let first = grid.get_cell(pos) as *const _;
        for _ in 0..3 {
            assert_eq!(grid.get_cell(pos) as *const _, first);
        }
    }
}

#[test]
fn fresh_grid_scenario() {
    let mut grid = Grid::new((40, 20)).unwrap();
    assert!(!grid.get_cell((5, 5)).is_special());
    assert_eq!(grid.get_cell((5, 5)).raw_value(), None);

    grid.draw_value((5, 5), 'X');
    assert_eq!(grid.get_draw_value((5, 5)), Some('X'));

    grid.clear_draw();
    assert_eq!(grid.get_draw_value((5, 5)), None);
    assert!(grid.scratch_cells().is_empty());
}

#[test]
fn clear_draw_restores_previous_values() {
    let mut grid = Grid::new((40, 20)).unwrap();
    grid.draw_value((3, 3), 'a');
    grid.commit_draw();

    grid.draw_value((3, 3), 'b');
    grid.draw_value((4, 3), 'c');
    assert_eq!(grid.get_draw_value((3, 3)), Some('b'));

    grid.clear_draw();
    assert_eq!(grid.get_draw_value((3, 3)), Some('a'));
    assert_eq!(grid.get_draw_value((4, 3)), None);
}

#[test]
fn commit_draw_keeps_last_write_per_cell() {
    let mut grid = Grid::new((40, 20)).unwrap();
    grid.draw_value((7, 2), 'p');
    grid.draw_value((7, 2), 'q');
    grid.draw_value((8, 2), 'r');
    grid.commit_draw();

    assert!(grid.scratch_cells().is_empty());
    assert!(!grid.get_cell((7, 2)).has_scratch());
    assert_eq!(grid.get_cell((7, 2)).raw_value(), Some('q'));
    assert_eq!(grid.get_cell((8, 2)).raw_value(), Some('r'));
}

#[test]
fn committing_blank_erases() {
    let mut grid = Grid::new((40, 20)).unwrap();
    grid.draw_value((6, 6), 'Z');
    grid.commit_draw();
    assert_eq!(grid.get_cell((6, 6)).raw_value(), Some('Z'));

    grid.draw_value((6, 6), ' ');
    grid.commit_draw();
    assert_eq!(grid.get_cell((6, 6)).raw_value(), None);
    assert_eq!(grid.get_draw_value((6, 6)), None);
}

#[test]
fn scratch_overlays_committed_value() {
    let mut grid = Grid::new((40, 20)).unwrap();
    grid.draw_value((2, 2), 'o');
    grid.commit_draw();

    grid.draw_value((2, 2), 'n');
    assert_eq!(grid.get_draw_value((2, 2)), Some('n'));
    grid.commit_draw();
    assert_eq!(grid.get_cell((2, 2)).raw_value(), Some('n'));
}

#[test]
fn vertical_context_scenario() {
    let mut grid = Grid::new((40, 20)).unwrap();
    grid.draw_value((3, 3), CONNECTOR_MARKER);
    grid.draw_value((3, 2), CONNECTOR_MARKER);
    grid.draw_value((3, 4), CONNECTOR_MARKER);
    grid.commit_draw();

    assert_eq!(
        grid.get_context((3, 3)),
        CellContext {
            left: false,
            right: false,
            up: true,
            down: true,
        }
    );
    assert_eq!(grid.get_draw_value((3, 3)), Some(VERTICAL_GLYPH));
}

#[test]
fn context_reads_structural_flag_not_glyphs() {
    let mut grid = Grid::new((40, 20)).unwrap();
    // a literal '|' next to a connector cell is not a connector
    grid.draw_value((4, 5), '|');
    grid.draw_value((5, 5), CONNECTOR_MARKER);
    grid.commit_draw();

    let ctx = grid.get_context((5, 5));
    assert!(!ctx.left);
}

#[test]
fn connector_flag_tracks_scratch_and_commit() {
    let mut grid = Grid::new((40, 20)).unwrap();
    grid.draw_value((9, 9), CONNECTOR_MARKER);
    assert!(grid.get_cell((9, 9)).is_special());

    grid.clear_draw();
    assert!(!grid.get_cell((9, 9)).is_special());

    grid.draw_value((9, 9), CONNECTOR_MARKER);
    grid.commit_draw();
    assert!(grid.get_cell((9, 9)).is_special());

    // overwriting with a literal clears the flag again
    grid.draw_value((9, 9), 'x');
    grid.commit_draw();
    assert!(!grid.get_cell((9, 9)).is_special());
}

#[test]
fn display_renders_resolved_glyphs() {
    let mut grid = Grid::new((8, 4)).unwrap();
    for x in 1..=3 {
        grid.draw_value((x, 1), CONNECTOR_MARKER);
    }
    grid.commit_draw();

    let out = grid.to_string();
    // middle of the run is a horizontal bar, the ends fall back to '+'
    assert!(out.contains("+-+"));
}
