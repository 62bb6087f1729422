//! Grid model tests.

use blockfall::core::Grid;
use blockfall::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

#[test]
fn new_grid_is_empty() {
    let grid = Grid::empty();
    assert_eq!(grid.width(), GRID_WIDTH);
    assert_eq!(grid.height(), GRID_HEIGHT);

    for row in 0..GRID_HEIGHT as usize {
        for col in 0..GRID_WIDTH as usize {
            assert_eq!(grid.cell(row, col), None, "cell ({row}, {col})");
        }
    }
}

#[test]
fn set_and_get_round_trip() {
    let mut grid = Grid::empty();

    grid.set(10, 5, Some(PieceKind::T));
    assert_eq!(grid.cell(10, 5), Some(PieceKind::T));
    assert!(grid.is_filled(10, 5));

    grid.set(10, 5, None);
    assert_eq!(grid.cell(10, 5), None);
}

#[test]
#[should_panic]
fn reading_past_the_bottom_fails_fast() {
    let grid = Grid::empty();
    let _ = grid.cell(GRID_HEIGHT as usize, 0);
}

#[test]
#[should_panic]
fn reading_past_the_right_edge_fails_fast() {
    let grid = Grid::empty();
    let _ = grid.cell(0, GRID_WIDTH as usize);
}

#[test]
#[should_panic]
fn writing_out_of_range_fails_fast() {
    let mut grid = Grid::empty();
    grid.set(0, GRID_WIDTH as usize, Some(PieceKind::I));
}

#[test]
fn full_row_detection_needs_every_column() {
    let mut grid = Grid::empty();

    for col in 0..(GRID_WIDTH as usize - 1) {
        grid.set(19, col, Some(PieceKind::S));
    }
    assert!(!grid.is_row_full(19));

    grid.set(19, GRID_WIDTH as usize - 1, Some(PieceKind::S));
    assert!(grid.is_row_full(19));
}

#[test]
fn code_export_uses_zero_for_empty() {
    let mut grid = Grid::empty();
    grid.set(3, 7, Some(PieceKind::L));

    let mut codes = [[0u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
    grid.write_codes(&mut codes);

    assert_eq!(codes[3][7], PieceKind::L.cell_code());
    assert_eq!(PieceKind::from_cell_code(codes[3][7]), Some(PieceKind::L));
    assert_eq!(codes[0][0], 0);
}
