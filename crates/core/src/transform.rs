//! Transform engine - pure functions from grid/piece values to new values.
//!
//! Nothing here mutates shared state: every function takes the current grid
//! and piece by reference and returns a fresh value (or a boolean verdict).
//! The session layer owns sequencing and policy; this module owns geometry.

use arrayvec::ArrayVec;

use blockfall_types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

use crate::grid::Grid;
use crate::pieces::{ActivePiece, Shape, MAX_SHAPE_SIDE};
use crate::rng::PieceSource;

/// Draw a kind from `source` and place it at its spawn position.
pub fn spawn_random(source: &mut dyn PieceSource) -> ActivePiece {
    ActivePiece::spawn(source.next_kind())
}

/// The piece turned 90° clockwise, with no collision or kick resolution.
///
/// O has a single visual state and comes back unchanged. The I bar gets
/// re-homed after the generic matrix rotation (see [`rehome_bar`]); the other
/// five kinds rotate by plain transpose-and-reverse.
pub fn rotated(piece: &ActivePiece) -> ActivePiece {
    if piece.kind == PieceKind::O {
        return *piece;
    }

    let rotation_index = (piece.rotation_index + 1) % 4;
    let mut shape = piece.shape.rotated_cw();
    if piece.kind == PieceKind::I {
        shape = rehome_bar(shape, rotation_index);
    }

    ActivePiece {
        shape,
        rotation_index,
        ..*piece
    }
}

/// Re-home the I bar inside its 4x4 box.
///
/// The generic transpose rotation lets the bar's single occupied line walk
/// around the box, which visibly drifts the piece between horizontal and
/// vertical orientations. Pin it instead: row 1 when horizontal (even
/// rotation index), column 2 when vertical (odd index).
fn rehome_bar(rotated: Shape, rotation_index: u8) -> Shape {
    debug_assert_eq!(rotated.side() as usize, MAX_SHAPE_SIDE);
    let vertical = rotation_index % 2 == 1;

    let mut rows = [[0u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
    for i in 0..MAX_SHAPE_SIDE {
        if vertical {
            rows[i][2] = 1;
        } else {
            rows[1][i] = 1;
        }
    }
    Shape::from_bits(rotated.side(), rows)
}

/// Whether the piece, translated by `(d_col, d_row)`, hits a wall, the
/// floor, or a filled cell.
///
/// Rows above the grid (negative row) are never out of bounds: pieces may
/// hang partially above the visible field right after spawning. Only the two
/// side walls, the floor and filled cells block.
pub fn collides(grid: &Grid, piece: &ActivePiece, d_col: i8, d_row: i8) -> bool {
    for (row, col) in piece.cells() {
        let row = row + d_row;
        let col = col + d_col;
        if col < 0 || col >= GRID_WIDTH as i8 || row >= GRID_HEIGHT as i8 {
            return true;
        }
        if row >= 0 && grid.is_filled(row as usize, col as usize) {
            return true;
        }
    }
    false
}

/// Distance the piece can fall before colliding: the largest `d >= 0` with
/// no collision at `(0, d)` and a collision at `(0, d + 1)`.
///
/// Probes linearly from 0 upward. Local stacking patterns are not monotonic
/// in the way a binary search would need, so linear probing is the only
/// generally correct approach.
pub fn ghost_offset(grid: &Grid, piece: &ActivePiece) -> i8 {
    let mut d: i8 = 0;
    while !collides(grid, piece, 0, d + 1) {
        d += 1;
    }
    d
}

/// A new grid with the piece's occupied cells written in as filled, tagged
/// with the piece's kind.
///
/// Cells outside the grid bounds (a piece still partially above row 0) are
/// silently skipped rather than erroring.
pub fn lock(grid: &Grid, piece: &ActivePiece) -> Grid {
    let mut next = *grid;
    for (row, col) in piece.cells() {
        if row < 0 || row >= GRID_HEIGHT as i8 || col < 0 || col >= GRID_WIDTH as i8 {
            continue;
        }
        next.set(row as usize, col as usize, Some(piece.kind));
    }
    next
}

/// A new grid with every full row removed, plus the indices that cleared.
///
/// Rows above a removed row shift down by one and a fresh empty row enters
/// at the top. After a removal the same index is re-examined, since the
/// shift just moved different content into it; this is what guarantees that
/// simultaneous clears are never missed.
pub fn clear_lines(grid: &Grid) -> (Grid, ArrayVec<usize, 4>) {
    let mut next = *grid;
    let mut cleared = ArrayVec::new();

    let mut row = 0;
    while row < GRID_HEIGHT as usize {
        if next.is_row_full(row) {
            next.remove_row(row);
            cleared.push(row);
        } else {
            row += 1;
        }
    }

    (next, cleared)
}
