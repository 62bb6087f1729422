//! Piece catalog - the seven base silhouettes and the active piece.
//!
//! A silhouette is a square bit-matrix: side 2 for O, 3 for J/L/S/T/Z and 4
//! for I. The matrix - not a list of offsets - is the unit of rotation: a
//! clockwise turn is a transpose followed by reversing each row, which keeps
//! the whole transform a pure value operation.

use blockfall_types::{PieceKind, GRID_WIDTH};

/// Largest silhouette side (the I piece's 4x4 box)
pub const MAX_SHAPE_SIDE: usize = 4;

/// Square bit-matrix silhouette of a piece
///
/// Only the top-left `side x side` region is meaningful; the backing array is
/// always 4x4 so shapes stay `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    side: u8,
    bits: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// Build a shape from 0/1 rows. Rows and columns beyond `side` are ignored.
    pub fn from_bits(side: u8, rows: [[u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE]) -> Self {
        debug_assert!((2..=MAX_SHAPE_SIDE as u8).contains(&side));
        let mut bits = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (r, row) in rows.iter().enumerate().take(side as usize) {
            for (c, bit) in row.iter().enumerate().take(side as usize) {
                bits[r][c] = *bit != 0;
            }
        }
        Self { side, bits }
    }

    pub fn side(&self) -> u8 {
        self.side
    }

    /// Whether the silhouette occupies `(row, col)` of its box.
    pub fn filled(&self, row: usize, col: usize) -> bool {
        self.bits[row][col]
    }

    /// Occupied `(row, col)` positions within the box.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        let side = self.side as usize;
        (0..side).flat_map(move |row| {
            (0..side).filter_map(move |col| self.bits[row][col].then_some((row as u8, col as u8)))
        })
    }

    /// The silhouette turned 90° clockwise: transpose, then reverse each row.
    pub fn rotated_cw(&self) -> Self {
        let side = self.side as usize;
        let mut bits = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (r, row) in bits.iter_mut().enumerate().take(side) {
            for (c, bit) in row.iter_mut().enumerate().take(side) {
                *bit = self.bits[side - 1 - c][r];
            }
        }
        Self {
            side: self.side,
            bits,
        }
    }

    /// Lowest occupied row index within the box.
    pub fn bottom_row(&self) -> u8 {
        self.cells().map(|(row, _)| row).max().unwrap_or(0)
    }
}

/// Base silhouette for a piece kind, at rotation index 0.
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_bits(
            4,
            [
                [0, 0, 0, 0],
                [1, 1, 1, 1],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ],
        ),
        PieceKind::J => Shape::from_bits(
            3,
            [
                [1, 0, 0, 0],
                [1, 1, 1, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ],
        ),
        PieceKind::L => Shape::from_bits(
            3,
            [
                [0, 0, 1, 0],
                [1, 1, 1, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ],
        ),
        PieceKind::O => Shape::from_bits(
            2,
            [
                [1, 1, 0, 0],
                [1, 1, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ],
        ),
        PieceKind::S => Shape::from_bits(
            3,
            [
                [0, 1, 1, 0],
                [1, 1, 0, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ],
        ),
        PieceKind::T => Shape::from_bits(
            3,
            [
                [0, 1, 0, 0],
                [1, 1, 1, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ],
        ),
        PieceKind::Z => Shape::from_bits(
            3,
            [
                [1, 1, 0, 0],
                [0, 1, 1, 0],
                [0, 0, 0, 0],
                [0, 0, 0, 0],
            ],
        ),
    }
}

/// The falling piece
///
/// `(row, col)` is the grid position of the shape box's top-left corner; the
/// row may go negative while a tall silhouette is still partially above the
/// visible grid. An `ActivePiece` is replaced, never mutated, on every move
/// or rotation so state transitions stay explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub row: i8,
    pub col: i8,
    pub rotation_index: u8,
}

impl ActivePiece {
    /// A fresh piece at its spawn position: base shape, rotation 0,
    /// horizontally centered with the box's top row on grid row 0.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = base_shape(kind);
        Self {
            kind,
            shape,
            row: 0,
            col: ((GRID_WIDTH - shape.side()) / 2) as i8,
            rotation_index: 0,
        }
    }

    /// The same piece translated by `(d_row, d_col)`.
    pub fn shifted(&self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
            ..*self
        }
    }

    /// Grid `(row, col)` coordinates of the occupied silhouette cells.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(|(r, c)| (self.row + r as i8, self.col + c as i8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_silhouette_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(base_shape(kind).cells().count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn silhouette_sides() {
        assert_eq!(base_shape(PieceKind::O).side(), 2);
        assert_eq!(base_shape(PieceKind::I).side(), 4);
        for kind in [
            PieceKind::J,
            PieceKind::L,
            PieceKind::S,
            PieceKind::T,
            PieceKind::Z,
        ] {
            assert_eq!(base_shape(kind).side(), 3);
        }
    }

    #[test]
    fn spawn_is_centered_on_top_row() {
        let i = ActivePiece::spawn(PieceKind::I);
        assert_eq!((i.row, i.col), (0, 3));

        let o = ActivePiece::spawn(PieceKind::O);
        assert_eq!((o.row, o.col), (0, 4));

        let t = ActivePiece::spawn(PieceKind::T);
        assert_eq!((t.row, t.col), (0, 3));
        assert_eq!(t.rotation_index, 0);
    }

    #[test]
    fn rotate_cw_turns_t_to_point_right() {
        let t = base_shape(PieceKind::T).rotated_cw();
        let cells: Vec<_> = t.cells().collect();
        assert_eq!(cells, vec![(0, 1), (1, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn bottom_row_tracks_silhouette_extent() {
        assert_eq!(base_shape(PieceKind::I).bottom_row(), 1);
        assert_eq!(base_shape(PieceKind::O).bottom_row(), 1);
        assert_eq!(base_shape(PieceKind::T).bottom_row(), 1);
        assert_eq!(base_shape(PieceKind::I).rotated_cw().bottom_row(), 3);
    }

    #[test]
    fn shifted_translates_cells() {
        let piece = ActivePiece::spawn(PieceKind::O).shifted(3, -2);
        assert_eq!((piece.row, piece.col), (3, 2));
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(3, 2), (3, 3), (4, 2), (4, 3)]);
    }
}
