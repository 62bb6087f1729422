//! Read-only session snapshots published to rendering and score collaborators.

use blockfall_types::{GameStatus, PieceKind, GRID_HEIGHT, GRID_WIDTH};

use crate::pieces::{ActivePiece, Shape};

/// View of the falling piece: silhouette plus grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveView {
    pub kind: PieceKind,
    pub shape: Shape,
    pub row: i8,
    pub col: i8,
    pub rotation_index: u8,
}

impl From<&ActivePiece> for ActiveView {
    fn from(piece: &ActivePiece) -> Self {
        Self {
            kind: piece.kind,
            shape: piece.shape,
            row: piece.row,
            col: piece.col,
            rotation_index: piece.rotation_index,
        }
    }
}

/// Immutable view of the whole session after a state change.
///
/// The grid arrives as `u8` cell codes (0 = empty, see
/// [`PieceKind::cell_code`]) so the front-end never touches engine cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub grid: [[u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub active: Option<ActiveView>,
    /// Rows the active piece can still fall; the ghost row is `active.row + ghost_offset`.
    pub ghost_offset: i8,
    pub next: PieceKind,
    pub held: Option<PieceKind>,
    pub can_hold: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub tetris_count: u32,
    pub pieces_placed: u32,
    pub status: GameStatus,
}

impl SessionSnapshot {
    pub fn playing(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            active: None,
            ghost_offset: 0,
            next: PieceKind::I,
            held: None,
            can_hold: true,
            score: 0,
            level: 1,
            lines: 0,
            tetris_count: 0,
            pieces_placed: 0,
            status: GameStatus::Playing,
        }
    }
}
