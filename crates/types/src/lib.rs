//! Shared vocabulary for the blockfall engine and its collaborators.
//!
//! Pure data types and constants with no external dependencies, usable from
//! the core engine, the terminal front-end, input decoding, and tests alike.
//!
//! # Grid dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Progression tables
//!
//! Gravity speeds up with the 1-based level (milliseconds per row):
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 800ms |
//! | 3 | 650ms |
//! | 4 | 500ms |
//! | 5 | 400ms |
//! | 6 | 320ms |
//! | 7 | 250ms |
//! | 8 | 200ms |
//! | 9 | 160ms |
//! | 10+ | 120ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameIntent, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.cell_code(), 6);
//! assert_eq!(PieceKind::from_cell_code(6), Some(PieceKind::T));
//!
//! let intent = GameIntent::from_str("hardDrop").unwrap();
//! assert_eq!(intent, GameIntent::HardDrop);
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Fixed timestep interval for the hosting loop (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Points per cell for a player-initiated soft drop
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per cell dropped instantly by a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// Line clear scoring table
///
/// Base points for clearing N lines at once, multiplied by the current level:
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points (a tetris)
///
/// The table is strictly increasing so a tetris always out-scores smaller
/// clears at the same level.
pub const LINE_CLEAR_BASE: [u32; 5] = [0, 40, 100, 300, 1200];

/// Lines cleared per level step (`level = lines / 10 + 1`)
pub const LINES_PER_LEVEL: u32 = 10;

/// Drop intervals by level (milliseconds per row)
///
/// Index 0 = level 1. Levels beyond the table clamp to the final entry.
pub const DROP_INTERVALS_MS: [u32; 10] = [1000, 800, 650, 500, 400, 320, 250, 200, 160, 120];

/// Horizontal kick offsets tried, in order, when a rotation collides in place
pub const ROTATION_KICKS: [i8; 4] = [1, -1, 2, -2];

/// The seven piece kinds
///
/// Each kind has a distinct silhouette and color tag:
/// - **I**: Cyan, 4-wide bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Magenta, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in a fixed order usable for uniform selection.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Non-zero code used for the `u8` grid exported in snapshots.
    ///
    /// Zero is reserved for empty cells.
    pub fn cell_code(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::cell_code`]; `0` and unknown codes map to `None`.
    pub fn from_cell_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::J),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::S),
            6 => Some(PieceKind::T),
            7 => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Single-letter label for panels and previews.
    pub fn letter(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// A cell on the grid
///
/// - `None`: empty
/// - `Some(PieceKind)`: filled, and the kind doubles as the color tag
///
/// An unfilled cell carries no color by construction.
pub type Cell = Option<PieceKind>;

/// Decoded player intents consumed by the engine
///
/// Raw keyboard/touch capture lives outside the engine; by the time an intent
/// reaches [`GameIntent`] it is already decoded. Intents that are invalid for
/// the current status are ignored, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    /// Move the active piece one column left
    MoveLeft,
    /// Move the active piece one column right
    MoveRight,
    /// Drop the active piece one row (awards soft-drop points; never locks)
    SoftDrop,
    /// Drop the active piece to its landing row and lock immediately
    HardDrop,
    /// Rotate the active piece 90° clockwise, with horizontal kicks
    Rotate,
    /// Set the active piece aside (once per spawned piece)
    Hold,
    /// Toggle between Playing and Paused
    Pause,
    /// Discard the session and start a fresh one (valid in any status)
    Restart,
}

impl GameIntent {
    /// Parse an intent from its camelCase name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameIntent::MoveLeft),
            "moveright" => Some(GameIntent::MoveRight),
            "softdrop" => Some(GameIntent::SoftDrop),
            "harddrop" => Some(GameIntent::HardDrop),
            "rotate" => Some(GameIntent::Rotate),
            "hold" => Some(GameIntent::Hold),
            "pause" => Some(GameIntent::Pause),
            "restart" => Some(GameIntent::Restart),
            _ => None,
        }
    }

    /// camelCase name of the intent.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameIntent::MoveLeft => "moveLeft",
            GameIntent::MoveRight => "moveRight",
            GameIntent::SoftDrop => "softDrop",
            GameIntent::HardDrop => "hardDrop",
            GameIntent::Rotate => "rotate",
            GameIntent::Hold => "hold",
            GameIntent::Pause => "pause",
            GameIntent::Restart => "restart",
        }
    }
}

/// Session lifecycle status
///
/// `GameOver` is terminal until an explicit restart; it is a normal state,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Paused,
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_codes_round_trip_and_reserve_zero() {
        assert_eq!(PieceKind::from_cell_code(0), None);
        for kind in PieceKind::ALL {
            assert_ne!(kind.cell_code(), 0);
            assert_eq!(PieceKind::from_cell_code(kind.cell_code()), Some(kind));
        }
    }

    #[test]
    fn intent_names_round_trip() {
        for intent in [
            GameIntent::MoveLeft,
            GameIntent::MoveRight,
            GameIntent::SoftDrop,
            GameIntent::HardDrop,
            GameIntent::Rotate,
            GameIntent::Hold,
            GameIntent::Pause,
            GameIntent::Restart,
        ] {
            assert_eq!(GameIntent::from_str(intent.as_str()), Some(intent));
        }
        assert_eq!(GameIntent::from_str("unknown"), None);
    }

    #[test]
    fn tetris_base_score_is_strictly_largest() {
        for lines in 1..4 {
            assert!(LINE_CLEAR_BASE[lines] < LINE_CLEAR_BASE[4]);
        }
    }

    #[test]
    fn drop_intervals_decrease_monotonically() {
        for pair in DROP_INTERVALS_MS.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }
}
