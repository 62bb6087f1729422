//! Session orchestrator - the one owner of mutable game state.
//!
//! The session holds the authoritative grid, the active/next/held pieces and
//! all counters, dispatches decoded intents to the pure transform functions,
//! and advances gravity from a host-driven [`Session::tick`]. Intents that
//! are invalid for the current status are silently ignored; the only terminal
//! condition is `GameOver`, a normal status rather than an error.

use blockfall_types::{GameIntent, GameStatus, PieceKind, ROTATION_KICKS};

use crate::grid::Grid;
use crate::pieces::ActivePiece;
use crate::progression;
use crate::rng::{LcgSource, PieceSource};
use crate::snapshot::{ActiveView, SessionSnapshot};
use crate::transform::{clear_lines, collides, ghost_offset, lock, rotated, spawn_random};

/// Complete game session
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    active: Option<ActivePiece>,
    next: ActivePiece,
    held: Option<ActivePiece>,
    hold_used: bool,
    /// Rows the active piece can still fall (0 when no piece is in flight).
    ghost: i8,
    score: u32,
    level: u32,
    lines: u32,
    tetris_count: u32,
    pieces_placed: u32,
    status: GameStatus,
    drop_timer_ms: u32,
    source: Box<dyn PieceSource>,
}

impl Session {
    /// Create a session with an injected piece source: empty grid, two
    /// freshly drawn pieces, counters at their base values.
    pub fn new(mut source: Box<dyn PieceSource>) -> Self {
        let active = spawn_random(source.as_mut());
        let next = spawn_random(source.as_mut());
        let mut session = Self {
            grid: Grid::empty(),
            active: Some(active),
            next,
            held: None,
            hold_used: false,
            ghost: 0,
            score: 0,
            level: 1,
            lines: 0,
            tetris_count: 0,
            pieces_placed: 0,
            status: GameStatus::Playing,
            drop_timer_ms: 0,
            source,
        };
        session.refresh_ghost();
        session
    }

    /// Convenience constructor over a seeded [`LcgSource`].
    pub fn with_seed(seed: u32) -> Self {
        Self::new(Box::new(LcgSource::new(seed)))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    pub fn tetris_count(&self) -> u32 {
        self.tetris_count
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next.kind
    }

    pub fn held_kind(&self) -> Option<PieceKind> {
        self.held.map(|piece| piece.kind)
    }

    pub fn can_hold(&self) -> bool {
        !self.hold_used
    }

    pub fn ghost_offset(&self) -> i8 {
        self.ghost
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Gravity interval for the current level.
    pub fn drop_interval_ms(&self) -> u32 {
        progression::drop_interval_ms(self.level)
    }

    /// Fill a caller-owned snapshot with the current state.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.grid.write_codes(&mut out.grid);
        out.active = self.active.as_ref().map(ActiveView::from);
        out.ghost_offset = self.ghost;
        out.next = self.next.kind;
        out.held = self.held_kind();
        out.can_hold = self.can_hold();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.tetris_count = self.tetris_count;
        out.pieces_placed = self.pieces_placed;
        out.status = self.status;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snapshot = SessionSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }

    /// Dispatch one decoded intent.
    ///
    /// Pause and restart work from any status; everything else is accepted
    /// only while Playing and ignored otherwise.
    pub fn apply(&mut self, intent: GameIntent) {
        match intent {
            GameIntent::Restart => self.restart(),
            GameIntent::Pause => self.toggle_pause(),
            _ if self.status != GameStatus::Playing => {}
            GameIntent::MoveLeft => self.shift_horizontal(-1),
            GameIntent::MoveRight => self.shift_horizontal(1),
            GameIntent::SoftDrop => self.soft_drop(),
            GameIntent::HardDrop => self.hard_drop(),
            GameIntent::Rotate => self.rotate_with_kicks(),
            GameIntent::Hold => self.hold(),
        }
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Once the accumulated time passes the level's drop interval the piece
    /// falls one row; when it cannot, it locks. Only this path (and hard
    /// drop) ever locks a piece - a blocked manual soft drop does not.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.status != GameStatus::Playing {
            return;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms < self.drop_interval_ms() {
            return;
        }
        self.drop_timer_ms = 0;

        let Some(active) = self.active else {
            return;
        };

        if collides(&self.grid, &active, 0, 1) {
            self.lock_and_clear();
        } else {
            self.active = Some(active.shifted(1, 0));
            self.refresh_ghost();
        }
    }

    fn shift_horizontal(&mut self, dir: i8) {
        let Some(active) = self.active else {
            return;
        };
        if collides(&self.grid, &active, dir, 0) {
            return;
        }
        self.active = Some(active.shifted(0, dir));
        self.refresh_ghost();
    }

    fn soft_drop(&mut self) {
        let Some(active) = self.active else {
            return;
        };
        if collides(&self.grid, &active, 0, 1) {
            // A blocked manual drop never locks; locking belongs to the tick.
            return;
        }
        self.active = Some(active.shifted(1, 0));
        self.score += progression::soft_drop_score(1);
        self.refresh_ghost();
    }

    fn hard_drop(&mut self) {
        let Some(active) = self.active else {
            return;
        };
        let distance = ghost_offset(&self.grid, &active);
        self.score += progression::hard_drop_score(distance as u32);
        self.active = Some(active.shifted(distance, 0));
        self.lock_and_clear();
    }

    fn rotate_with_kicks(&mut self) {
        let Some(active) = self.active else {
            return;
        };
        if active.kind == PieceKind::O {
            return;
        }

        let candidate = rotated(&active);
        if !collides(&self.grid, &candidate, 0, 0) {
            self.active = Some(candidate);
            self.refresh_ghost();
            return;
        }

        for kick in ROTATION_KICKS {
            let kicked = candidate.shifted(0, kick);
            if !collides(&self.grid, &kicked, 0, 0) {
                self.active = Some(kicked);
                self.refresh_ghost();
                return;
            }
        }
        // Every kick blocked: the rotation is discarded wholesale.
    }

    fn hold(&mut self) {
        if self.hold_used {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        // The parked piece always goes back to default rotation and spawn
        // position, whichever branch runs.
        let parked = ActivePiece::spawn(active.kind);
        match self.held.take() {
            Some(held) => {
                self.active = Some(held);
            }
            None => {
                self.active = Some(self.next);
                self.next = spawn_random(self.source.as_mut());
            }
        }
        self.held = Some(parked);
        self.hold_used = true;
        self.refresh_ghost();
    }

    fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            GameStatus::GameOver => GameStatus::GameOver,
        };
    }

    /// Lock the active piece, clear lines, update progression, then either
    /// end the game or promote the next piece.
    fn lock_and_clear(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.grid = lock(&self.grid, &active);

        let (grid, cleared) = clear_lines(&self.grid);
        self.grid = grid;
        let count = cleared.len();
        if count > 0 {
            // Clear points use the level in effect before the recompute.
            self.score += progression::line_clear_score(count, self.level);
            self.lines += count as u32;
            if count == 4 {
                self.tetris_count += 1;
            }
            self.level = progression::level_for_lines(self.lines);
        }

        // Game over is decided by the next piece's spawn cells against the
        // post-clear grid, before it ever enters play.
        if collides(&self.grid, &self.next, 0, 0) {
            self.status = GameStatus::GameOver;
            self.ghost = 0;
            return;
        }

        self.active = Some(self.next);
        self.next = spawn_random(self.source.as_mut());
        self.hold_used = false;
        self.pieces_placed += 1;
        self.drop_timer_ms = 0;
        self.refresh_ghost();
    }

    /// Discard the session and start fresh, keeping the injected source so
    /// the piece stream continues.
    fn restart(&mut self) {
        self.grid = Grid::empty();
        self.active = Some(spawn_random(self.source.as_mut()));
        self.next = spawn_random(self.source.as_mut());
        self.held = None;
        self.hold_used = false;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.tetris_count = 0;
        self.pieces_placed = 0;
        self.status = GameStatus::Playing;
        self.drop_timer_ms = 0;
        self.refresh_ghost();
    }

    fn refresh_ghost(&mut self) {
        self.ghost = match &self.active {
            Some(piece) => ghost_offset(&self.grid, piece),
            None => 0,
        };
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
