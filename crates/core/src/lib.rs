//! Pure falling-block engine: grid, pieces, transforms, progression, session.
//!
//! This crate has no I/O, no timers, and no rendering. The hosting
//! environment drives [`Session::tick`] on its own schedule, feeds decoded
//! [`blockfall_types::GameIntent`]s into [`Session::apply`], and reads the
//! result back as a [`SessionSnapshot`]. Everything in [`transform`] is a
//! pure function over value snapshots and can be called from tests without
//! any session context.

pub mod grid;
pub mod pieces;
pub mod progression;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod transform;

pub use grid::Grid;
pub use pieces::{base_shape, ActivePiece, Shape};
pub use rng::{LcgSource, PieceSource, ScriptedSource};
pub use session::Session;
pub use snapshot::{ActiveView, SessionSnapshot};
pub use transform::{clear_lines, collides, ghost_offset, lock, rotated, spawn_random};
