//! Terminal rendering for the blockfall front-end.
//!
//! Deliberately not a widget/layout toolkit: the game view paints styled
//! glyphs into a plain framebuffer and the screen flushes it to the terminal
//! with a changed-run diff. This keeps the engine snapshot the only input to
//! rendering and keeps the view itself pure and unit-testable.

pub mod frame;
pub mod screen;
pub mod view;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use frame::{Frame, Glyph, Rgb, Style};
pub use screen::Screen;
pub use view::{GameView, Viewport};
