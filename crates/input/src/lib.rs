//! Terminal input decoding.
//!
//! Maps `crossterm` key events into [`blockfall_types::GameIntent`]s. This is
//! the whole raw-capture surface the engine needs: by the time anything
//! reaches the session it is already a decoded intent.

pub mod map;

pub use blockfall_types as types;

pub use map::{decode_key, should_quit};
