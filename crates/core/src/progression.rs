//! Progression rules - scoring, leveling and gravity speed.
//!
//! Small and tabular on purpose: the tables live in `blockfall-types` so the
//! front-end can label things without pulling in the engine.

use blockfall_types::{
    DROP_INTERVALS_MS, HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_CLEAR_BASE, SOFT_DROP_POINTS,
};

/// Points for clearing `lines` rows at once at the given level.
///
/// The base amount is keyed by the simultaneous-line count (4 being the
/// maximal "tetris" clear) and multiplied by the level in effect when the
/// clear happens.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_CLEAR_BASE.len() {
        return 0;
    }
    LINE_CLEAR_BASE[lines] * level
}

/// Points for `cells` player-initiated soft-drop steps.
pub fn soft_drop_score(cells: u32) -> u32 {
    SOFT_DROP_POINTS * cells
}

/// Points for a hard drop of `cells` rows.
pub fn hard_drop_score(cells: u32) -> u32 {
    HARD_DROP_POINTS * cells
}

/// Level for a lines-cleared total: `lines / 10 + 1`, 1-based.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval in milliseconds for a 1-based level.
///
/// Levels beyond the table clamp to its final (minimum) entry.
pub fn drop_interval_ms(level: u32) -> u32 {
    let index = (level.max(1) - 1) as usize;
    let last = DROP_INTERVALS_MS.len() - 1;
    DROP_INTERVALS_MS[index.min(last)]
}
