//! Best-effort high-score persistence.
//!
//! The engine itself never touches storage; the hosting binary hands a
//! finished session's `(score, level, lines)` to a [`ScoreStore`] at game
//! over and shows whatever bests come back. Failures stay inside this crate:
//! a missing, corrupt or unwritable file degrades to an empty table and
//! never blocks or aborts gameplay.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How many finished sessions the table keeps, best first.
pub const MAX_STORED_SCORES: usize = 5;

/// Outcome of one finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

/// Stored score table, ordered best first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BestScores {
    pub entries: Vec<ScoreRecord>,
}

impl BestScores {
    /// Highest stored record, if any.
    pub fn best(&self) -> Option<&ScoreRecord> {
        self.entries.first()
    }

    fn insert(&mut self, entry: ScoreRecord) {
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_STORED_SCORES);
    }
}

/// Score persistence consumed at game-over time.
pub trait ScoreStore {
    /// Record a finished session and return the stored bests (including the
    /// new entry when it ranks). Must not fail: persistence is best-effort.
    fn record(&mut self, entry: ScoreRecord) -> BestScores;

    /// Previously stored bests.
    fn bests(&self) -> BestScores;
}

/// In-memory store for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    bests: BestScores,
}

impl ScoreStore for MemoryScoreStore {
    fn record(&mut self, entry: ScoreRecord) -> BestScores {
        self.bests.insert(entry);
        self.bests.clone()
    }

    fn bests(&self) -> BestScores {
        self.bests.clone()
    }
}

/// File-backed store, one JSON document per table.
#[derive(Debug)]
pub struct JsonScoreStore {
    path: PathBuf,
    bests: BestScores,
}

impl JsonScoreStore {
    /// Open a store at `path`, loading any existing table. A missing or
    /// unreadable file starts from an empty table.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let bests = Self::load(&path).unwrap_or_default();
        Self { path, bests }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> Result<BestScores> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading score table {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing score table {}", path.display()))
    }

    fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating score directory {}", dir.display()))?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.bests)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("writing score table {}", self.path.display()))
    }
}

impl ScoreStore for JsonScoreStore {
    fn record(&mut self, entry: ScoreRecord) -> BestScores {
        self.bests.insert(entry);
        // Best-effort: a failed write keeps the in-memory table for this run.
        let _ = self.save();
        self.bests.clone()
    }

    fn bests(&self) -> BestScores {
        self.bests.clone()
    }
}

/// Default score-table location: `$HOME/.blockfall_scores.json`, falling back
/// to the working directory when no home is set.
pub fn default_path() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".blockfall_scores.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(score: u32) -> ScoreRecord {
        ScoreRecord {
            score,
            level: 1,
            lines: 0,
        }
    }

    #[test]
    fn memory_store_keeps_entries_sorted_and_bounded() {
        let mut store = MemoryScoreStore::default();
        for score in [300, 100, 500, 200, 400, 600] {
            store.record(record(score));
        }

        let bests = store.bests();
        assert_eq!(bests.entries.len(), MAX_STORED_SCORES);
        assert_eq!(bests.best().unwrap().score, 600);
        let scores: Vec<_> = bests.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![600, 500, 400, 300, 200]);
    }

    #[test]
    fn record_returns_the_updated_table() {
        let mut store = MemoryScoreStore::default();
        let bests = store.record(record(42));
        assert_eq!(bests.best().unwrap().score, 42);
    }

    #[test]
    fn missing_file_starts_empty() {
        let store = JsonScoreStore::open("/nonexistent/dir/scores.json");
        assert!(store.bests().entries.is_empty());
    }
}
