//! Best runs of the session
//!
//! Lives only as long as the process; nothing touches the disk.

use serde::{Deserialize, Serialize};

/// Board length
pub const BOARD_SIZE: usize = 10;

/// A single finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Seconds survived
    pub score: u64,
    /// Level reached
    pub level: u32,
    /// Run number within the session
    pub run: u32,
}

/// Finished runs ranked by seconds survived, best first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-second runs never rank; otherwise a run ranks while the board
    /// has room or when it beats the current last place.
    pub fn qualifies(&self, score: u64) -> bool {
        score > 0
            && (self.entries.len() < BOARD_SIZE
                || self.entries.last().is_none_or(|last| score > last.score))
    }

    /// Record a finished run. Returns its 1-based place, `None` when it
    /// falls off the board.
    pub fn add_score(&mut self, score: u64, level: u32, run: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        // Equal times keep the older run above the newer one
        let slot = self.entries.partition_point(|e| e.score >= score);
        self.entries.insert(slot, HighScoreEntry { score, level, run });
        self.entries.truncate(BOARD_SIZE);
        Some(slot + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Longest survival on the board
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|best| best.score)
    }
}
