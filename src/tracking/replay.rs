//! Recorded hand tracks
//!
//! JSON lines, one detection per line:
//! `{"frame": 12, "index_tip": [0.41, 0.62], "thumb_tip": [0.47, 0.66], "score": 0.93}`
//! Frames without a line have no hand. `score` defaults to 1.0.

use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::{Frame, HandLandmarks, HandTracker};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read hand track {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bad hand track record on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

fn full_confidence() -> f32 {
    1.0
}

#[derive(Debug, Deserialize)]
struct Record {
    frame: u64,
    #[serde(flatten)]
    landmarks: HandLandmarks,
    #[serde(default = "full_confidence")]
    score: f32,
}

/// Plays back a recorded hand track keyed by frame index
#[derive(Debug, Clone, Default)]
pub struct ReplayTracker {
    detections: BTreeMap<u64, (HandLandmarks, f32)>,
    min_confidence: f32,
}

impl ReplayTracker {
    /// Parse a JSON-lines track. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(reader: R, min_confidence: f32) -> Result<Self, ReplayError> {
        let mut detections = BTreeMap::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| ReplayError::Io {
                path: PathBuf::from("<reader>"),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let record: Record = serde_json::from_str(&line)
                .map_err(|source| ReplayError::Parse { line: i + 1, source })?;
            detections.insert(record.frame, (record.landmarks, record.score));
        }

        log::info!("Loaded hand track with {} detections", detections.len());
        Ok(Self {
            detections,
            min_confidence,
        })
    }

    /// Open a track file
    pub fn from_path(path: &Path, min_confidence: f32) -> Result<Self, ReplayError> {
        let file = std::fs::File::open(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(std::io::BufReader::new(file), min_confidence)
    }

    pub fn len(&self) -> usize {
        self.detections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }
}

impl HandTracker for ReplayTracker {
    fn detect(&mut self, frame: &Frame) -> Option<HandLandmarks> {
        self.detections
            .get(&frame.index)
            .filter(|(_, score)| *score >= self.min_confidence)
            .map(|(landmarks, _)| *landmarks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const TRACK: &str = r#"
{"frame": 0, "index_tip": [0.5, 0.5], "thumb_tip": [0.6, 0.5]}
{"frame": 2, "index_tip": [0.1, 0.9], "thumb_tip": [0.12, 0.9], "score": 0.95}

{"frame": 3, "index_tip": [0.2, 0.2], "thumb_tip": [0.2, 0.3], "score": 0.4}
"#;

    fn frame(index: u64) -> Frame {
        Frame {
            index,
            width: 640,
            height: 480,
            pixels: Vec::new(),
        }
    }

    #[test]
    fn test_replay_lookup() {
        let mut tracker = ReplayTracker::from_reader(TRACK.as_bytes(), 0.7).unwrap();
        assert_eq!(tracker.len(), 3);

        let first = tracker.detect(&frame(0)).unwrap();
        assert_eq!(first.index_tip, Vec2::new(0.5, 0.5));
        assert!(tracker.detect(&frame(1)).is_none());
        assert_eq!(tracker.detect(&frame(2)).unwrap().thumb_tip, Vec2::new(0.12, 0.9));
    }

    #[test]
    fn test_low_confidence_dropped() {
        let mut tracker = ReplayTracker::from_reader(TRACK.as_bytes(), 0.7).unwrap();
        assert!(tracker.detect(&frame(3)).is_none());

        let mut lenient = ReplayTracker::from_reader(TRACK.as_bytes(), 0.3).unwrap();
        assert!(lenient.detect(&frame(3)).is_some());
    }

    #[test]
    fn test_parse_error_reports_line() {
        let bad = "{\"frame\": 0, \"index_tip\": [0.5, 0.5], \"thumb_tip\": [0.6, 0.5]}\nnot json\n";
        let err = ReplayTracker::from_reader(bad.as_bytes(), 0.7).unwrap_err();
        assert!(matches!(err, ReplayError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = ReplayTracker::from_path(Path::new("/nonexistent/track.jsonl"), 0.7).unwrap_err();
        assert!(matches!(err, ReplayError::Io { .. }));
    }
}
