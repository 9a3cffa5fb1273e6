//! Camera and hand-tracker seams
//!
//! The webcam and the landmark model are external collaborators. The frame
//! loop only sees these traits:
//! - `FrameSource`: hands out camera frames, fails when the stream is gone
//! - `HandTracker`: finds at most one hand in a frame
//!
//! `gesture` turns raw landmarks into a ship position and a fire trigger.

pub mod camera;
pub mod gesture;
pub mod replay;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use camera::SyntheticCamera;
pub use gesture::{HandMapping, detect_gesture};
pub use replay::{ReplayError, ReplayTracker};

/// Camera read failures. Any of these stops the frame loop.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("camera stream ended after {frames} frames")]
    EndOfStream { frames: u64 },

    #[error("camera device unavailable: {0}")]
    Unavailable(String),
}

/// One captured camera image
#[derive(Debug, Clone)]
pub struct Frame {
    /// Sequence number, starting at 0
    pub index: u64,
    pub width: u32,
    pub height: u32,
    /// Packed RGB pixels (may be empty for synthetic frames)
    pub pixels: Vec<u8>,
}

/// The two landmarks the game reads, in normalized image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandLandmarks {
    pub index_tip: Vec2,
    pub thumb_tip: Vec2,
}

/// Source of camera frames
pub trait FrameSource {
    /// Blocking read of the next frame
    fn read_frame(&mut self) -> Result<Frame, CaptureError>;
}

/// Hand landmark detector
pub trait HandTracker {
    /// Landmarks of the first detected hand, if any
    fn detect(&mut self, frame: &Frame) -> Option<HandLandmarks>;
}

impl<T: HandTracker + ?Sized> HandTracker for Box<T> {
    fn detect(&mut self, frame: &Frame) -> Option<HandLandmarks> {
        (**self).detect(frame)
    }
}

/// Tracker that never sees a hand
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHands;

impl HandTracker for NoHands {
    fn detect(&mut self, _frame: &Frame) -> Option<HandLandmarks> {
        None
    }
}
