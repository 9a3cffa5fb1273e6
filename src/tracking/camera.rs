//! Headless camera stand-in

use super::{CaptureError, Frame, FrameSource};

/// Produces blank frames, optionally stopping after a fixed count
#[derive(Debug, Clone)]
pub struct SyntheticCamera {
    width: u32,
    height: u32,
    limit: Option<u64>,
    next: u64,
}

impl SyntheticCamera {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            limit: None,
            next: 0,
        }
    }

    /// Fail reads once `frames` frames have been delivered
    pub fn with_limit(mut self, frames: u64) -> Self {
        self.limit = Some(frames);
        self
    }

    /// Frames delivered so far
    pub fn frames_read(&self) -> u64 {
        self.next
    }
}

impl FrameSource for SyntheticCamera {
    fn read_frame(&mut self) -> Result<Frame, CaptureError> {
        if self.limit.is_some_and(|limit| self.next >= limit) {
            return Err(CaptureError::EndOfStream { frames: self.next });
        }

        let frame = Frame {
            index: self.next,
            width: self.width,
            height: self.height,
            pixels: Vec::new(),
        };
        self.next += 1;
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_are_sequential() {
        let mut camera = SyntheticCamera::new(640, 480);
        for i in 0..5 {
            let frame = camera.read_frame().unwrap();
            assert_eq!(frame.index, i);
            assert_eq!((frame.width, frame.height), (640, 480));
        }
    }

    #[test]
    fn test_limit_ends_stream() {
        let mut camera = SyntheticCamera::new(640, 480).with_limit(2);
        assert!(camera.read_frame().is_ok());
        assert!(camera.read_frame().is_ok());
        let err = camera.read_frame().unwrap_err();
        assert!(matches!(err, CaptureError::EndOfStream { frames: 2 }));
        assert_eq!(camera.frames_read(), 2);
    }
}
