//! Landmarks → ship position and pinch trigger

use glam::IVec2;

use super::HandLandmarks;
use crate::sim::HandSignal;

/// How normalized landmarks map onto the playfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandMapping {
    /// Playfield size (width, height)
    pub screen: IVec2,
    /// Flip horizontally so moving the hand right moves the ship right
    pub mirror_x: bool,
    /// Normalized horizontal thumb/index gap that counts as a pinch
    pub pinch_threshold: f32,
}

/// Convert detected landmarks into this frame's hand signal
pub fn detect_gesture(landmarks: &HandLandmarks, mapping: &HandMapping) -> HandSignal {
    let tip = landmarks.index_tip.clamp(glam::Vec2::ZERO, glam::Vec2::ONE);
    let mut x = (tip.x * mapping.screen.x as f32) as i32;
    let y = (tip.y * mapping.screen.y as f32) as i32;
    if mapping.mirror_x {
        x = mapping.screen.x - x;
    }

    let gap = (landmarks.thumb_tip.x - landmarks.index_tip.x).abs();
    HandSignal {
        pos: IVec2::new(x, y),
        pinching: gap < mapping.pinch_threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn mapping(mirror_x: bool) -> HandMapping {
        HandMapping {
            screen: IVec2::new(1920, 1200),
            mirror_x,
            pinch_threshold: 0.05,
        }
    }

    fn hand(index: (f32, f32), thumb: (f32, f32)) -> HandLandmarks {
        HandLandmarks {
            index_tip: Vec2::new(index.0, index.1),
            thumb_tip: Vec2::new(thumb.0, thumb.1),
        }
    }

    #[test]
    fn test_maps_to_screen() {
        let signal = detect_gesture(&hand((0.25, 0.5), (0.5, 0.5)), &mapping(false));
        assert_eq!(signal.pos, IVec2::new(480, 600));
        assert!(!signal.pinching);
    }

    #[test]
    fn test_mirrored() {
        let signal = detect_gesture(&hand((0.25, 0.5), (0.5, 0.5)), &mapping(true));
        assert_eq!(signal.pos, IVec2::new(1440, 600));
    }

    #[test]
    fn test_pinch_threshold() {
        assert!(detect_gesture(&hand((0.5, 0.5), (0.52, 0.7)), &mapping(true)).pinching);
        assert!(!detect_gesture(&hand((0.5, 0.5), (0.56, 0.5)), &mapping(true)).pinching);
    }

    #[test]
    fn test_out_of_frame_landmarks_clamped() {
        let signal = detect_gesture(&hand((1.3, -0.2), (0.0, 0.0)), &mapping(false));
        assert_eq!(signal.pos, IVec2::new(1920, 0));
    }
}
