//! Hand Dodge entry point
//!
//! Headless build: a synthetic camera, a recorded hand track (or the
//! autopilot) and a logging display stand in for the webcam, landmark model
//! and window.

use std::process::ExitCode;

use hand_dodge::renderer::LogDisplay;
use hand_dodge::tracking::{HandTracker, NoHands, ReplayTracker, SyntheticCamera};
use hand_dodge::{App, Settings, StopReason};

/// Synthetic camera resolution
const CAMERA_SIZE: (u32, u32) = (640, 480);

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Hand Dodge starting...");

    let mut settings = Settings::load();

    let tracker: Box<dyn HandTracker> = match &settings.replay_path {
        Some(path) => match ReplayTracker::from_path(path, settings.min_detection_confidence) {
            Ok(tracker) if tracker.is_empty() => {
                log::warn!("{} holds no hands, autopilot enabled", path.display());
                settings.idle_mode = true;
                Box::new(tracker)
            }
            Ok(tracker) => {
                log::info!("Replaying {} tracked frames", tracker.len());
                Box::new(tracker)
            }
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            log::info!("No hand track configured, autopilot enabled");
            settings.idle_mode = true;
            Box::new(NoHands)
        }
    };

    let mut camera = SyntheticCamera::new(CAMERA_SIZE.0, CAMERA_SIZE.1);
    if let Some(frames) = settings.camera_frames {
        camera = camera.with_limit(frames);
    }

    let display = LogDisplay::new(u64::from(settings.rules().fps));
    let summary = App::new(&settings, camera, tracker, display).run();

    for (i, entry) in summary.high_scores.entries.iter().enumerate() {
        log::info!(
            "#{:<2} {:>4}s  level {:<3} run {}",
            i + 1,
            entry.score,
            entry.level,
            entry.run
        );
    }

    // A dead camera is the normal way out of a headless session
    if let StopReason::CaptureFailed(e) = &summary.stop_reason {
        log::info!("Camera stopped: {e}");
    }
    ExitCode::SUCCESS
}
