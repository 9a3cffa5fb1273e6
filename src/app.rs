//! The frame loop
//!
//! Single-threaded and blocking, one iteration per displayed frame:
//! capture → detect → tick → render → limit.

use crate::highscores::HighScores;
use crate::platform::{FrameClock, clock_seed};
use crate::renderer::{Display, build_scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tracking::{CaptureError, FrameSource, HandMapping, HandTracker, detect_gesture};

/// Why the loop stopped
#[derive(Debug)]
pub enum StopReason {
    /// Window closed or quit key pressed
    Quit,
    /// Camera read failed
    CaptureFailed(CaptureError),
    /// A run ended and the rules do not restart
    SessionEnded,
    /// Configured frame budget used up
    FrameLimit,
}

/// What a session amounted to
#[derive(Debug)]
pub struct RunSummary {
    pub frames: u64,
    /// Runs started (including the one in progress)
    pub runs: u32,
    /// Best survival time (seconds)
    pub best_score: u64,
    pub high_scores: HighScores,
    pub stop_reason: StopReason,
}

/// Game session wired to its camera, tracker and display
pub struct App<S, T, D> {
    state: GameState,
    source: S,
    tracker: T,
    display: D,
    mapping: HandMapping,
    idle_mode: bool,
    show_fps: bool,
    clock: Option<FrameClock>,
    high_scores: HighScores,
    frames: u64,
    max_frames: Option<u64>,
}

impl<S: FrameSource, T: HandTracker, D: Display> App<S, T, D> {
    pub fn new(settings: &Settings, source: S, tracker: T, display: D) -> Self {
        let rules = settings.rules();
        let seed = if settings.seed == 0 {
            clock_seed()
        } else {
            settings.seed
        };
        log::info!(
            "{} mode, {}x{} @ {} fps, seed {}",
            settings.mode.as_str(),
            rules.width(),
            rules.height(),
            rules.fps,
            seed
        );

        let mapping = HandMapping {
            screen: rules.screen,
            mirror_x: settings.mirror_x,
            pinch_threshold: settings.pinch_threshold,
        };
        let clock = settings.paced.then(|| FrameClock::new(rules.fps));

        Self {
            state: GameState::new(rules, seed),
            source,
            tracker,
            display,
            mapping,
            idle_mode: settings.idle_mode,
            show_fps: settings.show_fps,
            clock,
            high_scores: HighScores::new(),
            frames: 0,
            max_frames: settings.max_frames,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Process one frame. Returns `Some` when the loop must stop.
    pub fn step(&mut self) -> Option<StopReason> {
        if self.max_frames.is_some_and(|max| self.frames >= max) {
            return Some(StopReason::FrameLimit);
        }
        if self.display.quit_requested() {
            log::info!("Quit requested");
            return Some(StopReason::Quit);
        }

        let mut input = TickInput {
            idle_mode: self.idle_mode,
            ..Default::default()
        };
        if matches!(self.state.phase, GamePhase::GameOver { .. }) {
            input.restart = self.display.restart_requested();
        }

        // The camera is only read while a run is live
        if self.state.phase == GamePhase::Playing {
            let frame = match self.source.read_frame() {
                Ok(frame) => frame,
                Err(e) => {
                    log::warn!("Camera read failed: {e}");
                    return Some(StopReason::CaptureFailed(e));
                }
            };
            input.hand = self
                .tracker
                .detect(&frame)
                .map(|landmarks| detect_gesture(&landmarks, &self.mapping));
        }

        tick(&mut self.state, &input);
        self.record_events();

        let fps = match (&self.clock, self.show_fps) {
            (Some(clock), true) => Some(clock.fps()),
            _ => None,
        };
        self.display.present(&build_scene(&self.state, fps));
        self.frames += 1;

        if let Some(clock) = self.clock.as_mut() {
            clock.tick();
        }

        if self.state.phase == GamePhase::Ended {
            return Some(StopReason::SessionEnded);
        }
        None
    }

    fn record_events(&mut self) {
        for event in &self.state.events {
            match *event {
                GameEvent::PlayerHit { score, level } => {
                    match self.high_scores.add_score(score, level, self.state.run) {
                        Some(rank) => log::info!("New leaderboard entry #{rank}: {score}s"),
                        None => log::info!("{score}s did not make the leaderboard"),
                    }
                }
                GameEvent::Restarted => log::debug!("Run {} started", self.state.run),
                GameEvent::LevelUp(level) => log::info!("Level {level}"),
                GameEvent::ObstacleDestroyed => log::debug!("Rock destroyed"),
                _ => {}
            }
        }
    }

    /// Run until quit, camera failure, session end or frame limit
    pub fn run(mut self) -> RunSummary {
        let stop_reason = loop {
            if let Some(reason) = self.step() {
                break reason;
            }
        };

        log::info!(
            "Stopped after {} frames ({:?}); best {}s over {} runs",
            self.frames,
            stop_reason,
            self.state.best_score,
            self.state.run
        );

        RunSummary {
            frames: self.frames,
            runs: self.state.run,
            best_score: self.state.best_score,
            high_scores: self.high_scores,
            stop_reason,
        }
    }
}
