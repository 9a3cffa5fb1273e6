//! Hand Dodge - A hand-tracking controlled arcade dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, difficulty)
//! - `tracking`: Camera/hand-tracker seams and gesture extraction
//! - `renderer`: Backend-agnostic draw list built from game state
//! - `platform`: Frame pacing
//! - `app`: The capture → detect → tick → render loop

pub mod app;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tracking;

pub use app::{App, RunSummary, StopReason};
pub use highscores::HighScores;
pub use settings::{GameMode, Rules, Settings};

/// Game configuration constants
pub mod consts {
    /// Arcade screen dimensions
    pub const SCREEN_WIDTH: i32 = 1920;
    pub const SCREEN_HEIGHT: i32 = 1200;
    /// Classic screen dimensions
    pub const CLASSIC_SCREEN_WIDTH: i32 = 800;
    pub const CLASSIC_SCREEN_HEIGHT: i32 = 600;

    /// Target frame rates
    pub const FPS: u32 = 60;
    pub const CLASSIC_FPS: u32 = 30;

    /// Player defaults
    pub const PLAYER_START: (i32, i32) = (400, 500);
    /// Collision box is smaller than the drawn ship in arcade mode
    pub const PLAYER_HITBOX: i32 = 50;
    pub const SHIP_SPRITE_SIZE: i32 = 100;

    /// Large obstacles (rock1)
    pub const LARGE_OBSTACLE_SIZE: i32 = 50;
    pub const LARGE_OBSTACLE_SPEED: i32 = 5;
    /// Classic mode spawns one rock every two seconds at 30 fps
    pub const CLASSIC_SPAWN_PERIOD: u32 = 60;

    /// Small obstacles (rock2)
    pub const SMALL_OBSTACLE_SIZE: i32 = 25;
    pub const SMALL_OBSTACLE_SPEED: i32 = 7;

    /// Projectiles
    pub const PROJECTILE_WIDTH: i32 = 2;
    pub const PROJECTILE_HEIGHT: i32 = 5;
    pub const PROJECTILE_SPEED: i32 = 10;

    /// Seconds of survival per level
    pub const LEVEL_THRESHOLD_SECS: u64 = 15;
    /// Seconds on the game over screen before a new run starts
    pub const RESTART_DELAY_SECS: u32 = 5;

    /// Normalized thumb/index horizontal gap below which the hand is pinching
    pub const PINCH_THRESHOLD: f32 = 0.05;
}
