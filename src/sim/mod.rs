//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, speeds in pixels per tick
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, camera or tracker dependencies

pub mod collision;
pub mod difficulty;
pub mod pilot;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{player_hit, resolve_projectile_hits};
pub use pilot::autopilot;
pub use rect::Rect;
pub use state::{
    GameEvent, GamePhase, GameState, HandSignal, Obstacle, ObstacleKind, Player, Projectile,
};
pub use tick::{TickInput, tick};
