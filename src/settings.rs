//! Game settings and rule presets
//!
//! Loaded from a JSON file named by `HAND_DODGE_SETTINGS`, defaults otherwise.

use std::path::{Path, PathBuf};

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::ObstacleKind;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "HAND_DODGE_SETTINGS";

/// Environment variable overriding the rule preset
pub const MODE_ENV: &str = "HAND_DODGE_MODE";

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting: {0}")]
    Invalid(String),
}

/// Rule presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Single rock type, one hit ends the session
    Classic,
    /// Two rock types, pinch to shoot, levels and auto restart
    #[default]
    Arcade,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Classic => "Classic",
            GameMode::Arcade => "Arcade",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "v1" => Some(GameMode::Classic),
            "arcade" | "v2" => Some(GameMode::Arcade),
            _ => None,
        }
    }

    /// Rule table for this preset
    pub fn rules(&self) -> Rules {
        match self {
            GameMode::Classic => Rules {
                screen: IVec2::new(CLASSIC_SCREEN_WIDTH, CLASSIC_SCREEN_HEIGHT),
                fps: CLASSIC_FPS,
                player_start: IVec2::new(PLAYER_START.0, PLAYER_START.1),
                player_hitbox: PLAYER_HITBOX,
                ship_sprite_size: PLAYER_HITBOX,
                large: SpawnRule {
                    size: LARGE_OBSTACLE_SIZE,
                    base_speed: LARGE_OBSTACLE_SPEED,
                    period_ticks: CLASSIC_SPAWN_PERIOD,
                },
                small: None,
                projectiles: None,
                lethal: ObstacleKind::Large,
                level_threshold_secs: None,
                restart_delay_ticks: None,
            },
            GameMode::Arcade => Rules {
                screen: IVec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                fps: FPS,
                player_start: IVec2::new(PLAYER_START.0, PLAYER_START.1),
                player_hitbox: PLAYER_HITBOX,
                ship_sprite_size: SHIP_SPRITE_SIZE,
                large: SpawnRule {
                    size: LARGE_OBSTACLE_SIZE,
                    base_speed: LARGE_OBSTACLE_SPEED,
                    period_ticks: FPS,
                },
                small: Some(SpawnRule {
                    size: SMALL_OBSTACLE_SIZE,
                    base_speed: SMALL_OBSTACLE_SPEED,
                    period_ticks: FPS / 2,
                }),
                projectiles: Some(ProjectileRule {
                    width: PROJECTILE_WIDTH,
                    height: PROJECTILE_HEIGHT,
                    speed: PROJECTILE_SPEED,
                    cooldown_ticks: 0,
                }),
                lethal: ObstacleKind::Small,
                level_threshold_secs: Some(LEVEL_THRESHOLD_SECS),
                restart_delay_ticks: Some(RESTART_DELAY_SECS * FPS),
            },
        }
    }
}

/// Spawner parameters for one obstacle kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRule {
    /// Side of the square obstacle (pixels)
    pub size: i32,
    /// Fall speed at level 0 (pixels/tick)
    pub base_speed: i32,
    /// Ticks between spawns
    pub period_ticks: u32,
}

/// Player projectile parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectileRule {
    pub width: i32,
    pub height: i32,
    /// Rise speed (pixels/tick)
    pub speed: i32,
    /// Ticks between shots while pinching (0 = every tick)
    pub cooldown_ticks: u32,
}

/// Resolved gameplay rules consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// Playfield size (width, height)
    pub screen: IVec2,
    pub fps: u32,
    pub player_start: IVec2,
    pub player_hitbox: i32,
    /// Drawn ship size, centered on the player position
    pub ship_sprite_size: i32,
    pub large: SpawnRule,
    /// Small rocks (disabled in classic)
    pub small: Option<SpawnRule>,
    /// Pinch-to-shoot (disabled in classic)
    pub projectiles: Option<ProjectileRule>,
    /// Obstacle kind that ends the run on contact
    pub lethal: ObstacleKind,
    /// Survival seconds per level; `None` disables levels
    pub level_threshold_secs: Option<u64>,
    /// Game over screen duration; `None` ends the session instead
    pub restart_delay_ticks: Option<u32>,
}

impl Default for Rules {
    fn default() -> Self {
        GameMode::default().rules()
    }
}

impl Rules {
    pub fn width(&self) -> i32 {
        self.screen.x
    }

    pub fn height(&self) -> i32 {
        self.screen.y
    }

    /// Spawn rule for an obstacle kind, if that kind is enabled
    pub fn spawn_rule(&self, kind: ObstacleKind) -> Option<&SpawnRule> {
        match kind {
            ObstacleKind::Large => Some(&self.large),
            ObstacleKind::Small => self.small.as_ref(),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rule preset
    pub mode: GameMode,
    /// RNG seed (0 = derive from the clock)
    pub seed: u64,

    // === Tracking ===
    /// Mirror the fingertip horizontally (selfie view)
    pub mirror_x: bool,
    /// Normalized thumb/index gap that counts as a pinch
    pub pinch_threshold: f32,
    /// Detections below this confidence are treated as no hand
    pub min_detection_confidence: f32,
    /// Recorded landmark track (JSON lines); autopilot when absent
    pub replay_path: Option<PathBuf>,
    /// Synthetic camera stops after this many frames
    pub camera_frames: Option<u64>,

    // === Gameplay ===
    /// Ticks between shots while pinching
    pub fire_cooldown_ticks: u32,
    /// Let the autopilot fly when no hand is visible
    pub idle_mode: bool,

    // === Loop ===
    /// Sleep to hold the preset frame rate (off for batch runs)
    pub paced: bool,
    /// Stop after this many frames
    pub max_frames: Option<u64>,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::Arcade,
            seed: 0,

            mirror_x: true,
            pinch_threshold: PINCH_THRESHOLD,
            min_detection_confidence: 0.7,
            replay_path: None,
            camera_frames: None,

            fire_cooldown_ticks: 0,
            idle_mode: false,

            paced: true,
            max_frames: None,

            show_fps: false,
        }
    }
}

impl Settings {
    /// Create settings from a rule preset
    pub fn from_mode(mode: GameMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Gameplay rules with per-user overrides applied
    pub fn rules(&self) -> Rules {
        let mut rules = self.mode.rules();
        if let Some(projectiles) = rules.projectiles.as_mut() {
            projectiles.cooldown_ticks = self.fire_cooldown_ticks;
        }
        rules
    }

    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reject values the simulation cannot use
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(0.0..=1.0).contains(&self.pinch_threshold) {
            return Err(SettingsError::Invalid(format!(
                "pinch_threshold must be within [0, 1], got {}",
                self.pinch_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.min_detection_confidence) {
            return Err(SettingsError::Invalid(format!(
                "min_detection_confidence must be within [0, 1], got {}",
                self.min_detection_confidence
            )));
        }
        Ok(())
    }

    /// Load settings from `HAND_DODGE_SETTINGS`, falling back to defaults.
    /// `HAND_DODGE_MODE` then overrides the preset.
    pub fn load() -> Self {
        let mut settings = match std::env::var_os(SETTINGS_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                match Self::from_path(&path) {
                    Ok(settings) => {
                        log::info!("Loaded settings from {}", path.display());
                        settings
                    }
                    Err(e) => {
                        log::warn!("{e}; using default settings");
                        Self::default()
                    }
                }
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        };

        if let Ok(name) = std::env::var(MODE_ENV) {
            settings.apply_mode_override(&name);
        }
        settings
    }

    /// Switch preset by name; unknown names keep the current one
    pub fn apply_mode_override(&mut self, name: &str) {
        match GameMode::from_str(name) {
            Some(mode) => {
                log::info!("{MODE_ENV} selects {} mode", mode.as_str());
                self.mode = mode;
            }
            None => log::warn!("Unknown game mode {name:?}; keeping {}", self.mode.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!(GameMode::from_str("Classic"), Some(GameMode::Classic));
        assert_eq!(GameMode::from_str("arcade"), Some(GameMode::Arcade));
        assert_eq!(GameMode::from_str("v1"), Some(GameMode::Classic));
        assert_eq!(GameMode::from_str("turbo"), None);
    }

    #[test]
    fn test_arcade_rules() {
        let rules = GameMode::Arcade.rules();
        assert_eq!(rules.screen, IVec2::new(1920, 1200));
        assert_eq!(rules.large.period_ticks, 60);
        assert_eq!(rules.small.map(|s| s.period_ticks), Some(30));
        assert_eq!(rules.lethal, ObstacleKind::Small);
        assert_eq!(rules.restart_delay_ticks, Some(300));
    }

    #[test]
    fn test_classic_rules() {
        let rules = GameMode::Classic.rules();
        assert_eq!(rules.screen, IVec2::new(800, 600));
        assert_eq!(rules.fps, 30);
        assert!(rules.small.is_none());
        assert!(rules.projectiles.is_none());
        assert!(rules.level_threshold_secs.is_none());
        assert_eq!(rules.lethal, ObstacleKind::Large);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "mode": "classic", "seed": 7 }"#).unwrap();
        assert_eq!(settings.mode, GameMode::Classic);
        assert_eq!(settings.seed, 7);
        assert!(settings.mirror_x);
        assert_eq!(settings.pinch_threshold, PINCH_THRESHOLD);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let err = Settings::from_json(r#"{ "pinch_threshold": 2.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Settings::from_json("{ mode: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_mode_override() {
        let mut settings = Settings::default();
        settings.apply_mode_override("v1");
        assert_eq!(settings.mode, GameMode::Classic);
        settings.apply_mode_override("turbo");
        assert_eq!(settings.mode, GameMode::Classic);
    }

    #[test]
    fn test_loop_defaults() {
        let settings = Settings::from_json(r#"{ "max_frames": 600 }"#).unwrap();
        assert!(settings.paced);
        assert_eq!(settings.max_frames, Some(600));
        assert_eq!(Settings::default().max_frames, None);
    }

    #[test]
    fn test_fire_cooldown_override() {
        let settings = Settings {
            fire_cooldown_ticks: 6,
            ..Settings::default()
        };
        assert_eq!(settings.rules().projectiles.unwrap().cooldown_ticks, 6);
    }
}
