//! Game state and core simulation types
//!
//! Everything that changes from one frame to the next lives here.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty;
use super::rect::Rect;
use crate::settings::Rules;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Player was hit; a new run starts when the countdown reaches zero
    GameOver { restart_in: u32 },
    /// Player was hit and the rules do not restart
    Ended,
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Big rock, slower, can be shot down
    Large,
    /// Small rock, faster
    Small,
}

/// A falling rock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
}

/// A player-fired shot moving up the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
}

/// Where the tracked hand puts the ship this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HandSignal {
    /// Screen position of the index fingertip
    pub pos: IVec2,
    /// Thumb and index tips are touching
    pub pinching: bool,
}

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Ship position: top-left of the hitbox, center of the sprite
    pub pos: IVec2,
}

impl Player {
    /// Collision box (anchored top-left at the player position)
    pub fn hitbox(&self, size: i32) -> Rect {
        Rect::square(self.pos, size)
    }

    /// Where the ship sprite is drawn (centered on the player position)
    pub fn sprite_rect(&self, size: i32) -> Rect {
        Rect::new(0, 0, size, size).centered_at(self.pos)
    }
}

/// Things that happened during a tick, for logging and bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ObstacleSpawned(ObstacleKind),
    ProjectileFired,
    ObstacleDestroyed,
    /// Run ended with this many seconds survived
    PlayerHit { score: u64, level: u32 },
    LevelUp(u32),
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Resolved rules for this session
    pub rules: Rules,
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub player: Player,
    /// Large obstacles (spawn order)
    pub obstacles: Vec<Obstacle>,
    /// Small obstacles (spawn order)
    pub small_obstacles: Vec<Obstacle>,
    pub projectiles: Vec<Projectile>,
    /// Ticks since the last large spawn
    pub large_spawn_timer: u32,
    /// Ticks since the last small spawn
    pub small_spawn_timer: u32,
    /// Ticks until the next shot is allowed
    pub fire_cooldown: u32,
    /// Current level (starts at 1)
    pub level: u32,
    /// Current fall speeds (pixels/tick)
    pub large_speed: i32,
    pub small_speed: i32,
    /// Ticks elapsed in the current run
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Runs started this session (1-based)
    pub run: u32,
    /// Best survival time this session (seconds)
    pub best_score: u64,
    /// Survival time of the last finished run (seconds)
    pub last_score: u64,
    /// Events emitted by the last tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given rules and seed
    pub fn new(rules: Rules, seed: u64) -> Self {
        let mut state = Self {
            player: Player {
                pos: rules.player_start,
            },
            rules,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            obstacles: Vec::new(),
            small_obstacles: Vec::new(),
            projectiles: Vec::new(),
            large_spawn_timer: 0,
            small_spawn_timer: 0,
            fire_cooldown: 0,
            level: 1,
            large_speed: 0,
            small_speed: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            run: 1,
            best_score: 0,
            last_score: 0,
            events: Vec::new(),
        };
        difficulty::update_speeds(&mut state);
        state
    }

    /// Seconds survived in the current run
    pub fn score(&self) -> u64 {
        self.time_ticks / u64::from(self.rules.fps.max(1))
    }

    /// Collision box of the ship
    pub fn player_hitbox(&self) -> Rect {
        self.player.hitbox(self.rules.player_hitbox)
    }

    /// Obstacle list for a kind
    pub fn obstacles_of(&self, kind: ObstacleKind) -> &[Obstacle] {
        match kind {
            ObstacleKind::Large => &self.obstacles,
            ObstacleKind::Small => &self.small_obstacles,
        }
    }

    /// Drop a new rock just above the top edge at a random column.
    ///
    /// Returns `None` when the rules disable that kind.
    pub fn spawn_obstacle(&mut self, kind: ObstacleKind) -> Option<Rect> {
        let size = self.rules.spawn_rule(kind)?.size;
        let max_x = (self.rules.width() - size).max(0);
        let x = self.rng.random_range(0..=max_x);
        let rect = Rect::new(x, -size, size, size);

        let obstacle = Obstacle { kind, rect };
        match kind {
            ObstacleKind::Large => self.obstacles.push(obstacle),
            ObstacleKind::Small => self.small_obstacles.push(obstacle),
        }
        self.events.push(GameEvent::ObstacleSpawned(kind));
        log::trace!("Spawned {kind:?} obstacle at x={x}");
        Some(rect)
    }

    /// Fire a shot from the middle of the ship's hitbox
    pub fn shoot_projectile(&mut self) -> Option<Rect> {
        let rule = self.rules.projectiles?;
        let x = self.player.pos.x + self.rules.player_hitbox / 2 - rule.width / 2;
        let rect = Rect::new(x, self.player.pos.y, rule.width, rule.height);
        self.projectiles.push(Projectile { rect });
        self.fire_cooldown = rule.cooldown_ticks;
        self.events.push(GameEvent::ProjectileFired);
        Some(rect)
    }

    /// Remove everything that has left the screen
    pub fn retire_offscreen(&mut self) {
        let height = self.rules.height();
        self.projectiles.retain(|p| p.rect.y > 0);
        self.obstacles.retain(|o| o.rect.y < height);
        self.small_obstacles.retain(|o| o.rect.y < height);
    }

    /// Record the end of the current run
    pub fn end_run(&mut self) {
        let score = self.score();
        self.last_score = score;
        self.best_score = self.best_score.max(score);
        self.events.push(GameEvent::PlayerHit {
            score,
            level: self.level,
        });

        self.phase = match self.rules.restart_delay_ticks {
            Some(ticks) => GamePhase::GameOver { restart_in: ticks },
            None => GamePhase::Ended,
        };
        log::info!(
            "Run {} over: survived {}s, reached level {}",
            self.run,
            score,
            self.level
        );
    }

    /// Start a fresh run, keeping session-wide scores
    pub fn reset(&mut self) {
        self.player.pos = self.rules.player_start;
        self.obstacles.clear();
        self.small_obstacles.clear();
        self.projectiles.clear();
        self.large_spawn_timer = 0;
        self.small_spawn_timer = 0;
        self.fire_cooldown = 0;
        self.level = 1;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        self.run += 1;
        difficulty::update_speeds(self);
        self.events.push(GameEvent::Restarted);
        log::info!("Run {} started", self.run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameMode;

    #[test]
    fn test_new_state() {
        let state = GameState::new(GameMode::Arcade.rules(), 1);
        assert_eq!(state.player.pos, IVec2::new(400, 500));
        assert_eq!(state.level, 1);
        assert_eq!(state.large_speed, 6);
        assert_eq!(state.small_speed, 8);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_spawn_starts_above_screen() {
        let mut state = GameState::new(GameMode::Arcade.rules(), 3);
        let large = state.spawn_obstacle(ObstacleKind::Large).unwrap();
        let small = state.spawn_obstacle(ObstacleKind::Small).unwrap();
        assert_eq!(large.y, -50);
        assert_eq!((large.w, large.h), (50, 50));
        assert_eq!(small.y, -25);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.small_obstacles.len(), 1);
    }

    #[test]
    fn test_classic_has_no_small_obstacles() {
        let mut state = GameState::new(GameMode::Classic.rules(), 3);
        assert!(state.spawn_obstacle(ObstacleKind::Small).is_none());
        assert!(state.shoot_projectile().is_none());
    }

    #[test]
    fn test_projectile_leaves_ship_center() {
        let mut state = GameState::new(GameMode::Arcade.rules(), 3);
        state.player.pos = IVec2::new(100, 200);
        let shot = state.shoot_projectile().unwrap();
        assert_eq!(shot, Rect::new(124, 200, 2, 5));
    }

    #[test]
    fn test_player_sprite_centered() {
        let player = Player {
            pos: IVec2::new(400, 500),
        };
        assert_eq!(player.hitbox(50), Rect::new(400, 500, 50, 50));
        assert_eq!(player.sprite_rect(100), Rect::new(350, 450, 100, 100));
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = GameState::new(GameMode::Arcade.rules(), 42);
        let mut b = GameState::new(GameMode::Arcade.rules(), 42);
        for _ in 0..20 {
            assert_eq!(
                a.spawn_obstacle(ObstacleKind::Large),
                b.spawn_obstacle(ObstacleKind::Large)
            );
        }
    }

    #[test]
    fn test_end_run_keeps_best() {
        let mut state = GameState::new(GameMode::Arcade.rules(), 1);
        state.time_ticks = 60 * 20;
        state.end_run();
        assert_eq!(state.last_score, 20);
        assert_eq!(state.best_score, 20);
        assert_eq!(state.phase, GamePhase::GameOver { restart_in: 300 });

        state.reset();
        state.time_ticks = 60 * 5;
        state.end_run();
        assert_eq!(state.last_score, 5);
        assert_eq!(state.best_score, 20);
    }

    #[test]
    fn test_classic_run_ends_session() {
        let mut state = GameState::new(GameMode::Classic.rules(), 1);
        state.end_run();
        assert_eq!(state.phase, GamePhase::Ended);
    }
}
