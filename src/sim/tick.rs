//! Fixed-rate simulation tick
//!
//! One call advances the game by exactly one frame.

use super::collision::{player_hit, resolve_projectile_hits};
use super::difficulty;
use super::pilot::autopilot;
use super::state::{GameEvent, GamePhase, GameState, HandSignal, ObstacleKind};

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Tracked hand this frame (`None` = no hand detected)
    pub hand: Option<HandSignal>,
    /// Skip the game over countdown
    pub restart: bool,
    /// Idle/demo mode - autopilot flies when no hand is seen
    pub idle_mode: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    match state.phase {
        GamePhase::Ended => {}
        GamePhase::GameOver { restart_in } => {
            if input.restart || restart_in <= 1 {
                state.reset();
            } else {
                state.phase = GamePhase::GameOver {
                    restart_in: restart_in - 1,
                };
            }
        }
        GamePhase::Playing => tick_playing(state, input),
    }
}

fn tick_playing(state: &mut GameState, input: &TickInput) {
    // Steer and shoot
    let hand = match input.hand {
        Some(hand) => Some(hand),
        None if input.idle_mode => Some(autopilot(state)),
        None => None,
    };
    state.fire_cooldown = state.fire_cooldown.saturating_sub(1);
    if let Some(hand) = hand {
        state.player.pos = hand.pos;
        if hand.pinching && state.fire_cooldown == 0 {
            state.shoot_projectile();
        }
    }

    // Spawners
    state.large_spawn_timer += 1;
    if state.large_spawn_timer >= state.rules.large.period_ticks {
        state.spawn_obstacle(ObstacleKind::Large);
        state.large_spawn_timer = 0;
    }
    if let Some(period) = state.rules.small.map(|s| s.period_ticks) {
        state.small_spawn_timer += 1;
        if state.small_spawn_timer >= period {
            state.spawn_obstacle(ObstacleKind::Small);
            state.small_spawn_timer = 0;
        }
    }

    // Movement
    let (large_speed, small_speed) = (state.large_speed, state.small_speed);
    for obstacle in &mut state.obstacles {
        obstacle.rect.translate_y(large_speed);
    }
    for obstacle in &mut state.small_obstacles {
        obstacle.rect.translate_y(small_speed);
    }
    if let Some(rule) = state.rules.projectiles {
        for projectile in &mut state.projectiles {
            projectile.rect.translate_y(-rule.speed);
        }
    }

    state.retire_offscreen();

    // Shots only break the big rocks
    let destroyed = resolve_projectile_hits(&mut state.projectiles, &mut state.obstacles);
    for _ in 0..destroyed {
        state.events.push(GameEvent::ObstacleDestroyed);
    }

    let hitbox = state.player_hitbox();
    let lethal = state.obstacles_of(state.rules.lethal);
    if player_hit(&hitbox, lethal).is_some() {
        state.end_run();
        return;
    }

    difficulty::progress(state);

    state.time_ticks += 1;
}
