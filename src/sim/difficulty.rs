//! Level progression and speed scaling
//!
//! A step function on survival time: every `threshold` seconds the level goes
//! up by one and every rock falls one pixel per tick faster.

use super::state::{GameEvent, GameState};
use crate::settings::SpawnRule;

/// Fall speed of a rock kind at the given level
pub fn obstacle_speed(rule: &SpawnRule, level: u32, levels_enabled: bool) -> i32 {
    if levels_enabled {
        rule.base_speed.saturating_add(i32::try_from(level).unwrap_or(i32::MAX))
    } else {
        rule.base_speed
    }
}

/// Level a run is at after surviving `score` seconds
pub fn level_for_score(score: u64, threshold: u64) -> u32 {
    let steps = score / threshold.max(1);
    u32::try_from(steps).unwrap_or(u32::MAX - 1) + 1
}

/// Whether `score` is enough to leave `level`
pub fn should_level_up(level: u32, score: u64, threshold: u64) -> bool {
    score >= u64::from(level) * threshold
}

/// Recompute fall speeds from the current level
pub fn update_speeds(state: &mut GameState) {
    let levels = state.rules.level_threshold_secs.is_some();
    state.large_speed = obstacle_speed(&state.rules.large, state.level, levels);
    state.small_speed = state
        .rules
        .small
        .as_ref()
        .map(|rule| obstacle_speed(rule, state.level, levels))
        .unwrap_or(0);
}

/// Advance at most one level this tick; returns the new level if it changed
pub fn progress(state: &mut GameState) -> Option<u32> {
    let threshold = state.rules.level_threshold_secs?;
    if !should_level_up(state.level, state.score(), threshold) {
        return None;
    }

    state.level += 1;
    update_speeds(state);
    state.events.push(GameEvent::LevelUp(state.level));
    log::debug!(
        "Level {} (large speed {}, small speed {})",
        state.level,
        state.large_speed,
        state.small_speed
    );
    Some(state.level)
}
