//! Idle/demo autopilot
//!
//! Stands in for the hand when nobody is in front of the camera: slides the
//! ship toward the safest column and pinches when a big rock is overhead.

use glam::IVec2;

use super::state::{GameState, HandSignal, ObstacleKind};

/// Maximum horizontal pixels the autopilot moves the ship per tick
pub const PILOT_MAX_STEP: i32 = 12;

/// Vertical clearance of a column: distance from the ship to the nearest
/// lethal rock falling into it (`i32::MAX` when the column is clear)
fn column_clearance(state: &GameState, left: i32) -> i32 {
    let size = state.rules.player_hitbox;
    let ship_bottom = state.player.pos.y + size;
    state
        .obstacles_of(state.rules.lethal)
        .iter()
        .filter(|o| o.rect.left() < left + size && left < o.rect.right())
        .filter(|o| o.rect.top() < ship_bottom)
        .map(|o| state.player.pos.y - o.rect.bottom())
        .min()
        .unwrap_or(i32::MAX)
}

/// Left edge of the column the autopilot wants to sit in
pub fn safest_column(state: &GameState) -> i32 {
    let size = state.rules.player_hitbox.max(1);
    let max_left = (state.rules.width() - size).max(0);
    let current = state.player.pos.x.clamp(0, max_left);

    let mut best = current;
    let mut best_clearance = column_clearance(state, current);
    let mut left = 0;
    while left <= max_left {
        let clearance = column_clearance(state, left);
        let closer = (left - current).abs() < (best - current).abs();
        if clearance > best_clearance || (clearance == best_clearance && closer) {
            best = left;
            best_clearance = clearance;
        }
        left += size / 2 + 1;
    }
    best
}

/// Hand signal the autopilot would produce this tick
pub fn autopilot(state: &GameState) -> HandSignal {
    let target = safest_column(state);
    let step = (target - state.player.pos.x).clamp(-PILOT_MAX_STEP, PILOT_MAX_STEP);
    let pos = IVec2::new(state.player.pos.x + step, state.player.pos.y);

    let gun_x = pos.x + state.rules.player_hitbox / 2;
    let pinching = state.rules.projectiles.is_some()
        && state
            .obstacles_of(ObstacleKind::Large)
            .iter()
            .any(|o| o.rect.left() <= gun_x && gun_x < o.rect.right() && o.rect.top() < pos.y);

    HandSignal { pos, pinching }
}
