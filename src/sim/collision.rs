//! Collision checks between ship, shots and rocks
//!
//! Brute force over tiny lists: a few dozen rectangles per frame.

use super::rect::Rect;
use super::state::{Obstacle, Projectile};

/// Index of the first obstacle overlapping the player box, if any
pub fn player_hit(player_box: &Rect, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles
        .iter()
        .position(|obstacle| player_box.intersects(&obstacle.rect))
}

/// Remove every projectile/obstacle pair that overlaps.
///
/// Each projectile takes out at most one obstacle (the earliest spawned one
/// it overlaps). Returns the number of obstacles destroyed.
pub fn resolve_projectile_hits(
    projectiles: &mut Vec<Projectile>,
    obstacles: &mut Vec<Obstacle>,
) -> usize {
    let mut destroyed = 0;
    projectiles.retain(|projectile| {
        match obstacles
            .iter()
            .position(|obstacle| projectile.rect.intersects(&obstacle.rect))
        {
            Some(i) => {
                obstacles.remove(i);
                destroyed += 1;
                false
            }
            None => true,
        }
    });
    destroyed
}
