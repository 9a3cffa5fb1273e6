//! Draw list generation from game state

use glam::IVec2;

use super::{Color, DrawCmd, FontSize, Sprite};
use crate::sim::{GamePhase, GameState, Obstacle, ObstacleKind};

fn text(text: String, pos: IVec2, size: FontSize, color: Color) -> DrawCmd {
    DrawCmd::Text {
        text,
        pos,
        size,
        color,
    }
}

fn rock(obstacle: &Obstacle) -> DrawCmd {
    let sprite = match obstacle.kind {
        ObstacleKind::Large => Sprite::LargeRock,
        ObstacleKind::Small => Sprite::SmallRock,
    };
    DrawCmd::Sprite {
        sprite,
        dest: obstacle.rect,
    }
}

/// Build the frame for the current state.
///
/// `fps` is drawn in the corner when given.
pub fn build_scene(state: &GameState, fps: Option<u32>) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(
        4 + state.obstacles.len() + state.small_obstacles.len() + state.projectiles.len(),
    );
    cmds.push(DrawCmd::Clear(Color::BLACK));

    let width = state.rules.width();
    let height = state.rules.height();

    match state.phase {
        GamePhase::Playing | GamePhase::Ended => {
            cmds.extend(state.obstacles.iter().map(rock));
            cmds.extend(state.small_obstacles.iter().map(rock));

            cmds.push(DrawCmd::Sprite {
                sprite: Sprite::Ship,
                dest: state.player.sprite_rect(state.rules.ship_sprite_size),
            });

            cmds.extend(state.projectiles.iter().map(|p| DrawCmd::FillRect {
                rect: p.rect,
                color: Color::WHITE,
            }));

            if state.rules.level_threshold_secs.is_some() {
                cmds.push(text(
                    format!("High Score: {}", state.score()),
                    IVec2::new(10, 10),
                    FontSize::Small,
                    Color::WHITE,
                ));
                cmds.push(text(
                    format!("Level: {}", state.level),
                    IVec2::new(10, 50),
                    FontSize::Small,
                    Color::WHITE,
                ));
            }
        }
        GamePhase::GameOver { restart_in } => {
            let fps = state.rules.fps.max(1);
            let secs = restart_in.div_ceil(fps);
            cmds.push(text(
                "Game Over!".to_string(),
                IVec2::new(width / 2 - 100, height / 2 - 50),
                FontSize::Large,
                Color::RED,
            ));
            cmds.push(text(
                format!("Restarting in {secs} Seconds"),
                IVec2::new(width / 2 - 200, height / 2 + 150),
                FontSize::Large,
                Color::WHITE,
            ));
            cmds.push(text(
                format!("High Score: {}", state.last_score),
                IVec2::new(10, 10),
                FontSize::Small,
                Color::WHITE,
            ));
        }
    }

    if let Some(fps) = fps {
        cmds.push(text(
            format!("FPS: {fps}"),
            IVec2::new(width - 150, 10),
            FontSize::Small,
            Color::WHITE,
        ));
    }

    cmds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameMode;
    use crate::sim::{Projectile, Rect};

    fn texts(cmds: &[DrawCmd]) -> Vec<&str> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_playing_scene_order() {
        let mut state = GameState::new(GameMode::Arcade.rules(), 1);
        state.time_ticks = 60 * 12;
        state.obstacles.push(Obstacle {
            kind: ObstacleKind::Large,
            rect: Rect::new(10, 10, 50, 50),
        });
        state.small_obstacles.push(Obstacle {
            kind: ObstacleKind::Small,
            rect: Rect::new(90, 10, 25, 25),
        });
        state.projectiles.push(Projectile {
            rect: Rect::new(424, 480, 2, 5),
        });

        let cmds = build_scene(&state, None);
        assert_eq!(cmds[0], DrawCmd::Clear(Color::BLACK));
        assert!(matches!(cmds[1], DrawCmd::Sprite { sprite: Sprite::LargeRock, .. }));
        assert!(matches!(cmds[2], DrawCmd::Sprite { sprite: Sprite::SmallRock, .. }));
        assert_eq!(
            cmds[3],
            DrawCmd::Sprite {
                sprite: Sprite::Ship,
                dest: Rect::new(350, 450, 100, 100),
            }
        );
        assert!(matches!(cmds[4], DrawCmd::FillRect { color: Color::WHITE, .. }));
        assert_eq!(texts(&cmds), vec!["High Score: 12", "Level: 1"]);
    }

    #[test]
    fn test_game_over_scene() {
        let mut state = GameState::new(GameMode::Arcade.rules(), 1);
        state.time_ticks = 60 * 33;
        state.end_run();

        let cmds = build_scene(&state, None);
        assert_eq!(
            texts(&cmds),
            vec!["Game Over!", "Restarting in 5 Seconds", "High Score: 33"]
        );
        assert!(!cmds.iter().any(|c| matches!(c, DrawCmd::Sprite { .. })));
    }

    #[test]
    fn test_classic_has_no_hud() {
        let state = GameState::new(GameMode::Classic.rules(), 1);
        let cmds = build_scene(&state, None);
        assert!(texts(&cmds).is_empty());
        assert_eq!(cmds.len(), 2);
    }

    #[test]
    fn test_fps_overlay() {
        let state = GameState::new(GameMode::Arcade.rules(), 1);
        let cmds = build_scene(&state, Some(59));
        assert_eq!(texts(&cmds).last(), Some(&"FPS: 59"));
    }
}
