//! Rendering module
//!
//! The sim state is turned into a flat list of draw commands; a `Display`
//! backend (window, terminal, log) presents them.

pub mod scene;

use glam::IVec2;

pub use scene::build_scene;

use crate::sim::Rect;

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const WHITE: Color = Color(255, 255, 255);
    pub const RED: Color = Color(255, 0, 0);
}

/// Image assets the backend loads and scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    /// assets/ship.png
    Ship,
    /// assets/rock1.png
    LargeRock,
    /// assets/rock2.png
    SmallRock,
}

/// Text size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    /// 55 pt headline
    Large,
    /// 35 pt HUD
    Small,
}

/// A single drawing operation, in painter's order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(Color),
    /// Draw a sprite scaled to `dest`
    Sprite { sprite: Sprite, dest: Rect },
    FillRect { rect: Rect, color: Color },
    Text {
        text: String,
        pos: IVec2,
        size: FontSize,
        color: Color,
    },
}

/// Presentation backend
pub trait Display {
    /// Show one finished frame
    fn present(&mut self, commands: &[DrawCmd]);

    /// The user closed the window or pressed the quit key
    fn quit_requested(&mut self) -> bool {
        false
    }

    /// The player asked to skip the game over countdown
    fn restart_requested(&mut self) -> bool {
        false
    }
}

/// Headless backend: logs the HUD text every `interval` frames
#[derive(Debug, Clone)]
pub struct LogDisplay {
    interval: u64,
    frames: u64,
}

impl LogDisplay {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
        }
    }
}

impl Display for LogDisplay {
    fn present(&mut self, commands: &[DrawCmd]) {
        if self.frames % self.interval == 0 {
            let hud: Vec<&str> = commands
                .iter()
                .filter_map(|cmd| match cmd {
                    DrawCmd::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect();
            log::debug!(
                "frame {}: {} draw commands | {}",
                self.frames,
                commands.len(),
                hud.join(" | ")
            );
        }
        self.frames += 1;
    }
}
