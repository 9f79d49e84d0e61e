//! Click while the target is on screen; clicking the decoy costs a point.
//!
//! A countdown timer swaps the displayed image every 60 ticks.

use macroquad::color::{BROWN, Color, DARKGREEN, SKYBLUE, WHITE};
use macroquad::input::MouseButton;
use macroquad::shapes::{draw_circle, draw_rectangle};
use macroquad::text::draw_text;

use crate::engine::game::Game;
use crate::graphics;

/// Window width in pixels.
pub const WINDOW_WIDTH: f32 = 500.0;
/// Window height in pixels.
pub const WINDOW_HEIGHT: f32 = 500.0;
/// Frame clear color.
pub const BACKGROUND: Color = DARKGREEN;

/// Ticks between image swaps.
pub const SWITCH_TIMER: u32 = 60;

/// What is currently on screen.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Target,
    Decoy,
}

/// World state: the shown mode, the swap countdown, and the score.
pub struct Reaction {
    /// What the player currently sees.
    pub mode: Mode,
    /// Ticks left before the next swap.
    pub timer: u32,
    /// Running score; clicks on the decoy subtract.
    pub score: i32,
}

impl Reaction {
    /// A world showing the target with a full countdown.
    pub fn new() -> Self {
        Self {
            mode: Mode::Target,
            timer: SWITCH_TIMER,
            score: 0,
        }
    }

    /// Swaps what is shown on screen.
    pub fn switch_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Target => Mode::Decoy,
            Mode::Decoy => Mode::Target,
        };
    }
}

impl Default for Reaction {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Reaction {
    fn draw(&self) {
        let center = (WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0);
        match self.mode {
            Mode::Target => {
                draw_circle(center.0, center.1, 100.0, SKYBLUE);
                graphics::draw_text_centered("CLICK!", center.0, center.1 + 10.0, 30.0, WHITE);
            }
            Mode::Decoy => {
                draw_rectangle(center.0 - 90.0, center.1 - 90.0, 180.0, 180.0, BROWN);
                graphics::draw_text_centered("wait...", center.0, center.1 + 10.0, 30.0, WHITE);
            }
        }
        draw_text(&self.score.to_string(), 0.0, WINDOW_HEIGHT - 8.0, 50.0, WHITE);
    }

    fn update(&mut self) {
        if self.timer > 0 {
            self.timer -= 1;
        } else {
            self.timer = SWITCH_TIMER;
            self.switch_mode();
        }
    }

    fn on_mouse_click(&mut self, _x: f32, _y: f32, _button: MouseButton) {
        match self.mode {
            Mode::Target => self.score += 1,
            Mode::Decoy => self.score -= 1,
        }
        log::debug!("click while {:?}, score now {}", self.mode, self.score);
    }
}
