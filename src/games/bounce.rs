//! A sprite bounces between the top and bottom walls forever.

use macroquad::color::{Color, DARKBLUE, GOLD, RED};
use macroquad::shapes::{draw_circle, draw_rectangle};

use crate::engine::game::Game;

/// Window width in pixels.
pub const WINDOW_WIDTH: f32 = 600.0;
/// Window height in pixels.
pub const WINDOW_HEIGHT: f32 = 600.0;
/// Frame clear color.
pub const BACKGROUND: Color = GOLD;

const MOVE_SPEED: f32 = 7.0;
const SPRITE_WIDTH: f32 = 48.0;
const SPRITE_HEIGHT: f32 = 64.0;

/// Which wall the sprite is headed for.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
}

/// World state: the sprite's center plus its current heading.
pub struct Bounce {
    /// Sprite center x.
    pub x: f32,
    /// Sprite center y.
    pub y: f32,
    /// Which way the sprite moves this tick.
    pub heading: Heading,
}

impl Bounce {
    /// A sprite starting mid-window, headed up.
    pub fn new() -> Self {
        Self {
            x: WINDOW_WIDTH / 4.0,
            y: WINDOW_HEIGHT / 2.0,
            heading: Heading::Up,
        }
    }
}

impl Default for Bounce {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Bounce {
    fn draw(&self) {
        draw_rectangle(
            self.x - SPRITE_WIDTH / 2.0,
            self.y - SPRITE_HEIGHT / 2.0,
            SPRITE_WIDTH,
            SPRITE_HEIGHT,
            RED,
        );
        draw_circle(self.x, self.y - SPRITE_HEIGHT / 4.0, 6.0, DARKBLUE);
    }

    fn update(&mut self) {
        if self.y - SPRITE_HEIGHT / 2.0 <= 0.0 {
            self.heading = Heading::Down;
        }
        if WINDOW_HEIGHT <= self.y + SPRITE_HEIGHT / 2.0 {
            self.heading = Heading::Up;
        }
        match self.heading {
            Heading::Up => self.y -= MOVE_SPEED,
            Heading::Down => self.y += MOVE_SPEED,
        }
    }
}
