//! A sprite walks to the right until it reaches the wall, then stops.

use macroquad::color::{BLACK, BROWN, Color};
use macroquad::shapes::{draw_circle, draw_rectangle};

use crate::engine::game::Game;

/// Window width in pixels.
pub const WINDOW_WIDTH: f32 = 500.0;
/// Window height in pixels.
pub const WINDOW_HEIGHT: f32 = 500.0;
/// Frame clear color.
pub const BACKGROUND: Color = BLACK;

const MOVE_SPEED: f32 = 4.0;
const SPRITE_WIDTH: f32 = 64.0;
const SPRITE_HEIGHT: f32 = 48.0;

/// World state: the sprite's center plus a flag that stops it at the wall.
pub struct Forward {
    /// Sprite center x.
    pub x: f32,
    /// Sprite center y.
    pub y: f32,
    /// Cleared once the sprite's leading edge reaches the right wall.
    pub moving: bool,
}

impl Forward {
    /// A moving sprite starting a quarter of the way across the window.
    pub fn new() -> Self {
        Self {
            x: WINDOW_WIDTH / 4.0,
            y: WINDOW_HEIGHT / 2.0,
            moving: true,
        }
    }
}

impl Default for Forward {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Forward {
    fn draw(&self) {
        draw_rectangle(
            self.x - SPRITE_WIDTH / 2.0,
            self.y - SPRITE_HEIGHT / 2.0,
            SPRITE_WIDTH,
            SPRITE_HEIGHT,
            BROWN,
        );
        // an eye, so the walk direction reads on screen
        draw_circle(self.x + SPRITE_WIDTH / 4.0, self.y - SPRITE_HEIGHT / 4.0, 4.0, BLACK);
    }

    fn update(&mut self) {
        if WINDOW_WIDTH <= self.x + SPRITE_WIDTH / 2.0 {
            self.moving = false;
        }
        if self.moving {
            self.x += MOVE_SPEED;
        }
    }
}
