//! Catch the red dot. Every dot you touch scatters into two new ones.

use macroquad::color::{BLACK, Color, RED};
use macroquad::math::vec2;

use crate::engine::game::Game;
use crate::engine::population::scatter_touched;
use crate::engine::steering::{Chaser, SteerParams};
use crate::graphics;

/// Window width in pixels.
pub const WINDOW_WIDTH: f32 = 500.0;
/// Window height in pixels.
pub const WINDOW_HEIGHT: f32 = 500.0;
/// Frame clear color.
pub const BACKGROUND: Color = BLACK;

/// Dot diameter, doubling as the touch distance.
pub const DOT_SIZE: f32 = 20.0;
/// Distance a dot covers per tick.
pub const DOT_SPEED: f32 = 1.0;

const PARAMS: SteerParams = SteerParams {
    bounds: vec2(WINDOW_WIDTH, WINDOW_HEIGHT),
    base_speed: DOT_SPEED,
    age_step: 0.0,
    hit_radius: DOT_SIZE,
};

/// World state: the live dots plus the (so far untouched) score display.
pub struct Chase {
    /// Every dot currently in the world.
    pub dots: Vec<Chaser>,
    /// Shown in the corner; the chase itself never awards points.
    pub score: i32,
}

impl Chase {
    /// A world with a single dot.
    pub fn new() -> Self {
        Self {
            dots: vec![Chaser::spawn(&PARAMS)],
            score: 0,
        }
    }

    /// The steering configuration every dot shares.
    pub fn params() -> &'static SteerParams {
        &PARAMS
    }
}

impl Default for Chase {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Chase {
    fn draw(&self) {
        for dot in &self.dots {
            graphics::draw_chaser_dot(dot, DOT_SIZE / 2.0, RED);
        }
        graphics::draw_score(self.score);
    }

    fn update(&mut self) {
        for dot in &mut self.dots {
            dot.advance(&PARAMS);
            dot.retarget_if_arrived(&PARAMS);
        }
    }

    fn on_mouse_move(&mut self, x: f32, y: f32) {
        let caught = scatter_touched(&mut self.dots, vec2(x, y), &PARAMS, None);
        if caught > 0 {
            log::debug!("caught {} dot(s), {} now live", caught, self.dots.len());
        }
    }
}
