//! Catch the ghost. Survivors age, and age makes them faster.
//!
//! Same chase rules as [`chase`](super::chase) with three twists: a much
//! larger touch radius, a speed that grows by 1/12 per tick of age, and a
//! population cap of 40 enforced by truncation.

use macroquad::color::{Color, GOLD};
use macroquad::math::vec2;

use crate::engine::game::Game;
use crate::engine::population::scatter_touched;
use crate::engine::steering::{Chaser, SteerParams};
use crate::graphics;

/// Window width in pixels.
pub const WINDOW_WIDTH: f32 = 800.0;
/// Window height in pixels.
pub const WINDOW_HEIGHT: f32 = 800.0;
/// Frame clear color.
pub const BACKGROUND: Color = GOLD;

/// Ghost diameter, doubling as the touch distance.
pub const GHOST_SIZE: f32 = 50.0;
/// Distance a newborn ghost covers per tick.
pub const GHOST_SPEED: f32 = 10.0;
/// Most ghosts the world will hold at once.
pub const MAX_GHOSTS: usize = 40;

const PARAMS: SteerParams = SteerParams {
    bounds: vec2(WINDOW_WIDTH, WINDOW_HEIGHT),
    base_speed: GHOST_SPEED,
    age_step: 1.0 / 12.0,
    hit_radius: GHOST_SIZE,
};

/// World state: the live ghosts plus the score display.
pub struct Haunt {
    /// Every ghost currently in the world.
    pub ghosts: Vec<Chaser>,
    /// Shown in the corner; the haunt itself never awards points.
    pub score: i32,
}

impl Haunt {
    /// A world with a single ghost.
    pub fn new() -> Self {
        Self {
            ghosts: vec![Chaser::spawn(&PARAMS)],
            score: 0,
        }
    }

    /// The steering configuration every ghost shares.
    pub fn params() -> &'static SteerParams {
        &PARAMS
    }
}

impl Default for Haunt {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Haunt {
    fn draw(&self) {
        for ghost in &self.ghosts {
            graphics::draw_chaser_ghost(ghost, GHOST_SIZE / 2.0);
        }
        graphics::draw_score(self.score);
    }

    fn update(&mut self) {
        for ghost in &mut self.ghosts {
            ghost.advance(&PARAMS);
            ghost.retarget_if_arrived(&PARAMS);
        }
    }

    fn on_mouse_move(&mut self, x: f32, y: f32) {
        let caught = scatter_touched(&mut self.ghosts, vec2(x, y), &PARAMS, Some(MAX_GHOSTS));
        if caught > 0 {
            log::debug!("caught {} ghost(s), {} now live", caught, self.ghosts.len());
        }
    }
}
