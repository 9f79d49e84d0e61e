//! A banner spinning forward and backward on a timer.
//!
//! The world cycles through four phases; a tick timer drives both the phase
//! transitions and the banner's angle.

use macroquad::color::{BLACK, Color, GOLD, WHITE};
use macroquad::math::vec2;
use macroquad::shapes::{DrawRectangleParams, draw_rectangle_ex};

use crate::engine::game::Game;
use crate::graphics;

/// Window width in pixels.
pub const WINDOW_WIDTH: f32 = 500.0;
/// Window height in pixels.
pub const WINDOW_HEIGHT: f32 = 500.0;
/// Frame clear color.
pub const BACKGROUND: Color = BLACK;

const TIMER_MAXIMUM: u32 = 100;
const BANNER_SIZE: (f32, f32) = (260.0, 90.0);

/// The four stations of the spin cycle, in order.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    SpinningForward,
    Waiting,
    SpinningBackward,
    WaitingAgain,
}

impl Phase {
    /// The phase that follows once the timer runs out.
    pub fn next(self) -> Self {
        match self {
            Self::SpinningForward => Self::Waiting,
            Self::Waiting => Self::SpinningBackward,
            Self::SpinningBackward => Self::WaitingAgain,
            Self::WaitingAgain => Self::SpinningForward,
        }
    }
}

/// World state: the banner angle plus the timer driving it.
pub struct Spinner {
    /// Current rotation in degrees.
    pub angle: f32,
    /// Which part of the cycle we are in.
    pub phase: Phase,
    /// Ticks spent in the current phase, counts up to [`TIMER_MAXIMUM`].
    pub timer: u32,
}

impl Spinner {
    /// A world waiting with the banner upright.
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            phase: Phase::Waiting,
            timer: 0,
        }
    }

    fn update_timer(&mut self) {
        if self.timer < TIMER_MAXIMUM {
            self.timer += 1;
        } else {
            self.timer = 0;
            self.phase = self.phase.next();
        }
    }

    fn update_angle(&mut self) {
        let progress = self.timer as f32 / TIMER_MAXIMUM as f32;
        self.angle = match self.phase {
            Phase::SpinningForward => 360.0 * progress,
            Phase::SpinningBackward => 360.0 * (1.0 - progress),
            Phase::Waiting | Phase::WaitingAgain => 0.0,
        };
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Spinner {
    fn draw(&self) {
        draw_rectangle_ex(
            WINDOW_WIDTH / 2.0,
            WINDOW_HEIGHT / 2.0,
            BANNER_SIZE.0,
            BANNER_SIZE.1,
            DrawRectangleParams {
                offset: vec2(0.5, 0.5),
                rotation: self.angle.to_radians(),
                color: GOLD,
            },
        );
        graphics::draw_text_centered(
            "TINY ARCADE",
            WINDOW_WIDTH / 2.0,
            WINDOW_HEIGHT - 20.0,
            30.0,
            WHITE,
        );
    }

    fn update(&mut self) {
        self.update_timer();
        self.update_angle();
    }
}
