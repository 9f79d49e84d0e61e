//! Entities that steer toward a goal position.
//!
//! A chaser recomputes its direction from scratch every tick, so there is
//! no heading smoothing: the moment its goal is replaced it turns straight
//! toward the new one. Age, when a game enables it, raises speed without
//! bound and is never reset by goal changes.

use macroquad::math::Vec2;

use super::geometry::{angle_between, is_touching, offset_from_angle, random_position};

/// Tuning shared by every chaser in one world.
#[derive(Debug, Clone, Copy)]
pub struct SteerParams {
    /// Extents of the window; random positions are sampled inside these.
    pub bounds: Vec2,
    /// Distance covered per tick before the age bonus.
    pub base_speed: f32,
    /// Added to a chaser's age every tick; zero disables aging.
    pub age_step: f32,
    /// Distance below which two positions count as touching.
    pub hit_radius: f32,
}

/// An entity with a current position steering toward a goal position.
#[derive(Debug, Clone, Copy)]
pub struct Chaser {
    /// Where the chaser is drawn right now.
    pub current: Vec2,
    /// Where the chaser is headed.
    pub goal: Vec2,
    /// Ticks-scaled lifetime; feeds into speed when aging is enabled.
    pub age: f32,
}

impl Chaser {
    /// A fresh chaser with random current and goal positions.
    pub fn spawn(params: &SteerParams) -> Self {
        Self {
            current: random_position(params.bounds),
            goal: random_position(params.bounds),
            age: 0.0,
        }
    }

    /// The direction from the current position to the goal, in radians.
    ///
    /// When current and goal coincide this is `atan2(0, 0)`, which is 0:
    /// the chaser drifts along +x until the arrival check replaces the
    /// goal.
    pub fn heading(&self) -> f32 {
        angle_between(self.current, self.goal)
    }

    /// Moves one tick toward the goal and ages the chaser.
    pub fn advance(&mut self, params: &SteerParams) {
        let speed = params.base_speed + self.age;
        self.current += offset_from_angle(self.heading(), speed);
        self.age += params.age_step;
    }

    /// Replaces the goal with a fresh random position once reached.
    ///
    /// Arrival means strictly closer than the hit radius. Returns whether
    /// the goal was replaced.
    pub fn retarget_if_arrived(&mut self, params: &SteerParams) -> bool {
        if is_touching(self.current, self.goal, params.hit_radius) {
            self.goal = random_position(params.bounds);
            true
        } else {
            false
        }
    }
}
