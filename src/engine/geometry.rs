//! Angle, distance, and random-position helpers shared by the games.

use macroquad::math::{Vec2, vec2};
use rand::Rng;

/// Angle in radians from `from` to `to`, in `(-pi, pi]`.
///
/// # Arguments
///
/// * `from` - The origin position
/// * `to` - The target position
pub fn angle_between(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Euclidean distance between two positions.
pub fn distance_between(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Displacement covered by moving `speed` units in the `angle` direction.
pub fn offset_from_angle(angle: f32, speed: f32) -> Vec2 {
    vec2(angle.cos() * speed, angle.sin() * speed)
}

/// Whether two positions are within `hit_radius` of each other.
///
/// The comparison is strict: a pair exactly `hit_radius` apart does not
/// count as touching.
pub fn is_touching(a: Vec2, b: Vec2, hit_radius: f32) -> bool {
    distance_between(a, b) < hit_radius
}

/// A uniformly random position inside `[0, bounds.x] x [0, bounds.y]`.
pub fn random_position(bounds: Vec2) -> Vec2 {
    let mut rng = rand::rng();
    vec2(
        rng.random_range(0.0..=bounds.x),
        rng.random_range(0.0..=bounds.y),
    )
}
