//! Pointer-driven population growth.
//!
//! Moving the pointer over a chaser removes it and spawns two fresh ones in
//! its place, so every catch grows the population by one. A game may cap
//! the population; the cap is applied by truncating the rebuilt list.

use macroquad::math::Vec2;

use super::geometry::is_touching;
use super::steering::{Chaser, SteerParams};

/// Replaces every chaser touching `pointer` with two fresh spawns.
///
/// Chasers out of range are kept unchanged. When `cap` is given the
/// resulting list is truncated to at most that many entries. Returns how
/// many chasers were caught.
pub fn scatter_touched(
    chasers: &mut Vec<Chaser>,
    pointer: Vec2,
    params: &SteerParams,
    cap: Option<usize>,
) -> usize {
    let mut kept = Vec::with_capacity(chasers.len() + 1);
    let mut caught = 0;
    for chaser in chasers.drain(..) {
        if is_touching(chaser.current, pointer, params.hit_radius) {
            caught += 1;
            kept.push(Chaser::spawn(params));
            kept.push(Chaser::spawn(params));
        } else {
            kept.push(chaser);
        }
    }
    if let Some(cap) = cap {
        kept.truncate(cap);
    }
    *chasers = kept;
    caught
}
