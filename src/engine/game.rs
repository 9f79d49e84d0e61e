//! The callback contract between a game and the frame loop.
//!
//! Every game is a single mutable world struct implementing [`Game`]. The
//! [`runner`](super::runner) drives one `update` per tick and delivers input
//! events serially between frames, so handlers never overlap and the world
//! has exactly one owner at any time.

use macroquad::input::{KeyCode, MouseButton};

/// A world that can be drawn, ticked, and poked by input events.
///
/// The input handlers default to no-ops so games only spell out the events
/// they care about.
pub trait Game {
    /// Renders the current world. Read-only; called once per frame.
    fn draw(&self);

    /// Advances the world by one tick.
    fn update(&mut self);

    /// A keyboard key went down.
    fn on_key_down(&mut self, _key: KeyCode) {}

    /// A keyboard key came back up.
    fn on_key_up(&mut self, _key: KeyCode) {}

    /// A mouse button was clicked at the given screen position.
    fn on_mouse_click(&mut self, _x: f32, _y: f32, _button: MouseButton) {}

    /// The pointer moved to the given screen position.
    fn on_mouse_move(&mut self, _x: f32, _y: f32) {}
}
