//! # Tiny Arcade - a box of small example games
//!
//! A collection of tiny, self-contained games that all follow the same
//! pattern: a mutable world struct, a draw method, an update method called
//! once per tick, and a few input handlers. The shared arithmetic (steering
//! an entity toward a goal, mapping screen coordinates to grid cells,
//! cycling through a fixed color palette, walking a linear menu) lives in
//! one parameterized engine so the games themselves stay thin.
//!
//! ## Games
//!
//! - [`games::spinner`] - a logo spinning through a four-phase cycle
//! - [`games::forward`] - a sprite walking into the right wall
//! - [`games::bounce`] - a sprite bouncing between floor and ceiling
//! - [`games::reaction`] - click the target, not the decoy
//! - [`games::chase`] - catch the red dot before it multiplies
//! - [`games::haunt`] - catch the ghost; it gets faster as it ages
//! - [`games::index_quiz`] - click the list position named on screen
//! - [`games::tour`] - walk forward and backward through a menu chain
//! - [`games::flash`] - hover over a grid of color-cycling circles
//! - [`games::mosaic`] - paint a grid of squares from a 16-color palette

/// Shared, parameterized game machinery.
pub mod engine {
    /// The callback contract every game implements.
    pub mod game;
    /// Angle, distance, and random-position helpers.
    pub mod geometry;
    /// A fixed-size 2D grid plus screen-to-grid coordinate mapping.
    pub mod grid;
    /// Horizontal row-of-boxes layout and index mapping.
    pub mod layout;
    /// A linear chain of menu pages with a cursor.
    pub mod menu;
    /// Closed color palettes with a total cyclic successor.
    pub mod palette;
    /// Pointer-driven population growth for steered entities.
    pub mod population;
    /// The frame loop that pumps input events into a game.
    pub mod runner;
    /// Entities that steer toward a goal position.
    pub mod steering;
}

/// The games themselves, one module per game.
pub mod games {
    /// Sprite bouncing between the top and bottom walls.
    pub mod bounce;
    /// Catch the red dot; each catch spawns two more.
    pub mod chase;
    /// A grid of circles that flash through three colors under the pointer.
    pub mod flash;
    /// Sprite moving right until it reaches the wall.
    pub mod forward;
    /// Catch the ghost; survivors speed up with age.
    pub mod haunt;
    /// Click the list position matching the displayed index.
    pub mod index_quiz;
    /// Free painting on a square grid with a 16-color palette strip.
    pub mod mosaic;
    /// Click while the target is shown, hold off while the decoy is.
    pub mod reaction;
    /// A logo spinning forward and backward on a timer.
    pub mod spinner;
    /// A guided tour through a linear chain of menu pages.
    pub mod tour;
}

/// Drawing helpers shared by the games.
pub mod graphics;
