//! A grid of circles that flash through three colors under the pointer.
//!
//! The hovered cell advances one palette step every tick, so holding the
//! pointer still makes that circle strobe.

use macroquad::color::{BLACK, Color};

use crate::engine::game::Game;
use crate::engine::grid::{Grid, grid_index};
use crate::engine::palette::{CircleColor, Palette};
use crate::graphics;

/// Window width in pixels.
pub const WINDOW_WIDTH: f32 = 500.0;
/// Window height in pixels.
pub const WINDOW_HEIGHT: f32 = 500.0;
/// Frame clear color.
pub const BACKGROUND: Color = BLACK;

/// Cells per row.
pub const GRID_WIDTH: usize = 25;
/// Cells per column.
pub const GRID_HEIGHT: usize = 25;

const CIRCLE_SIZE: f32 = WINDOW_WIDTH / GRID_WIDTH as f32;

/// World state: the color grid plus the hovered cell, if any.
pub struct Flash {
    /// The grid of circle colors, mutated in place.
    pub grid: Grid<CircleColor>,
    /// Grid cell under the pointer; `None` when off the grid.
    pub hovered: Option<(usize, usize)>,
}

impl Flash {
    /// An all-red grid with nothing hovered.
    pub fn new() -> Self {
        Self {
            grid: Grid::filled(GRID_WIDTH, GRID_HEIGHT, CircleColor::Red),
            hovered: None,
        }
    }
}

impl Default for Flash {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Flash {
    fn draw(&self) {
        graphics::draw_grid_circles(&self.grid, CIRCLE_SIZE);
    }

    fn update(&mut self) {
        if let Some((x, y)) = self.hovered {
            if let Some(cell) = self.grid.get_mut(x, y) {
                *cell = cell.next();
            }
        }
    }

    fn on_mouse_move(&mut self, x: f32, y: f32) {
        let grid_x = grid_index(x, WINDOW_WIDTH, GRID_WIDTH);
        let grid_y = grid_index(y, WINDOW_HEIGHT, GRID_HEIGHT);
        self.hovered = match (grid_x, grid_y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        };
    }
}
