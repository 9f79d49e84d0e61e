//! Free painting on a square grid with a 16-color palette.
//!
//! The first sixteen cells of the top row form a fixed palette strip that
//! shows the full color order and never changes. Every other cell advances
//! one palette step per tick while hovered. `r` wipes the canvas back to
//! white (the strip is rebuilt with it).

use macroquad::color::{Color, SKYBLUE};
use macroquad::input::KeyCode;

use crate::engine::game::Game;
use crate::engine::grid::{Grid, grid_index};
use crate::engine::palette::{Palette, SquareColor};
use crate::graphics;

/// Window width in pixels.
pub const WINDOW_WIDTH: f32 = 800.0;
/// Window height in pixels.
pub const WINDOW_HEIGHT: f32 = 600.0;
/// Frame clear color.
pub const BACKGROUND: Color = SKYBLUE;

/// Cells per row.
pub const GRID_WIDTH: usize = 50;
/// Cells per column.
pub const GRID_HEIGHT: usize = 30;

const CELL_WIDTH: f32 = WINDOW_WIDTH / GRID_WIDTH as f32;
const CELL_HEIGHT: f32 = WINDOW_HEIGHT / GRID_HEIGHT as f32;

/// Whether a cell belongs to the immutable palette strip in the top row.
pub fn in_palette_strip(x: usize, y: usize) -> bool {
    y == 0 && x < SquareColor::ALL.len()
}

/// A white canvas with the palette strip laid into the top row.
pub fn make_canvas() -> Grid<SquareColor> {
    let mut grid = Grid::filled(GRID_WIDTH, GRID_HEIGHT, SquareColor::White);
    for (x, color) in SquareColor::ALL.iter().enumerate() {
        grid.set(x, 0, *color);
    }
    grid
}

/// World state: the canvas plus the hovered cell, if any.
pub struct Mosaic {
    /// The grid of square colors, mutated in place.
    pub grid: Grid<SquareColor>,
    /// Grid cell under the pointer; `None` when off the grid.
    pub hovered: Option<(usize, usize)>,
}

impl Mosaic {
    /// A fresh canvas with nothing hovered.
    pub fn new() -> Self {
        Self {
            grid: make_canvas(),
            hovered: None,
        }
    }
}

impl Default for Mosaic {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Mosaic {
    fn draw(&self) {
        graphics::draw_grid_squares(&self.grid, CELL_WIDTH, CELL_HEIGHT);
    }

    fn update(&mut self) {
        if let Some((x, y)) = self.hovered {
            if in_palette_strip(x, y) {
                return;
            }
            if let Some(cell) = self.grid.get_mut(x, y) {
                *cell = cell.next();
            }
        }
    }

    fn on_key_down(&mut self, key: KeyCode) {
        if key == KeyCode::R {
            self.grid = make_canvas();
        }
    }

    fn on_key_up(&mut self, key: KeyCode) {
        if key == KeyCode::R {
            self.grid = make_canvas();
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
