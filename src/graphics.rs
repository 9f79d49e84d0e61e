//! Drawing helpers shared by the games.

#![allow(missing_docs)]

use macroquad::prelude::*;

use crate::engine::grid::Grid;
use crate::engine::layout::RowLayout;
use crate::engine::menu::MenuPage;
use crate::engine::palette::Palette;
use crate::engine::steering::Chaser;

pub const SCORE_FONT_SIZE: f32 = 20.0;

pub fn draw_score(score: i32) {
    draw_text(
        &format!("Score: {}", score),
        0.0,
        screen_height() - 6.0,
        SCORE_FONT_SIZE,
        WHITE,
    );
}

pub fn draw_text_centered(text: &str, center_x: f32, baseline_y: f32, font_size: f32, color: Color) {
    let size = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, center_x - size.width / 2.0, baseline_y, font_size, color);
}

pub fn draw_chaser_dot(chaser: &Chaser, radius: f32, color: Color) {
    draw_circle(chaser.current.x, chaser.current.y, radius, color);
}

// A ghost stand-in: a pale body with a short whisker showing where it is
// headed, since there is no texture to rotate.
pub fn draw_chaser_ghost(chaser: &Chaser, radius: f32) {
    draw_circle(chaser.current.x, chaser.current.y, radius, WHITE);
    draw_circle(chaser.current.x, chaser.current.y, radius * 0.8, Color::new(0.9, 0.9, 1.0, 1.0));
    let heading = chaser.heading();
    let tip_x = chaser.current.x + heading.cos() * radius * 1.5;
    let tip_y = chaser.current.y + heading.sin() * radius * 1.5;
    draw_line(chaser.current.x, chaser.current.y, tip_x, tip_y, 2.0, DARKGRAY);
}

pub fn draw_grid_squares<P: Palette>(grid: &Grid<P>, cell_width: f32, cell_height: f32) {
    for (y, row) in grid.rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            draw_rectangle(
                x as f32 * cell_width,
                y as f32 * cell_height,
                cell_width,
                cell_height,
                cell.shade(),
            );
        }
    }
}

pub fn draw_grid_circles<P: Palette>(grid: &Grid<P>, cell_size: f32) {
    let radius = cell_size / 2.0;
    for (y, row) in grid.rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            draw_circle(
                x as f32 * cell_size + radius,
                y as f32 * cell_size + radius,
                radius,
                cell.shade(),
            );
        }
    }
}

pub fn draw_value_boxes(
    values: &[i32],
    hovering: Option<usize>,
    layout: &RowLayout,
    top_y: f32,
    box_size: f32,
    font_size: f32,
) {
    for (index, value) in values.iter().enumerate() {
        let x = layout.screen_x(index, values.len());
        if hovering == Some(index) {
            draw_rectangle(x, top_y, layout.box_width, box_size, DARKBLUE);
        }
        draw_rectangle_lines(x, top_y, layout.box_width, box_size, 2.0, WHITE);
        draw_text(&value.to_string(), x + 5.0, top_y + font_size + 5.0, font_size, WHITE);
    }
}

pub fn draw_menu_page(page: &MenuPage) {
    let center_x = screen_width() / 2.0;
    let center_y = screen_height() / 2.0;
    let panel = vec2(screen_width() * 0.6, screen_height() * 0.5);
    draw_rectangle(
        center_x - panel.x / 2.0,
        center_y - panel.y / 2.0,
        panel.x,
        panel.y,
        page.picture,
    );
    draw_text(page.name, 8.0, 54.0, 50.0, WHITE);
    let mut line_y = screen_height() - 8.0;
    for line in page.text.lines().rev() {
        draw_text(line, 8.0, line_y, 20.0, BLACK);
        line_y -= 22.0;
    }
}
