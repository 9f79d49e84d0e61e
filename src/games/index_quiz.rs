//! Click the list position matching the displayed index.
//!
//! A random list is drawn as a centered row of boxes. The target index may
//! be negative, in which case it counts from the end of the list.

use macroquad::color::{Color, GOLD, WHITE};
use macroquad::input::MouseButton;
use macroquad::text::draw_text;
use rand::Rng;

use crate::engine::game::Game;
use crate::engine::layout::{RowLayout, absolute_index};
use crate::graphics;

/// Window width in pixels.
pub const WINDOW_WIDTH: f32 = 500.0;
/// Window height in pixels.
pub const WINDOW_HEIGHT: f32 = 500.0;
/// Frame clear color.
pub const BACKGROUND: Color = GOLD;

const WINDOW_CENTER_X: f32 = WINDOW_WIDTH / 2.0;
const WINDOW_CENTER_Y: f32 = WINDOW_HEIGHT / 2.0;

// These control the generated lists' length and values.
const LIST_MINIMUM_LENGTH: usize = 3;
const LIST_MAXIMUM_LENGTH: usize = 8;
const LIST_MINIMUM_VALUE: i32 = -9;
const LIST_MAXIMUM_VALUE: i32 = 9;

const FONT_SIZE: f32 = 20.0;
const BOX_WIDTH: f32 = 40.0;
const BOX_HEIGHT: f32 = 80.0;

const LAYOUT: RowLayout = RowLayout {
    window_center_x: WINDOW_CENTER_X,
    box_width: BOX_WIDTH,
};

fn random_value() -> i32 {
    rand::rng().random_range(LIST_MINIMUM_VALUE..=LIST_MAXIMUM_VALUE)
}

fn random_list() -> Vec<i32> {
    let length = rand::rng().random_range(LIST_MINIMUM_LENGTH..=LIST_MAXIMUM_LENGTH);
    (0..length).map(|_| random_value()).collect()
}

/// World state: the list, the asked-for index, and the hover highlight.
pub struct IndexQuiz {
    /// The values currently on screen.
    pub values: Vec<i32>,
    /// The index the player should click; negative counts from the end.
    pub target: i32,
    /// The box under the pointer, if the pointer is on the row at all.
    pub hovering: Option<usize>,
    /// Running score.
    pub score: i32,
}

impl IndexQuiz {
    /// A fresh quiz asking for index 0 of a random list.
    pub fn new() -> Self {
        Self {
            values: random_list(),
            target: 0,
            hovering: None,
            score: 0,
        }
    }

    /// Awards a point and rolls a new list and target.
    pub fn win_point(&mut self) {
        self.values = random_list();
        let length = self.values.len() as i32;
        self.target = rand::rng().random_range(-length..=length - 1);
        self.score += 1;
        log::debug!("point won, next target index {}", self.target);
    }

    /// Deducts a point for clicking the wrong box.
    pub fn lose_point(&mut self) {
        self.score -= 1;
    }
}

impl Default for IndexQuiz {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for IndexQuiz {
    fn draw(&self) {
        graphics::draw_value_boxes(
            &self.values,
            self.hovering,
            &LAYOUT,
            WINDOW_CENTER_Y - BOX_HEIGHT / 2.0,
            BOX_HEIGHT,
            FONT_SIZE,
        );
        graphics::draw_score(self.score);
        draw_text(
            &format!("Click index {}", self.target),
            0.0,
            FONT_SIZE + 4.0,
            FONT_SIZE,
            WHITE,
        );
    }

    fn update(&mut self) {}

    fn on_mouse_click(&mut self, x: f32, _y: f32, _button: MouseButton) {
        let clicked = LAYOUT.index_at(x, self.values.len());
        let target = absolute_index(self.target, self.values.len()) as i32;
        if clicked == target {
            self.win_point();
        } else {
            self.lose_point();
        }
    }

    fn on_mouse_move(&mut self, x: f32, _y: f32) {
        let hovered = LAYOUT.index_at(x, self.values.len());
        self.hovering = usize::try_from(hovered)
            .ok()
            .filter(|index| *index < self.values.len());
    }
}
