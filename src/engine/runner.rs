//! The frame loop: polls macroquad input, feeds a [`Game`], draws it.
//!
//! Everything is single-threaded and synchronous. Each frame delivers the
//! queued input events one at a time, runs exactly one `update`, then
//! draws. macroquad owns the window lifecycle and frame pacing.

use macroquad::prelude::{
    Color, MouseButton, clear_background, get_keys_pressed, get_keys_released,
    is_mouse_button_pressed, mouse_position, next_frame,
};

use super::game::Game;

const BUTTONS: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

/// Runs `game` until the window is closed.
pub async fn run(game: &mut dyn Game, background: Color) {
    let mut last_mouse = mouse_position();
    loop {
        for key in get_keys_pressed() {
            game.on_key_down(key);
        }
        for key in get_keys_released() {
            game.on_key_up(key);
        }
        for button in BUTTONS {
            if is_mouse_button_pressed(button) {
                let (x, y) = mouse_position();
                game.on_mouse_click(x, y, button);
            }
        }
        let mouse = mouse_position();
        if mouse != last_mouse {
            last_mouse = mouse;
            game.on_mouse_move(mouse.0, mouse.1);
        }

        game.update();

        clear_background(background);
        game.draw();
        next_frame().await;
    }
}
