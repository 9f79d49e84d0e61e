//! A guided tour through a fixed chain of menu pages.
//!
//! `n` and `p` walk the chain, `r` rewinds to the start, and space jumps
//! straight to the end. Going forward past the last page does nothing;
//! going back never leaves the start page.

use macroquad::color::{BEIGE, Color, DARKBLUE, DARKGREEN, GOLD, GRAY, ORANGE, SKYBLUE};
use macroquad::input::KeyCode;

use crate::engine::game::Game;
use crate::engine::menu::{MenuChain, MenuPage};
use crate::graphics;

/// Window width in pixels.
pub const WINDOW_WIDTH: f32 = 725.0;
/// Window height in pixels.
pub const WINDOW_HEIGHT: f32 = 575.0;
/// Frame clear color.
pub const BACKGROUND: Color = GOLD;

const PAGES: [MenuPage; 6] = [
    MenuPage {
        name: "Harbor Town Tour",
        text: "Let's explore the harbor.\nPress 'n' to advance.",
        picture: SKYBLUE,
    },
    MenuPage {
        name: "The Lighthouse",
        text: "Best view in town.\nNow press 'n' again!",
        picture: BEIGE,
    },
    MenuPage {
        name: "Fish Market",
        text: "You could get lunch here.\nPress 'n' to go forward.\nOr you can press 'p' to go back.",
        picture: ORANGE,
    },
    MenuPage {
        name: "The Pier",
        text: "Lovely spot at sunset.\nPress 'n' to go forward.\nOr you can press 'p' to go back.",
        picture: DARKBLUE,
    },
    MenuPage {
        name: "Old Fort",
        text: "Centuries of history.\nPress 'n' to go forward.\nOr you can press 'p' to go back.",
        picture: GRAY,
    },
    MenuPage {
        name: "The End",
        text: "You found the hidden cove.\nCongratulations!",
        picture: DARKGREEN,
    },
];

/// World state: just the chain and its cursor.
pub struct Tour {
    /// The fixed pages plus the current position.
    pub chain: MenuChain,
}

impl Tour {
    /// A tour standing on the first page.
    pub fn new() -> Self {
        Self {
            chain: MenuChain::new(PAGES.to_vec()),
        }
    }
}

impl Default for Tour {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Tour {
    fn draw(&self) {
        graphics::draw_menu_page(self.chain.current());
    }

    fn update(&mut self) {}

    fn on_key_down(&mut self, key: KeyCode) {
        match key {
            KeyCode::R => self.chain.rewind(),
            KeyCode::N => self.chain.next(),
            KeyCode::P => self.chain.previous(),
            KeyCode::Space => self.chain.skip_to_end(),
            _ => {}
        }
    }
}
