//! Tiny Arcade entry point.
//!
//! One binary, many games: the game to run is picked on the command line
//! and driven by the shared frame loop.
//!
//! ```sh
//! cargo run -- haunt
//! RUST_LOG=debug cargo run -- chase
//! ```

use clap::{Parser, ValueEnum};
use macroquad::color::Color;
use macroquad::window::{Conf, next_frame, request_new_screen_size};

use tinyarcade::engine::game::Game;
use tinyarcade::engine::runner;
use tinyarcade::games::{
    bounce, chase, flash, forward, haunt, index_quiz, mosaic, reaction, spinner, tour,
};

/// Tiny Arcade: a box of tiny example games.
#[derive(Parser)]
#[command(version, about = "A box of tiny example games sharing one small engine")]
struct Cli {
    /// Which game to run; defaults to the dot chase.
    #[arg(value_enum)]
    game: Option<Pick>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Pick {
    Spinner,
    Forward,
    Bounce,
    Reaction,
    Chase,
    Haunt,
    Quiz,
    Tour,
    Flash,
    Mosaic,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "tiny arcade".to_owned(),
        window_width: 500,
        window_height: 500,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let pick = cli.game.unwrap_or(Pick::Chase);
    log::info!("starting {:?}", pick);

    let (width, height, background, mut game): (f32, f32, Color, Box<dyn Game>) = match pick {
        Pick::Spinner => (
            spinner::WINDOW_WIDTH,
            spinner::WINDOW_HEIGHT,
            spinner::BACKGROUND,
            Box::new(spinner::Spinner::new()),
        ),
        Pick::Forward => (
            forward::WINDOW_WIDTH,
            forward::WINDOW_HEIGHT,
            forward::BACKGROUND,
            Box::new(forward::Forward::new()),
        ),
        Pick::Bounce => (
            bounce::WINDOW_WIDTH,
            bounce::WINDOW_HEIGHT,
            bounce::BACKGROUND,
            Box::new(bounce::Bounce::new()),
        ),
        Pick::Reaction => (
            reaction::WINDOW_WIDTH,
            reaction::WINDOW_HEIGHT,
            reaction::BACKGROUND,
            Box::new(reaction::Reaction::new()),
        ),
        Pick::Chase => (
            chase::WINDOW_WIDTH,
            chase::WINDOW_HEIGHT,
            chase::BACKGROUND,
            Box::new(chase::Chase::new()),
        ),
        Pick::Haunt => (
            haunt::WINDOW_WIDTH,
            haunt::WINDOW_HEIGHT,
            haunt::BACKGROUND,
            Box::new(haunt::Haunt::new()),
        ),
        Pick::Quiz => (
            index_quiz::WINDOW_WIDTH,
            index_quiz::WINDOW_HEIGHT,
            index_quiz::BACKGROUND,
            Box::new(index_quiz::IndexQuiz::new()),
        ),
        Pick::Tour => (
            tour::WINDOW_WIDTH,
            tour::WINDOW_HEIGHT,
            tour::BACKGROUND,
            Box::new(tour::Tour::new()),
        ),
        Pick::Flash => (
            flash::WINDOW_WIDTH,
            flash::WINDOW_HEIGHT,
            flash::BACKGROUND,
            Box::new(flash::Flash::new()),
        ),
        Pick::Mosaic => (
            mosaic::WINDOW_WIDTH,
            mosaic::WINDOW_HEIGHT,
            mosaic::BACKGROUND,
            Box::new(mosaic::Mosaic::new()),
        ),
    };

    request_new_screen_size(width, height);
    // let the resize land before the first real frame
    next_frame().await;

    runner::run(game.as_mut(), background).await;
}
