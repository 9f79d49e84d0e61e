#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use macroquad::input::{KeyCode, MouseButton};
use tinyarcade::engine::game::Game;
use tinyarcade::engine::palette::SquareColor;
use tinyarcade::games::{
    bounce, chase, flash, forward, haunt, index_quiz, mosaic, reaction, spinner, tour,
};

#[test]
fn test_spinner_phase_cycle() {
    use spinner::Phase;

    assert_eq!(Phase::Waiting.next(), Phase::SpinningBackward);
    assert_eq!(Phase::SpinningBackward.next(), Phase::WaitingAgain);
    assert_eq!(Phase::WaitingAgain.next(), Phase::SpinningForward);
    assert_eq!(Phase::SpinningForward.next(), Phase::Waiting);

    let mut world = spinner::Spinner::new();
    assert_eq!(world.phase, Phase::Waiting);
    assert_eq!(world.angle, 0.0);

    // the timer counts 0..=100, so the 101st tick rolls the phase over
    for _ in 0..101 {
        world.update();
    }
    assert_eq!(world.phase, Phase::SpinningBackward);
    assert_eq!(world.timer, 0);
    // backward spinning starts from a full turn
    assert_eq!(world.angle, 360.0);
}

#[test]
fn test_forward_sprite_stops_at_the_wall() {
    let mut world = forward::Forward::new();
    assert!(world.moving);

    for _ in 0..300 {
        world.update();
    }
    assert!(!world.moving);
    assert!(world.x < forward::WINDOW_WIDTH);

    let parked = world.x;
    world.update();
    assert_eq!(world.x, parked);
}

#[test]
fn test_bounce_sprite_turns_at_both_walls() {
    let mut world = bounce::Bounce::new();
    let mut seen_up = false;
    let mut seen_down = false;

    for _ in 0..1000 {
        world.update();
        match world.heading {
            bounce::Heading::Up => seen_up = true,
            bounce::Heading::Down => seen_down = true,
        }
        assert!(world.y > 0.0);
        assert!(world.y < bounce::WINDOW_HEIGHT);
    }
    assert!(seen_up && seen_down);
}

#[test]
fn test_reaction_swaps_modes_on_a_timer() {
    let mut world = reaction::Reaction::new();
    assert_eq!(world.mode, reaction::Mode::Target);
    assert_eq!(world.timer, reaction::SWITCH_TIMER);

    for _ in 0..60 {
        world.update();
    }
    assert_eq!(world.timer, 0);
    assert_eq!(world.mode, reaction::Mode::Target);

    world.update();
    assert_eq!(world.timer, reaction::SWITCH_TIMER);
    assert_eq!(world.mode, reaction::Mode::Decoy);
}

#[test]
fn test_reaction_scores_by_mode() {
    let mut world = reaction::Reaction::new();

    world.on_mouse_click(250.0, 250.0, MouseButton::Left);
    assert_eq!(world.score, 1);

    world.switch_mode();
    world.on_mouse_click(250.0, 250.0, MouseButton::Left);
    assert_eq!(world.score, 0);
}

#[test]
fn test_chase_starts_with_one_dot_and_scatters() {
    let mut world = chase::Chase::new();
    assert_eq!(world.dots.len(), 1);

    // a pointer nowhere near the dot leaves it alone
    let far = world.dots[0].current + macroquad::math::vec2(200.0, 200.0);
    world.on_mouse_move(far.x, far.y);
    assert_eq!(world.dots.len(), 1);

    // touching the dot replaces it with two
    let dot = world.dots[0].current;
    world.on_mouse_move(dot.x, dot.y);
    assert_eq!(world.dots.len(), 2);
}

#[test]
fn test_chase_update_moves_dots_at_unit_speed() {
    let mut world = chase::Chase::new();
    let before = world.dots[0].current;

    world.update();

    // retargeting may swap the goal, but the step itself is always 1
    let moved = world.dots[0].current.distance(before);
    assert!((moved - chase::DOT_SPEED).abs() < 1e-3);
}

#[test]
fn test_haunt_population_never_exceeds_the_cap() {
    let mut world = haunt::Haunt::new();

    for _ in 0..200 {
        let ghost = world.ghosts[0].current;
        world.on_mouse_move(ghost.x, ghost.y);
        assert!(world.ghosts.len() <= haunt::MAX_GHOSTS);
    }
}

#[test]
fn test_haunt_ghosts_age_every_tick() {
    let mut world = haunt::Haunt::new();
    assert_eq!(world.ghosts[0].age, 0.0);

    world.update();
    assert!((world.ghosts[0].age - 1.0 / 12.0).abs() < 1e-6);
}

#[test]
fn test_quiz_starts_sane() {
    let world = index_quiz::IndexQuiz::new();
    assert!((3..=8).contains(&world.values.len()));
    assert_eq!(world.target, 0);
    assert_eq!(world.score, 0);
    assert_eq!(world.hovering, None);
}

#[test]
fn test_quiz_hover_tracks_the_row() {
    let mut world = index_quiz::IndexQuiz::new();
    let len = world.values.len();

    // x of the first box: the row is centered, 40 pixels per box
    let row_left = 250.0 - (len as f32 / 2.0) * 40.0;
    world.on_mouse_move(row_left + 5.0, 250.0);
    assert_eq!(world.hovering, Some(0));

    world.on_mouse_move(row_left + 45.0, 250.0);
    assert_eq!(world.hovering, Some(1));

    // off the row on either side clears the hover
    world.on_mouse_move(row_left - 10.0, 250.0);
    assert_eq!(world.hovering, None);
    world.on_mouse_move(row_left + len as f32 * 40.0 + 10.0, 250.0);
    assert_eq!(world.hovering, None);
}

#[test]
fn test_quiz_right_click_position_wins_a_point() {
    let mut world = index_quiz::IndexQuiz::new();
    let len = world.values.len();
    let row_left = 250.0 - (len as f32 / 2.0) * 40.0;

    // the first target is always index 0
    world.on_mouse_click(row_left + 5.0, 250.0, MouseButton::Left);
    assert_eq!(world.score, 1);

    // winning rolls a fresh list and a target that may count from the end
    let new_len = world.values.len() as i32;
    assert!((3..=8).contains(&(new_len as usize)));
    assert!(world.target >= -new_len);
    assert!(world.target < new_len);
}

#[test]
fn test_quiz_wrong_click_loses_a_point() {
    let mut world = index_quiz::IndexQuiz::new();

    // far left of the row is never index 0
    world.on_mouse_click(0.0, 250.0, MouseButton::Left);
    assert_eq!(world.score, -1);
}

#[test]
fn test_tour_walks_to_the_end_and_back() {
    let mut world = tour::Tour::new();
    assert!(world.chain.is_at_start());

    for _ in 0..10 {
        world.on_key_down(KeyCode::N);
    }
    assert!(world.chain.is_at_end());
    assert_eq!(world.chain.current().name, "The End");

    world.on_key_down(KeyCode::P);
    assert_eq!(world.chain.current().name, "Old Fort");

    world.on_key_down(KeyCode::R);
    assert!(world.chain.is_at_start());

    world.on_key_down(KeyCode::Space);
    assert!(world.chain.is_at_end());
}

#[test]
fn test_flash_advances_the_hovered_cell_each_tick() {
    use tinyarcade::engine::palette::CircleColor;

    let mut world = flash::Flash::new();
    assert_eq!(world.grid.get(0, 0), Some(&CircleColor::Red));

    // nothing hovered, nothing changes
    world.update();
    assert_eq!(world.grid.get(0, 0), Some(&CircleColor::Red));

    world.on_mouse_move(10.0, 10.0);
    assert_eq!(world.hovered, Some((0, 0)));

    world.update();
    assert_eq!(world.grid.get(0, 0), Some(&CircleColor::Blue));
    world.update();
    assert_eq!(world.grid.get(0, 0), Some(&CircleColor::Green));
    world.update();
    assert_eq!(world.grid.get(0, 0), Some(&CircleColor::Red));

    world.on_mouse_move(-5.0, 10.0);
    assert_eq!(world.hovered, None);
}

#[test]
fn test_mosaic_palette_strip_is_laid_out_and_immutable() {
    let mut world = mosaic::Mosaic::new();

    assert_eq!(world.grid.get(0, 0), Some(&SquareColor::Pink));
    assert_eq!(world.grid.get(15, 0), Some(&SquareColor::Black));
    assert_eq!(world.grid.get(16, 0), Some(&SquareColor::White));

    // hovering a strip cell never advances it
    world.on_mouse_move(5.0, 5.0);
    assert_eq!(world.hovered, Some((0, 0)));
    world.update();
    assert_eq!(world.grid.get(0, 0), Some(&SquareColor::Pink));
}

#[test]
fn test_mosaic_painting_and_reset() {
    let mut world = mosaic::Mosaic::new();

    // hover a canvas cell: (0, 5) sits below the strip
    world.on_mouse_move(5.0, 105.0);
    assert_eq!(world.hovered, Some((0, 5)));

    world.update();
    assert_eq!(world.grid.get(0, 5), Some(&SquareColor::Gray));
    world.update();
    assert_eq!(world.grid.get(0, 5), Some(&SquareColor::Black));

    world.on_key_down(KeyCode::R);
    assert_eq!(world.grid.get(0, 5), Some(&SquareColor::White));
    assert_eq!(world.grid.get(0, 0), Some(&SquareColor::Pink));

    // the release handler wipes the canvas too
    world.on_mouse_move(5.0, 105.0);
    world.update();
    assert_eq!(world.grid.get(0, 5), Some(&SquareColor::Gray));
    world.on_key_up(KeyCode::R);
    assert_eq!(world.grid.get(0, 5), Some(&SquareColor::White));
}
