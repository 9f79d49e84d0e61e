#![allow(missing_docs)]

use macroquad::color::{BLUE, GREEN, RED, WHITE};
use tinyarcade::engine::menu::{MenuChain, MenuPage};

fn test_pages() -> Vec<MenuPage> {
    vec![
        MenuPage {
            name: "start",
            text: "the beginning",
            picture: WHITE,
        },
        MenuPage {
            name: "one",
            text: "first stop",
            picture: RED,
        },
        MenuPage {
            name: "two",
            text: "second stop",
            picture: GREEN,
        },
        MenuPage {
            name: "end",
            text: "the end",
            picture: BLUE,
        },
    ]
}

#[test]
fn test_chain_starts_on_the_start_page() {
    let chain = MenuChain::new(test_pages());
    assert_eq!(chain.current().name, "start");
    assert!(chain.is_at_start());
    assert!(!chain.is_at_end());
}

#[test]
fn test_next_walks_forward_and_stops_at_the_end() {
    let mut chain = MenuChain::new(test_pages());

    chain.next();
    assert_eq!(chain.current().name, "one");
    chain.next();
    chain.next();
    assert_eq!(chain.current().name, "end");
    assert!(chain.is_at_end());

    // past the end is a no-op
    chain.next();
    assert_eq!(chain.current().name, "end");
}

#[test]
fn test_previous_on_the_start_page_stays_there() {
    let mut chain = MenuChain::new(test_pages());

    chain.previous();
    assert_eq!(chain.current().name, "start");
    assert!(chain.is_at_start());
}

#[test]
fn test_previous_from_the_first_stop_reaches_the_start() {
    let mut chain = MenuChain::new(test_pages());
    chain.next();
    assert_eq!(chain.current().name, "one");

    chain.previous();
    assert_eq!(chain.current().name, "start");
}

#[test]
fn test_previous_from_the_end_moves_to_second_to_last() {
    let mut chain = MenuChain::new(test_pages());
    chain.skip_to_end();

    chain.previous();
    assert_eq!(chain.current().name, "two");
}

#[test]
fn test_rewind_and_skip_jump_to_the_ends() {
    let mut chain = MenuChain::new(test_pages());

    chain.skip_to_end();
    assert!(chain.is_at_end());
    assert_eq!(chain.current().name, "end");

    chain.rewind();
    assert!(chain.is_at_start());
    assert_eq!(chain.current().name, "start");
}

#[test]
#[should_panic(expected = "at least one page")]
fn test_empty_chain_is_rejected() {
    let _ = MenuChain::new(Vec::new());
}
