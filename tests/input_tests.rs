// Host-side tests for the shared cursor record.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn cursor_is_absent_until_the_first_move() {
    let ms = MouseState::default();
    assert!(ms.cursor().is_none());
    assert!(!ms.down);
}

#[test]
fn set_position_makes_the_cursor_present() {
    let mut ms = MouseState::default();
    ms.set_position(Vec2::new(120.0, 40.0));
    assert_eq!(ms.cursor(), Some(Vec2::new(120.0, 40.0)));
}

#[test]
fn leaving_clears_coordinates_but_not_the_button() {
    let mut ms = MouseState::default();
    ms.set_position(Vec2::new(120.0, 40.0));
    ms.down = true;
    ms.clear_position();
    assert!(ms.cursor().is_none());
    // The press ends via pointerup, not via leaving the canvas.
    assert!(ms.down);
}

#[test]
fn returning_after_a_leave_tracks_again() {
    let mut ms = MouseState::default();
    ms.set_position(Vec2::new(1.0, 2.0));
    ms.clear_position();
    ms.set_position(Vec2::new(3.0, 4.0));
    assert_eq!(ms.cursor(), Some(Vec2::new(3.0, 4.0)));
}
