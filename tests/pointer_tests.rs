// Host-side tests for pointer normalization and easing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod pointer {
    include!("../src/core/pointer.rs");
}

use glam::Vec2;
use pointer::*;

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).abs().max_element() < 1e-5
}

#[test]
fn client_corners_map_to_unit_square() {
    let (w, h) = (800.0, 600.0);
    assert!(close(normalize_client(0.0, 0.0, w, h).unwrap(), Vec2::new(-1.0, 1.0)));
    assert!(close(normalize_client(w, h, w, h).unwrap(), Vec2::new(1.0, -1.0)));
    assert!(close(normalize_client(400.0, 300.0, w, h).unwrap(), Vec2::ZERO));
    assert!(close(normalize_client(600.0, 150.0, w, h).unwrap(), Vec2::new(0.5, 0.5)));
}

#[test]
fn degenerate_viewport_keeps_target() {
    let mut state = PointerState::default();
    state.set_target_from_client(200.0, 100.0, 800.0, 400.0);
    let before = state.target;
    state.set_target_from_client(10.0, 10.0, 0.0, 400.0);
    state.set_target_from_client(10.0, 10.0, 800.0, -1.0);
    assert_eq!(state.target, before);
    assert!(normalize_client(1.0, 1.0, 0.0, 0.0).is_none());
}

#[test]
fn last_event_wins() {
    let mut state = PointerState::default();
    state.set_target_from_client(0.0, 0.0, 100.0, 100.0);
    state.set_target_from_client(100.0, 100.0, 100.0, 100.0);
    assert!(close(state.target, Vec2::new(1.0, -1.0)));
    assert_eq!(state.current, Vec2::ZERO);
}

#[test]
fn easing_converges_geometrically() {
    let mut state = PointerState {
        target: Vec2::new(1.0, -0.5),
        current: Vec2::ZERO,
    };
    let initial = (state.target - state.current).length();
    for k in 1..=30 {
        state.ease(0.1);
        let expected = initial * 0.9f32.powi(k);
        let gap = (state.target - state.current).length();
        assert!((gap - expected).abs() < 1e-5, "step {}: {} vs {}", k, gap, expected);
    }
}

#[test]
fn easing_with_factor_one_snaps() {
    let mut state = PointerState {
        target: Vec2::new(0.3, 0.7),
        current: Vec2::new(-1.0, -1.0),
    };
    state.ease(1.0);
    assert!(close(state.current, state.target));
}
