// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_positive() {
    assert!(TIME_STEP > 0.0);
    assert!(ORBIT_RADIUS > 0.0);
    assert!(ORBIT_RATE > 0.0);
    assert!(PARTICLE_SPIN_STEP > 0.0);
    assert!(POINT_LIGHT_ORBIT_RADIUS > 0.0);
    assert!(CAMERA_POINTER_GAIN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_factors_are_fractions() {
    // A factor of 1 snaps; anything above overshoots
    assert!(POINTER_EASE > 0.0 && POINTER_EASE < 1.0);
    assert!(CAMERA_EASE > 0.0 && CAMERA_EASE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn flicker_never_darkens_lights() {
    assert!(POINT_LIGHT_BASE_INTENSITY - POINT_LIGHT_FLICKER > 0.0);
}

#[test]
fn spawn_box_sits_behind_camera_target() {
    assert!(OBJECT_SPAWN_MIN.cmplt(OBJECT_SPAWN_MAX).all());
    assert!(OBJECT_SPAWN_MAX.z < CAMERA_START.z);
    assert!(CAMERA_NEAR < CAMERA_FAR);
    // the particle cube fits inside the far plane
    assert!(PARTICLE_CUBE_EDGE < CAMERA_FAR);
}

#[test]
fn palette_has_one_colour_per_point_light() {
    assert_eq!(POINT_LIGHT_COLORS.len(), POINT_LIGHT_COUNT);
    for c in POINT_LIGHT_COLORS {
        assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
    }
    assert_ne!(INDIGO, TEAL);
    assert_ne!(TEAL, ROSE);
}

#[test]
fn scene_pass_is_antialiased() {
    // WebGPU accepts 1 or 4
    assert_eq!(MSAA_SAMPLES, 4);
}
