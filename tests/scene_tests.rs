// Host-side tests for the scene builder.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::core::constants::*;
use crate::core::scene::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_scene(seed: u64) -> Scene {
    Scene::build(&mut StdRng::seed_from_u64(seed), 16.0 / 9.0)
}

#[test]
fn scene_has_fixed_population() {
    let scene = seeded_scene(1);
    assert_eq!(scene.objects.len(), 6);
    assert_eq!(scene.objects.len(), OBJECT_COUNT);
    assert_eq!(scene.particles.len(), 1000);
    assert_eq!(scene.lights.points.len(), 3);
}

#[test]
fn materials_cycle_over_palette() {
    let scene = seeded_scene(2);
    for (i, obj) in scene.objects.iter().enumerate() {
        assert_eq!(obj.mesh.material, MATERIAL_PALETTE[i % 3], "object {}", i);
    }
    assert!(matches!(scene.objects[0].mesh.material, Material::Glow { .. }));
    assert!(matches!(scene.objects[3].mesh.material, Material::Glow { .. }));
    assert!(matches!(scene.objects[4].mesh.material, Material::Physical { .. }));
    assert!(matches!(scene.objects[5].mesh.material, Material::Standard { .. }));
}

#[test]
fn material_clones_do_not_share_time() {
    let mut scene = seeded_scene(3);
    if let Some(t) = scene.objects[0].mesh.material.time_uniform_mut() {
        *t = 42.0;
    }
    assert_eq!(scene.objects[0].mesh.material.time_uniform(), Some(42.0));
    assert_eq!(scene.objects[3].mesh.material.time_uniform(), Some(0.0));
    assert_eq!(MATERIAL_PALETTE[0].time_uniform(), Some(0.0));
}

#[test]
fn only_glow_has_time_uniform() {
    let mut physical = MATERIAL_PALETTE[1].clone();
    let mut standard = MATERIAL_PALETTE[2].clone();
    assert!(physical.time_uniform_mut().is_none());
    assert!(standard.time_uniform_mut().is_none());
}

#[test]
fn objects_spawn_inside_bounds() {
    for seed in 0..16 {
        let scene = seeded_scene(seed);
        for obj in &scene.objects {
            let p = obj.initial_position;
            assert!(p.x >= -10.0 && p.x < 10.0);
            assert!(p.y >= -10.0 && p.y < 10.0);
            assert!(p.z >= -15.0 && p.z < -5.0);
            assert_eq!(obj.mesh.position, p);
            assert!(obj.rotation_speed.abs().max_element() <= ROTATION_SPEED_MAX);
            assert!(obj.float_speed >= 0.002 && obj.float_speed < 0.007);
            assert!(obj.float_offset >= 0.0 && obj.float_offset < std::f32::consts::TAU);
            let r = obj.mesh.rotation;
            assert!(r.min_element() >= 0.0 && r.max_element() < std::f32::consts::PI);
        }
    }
}

#[test]
fn particles_fill_centred_cube() {
    let scene = seeded_scene(4);
    for p in scene.particles.positions() {
        assert!(p.abs().max_element() <= 25.0, "{:?}", p);
    }
    assert_eq!(scene.particles.rotation_y, 0.0);
    assert!(scene.particles.dirty);
}

#[test]
fn lights_match_layout() {
    let scene = seeded_scene(5);
    assert_eq!(scene.lights.ambient.intensity, 0.5);
    assert_eq!(scene.lights.directional.intensity, 0.8);
    assert_eq!(scene.lights.directional.position, Vec3::new(5.0, 5.0, 5.0));
    for (light, color) in scene.lights.points.iter().zip(POINT_LIGHT_COLORS) {
        assert_eq!(light.color, color);
        assert_eq!(light.intensity, 1.0);
        assert_eq!(light.distance, 20.0);
        assert!(light.position.x >= -5.0 && light.position.x < 5.0);
        assert!(light.position.y >= -5.0 && light.position.y < 5.0);
        assert!(light.position.z >= 0.0 && light.position.z < 5.0);
    }
}

#[test]
fn camera_starts_looking_at_origin() {
    let scene = seeded_scene(6);
    let cam = &scene.camera;
    assert_eq!(cam.position, Vec3::new(0.0, 0.0, 5.0));
    assert_eq!(cam.target, Vec3::ZERO);
    assert_eq!(cam.fov_y_deg, 75.0);
    assert_eq!(cam.near, 0.1);
    assert_eq!(cam.far, 1000.0);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
}

#[test]
fn camera_ignores_degenerate_viewport() {
    let mut cam = Camera::new(2.0);
    cam.set_viewport(0.0, 600.0);
    assert_eq!(cam.aspect, 2.0);
    cam.set_viewport(800.0, 0.0);
    assert_eq!(cam.aspect, 2.0);
    cam.set_viewport(1920.0, 1080.0);
    assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
}

#[test]
fn same_seed_same_scene() {
    let a = seeded_scene(7);
    let b = seeded_scene(7);
    for (oa, ob) in a.objects.iter().zip(&b.objects) {
        assert_eq!(oa.initial_position, ob.initial_position);
        assert_eq!(oa.rotation_speed, ob.rotation_speed);
    }
    assert_eq!(a.particles.positions(), b.particles.positions());
}

#[test]
fn material_colour_follows_palette() {
    let scene = seeded_scene(8);
    let expected = [INDIGO, TEAL, ROSE];
    for (i, obj) in scene.objects.iter().enumerate() {
        assert_eq!(obj.mesh.material.color(), expected[i % 3], "object {}", i);
    }
}
