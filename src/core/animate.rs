use super::constants::*;
use super::pointer::PointerState;
use super::scene::Scene;
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

/// How the pointer offset is combined with an object's orbit position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerOffsetMode {
    /// Orbit/float position is recomputed from the initial position every
    /// frame and the offset is added on top, so a held pointer shifts objects
    /// by a fixed amount.
    #[default]
    Rebased,
    /// The offset is summed across frames; a held off-centre pointer makes
    /// objects drift steadily away.
    Accumulate,
}

/// Per-frame motion tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    pub time_step: f32,
    pub pointer_ease: f32,
    pub orbit_radius: f32,
    pub orbit_rate: f32,
    pub pointer_gain: f32,
    pub pointer_offset: PointerOffsetMode,
    pub particle_spin_step: f32,
    pub particle_bob_amplitude: f32,
    pub light_orbit_radius: f32,
    pub light_orbit_rate: f32,
    pub light_base_intensity: f32,
    pub light_flicker: f32,
    pub light_flicker_rate: f32,
    pub camera_pointer_gain: f32,
    pub camera_ease: f32,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            time_step: TIME_STEP,
            pointer_ease: POINTER_EASE,
            orbit_radius: ORBIT_RADIUS,
            orbit_rate: ORBIT_RATE,
            pointer_gain: POINTER_GAIN,
            pointer_offset: PointerOffsetMode::default(),
            particle_spin_step: PARTICLE_SPIN_STEP,
            particle_bob_amplitude: PARTICLE_BOB_AMPLITUDE,
            light_orbit_radius: POINT_LIGHT_ORBIT_RADIUS,
            light_orbit_rate: LIGHT_ORBIT_RATE,
            light_base_intensity: POINT_LIGHT_BASE_INTENSITY,
            light_flicker: POINT_LIGHT_FLICKER,
            light_flicker_rate: LIGHT_FLICKER_RATE,
            camera_pointer_gain: CAMERA_POINTER_GAIN,
            camera_ease: CAMERA_EASE,
        }
    }
}

/// Drives every periodic motion in the scene from one time accumulator.
///
/// Time advances by a fixed step per call, independent of wall-clock delta,
/// so motion speed follows the display refresh rate.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    pub time: f32,
    pub params: FrameParams,
}

impl Animator {
    pub fn new(params: FrameParams) -> Self {
        Self { time: 0.0, params }
    }

    /// Advance one frame. Mutates transforms and uniforms only; nothing is
    /// added to or removed from the scene.
    pub fn step(&mut self, scene: &mut Scene, pointer: &mut PointerState) {
        let p = self.params;
        self.time += p.time_step;
        pointer.ease(p.pointer_ease);

        self.update_objects(scene, pointer.current);
        self.update_particles(scene);
        self.update_lights(scene);
        ease_camera(scene, pointer.current, p.camera_pointer_gain, p.camera_ease);
    }

    fn update_objects(&self, scene: &mut Scene, pointer: Vec2) {
        let p = &self.params;
        let t = self.time;
        let offset = pointer * p.pointer_gain;
        for (i, obj) in scene.objects.iter_mut().enumerate() {
            let mesh = &mut obj.mesh;
            mesh.rotation += obj.rotation_speed;

            let phase = t * p.orbit_rate + i as f32;
            mesh.position = Vec3::new(
                obj.initial_position.x + phase.cos() * p.orbit_radius,
                obj.initial_position.y + (t + obj.float_offset).sin() * obj.float_speed,
                obj.initial_position.z + phase.sin() * p.orbit_radius,
            );

            if let Some(time) = mesh.material.time_uniform_mut() {
                *time = t;
            }

            let applied = match p.pointer_offset {
                PointerOffsetMode::Rebased => offset,
                PointerOffsetMode::Accumulate => {
                    obj.pointer_drift += offset;
                    obj.pointer_drift
                }
            };
            mesh.position.x += applied.x;
            mesh.position.y += applied.y;
        }
    }

    fn update_particles(&self, scene: &mut Scene) {
        let p = &self.params;
        let t = self.time;
        let cloud = &mut scene.particles;
        cloud.rotation_y += p.particle_spin_step;
        for pos in cloud.positions_mut() {
            pos.y += (t + pos.x).sin() * p.particle_bob_amplitude;
        }
        cloud.dirty = true;
    }

    fn update_lights(&self, scene: &mut Scene) {
        let p = &self.params;
        let t = self.time;
        let count = scene.lights.points.len() as f32;
        let intensity = light_intensity(
            t,
            p.light_base_intensity,
            p.light_flicker,
            p.light_flicker_rate,
        );
        for (i, light) in scene.lights.points.iter_mut().enumerate() {
            let phase = t * p.light_orbit_rate + i as f32 * TAU / count;
            light.position.x = phase.sin() * p.light_orbit_radius;
            light.position.y = phase.cos() * p.light_orbit_radius;
            light.intensity = intensity;
        }
    }
}

#[inline]
pub fn light_intensity(time: f32, base: f32, flicker: f32, rate: f32) -> f32 {
    base + (time * rate).sin() * flicker
}

/// Ease the camera toward a pointer-derived target (Y inverted) and aim it at
/// the scene origin. Z is left alone.
pub fn ease_camera(scene: &mut Scene, pointer: Vec2, gain: f32, ease: f32) {
    let cam = &mut scene.camera;
    cam.position.x += (pointer.x * gain - cam.position.x) * ease;
    cam.position.y += (-pointer.y * gain - cam.position.y) * ease;
    cam.look_at(Vec3::ZERO);
}
