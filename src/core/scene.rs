use super::constants::*;
use super::geometry::{Geometry, DECORATIVE_GEOMETRIES};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Surface description owned by a single mesh.
///
/// Every object receives its own clone of a palette entry, so writing the
/// glow `time` input on one object never leaks into another object that was
/// assigned the same palette slot.
#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    /// Fresnel-style rim glow with a pulsing `time` shader input.
    Glow { color: Vec3, time: f32 },
    Physical {
        color: Vec3,
        metalness: f32,
        roughness: f32,
        opacity: f32,
    },
    Standard {
        color: Vec3,
        metalness: f32,
        roughness: f32,
        opacity: f32,
    },
}

impl Material {
    /// The time-valued shader input, for materials that have one.
    #[inline]
    pub fn time_uniform_mut(&mut self) -> Option<&mut f32> {
        match self {
            Material::Glow { time, .. } => Some(time),
            _ => None,
        }
    }

    #[inline]
    pub fn time_uniform(&self) -> Option<f32> {
        match self {
            Material::Glow { time, .. } => Some(*time),
            _ => None,
        }
    }

    #[inline]
    pub fn color(&self) -> Vec3 {
        match self {
            Material::Glow { color, .. }
            | Material::Physical { color, .. }
            | Material::Standard { color, .. } => *color,
        }
    }
}

/// Palette cycled over the decorative objects (`index % len`).
pub const MATERIAL_PALETTE: [Material; 3] = [
    Material::Glow {
        color: INDIGO,
        time: 0.0,
    },
    Material::Physical {
        color: TEAL,
        metalness: 0.9,
        roughness: 0.1,
        opacity: 0.8,
    },
    Material::Standard {
        color: ROSE,
        metalness: 0.7,
        roughness: 0.2,
        opacity: 0.9,
    },
];

/// Renderable geometry plus its transform. Rotation is XYZ Euler radians and
/// is allowed to grow without bound.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: Material,
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Mesh {
    pub fn model_matrix(&self) -> Mat4 {
        let r = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_rotation_translation(r, self.position)
    }
}

#[derive(Clone, Debug)]
pub struct DecorativeObject {
    pub mesh: Mesh,
    pub initial_position: Vec3,
    pub rotation_speed: Vec3,
    pub float_speed: f32,
    pub float_offset: f32,
    /// Running pointer offset, only used when offsets accumulate across frames.
    pub pointer_drift: Vec2,
}

/// Fixed-size point cloud. Positions can be edited in place but the count
/// never changes after construction.
#[derive(Clone, Debug)]
pub struct ParticleCloud {
    positions: Box<[Vec3]>,
    pub rotation_y: f32,
    /// Set whenever positions change; cleared by the renderer after upload.
    pub dirty: bool,
}

impl ParticleCloud {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, count: usize, cube_edge: f32) -> Self {
        let half = cube_edge * 0.5;
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                )
            })
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self {
            positions,
            rotation_y: 0.0,
            dirty: true,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Vec3,
    pub intensity: f32,
    /// Light shines from this point toward the origin.
    pub position: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: Vec3,
    pub intensity: f32,
    /// Range beyond which the light contributes nothing.
    pub distance: f32,
    pub position: Vec3,
}

#[derive(Clone, Debug)]
pub struct Lights {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
    pub points: [PointLight; POINT_LIGHT_COUNT],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            fov_y_deg: CAMERA_FOV_Y_DEG,
            aspect: if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 },
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            position: CAMERA_START,
            target: Vec3::ZERO,
        }
    }

    /// Recompute the aspect ratio for a new viewport. Degenerate sizes are ignored.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.aspect = (width / height) as f32;
        }
    }

    #[inline]
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

/// Everything the renderer draws in one frame.
#[derive(Clone, Debug)]
pub struct Scene {
    pub objects: Vec<DecorativeObject>,
    pub particles: ParticleCloud,
    pub lights: Lights,
    pub camera: Camera,
}

impl Scene {
    /// Build the fixed decorative scene. Object, particle and light counts are
    /// decided here and never change afterwards.
    pub fn build<R: Rng + ?Sized>(rng: &mut R, aspect: f32) -> Self {
        let objects = DECORATIVE_GEOMETRIES
            .iter()
            .enumerate()
            .map(|(i, geometry)| {
                let position = Vec3::new(
                    rng.gen_range(OBJECT_SPAWN_MIN.x..OBJECT_SPAWN_MAX.x),
                    rng.gen_range(OBJECT_SPAWN_MIN.y..OBJECT_SPAWN_MAX.y),
                    rng.gen_range(OBJECT_SPAWN_MIN.z..OBJECT_SPAWN_MAX.z),
                );
                let rotation = Vec3::new(
                    rng.gen_range(0.0..PI),
                    rng.gen_range(0.0..PI),
                    rng.gen_range(0.0..PI),
                );
                let rotation_speed = Vec3::new(
                    rng.gen_range(-ROTATION_SPEED_MAX..ROTATION_SPEED_MAX),
                    rng.gen_range(-ROTATION_SPEED_MAX..ROTATION_SPEED_MAX),
                    rng.gen_range(-ROTATION_SPEED_MAX..ROTATION_SPEED_MAX),
                );
                DecorativeObject {
                    mesh: Mesh {
                        geometry: *geometry,
                        material: MATERIAL_PALETTE[i % MATERIAL_PALETTE.len()].clone(),
                        position,
                        rotation,
                    },
                    initial_position: position,
                    rotation_speed,
                    float_speed: FLOAT_SPEED_MIN + rng.gen_range(0.0..FLOAT_SPEED_SPAN),
                    float_offset: rng.gen_range(0.0..TAU),
                    pointer_drift: Vec2::ZERO,
                }
            })
            .collect();

        let points = POINT_LIGHT_COLORS.map(|color| PointLight {
            color,
            intensity: POINT_LIGHT_BASE_INTENSITY,
            distance: POINT_LIGHT_RANGE,
            position: Vec3::new(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(0.0..5.0),
            ),
        });

        Self {
            objects,
            particles: ParticleCloud::random(rng, PARTICLE_COUNT, PARTICLE_CUBE_EDGE),
            lights: Lights {
                ambient: AmbientLight {
                    color: WHITE,
                    intensity: AMBIENT_INTENSITY,
                },
                directional: DirectionalLight {
                    color: WHITE,
                    intensity: DIRECTIONAL_INTENSITY,
                    position: DIRECTIONAL_POSITION,
                },
                points,
            },
            camera: Camera::new(aspect),
        }
    }
}
