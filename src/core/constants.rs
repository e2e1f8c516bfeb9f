use glam::Vec3;

// Scene layout and motion tuning shared by the scene builder and the frame updater.

// Decorative objects
pub const OBJECT_COUNT: usize = 6;
pub const OBJECT_SPAWN_MIN: Vec3 = Vec3::new(-10.0, -10.0, -15.0);
pub const OBJECT_SPAWN_MAX: Vec3 = Vec3::new(10.0, 10.0, -5.0);
pub const ROTATION_SPEED_MAX: f32 = 0.005; // per axis, radians per frame (symmetric)
pub const FLOAT_SPEED_MIN: f32 = 0.002;
pub const FLOAT_SPEED_SPAN: f32 = 0.005;

// Particle cloud
pub const PARTICLE_COUNT: usize = 1000;
pub const PARTICLE_CUBE_EDGE: f32 = 50.0; // centred on the origin
pub const PARTICLE_SPIN_STEP: f32 = 0.0001; // whole-cloud rotation about Y per frame
pub const PARTICLE_BOB_AMPLITUDE: f32 = 0.01;

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const DIRECTIONAL_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);
pub const POINT_LIGHT_COUNT: usize = 3;
pub const POINT_LIGHT_RANGE: f32 = 20.0;
pub const POINT_LIGHT_ORBIT_RADIUS: f32 = 5.0;
pub const POINT_LIGHT_BASE_INTENSITY: f32 = 1.0;
pub const POINT_LIGHT_FLICKER: f32 = 0.2; // amplitude around the base intensity

// Palette, sRGB channels in 0..1
pub const INDIGO: Vec3 = Vec3::new(0.388_235, 0.4, 0.945_098); // #6366F1
pub const TEAL: Vec3 = Vec3::new(0.078_431, 0.721_569, 0.650_980); // #14B8A6
pub const ROSE: Vec3 = Vec3::new(0.956_863, 0.247_059, 0.368_627); // #F43F5E
pub const WHITE: Vec3 = Vec3::ONE;
pub const POINT_LIGHT_COLORS: [Vec3; POINT_LIGHT_COUNT] = [INDIGO, TEAL, ROSE];

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 5.0);

// Per-frame motion
pub const TIME_STEP: f32 = 0.01;
pub const POINTER_EASE: f32 = 0.1;
pub const ORBIT_RADIUS: f32 = 0.5;
pub const ORBIT_RATE: f32 = 0.5; // orbit phase advances at time * rate
pub const POINTER_GAIN: f32 = 0.1;
pub const CAMERA_POINTER_GAIN: f32 = 2.0;
pub const CAMERA_EASE: f32 = 0.05;
pub const LIGHT_ORBIT_RATE: f32 = 0.5;
pub const LIGHT_FLICKER_RATE: f32 = 2.0;

// Page chrome
pub const NAV_SCROLLED_THRESHOLD: f64 = 100.0;

// Rendering
/// Samples per pixel for the scene pass. WebGPU only accepts 1 or 4.
pub const MSAA_SAMPLES: u32 = 4;
