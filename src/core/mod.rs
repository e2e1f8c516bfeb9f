pub mod animate;
pub mod chrome;
pub mod constants;
pub mod geometry;
pub mod pointer;
pub mod reveal;
pub mod scene;

pub use animate::Animator;
pub use pointer::PointerState;
pub use scene::Scene;

// Shaders bundled as string constants
pub static MESH_WGSL: &str = include_str!("../../shaders/mesh.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
