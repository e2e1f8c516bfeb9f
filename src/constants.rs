/// DOM hooks and rendering constants for the web front-end.
///
/// Selectors must match the page markup; missing elements are tolerated where
/// noted in the wiring code and fatal only for the canvas container.
// Elements
pub const CANVAS_CONTAINER_ID: &str = "canvas-container";
pub const LOADER_SELECTOR: &str = ".loader";
pub const NAV_SELECTOR: &str = "nav";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const MOBILE_MENU_SELECTOR: &str = ".mobile-menu";
pub const ANCHOR_LINKS_SELECTOR: &str = "a[href^=\"#\"]";
pub const NEWSLETTER_FORM_SELECTOR: &str = ".newsletter-form";

// Classes toggled by the page chrome
pub const HIDDEN_CLASS: &str = "hidden";
pub const SCROLLED_CLASS: &str = "scrolled";

// Depth buffer
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

// Particle sprites
pub const PARTICLE_COLOR: [f32; 3] = [0.388_235, 0.4, 0.945_098]; // #6366F1
pub const PARTICLE_OPACITY: f32 = 0.6;
pub const PARTICLE_SIZE: f32 = 0.1; // world units, edge of the square sprite

// Canvas is composited over the page content
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::TRANSPARENT;
