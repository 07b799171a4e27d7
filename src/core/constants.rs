/// Simulation tuning constants.
///
/// These express intended behavior (distances, smoothing factors, clamp
/// limits) and keep magic numbers out of the code.
// Population
pub const PARTICLE_COUNT: usize = 100;

// Particle sizing: size = PARTICLE_SIZE_MIN + u * PARTICLE_SIZE_SPAN, u in [0, 1)
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_SPAN: f32 = 3.0;

// Drift speed: components above the limit decay toward it, never below
pub const SPEED_LIMIT: f32 = 1.0;
pub const SPEED_DECAY: f32 = 0.95;

// Pairwise mesh
pub const CONNECT_DISTANCE: f32 = 120.0; // px, line cutoff
pub const MESH_OPACITY_SCALE: f32 = 0.5; // opacity = (1 - d/cutoff) * scale

// Cursor attraction
pub const FOLLOW_LENGTH: f32 = 80.0; // px, capture radius
pub const CORRECTION_BAND: f32 = 8.0; // px, snap-back ring outside the capture radius

// Cursor halo
pub const HALO_CONNECTIONS: usize = 12; // nearest particles joined to the cursor
pub const HALO_EASING: f32 = 0.08; // radius smoothing: new = cur + (target - cur) * easing
pub const HALO_OPACITY_MIN: f32 = 0.1;
pub const HALO_OPACITY_MAX: f32 = 0.3;
pub const HALO_RADIUS_MIN: f32 = 100.0; // px, smoothed radius when the button is up
pub const HALO_RADIUS_MAX: f32 = 200.0; // px, smoothed radius while pressed
pub const HALO_POLYGON_OPACITY: f32 = 0.2;
