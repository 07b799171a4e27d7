/// Presentation constants for the web layer.
// Dot fill, matching the white-on-dark look of the page.
pub const PARTICLE_FILL: &str = "rgba(255, 255, 255, 0.5)";

// Canvas element looked up at startup.
pub const CANVAS_ID: &str = "swarm-canvas";

// Frames between debug-level FPS log lines.
pub const FPS_LOG_INTERVAL: u32 = 300;

/// White stroke style with the given alpha.
#[inline]
pub fn stroke_alpha(alpha: f32) -> String {
    format!("rgba(255, 255, 255, {})", alpha)
}
