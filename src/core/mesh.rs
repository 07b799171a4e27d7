use glam::Vec2;

use super::constants::*;
use super::particle::Particle;

/// One line of the proximity mesh, ready to stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshSegment {
    pub a: Vec2,
    pub b: Vec2,
    pub opacity: f32,
}

/// Stroke opacity for a pair `d` apart, or `None` beyond the cutoff.
/// Closer pairs are more opaque: 0.5 at distance zero, fading to 0 at the
/// cutoff.
#[inline]
pub fn mesh_opacity(d: f32) -> Option<f32> {
    (d < CONNECT_DISTANCE).then(|| (1.0 - d / CONNECT_DISTANCE) * MESH_OPACITY_SCALE)
}

/// All unordered pairs `(i, j)`, `i < j`, within the cutoff. O(n²) per
/// frame, acceptable at the target population.
pub fn mesh_segments(particles: &[Particle]) -> impl Iterator<Item = MeshSegment> + '_ {
    (0..particles.len()).flat_map(move |i| {
        (i + 1..particles.len()).filter_map(move |j| {
            let (a, b) = (particles[i].pos, particles[j].pos);
            mesh_opacity(a.distance(b)).map(|opacity| MeshSegment { a, b, opacity })
        })
    })
}
