use glam::Vec2;
use smallvec::SmallVec;

use super::constants::*;
use super::particle::Particle;

/// A particle selected for the cursor halo.
#[derive(Clone, Copy, Debug)]
pub struct HaloCandidate {
    pub index: usize,
    pub pos: Vec2,
    /// Euclidean distance from the cursor.
    pub distance: f32,
    /// Angle of the cursor-to-particle vector. Leftover from an unfinished
    /// angular-sort pass; the halo order is distance-rank order, not this.
    pub angle: f32,
}

/// Advance the smoothed halo radius one frame toward its target.
///
/// Exponential easing carried across frames: the caller owns the running
/// value and feeds it back in each tick.
#[inline]
pub fn ease_radius(current: f32, pressed: bool) -> f32 {
    let target = if pressed { HALO_RADIUS_MAX } else { HALO_RADIUS_MIN };
    current + (target - current) * HALO_EASING
}

/// Opacity of the straight cursor-to-particle line, floored at
/// `HALO_OPACITY_MIN` no matter how far the particle sits.
#[inline]
pub fn radial_opacity(distance: f32, radius: f32) -> f32 {
    (HALO_OPACITY_MAX * (1.0 - distance / radius)).max(HALO_OPACITY_MIN)
}

/// The `HALO_CONNECTIONS` particles nearest the cursor, nearest first.
///
/// The sort is stable, so equal distances keep their original index order.
pub fn nearest_candidates(
    particles: &[Particle],
    cursor: Vec2,
) -> SmallVec<[HaloCandidate; HALO_CONNECTIONS]> {
    let mut candidates: Vec<HaloCandidate> = particles
        .iter()
        .enumerate()
        .map(|(index, p)| {
            let to = cursor - p.pos;
            HaloCandidate {
                index,
                pos: p.pos,
                distance: to.length(),
                angle: to.y.atan2(to.x),
            }
        })
        .collect();
    candidates.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    candidates.into_iter().take(HALO_CONNECTIONS).collect()
}

/// Quadratic-curve segments of the closed halo polygon.
///
/// For each candidate the control point is the midpoint to its wrap-around
/// successor and the destination is that successor's position. The path
/// runs in nearest-to-cursor order, which can self-intersect into a star
/// shape when the nearest particles are spatially scattered; that look is
/// intended.
pub fn polygon_segments(ring: &[HaloCandidate]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    (0..ring.len()).map(move |i| {
        let to = ring[(i + 1) % ring.len()].pos;
        ((ring[i].pos + to) * 0.5, to)
    })
}
