use glam::Vec2;
use rand::prelude::*;

use super::constants::*;

/// One moving dot of the field.
///
/// Owned exclusively by the frame loop's collection; mutated in place once
/// per tick by [`Particle::step`].
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    /// Position recorded at spawn. Unused after creation; kept for a
    /// return-to-origin behavior that was never finished.
    pub base_pos: Vec2,
    pub vel: Vec2,
    /// Radius in pixels, fixed at spawn, in [1, 4).
    pub size: f32,
    /// True while the particle sits inside the cursor's capture radius.
    /// Stale while the cursor is absent; only consulted when it is present.
    pub following: bool,
}

impl Particle {
    pub fn spawn(rng: &mut impl Rng, bounds: Vec2) -> Self {
        let pos = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
        Self {
            pos,
            base_pos: pos,
            vel: Vec2::new(rng.gen::<f32>() * 2.0 - 1.0, rng.gen::<f32>() * 2.0 - 1.0),
            size: PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN,
            following: false,
        }
    }

    /// Advance one tick: reflect, move, decay, then apply cursor capture.
    ///
    /// Reflection tests the *previous* frame's position before the move, so
    /// a particle past an edge renders one frame outside the bounds before
    /// the flip takes effect. The check-then-move order is load-bearing for
    /// the visual behavior; do not reorder.
    pub fn step(&mut self, cursor: Option<Vec2>, bounds: Vec2) {
        if self.pos.x > bounds.x || self.pos.x < 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y > bounds.y || self.pos.y < 0.0 {
            self.vel.y = -self.vel.y;
        }
        self.pos += self.vel;

        if self.vel.x.abs() > SPEED_LIMIT {
            self.vel.x *= SPEED_DECAY;
        }
        if self.vel.y.abs() > SPEED_LIMIT {
            self.vel.y *= SPEED_DECAY;
        }

        let Some(cursor) = cursor else { return };
        let d = cursor.distance(self.pos);
        if d <= FOLLOW_LENGTH {
            // Captured; free to move inside the radius.
            self.following = true;
        } else if self.following && d <= FOLLOW_LENGTH + CORRECTION_BAND {
            // Escaping through the correction band: snap back onto the
            // capture circle. d > FOLLOW_LENGTH here, so no division by zero.
            self.pos = cursor - (cursor - self.pos) * (FOLLOW_LENGTH / d);
        } else {
            self.following = false;
        }
    }
}

/// Seed the fixed-size particle collection.
pub fn spawn_field(rng: &mut impl Rng, bounds: Vec2) -> Vec<Particle> {
    (0..PARTICLE_COUNT).map(|_| Particle::spawn(rng, bounds)).collect()
}
