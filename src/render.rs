use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{stroke_alpha, PARTICLE_FILL};
use crate::core::{
    mesh_segments, polygon_segments, radial_opacity, HaloCandidate, Particle,
    HALO_POLYGON_OPACITY,
};

/// Canvas-2D drawing state. Pure drawing; never mutates a particle.
pub struct Scene2d {
    ctx: web::CanvasRenderingContext2d,
}

impl Scene2d {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context on canvas"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    pub fn clear(&self, bounds: Vec2) {
        self.ctx
            .clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);
    }

    /// Filled circle of the particle's size at its current position.
    pub fn draw_particle(&self, p: &Particle) {
        self.ctx.set_fill_style_str(PARTICLE_FILL);
        self.ctx.begin_path();
        _ = self.ctx.arc(
            p.pos.x as f64,
            p.pos.y as f64,
            p.size as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    /// Proximity lines between every pair of particles within the cutoff.
    pub fn draw_mesh(&self, particles: &[Particle]) {
        for seg in mesh_segments(particles) {
            self.ctx.set_stroke_style_str(&stroke_alpha(seg.opacity));
            self.ctx.begin_path();
            self.ctx.move_to(seg.a.x as f64, seg.a.y as f64);
            self.ctx.line_to(seg.b.x as f64, seg.b.y as f64);
            self.ctx.stroke();
        }
    }

    /// Cursor halo: one radial line per candidate, then the smoothed closed
    /// polygon through all of them, stroked once.
    pub fn draw_halo(&self, ring: &[HaloCandidate], cursor: Vec2, radius: f32) {
        if ring.is_empty() {
            return;
        }

        for c in ring {
            self.ctx
                .set_stroke_style_str(&stroke_alpha(radial_opacity(c.distance, radius)));
            self.ctx.begin_path();
            self.ctx.move_to(cursor.x as f64, cursor.y as f64);
            self.ctx.line_to(c.pos.x as f64, c.pos.y as f64);
            self.ctx.stroke();
        }

        self.ctx.begin_path();
        self.ctx.move_to(ring[0].pos.x as f64, ring[0].pos.y as f64);
        for (control, to) in polygon_segments(ring) {
            self.ctx
                .quadratic_curve_to(control.x as f64, control.y as f64, to.x as f64, to.y as f64);
        }
        self.ctx
            .set_stroke_style_str(&stroke_alpha(HALO_POLYGON_OPACITY));
        self.ctx.stroke();
    }
}
