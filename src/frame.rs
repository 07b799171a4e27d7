use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::FPS_LOG_INTERVAL;
use crate::core::{ease_radius, nearest_candidates, Particle};
use crate::input;
use crate::render;

/// Per-frame state: the particle collection, the shared cursor record, and
/// the smoothed halo radius carried across frames.
pub struct FrameContext {
    pub particles: Vec<Particle>,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub canvas: web::HtmlCanvasElement,
    pub scene: render::Scene2d,

    pub halo_radius: f32,
    pub frames: u32,
    pub last_fps_instant: Instant,
}

impl FrameContext {
    /// One tick: clear, step + draw every particle, stroke the mesh, then
    /// the cursor halo when coordinates are present.
    pub fn frame(&mut self) {
        let bounds = Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32);
        self.scene.clear(bounds);

        // Snapshot once; event closures may rewrite the record mid-frame
        // otherwise, splitting one visual frame across two cursor positions.
        let mouse = *self.mouse.borrow();
        let cursor = mouse.cursor();

        for p in &mut self.particles {
            p.step(cursor, bounds);
            self.scene.draw_particle(p);
        }

        self.scene.draw_mesh(&self.particles);

        if let Some(cursor) = cursor {
            self.halo_radius = ease_radius(self.halo_radius, mouse.down);
            let ring = nearest_candidates(&self.particles, cursor);
            self.scene.draw_halo(&ring, cursor, self.halo_radius);
        }

        self.frames = self.frames.wrapping_add(1);
        if self.frames % FPS_LOG_INTERVAL == 0 {
            let now = Instant::now();
            let elapsed = (now - self.last_fps_instant).as_secs_f64();
            if elapsed > 0.0 {
                log::debug!(
                    "[frame] {:.1} fps over the last {} frames",
                    FPS_LOG_INTERVAL as f64 / elapsed,
                    FPS_LOG_INTERVAL
                );
            }
            self.last_fps_instant = now;
        }
    }
}

/// Handle for stopping the animation loop.
pub struct LoopHandle {
    raf_id: Rc<Cell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
}

impl LoopHandle {
    /// Cancel the pending frame registration; no further ticks run.
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(w) = web::window() {
            if let Some(id) = self.raf_id.take() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

/// Drive [`FrameContext::frame`] from `requestAnimationFrame`, rescheduling
/// after every tick until the returned handle is cancelled.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let cancelled: Rc<Cell<bool>> = Rc::new(Cell::new(false));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let raf_for_tick = raf_id.clone();
    let cancelled_for_tick = cancelled.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled_for_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_for_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(Some(id));
        }
    }

    LoopHandle { raf_id, cancelled }
}
