use glam::Vec2;
use web_sys as web;

/// Shared cursor record.
///
/// Written by the pointer-event closures, read by the frame loop. Single
/// writer per field under single-threaded scheduling, so no lock; a
/// multi-threaded port must add one.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    /// False until the first move and after the pointer leaves the canvas.
    /// While false, all cursor-dependent behavior is skipped.
    pub active: bool,
    pub down: bool,
}

impl MouseState {
    /// Cursor position, or `None` while tracking is inactive.
    #[inline]
    pub fn cursor(&self) -> Option<Vec2> {
        self.active.then(|| Vec2::new(self.x, self.y))
    }

    #[inline]
    pub fn set_position(&mut self, pos: Vec2) {
        self.x = pos.x;
        self.y = pos.y;
        self.active = true;
    }

    /// Pointer left the canvas: coordinates become absent.
    #[inline]
    pub fn clear_position(&mut self) {
        self.active = false;
    }
}

/// Map a pointer event to canvas-space pixels through the bounding rect.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        Vec2::new(
            (x_css / w) * canvas.width() as f32,
            (y_css / h) * canvas.height() as f32,
        )
    } else {
        Vec2::new(x_css, y_css)
    }
}
