#![cfg(target_arch = "wasm32")]
use glam::Vec2;
use instant::Instant;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod constants;
pub mod core;
pub mod dom;
pub mod events;
pub mod frame;
pub mod input;
pub mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("swarm-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Size to the viewport now and on every window resize.
    dom::wire_canvas_resize(&canvas);

    let scene = render::Scene2d::new(&canvas)?;

    let bounds = Vec2::new(canvas.width() as f32, canvas.height() as f32);
    let mut rng = StdRng::seed_from_u64(js_sys::Date::now() as u64);
    let particles = core::spawn_field(&mut rng, bounds);
    log::info!(
        "[field] spawned {} particles in {}x{}",
        particles.len(),
        canvas.width(),
        canvas.height()
    );

    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        mouse_state: mouse_state.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        particles,
        mouse: mouse_state,
        canvas,
        scene,
        halo_radius: core::HALO_RADIUS_MIN,
        frames: 0,
        last_fps_instant: Instant::now(),
    }));
    // The handle can cancel the pending frame registration; the page runs
    // the loop until unload, so it is dropped here.
    let _loop_handle = frame::start_loop(frame_ctx);

    Ok(())
}
