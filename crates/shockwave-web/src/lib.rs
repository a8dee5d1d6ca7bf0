#![cfg(target_arch = "wasm32")]
use instant::Instant;
use shockwave_core::{TriggerRanges, TriggerRequest};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod frame;
mod gpu;
mod input;

const CANVAS_ID: &str = "app-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("shockwave-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let canvas = dom::canvas_by_id(CANVAS_ID)?;

    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
        resize_closure.forget();
    }

    let queued_triggers: Rc<RefCell<Vec<TriggerRequest>>> = Rc::new(RefCell::new(Vec::new()));
    wire_pointer(&canvas, queued_triggers.clone());

    let gpu = gpu::GpuState::new(&canvas).await?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        gpu,
        queued_triggers,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

/// Each press on the canvas spawns one shockwave with randomized parameters.
fn wire_pointer(canvas: &web::HtmlCanvasElement, queue: Rc<RefCell<Vec<TriggerRequest>>>) {
    let canvas_click = canvas.clone();
    let ranges = TriggerRanges::default();
    let mut rng = rand::thread_rng();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(uv) = input::pointer_canvas_uv(&ev, &canvas_click) else {
            return;
        };
        let req = ranges.sample(&mut rng, uv);
        log::debug!("[input] shockwave at ({:.3},{:.3})", uv.x, uv.y);
        queue.borrow_mut().push(req);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ =
        canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}
