#![cfg(target_arch = "wasm32")]
use crate::constants::CANVAS_CONTAINER_ID;
use crate::core::chrome::LogNewsletterSink;
use crate::core::{Animator, PointerState, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;
mod reveal;

/// Loops kept alive for the page session; `stop` halts them.
struct App {
    scene_loop: frame::RenderLoop,
    reveal_loop: Option<frame::RenderLoop>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Halt the scene and reveal loops. Listeners stay attached but the scene no
/// longer animates.
#[wasm_bindgen]
pub fn stop() {
    APP.with(|app| {
        if let Some(app) = app.borrow().as_ref() {
            let was_running = app.scene_loop.is_running()
                || app.reveal_loop.as_ref().is_some_and(|r| r.is_running());
            app.scene_loop.stop();
            if let Some(r) = &app.reveal_loop {
                r.stop();
            }
            if was_running {
                log::info!("loops stopped");
            }
        }
    });
}

fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let container = document
        .get_element_by_id(CANVAS_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_CONTAINER_ID))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

fn wire_page_chrome(
    window: &web::Window,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    frame_ctx: &Rc<RefCell<frame::FrameContext>>,
) {
    events::chrome::wire_resize(window, canvas.clone(), frame_ctx.clone());
    events::chrome::wire_mobile_menu(document);
    events::chrome::wire_smooth_scroll_anchors(document);
    events::chrome::wire_navbar_scroll(window, document);
    events::chrome::wire_newsletter(document, Rc::new(LogNewsletterSink));
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = create_canvas(&document)?;
    dom::sync_canvas_to_viewport(&window, &canvas);
    let (css_w, css_h) = dom::viewport_size(&window);
    let aspect = (css_w / css_h.max(1.0)) as f32;

    let scene = Scene::build(&mut StdRng::from_entropy(), aspect);
    log::info!(
        "[scene] objects={} particles={} point_lights={}",
        scene.objects.len(),
        scene.particles.len(),
        scene.lights.points.len()
    );

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    events::pointer::wire_pointer_tracking(&document, pointer.clone());

    let gpu = frame::init_gpu(&canvas, &scene).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        animator: Animator::default(),
        pointer,
        gpu,
    }));
    wire_page_chrome(&window, &document, &canvas, &frame_ctx);

    dom::on_window_load(&window, move || {
        let Some(document) = dom::window_document() else {
            return;
        };
        events::chrome::hide_loader(&document);

        let reveal_loop = match reveal::start(&document) {
            Ok(l) => Some(l),
            Err(e) => {
                log::error!("reveal start error: {:?}", e);
                None
            }
        };
        let scene_loop = match frame::RenderLoop::start(move |_| {
            frame_ctx.borrow_mut().frame();
            ControlFlow::Continue(())
        }) {
            Ok(l) => l,
            Err(e) => {
                log::error!("scene loop start error: {:?}", e);
                return;
            }
        };
        APP.with(|app| {
            *app.borrow_mut() = Some(App {
                scene_loop,
                reveal_loop,
            });
        });
        log::info!("landing-web running");
    });

    Ok(())
}
