use crate::core::chrome::SurfaceSize;
use smallvec::SmallVec;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements matched by one selector; most page sections repeat a handful of cards.
pub type ElementList = SmallVec<[web::HtmlElement; 8]>;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_html_all(document: &web::Document, selector: &str) -> ElementList {
    let mut out = ElementList::new();
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] invalid selector {}", selector);
        return out;
    };
    for i in 0..list.length() {
        if let Some(el) = list
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        {
            out.push(el);
        }
    }
    out
}

/// Attach a listener that lives for the rest of the page session.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] add_event_listener({}) failed: {:?}", event, e);
    }
    closure.forget();
}

/// CSS viewport size (`innerWidth` x `innerHeight`).
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (w, h)
}

/// Size the canvas to the viewport: CSS size in CSS pixels, backing store in
/// device pixels. Returns the backing size.
pub fn sync_canvas_to_viewport(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) -> SurfaceSize {
    let (w, h) = viewport_size(window);
    let size = SurfaceSize::from_css(w, h, window.device_pixel_ratio());
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", w));
    _ = style.set_property("height", &format!("{}px", h));
    canvas.set_width(size.width);
    canvas.set_height(size.height);
    size
}

/// Run `f` once the window `load` event has fired (immediately if it already has).
pub fn on_window_load(window: &web::Window, f: impl FnOnce() + 'static) {
    let loaded = window
        .document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);
    if loaded {
        f();
        return;
    }
    let mut f = Some(f);
    listen(window, "load", move |_: web::Event| {
        if let Some(f) = f.take() {
            f();
        }
    });
}
