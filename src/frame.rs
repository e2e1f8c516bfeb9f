use crate::core::chrome::SurfaceSize;
use crate::core::{Animator, PointerState, Scene};
use crate::render;
use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Scene,
    pub animator: Animator,
    pub pointer: Rc<RefCell<PointerState>>,
    pub gpu: Option<render::GpuState>,
}

impl FrameContext {
    /// One tick of the 3D scene: advance motion, then draw.
    pub fn frame(&mut self) {
        {
            let mut pointer = self.pointer.borrow_mut();
            self.animator.step(&mut self.scene, &mut pointer);
        }

        let Some(gpu) = &mut self.gpu else {
            return;
        };
        match gpu.render(&mut self.scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    /// Apply a new viewport: camera aspect from CSS size, surface from backing size.
    pub fn resize(&mut self, css_width: f64, css_height: f64, backing: SurfaceSize) {
        self.scene.camera.set_viewport(css_width, css_height);
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(backing);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, scene: &Scene) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, scene).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

// ===================== requestAnimationFrame loop =====================

type TickFn = Closure<dyn FnMut(f64)>;

struct LoopShared {
    running: Cell<bool>,
    handle: Cell<Option<i32>>,
    tick: RefCell<Option<TickFn>>,
}

impl LoopShared {
    fn schedule(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return;
        };
        match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(id) => self.handle.set(Some(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                self.running.set(false);
            }
        }
    }

    fn cancel(&self) {
        self.running.set(false);
        if let Some(id) = self.handle.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// A per-display-frame callback with an explicit lifetime.
///
/// The update closure returns `ControlFlow::Break` to end the loop from the
/// inside; `stop` (or dropping the handle) ends it from the outside. Once
/// stopped, no further frame is scheduled.
pub struct RenderLoop {
    shared: Rc<LoopShared>,
}

impl RenderLoop {
    pub fn start(
        mut update: impl FnMut(f64) -> ControlFlow<()> + 'static,
    ) -> anyhow::Result<Self> {
        web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let shared = Rc::new(LoopShared {
            running: Cell::new(true),
            handle: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak: Weak<LoopShared> = Rc::downgrade(&shared);
        let tick = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            shared.handle.set(None);
            if !shared.running.get() {
                return;
            }
            if update(timestamp).is_break() {
                shared.running.set(false);
                return;
            }
            if shared.running.get() {
                shared.schedule();
            }
        }) as Box<dyn FnMut(f64)>);
        *shared.tick.borrow_mut() = Some(tick);
        shared.schedule();
        Ok(Self { shared })
    }

    pub fn stop(&self) {
        self.shared.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.get()
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.shared.cancel();
    }
}
