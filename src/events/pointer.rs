use crate::core::PointerState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Track the cursor over the whole document. Only the target is written here;
/// smoothing happens once per frame in the animator.
pub fn wire_pointer_tracking(document: &web::Document, pointer: Rc<RefCell<PointerState>>) {
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let (w, h) = dom::viewport_size(&window);
        pointer.borrow_mut().set_target_from_client(
            ev.client_x() as f64,
            ev.client_y() as f64,
            w,
            h,
        );
    });
}
