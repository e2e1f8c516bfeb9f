use crate::constants::*;
use crate::core::chrome::{
    anchor_target_id, forward_newsletter, navbar_scrolled, scroll_destination, MenuVisibility,
    NewsletterSink,
};
use crate::dom;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep camera aspect, canvas backing store and GPU surface in step with the
/// viewport. Runs on every resize event.
pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    frame_ctx: Rc<RefCell<FrameContext>>,
) {
    dom::listen(window, "resize", move |_: web::Event| {
        let Some(window) = web::window() else {
            return;
        };
        let (w, h) = dom::viewport_size(&window);
        let size = dom::sync_canvas_to_viewport(&window, &canvas);
        frame_ctx.borrow_mut().resize(w, h, size);
    });
}

pub fn wire_mobile_menu(document: &web::Document) {
    let Some(button) = dom::query(document, MOBILE_MENU_SELECTOR) else {
        log::debug!("[chrome] no {} on page", MOBILE_MENU_SELECTOR);
        return;
    };
    let Some(links) = dom::query(document, NAV_LINKS_SELECTOR)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::debug!("[chrome] no {} on page", NAV_LINKS_SELECTOR);
        return;
    };
    dom::listen(&button, "click", move |_: web::Event| {
        let style = links.style();
        let current = style.get_property_value("display").unwrap_or_default();
        let next = MenuVisibility::from_display(&current).toggled();
        _ = style.set_property("display", next.display_value());
    });
}

/// Same-page links scroll the window (not the target element) smoothly to
/// their target.
pub fn wire_smooth_scroll_anchors(document: &web::Document) {
    for anchor in dom::query_html_all(document, ANCHOR_LINKS_SELECTOR) {
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev: web::MouseEvent| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(id) = anchor_target_id(&href) else {
                return;
            };
            let Some(window) = web::window() else {
                return;
            };
            let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
                log::debug!("[chrome] anchor target #{} not found", id);
                return;
            };
            ev.prevent_default();
            let top = scroll_destination(
                target.get_bounding_client_rect().top(),
                window.scroll_y().unwrap_or(0.0),
            );
            let opts = web::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        });
    }
}

pub fn wire_navbar_scroll(window: &web::Window, document: &web::Document) {
    let Some(nav) = dom::query(document, NAV_SELECTOR) else {
        log::debug!("[chrome] no {} on page", NAV_SELECTOR);
        return;
    };
    dom::listen(window, "scroll", move |_: web::Event| {
        let y = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        _ = nav
            .class_list()
            .toggle_with_force(SCROLLED_CLASS, navbar_scrolled(y));
    });
}

pub fn wire_newsletter(document: &web::Document, sink: Rc<dyn NewsletterSink>) {
    let Some(form) = dom::query(document, NEWSLETTER_FORM_SELECTOR) else {
        log::debug!("[chrome] no {} on page", NEWSLETTER_FORM_SELECTOR);
        return;
    };
    let form_el = form.clone();
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let raw = form_el
            .query_selector("input")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        forward_newsletter(sink.as_ref(), &raw);
    });
}

/// Hide the page loader overlay.
pub fn hide_loader(document: &web::Document) {
    if let Some(loader) = dom::query(document, LOADER_SELECTOR) {
        _ = loader.class_list().add_1(HIDDEN_CLASS);
    }
}
