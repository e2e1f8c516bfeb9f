use super::constants::NAV_SCROLLED_THRESHOLD;

// Page chrome state: nav menu, navbar scroll state, in-page anchors, surface
// sizing and newsletter hand-off.

/// Visibility of the collapsible navigation links, mirrored in the inline
/// `display` style (`flex` when shown, `none` otherwise).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuVisibility {
    Shown,
    Hidden,
}

impl MenuVisibility {
    /// Anything other than an explicit `flex` counts as hidden; the mobile
    /// stylesheet hides the links until the first toggle.
    pub fn from_display(display: &str) -> Self {
        if display.trim() == "flex" {
            MenuVisibility::Shown
        } else {
            MenuVisibility::Hidden
        }
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            MenuVisibility::Shown => MenuVisibility::Hidden,
            MenuVisibility::Hidden => MenuVisibility::Shown,
        }
    }

    #[inline]
    pub fn display_value(self) -> &'static str {
        match self {
            MenuVisibility::Shown => "flex",
            MenuVisibility::Hidden => "none",
        }
    }
}

/// Whether the navbar should carry its `scrolled` class at this offset.
#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD
}

/// Element id targeted by a same-page link (`#pricing` → `pricing`).
/// A bare `#` or any non-fragment href yields `None`. The id is returned raw,
/// not as a selector, so ids such as `1intro` still resolve by id lookup.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    match href.trim().strip_prefix('#') {
        Some(id) if !id.is_empty() && !id.contains(char::is_whitespace) => Some(id),
        _ => None,
    }
}

/// Document-space offset to scroll the window to so that an element whose
/// top is `rect_top` (viewport-relative) lands at the top of the viewport.
#[inline]
pub fn scroll_destination(rect_top: f64, scroll_y: f64) -> f64 {
    (rect_top + scroll_y).max(0.0)
}

/// Drawing-surface size in device pixels for a CSS viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn from_css(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width: ((css_width * dpr).round() as u32).max(1),
            height: ((css_height * dpr).round() as u32).max(1),
        }
    }
}

/// Destination for captured newsletter addresses.
pub trait NewsletterSink {
    fn submit(&self, email: &str);
}

/// Sink that records the address in the log and nothing else.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNewsletterSink;

impl NewsletterSink for LogNewsletterSink {
    fn submit(&self, email: &str) {
        log::info!("newsletter subscription: {}", email);
    }
}

/// Trim the raw field value; empty input is not forwarded.
pub fn captured_email(raw: &str) -> Option<&str> {
    let email = raw.trim();
    (!email.is_empty()).then_some(email)
}

/// Submit handler body shared by the DOM wiring: returns whether anything was
/// forwarded to the sink.
pub fn forward_newsletter(sink: &dyn NewsletterSink, raw: &str) -> bool {
    match captured_email(raw) {
        Some(email) => {
            sink.submit(email);
            true
        }
        None => {
            log::debug!("newsletter submit with empty email ignored");
            false
        }
    }
}
