use glam::Vec2;

/// Cursor position in normalized device-style coordinates: viewport centre is
/// (0,0), right edge x=+1, top edge y=+1.
///
/// `target` follows the latest pointer event; `current` trails it and is what
/// the frame updater reads.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub target: Vec2,
    pub current: Vec2,
}

impl PointerState {
    /// Map a client-space cursor position to the target. Last event wins.
    pub fn set_target_from_client(
        &mut self,
        client_x: f64,
        client_y: f64,
        viewport_width: f64,
        viewport_height: f64,
    ) {
        if let Some(t) = normalize_client(client_x, client_y, viewport_width, viewport_height) {
            self.target = t;
        }
    }

    /// First-order low-pass toward the target: `current += (target - current) * factor`.
    #[inline]
    pub fn ease(&mut self, factor: f32) {
        self.current += (self.target - self.current) * factor;
    }
}

#[inline]
pub fn normalize_client(
    client_x: f64,
    client_y: f64,
    viewport_width: f64,
    viewport_height: f64,
) -> Option<Vec2> {
    if !(viewport_width > 0.0 && viewport_height > 0.0) {
        return None;
    }
    let x = (client_x / viewport_width) * 2.0 - 1.0;
    let y = -(client_y / viewport_height) * 2.0 + 1.0;
    Some(Vec2::new(x as f32, y as f32))
}
