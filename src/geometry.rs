// Pure-Rust helpers for canvas sizing and pointer mapping.

/// Backing store size for a canvas laid out at `css_w` x `css_h`.
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_w.max(0.0) * dpr) as u32;
    let h = (css_h.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}

/// Pointer position as a 0..1 fraction of the viewport on each axis.
pub fn unit_pointer(client_x: f64, client_y: f64, vw: f64, vh: f64) -> (f32, f32) {
    let nx = client_x / vw.max(1.0);
    let ny = client_y / vh.max(1.0);
    (nx as f32, ny as f32)
}

/// How far the page has scrolled, in hero heights. A missing or
/// collapsed hero counts as one pixel tall.
pub fn hero_scroll_progress(scroll_y: f64, hero_height: Option<f64>) -> f32 {
    let h = hero_height.filter(|h| *h > 0.0).unwrap_or(1.0);
    (scroll_y.max(0.0) / h) as f32
}

/// Pointer relative to an element's client rect.
#[inline]
pub fn local_point(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> [f32; 2] {
    [(client_x - rect_left) as f32, (client_y - rect_top) as f32]
}
