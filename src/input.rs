use glam::Vec2;
use web_sys as web;

/// Map a CSS-pixel offset inside an element to backing-store pixels.
#[inline]
pub fn css_to_backing(offset_css: Vec2, rect_css: Vec2, backing: Vec2) -> Vec2 {
    if rect_css.x <= 0.0 || rect_css.y <= 0.0 {
        return Vec2::ZERO;
    }
    offset_css / rect_css * backing
}

/// Inverse of [`css_to_backing`], used to place DOM overlays.
#[inline]
pub fn backing_to_css(px: Vec2, rect_css: Vec2, backing: Vec2) -> Vec2 {
    if backing.x <= 0.0 || backing.y <= 0.0 {
        return Vec2::ZERO;
    }
    px / backing * rect_css
}

#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let offset = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    css_to_backing(
        offset,
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}

/// Normalise a wheel delta to pixels regardless of `deltaMode`.
#[inline]
pub fn wheel_delta_px(delta: f64, delta_mode: u32) -> f32 {
    match delta_mode {
        1 => (delta * 16.0) as f32,  // lines
        2 => (delta * 800.0) as f32, // pages
        _ => delta as f32,
    }
}
