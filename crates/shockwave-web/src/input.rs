use glam::Vec2;
use web_sys as web;

/// Pointer position in normalized canvas space, top-left origin.
#[inline]
pub fn pointer_canvas_uv(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let uv = Vec2::new((x_css / w).clamp(0.0, 1.0), (y_css / h).clamp(0.0, 1.0));
    uv.is_finite().then_some(uv)
}
