use sound_core::{element_coordinate, Coordinate, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Attach a click handler to `#element_id`. The closure is handed back so the
/// caller can detach it later.
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Option<(web::Element, Closure<dyn FnMut()>)> {
    let el = document.get_element_by_id(element_id)?;
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Err(e) = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
        log::warn!("click listener on #{} failed: {:?}", element_id, e);
        return None;
    }
    Some((el, closure))
}

#[inline]
fn js_f64(v: Result<JsValue, JsValue>) -> f64 {
    v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

/// Snapshot of the window size and scroll offsets.
pub fn current_viewport() -> Viewport {
    match web::window() {
        Some(w) => Viewport {
            width: js_f64(w.inner_width()),
            height: js_f64(w.inner_height()),
            scroll_x: w.scroll_x().unwrap_or(0.0),
            scroll_y: w.scroll_y().unwrap_or(0.0),
        },
        None => Viewport::default(),
    }
}

#[inline]
pub fn element_document_coordinate(el: &web::Element, viewport: &Viewport) -> Coordinate {
    let rect = el.get_bounding_client_rect();
    element_coordinate(rect.left(), rect.top(), viewport)
}

/// Resolve after the browser's next animation frame, i.e. once pending DOM
/// mutations have been through a render pass.
pub async fn next_frame() -> anyhow::Result<()> {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| match web::window() {
        Some(w) => {
            if w.request_animation_frame(&resolve).is_err() {
                let _ = resolve.call0(&JsValue::NULL);
            }
        }
        None => {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("animation frame: {:?}", e))?;
    Ok(())
}
