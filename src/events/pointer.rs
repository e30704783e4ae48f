use wasm_bindgen::JsCast;
use web_sys as web;

/// Forward every `pointerdown` on the canvas as one trigger gesture.
pub fn wire_pointerdown(canvas: &web::HtmlCanvasElement, mut on_trigger: impl FnMut() + 'static) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        on_trigger();
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}
