use crate::animator::{Ticker, TimerError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Ticker`] backed by `window.setInterval`.
///
/// The callback is created once by the caller and reused for every gesture.
pub struct IntervalTicker {
    window: web::Window,
    callback: Closure<dyn FnMut()>,
    handle: Option<i32>,
}

impl IntervalTicker {
    pub fn new(window: web::Window, callback: Closure<dyn FnMut()>) -> Self {
        Self {
            window,
            callback,
            handle: None,
        }
    }
}

impl Ticker for IntervalTicker {
    fn begin(&mut self, period_ms: u32) -> Result<(), TimerError> {
        if self.handle.is_some() {
            return Ok(());
        }
        let handle = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                period_ms.min(i32::MAX as u32) as i32,
            )
            .map_err(|e| TimerError::Schedule(format!("{:?}", e)))?;
        self.handle = Some(handle);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(h) = self.handle.take() {
            self.window.clear_interval_with_handle(h);
        }
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}
