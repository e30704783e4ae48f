//! Tap-driven bouncing ball row.
//!
//! A row of balls grows, drops and shrinks back in one palette color per
//! gesture. Each tap animates the current color once and then hands over to
//! the next one, walking the palette left to right and back again.
//!
//! The animation core (`core`, `draw`, `animator`, `render`) is platform
//! independent. The browser front-end is only compiled for `wasm32`.

pub mod animator;
pub mod config;
pub mod constants;
pub mod core;
pub mod draw;
pub mod render;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod timer;

pub use animator::{Animator, Ticker, TimerError};
pub use config::{Color, ConfigError, SceneConfig};
pub use crate::core::{Direction, Sequence, SequenceStep};
pub use draw::Surface;
pub use render::Renderer;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::config::SceneConfig;
    use crate::constants::CANVAS_ID;
    use crate::render::Renderer;
    use crate::{dom, events, timer};
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use web_sys as web;

    struct App {
        renderer: Renderer<timer::IntervalTicker>,
        ctx: web::CanvasRenderingContext2d,
    }

    impl App {
        fn render(&mut self) {
            self.renderer.render(&mut self.ctx);
        }

        fn tick(&mut self) {
            let App { renderer, ctx } = self;
            renderer.tick(ctx);
        }

        fn tap(&mut self) {
            if !self.renderer.handle_tap() {
                log::debug!("[tap] ignored, gesture in progress");
            }
        }

        fn resize(&mut self, width: f32, height: f32) {
            match self.renderer.resize(width, height) {
                Ok(()) => self.render(),
                Err(e) => log::warn!("[resize] {}", e),
            }
        }
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("bounce-ball-line starting");

        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
        Ok(())
    }

    fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas = dom::canvas_or_create(&document, CANVAS_ID)?;
        let (width, height) = dom::sync_canvas_to_viewport(&window, &canvas);
        let ctx = dom::context_2d(&canvas)?;
        log::info!("[canvas] {}x{}", width, height);

        // The interval callback needs the app, which owns the ticker that owns
        // the callback; close the loop with a weak handle filled in below.
        let app_handle: Rc<RefCell<Weak<RefCell<App>>>> = Rc::new(RefCell::new(Weak::new()));
        let tick_handle = app_handle.clone();
        let on_tick = Closure::wrap(Box::new(move || {
            let app = tick_handle.borrow().upgrade();
            if let Some(app) = app {
                app.borrow_mut().tick();
            }
        }) as Box<dyn FnMut()>);

        let ticker = timer::IntervalTicker::new(window, on_tick);
        let renderer = Renderer::new(SceneConfig::with_size(width, height), ticker)?;
        let app = Rc::new(RefCell::new(App { renderer, ctx }));
        *app_handle.borrow_mut() = Rc::downgrade(&app);

        app.borrow_mut().render();

        let app_resize = app.clone();
        dom::wire_canvas_resize(&canvas, move |w, h| {
            app_resize.borrow_mut().resize(w, h);
        });

        let app_tap = app.clone();
        events::wire_pointerdown(&canvas, move || {
            app_tap.borrow_mut().tap();
        });

        Ok(())
    }
}
