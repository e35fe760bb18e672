//! Color Chase entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent};

    use color_chase::input::DragPhase;
    use color_chase::platform::web::{DomScoreSink, JoystickView, mouse_drag, touch_drag};
    use color_chase::renderer::canvas::CanvasSurface;
    use color_chase::{Game, Settings};

    /// Everything the browser callbacks share
    struct App {
        game: Game<CanvasSurface, DomScoreSink>,
        canvas: HtmlCanvasElement,
        joystick: JoystickView,
    }

    impl App {
        fn handle_drag(&mut self, event: &color_chase::input::DragEvent) {
            let was_dragging = self.game.joystick().is_dragging();
            let zone = self.joystick.zone();
            self.game.handle_drag(event, zone);

            let stick = self.game.joystick();
            if !(was_dragging || stick.is_dragging()) {
                return;
            }
            if let Err(e) = self.joystick.show_offset(stick.offset()) {
                log::warn!("Could not move joystick knob: {:?}", e);
            }
        }

        /// Match the canvas to the window and tell the game
        fn fit_to_window(&mut self) {
            let (width, height) = window_size();
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.game.resize(width as f32, height as f32);
        }
    }

    fn window_size() -> (u32, u32) {
        let Some(window) = web_sys::window() else {
            return (0, 0);
        };
        let dimension = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
        };
        (dimension(window.inner_width()), dimension(window.inner_height()))
    }

    fn element_by_id(document: &web_sys::Document, id: &str) -> Result<web_sys::Element, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{} element", id)))
    }

    pub fn run() -> Result<(), JsValue> {
        log::info!("Color Chase starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = element_by_id(&document, "gameCanvas")?.dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into()?;

        let container = document
            .query_selector(".joystick-container")?
            .ok_or("missing .joystick-container")?;
        let knob: HtmlElement = document
            .query_selector(".joystick-knob")?
            .ok_or("missing .joystick-knob")?
            .dyn_into()?;
        let score = element_by_id(&document, "score")?;

        let (width, height) = window_size();
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let game = Game::new(
            &settings,
            width as f32,
            height as f32,
            seed,
            CanvasSurface::new(ctx),
            DomScoreSink::new(score),
        );

        let app = Rc::new(RefCell::new(App {
            game,
            canvas,
            joystick: JoystickView::new(container, knob),
        }));

        setup_input_handlers(&document, app.clone())?;
        setup_resize(app.clone())?;

        // Start game loop
        request_animation_frame(app);

        log::info!("Color Chase running!");
        Ok(())
    }

    fn setup_input_handlers(document: &web_sys::Document, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let knob = app.borrow().joystick.knob().clone();

        // Drag starts on the knob, moves and ends anywhere on the page
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().handle_drag(&mouse_drag(DragPhase::Start, &event));
            });
            knob.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().handle_drag(&mouse_drag(DragPhase::Move, &event));
            });
            document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().handle_drag(&mouse_drag(DragPhase::End, &event));
            });
            document.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().handle_drag(&touch_drag(DragPhase::Start, &event));
            });
            knob.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                app.borrow_mut().handle_drag(&touch_drag(DragPhase::Move, &event));
            });
            document.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                app.borrow_mut().handle_drag(&touch_drag(DragPhase::End, &event));
            });
            document.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().fit_to_window();
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().game.frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use color_chase::input::{DragEvent, DragPhase, Rect};
    use color_chase::renderer::{NullSurface, RecordingScoreSink};
    use color_chase::{Game, Settings};

    /// Frames in the headless demo (10 s at 60 Hz)
    const DEMO_FRAMES: u32 = 600;

    env_logger::init();
    log::info!("Color Chase (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let mut game = Game::new(
        &settings,
        800.0,
        600.0,
        seed,
        NullSurface,
        RecordingScoreSink::default(),
    );

    // Sweep the joystick around its rim, one lap every 4 seconds
    let zone = Rect::new(0.0, 0.0, 100.0, 100.0);
    let center = zone.center();
    game.handle_drag(&DragEvent::pointer(DragPhase::Start, center.x, center.y), zone);
    for frame in 0..DEMO_FRAMES {
        let angle = frame as f32 / 240.0 * std::f32::consts::TAU;
        let point = center + glam::Vec2::new(angle.cos(), angle.sin()) * 40.0;
        game.handle_drag(&DragEvent::pointer(DragPhase::Move, point.x, point.y), zone);
        if frame == DEMO_FRAMES / 2 {
            game.resize(1024.0, 768.0);
        }
        game.frame();
    }
    game.handle_drag(&DragEvent::pointer(DragPhase::End, center.x, center.y), zone);

    let state = game.state();
    println!(
        "Score after {} frames: {} ({} collectibles on screen)",
        state.time_ticks,
        state.score,
        state.collectibles.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
