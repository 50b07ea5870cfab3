//! Sky Raider entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use sky_raider::renderer::canvas::CanvasTarget;
    use sky_raider::{Game, LoopControl, Settings};

    const CANVAS_ID: &str = "gameCanvas";

    struct App {
        game: Game,
        target: CanvasTarget,
        /// `setInterval` handle for obstacle spawning
        spawn_timer: Option<i32>,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Sky Raider starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or("no canvas")?
            .dyn_into()?;

        // Optional JSON overrides on the canvas element
        let settings = canvas
            .get_attribute("data-settings")
            .map(|json| Settings::from_json_or_default(&json))
            .unwrap_or_default();

        canvas.set_width(settings.canvas_width as u32);
        canvas.set_height(settings.canvas_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = settings.seed.unwrap_or(js_sys::Date::now() as u64);
        let app = Rc::new(RefCell::new(App {
            game: Game::new(settings, seed),
            target: CanvasTarget::new(ctx),
            spawn_timer: None,
        }));

        setup_input_handlers(app.clone())?;
        start_spawn_timer(app.clone())?;
        request_animation_frame(app);

        log::info!("Sky Raider running!");
        Ok(())
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let handled = app.borrow_mut().game.handle_key(&event.key());
            if handled {
                // Keep space/arrows from scrolling the page
                event.prevent_default();
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn start_spawn_timer(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let interval = app.borrow().game.spawn_interval_ms() as i32;

        let timer_app = app.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let control = timer_app.borrow_mut().game.spawn_tick();
            if control == LoopControl::Stop {
                cancel_spawn_timer(&timer_app);
            }
        });
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval,
        )?;
        closure.forget();

        app.borrow_mut().spawn_timer = Some(handle);
        Ok(())
    }

    fn cancel_spawn_timer(app: &Rc<RefCell<App>>) {
        let handle = app.borrow_mut().spawn_timer.take();
        if let (Some(handle), Some(window)) = (handle, web_sys::window()) {
            window.clear_interval_with_handle(handle);
            log::info!("Spawn timer cancelled");
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window for animation frame");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
            return;
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let control = {
            let mut guard = app.borrow_mut();
            let App { game, target, .. } = &mut *guard;
            game.frame(target)
        };

        match control {
            LoopControl::Continue => request_animation_frame(app),
            LoopControl::Stop => game_over(&app),
        }
    }

    /// Cancel timers, report the score, then reset the page
    fn game_over(app: &Rc<RefCell<App>>) {
        cancel_spawn_timer(app);

        let score = app.borrow_mut().game.take_game_over();
        let Some(score) = score else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.alert_with_message(&format!("Game Over! Score: {}", score)) {
            log::warn!("Alert failed: {:?}", e);
        }
        if let Err(e) = window.location().reload() {
            log::error!("Reload failed: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames per second assumed by the headless run
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FPS: u64 = 60;
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAMES: u64 = 600;
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FIRE_EVERY: u64 = 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use sky_raider::renderer::Recorder;
    use sky_raider::{Game, LoopControl, Settings, consts};

    env_logger::init();
    log::info!("Sky Raider (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let json = std::env::var("SKY_RAIDER_SETTINGS").ok();
    let quality = std::env::var("SKY_RAIDER_QUALITY").ok();
    let settings = Settings::from_overrides(json.as_deref(), quality.as_deref());
    let seed = settings.seed.unwrap_or(consts::DEFAULT_SEED);
    let spawn_every = (settings.spawn_interval_ms as u64 * DEMO_FPS / 1000).max(1);

    let mut game = Game::new(settings, seed);
    let mut target = Recorder::new();
    let mut frames = 0;

    while frames < DEMO_FRAMES {
        if frames % spawn_every == 0 {
            game.spawn_tick();
        }
        autopilot(&mut game, frames);

        target.reset();
        frames += 1;
        if game.frame(&mut target) == LoopControl::Stop {
            break;
        }
    }

    match game.take_game_over() {
        Some(score) => println!("Game Over! Score: {} after {} frames", score, frames),
        None => println!(
            "Survived {} frames, score {} ({} draw calls in last frame)",
            frames,
            game.state().score,
            target.commands.len()
        ),
    }
}

/// Line up under the lowest obstacle and fire on a fixed cadence
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(game: &mut sky_raider::Game, frame: u64) {
    let state = game.state();
    let aircraft_x = state.aircraft.pos.x;
    let step = state.aircraft.speed;
    let target_x = state
        .obstacles
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|o| o.pos.x);

    if let Some(x) = target_x {
        if x < aircraft_x - step {
            game.handle_key("a");
        } else if x > aircraft_x + step {
            game.handle_key("d");
        }
    }
    if frame % DEMO_FIRE_EVERY == 0 {
        game.handle_key(" ");
    }
}
