//! Neon Invaders entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use neon_invaders::audio::{AudioManager, SoundEffect};
    use neon_invaders::consts::*;
    use neon_invaders::renderer::{build_scene, RenderState, Starfield};
    use neon_invaders::settings::Settings;
    use neon_invaders::sim::{spawn_wave, tick, GameEvent, GamePhase, GameState, TickInput};

    /// Held-key state, polled into a `TickInput` once per substep
    #[derive(Default)]
    struct InputState {
        left: bool,
        right: bool,
        fire: bool,
        /// One-shot, cleared after the substep that consumes it
        restart: bool,
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        starfield: Starfield,
        audio: AudioManager,
        settings: Settings,
        accumulator: f32,
        last_time: f64,
        input: InputState,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let settings = Settings::load();
            let mut audio = AudioManager::new();
            audio.set_master_volume(settings.master_volume);
            audio.set_sfx_volume(settings.sfx_volume);

            let mut state = GameState::new(seed);
            spawn_wave(&mut state);

            Self {
                state,
                render_state: None,
                starfield: Starfield::new(WIDTH, HEIGHT, STARFIELD_LAYERS),
                audio,
                settings,
                accumulator: 0.0,
                last_time: 0.0,
                input: InputState::default(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        fn tick_input(&self) -> TickInput {
            TickInput {
                move_x: (self.input.right as i32 - self.input.left as i32) as f32,
                fire: self.input.fire,
                restart: self.input.restart,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32, time: f64) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.tick_input();
                tick(&mut self.state, &input, SIM_DT);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Clear one-shot inputs after processing
                self.input.restart = false;
            }

            // Background scrolls on the frame clock, title screen included
            self.starfield.update(dt);

            // Forward queued sim triggers to the audio layer
            for event in self.state.take_events() {
                let effect = match event {
                    GameEvent::Laser => SoundEffect::Laser,
                    GameEvent::Hit => SoundEffect::Hit,
                    GameEvent::Explosion => SoundEffect::Explosion,
                    GameEvent::PowerUp => SoundEffect::PowerUp,
                };
                self.audio.play(effect);
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_scene(&self.state, &self.starfield, &self.settings);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            if let Some(el) = document.query_selector("#hud-wave .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.wave.to_string()));
            }

            if let Some(el) = document.query_selector("#hud-lives .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.lives.to_string()));
            }

            if let Some(el) = document.query_selector("#hud-fps .hud-value").ok().flatten() {
                if self.settings.show_fps {
                    el.set_text_content(Some(&self.fps.to_string()));
                }
            }

            // Show/hide title screen
            if let Some(el) = document.get_element_by_id("title-screen") {
                if self.state.phase == GamePhase::Title {
                    let _ = el.set_attribute("class", "");
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            // Show/hide game over overlay
            if let Some(el) = document.get_element_by_id("game-over") {
                if self.state.phase == GamePhase::GameOver {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.state.score.to_string()));
                    }
                    if let Some(wave_el) = document.get_element_by_id("final-wave") {
                        wave_el.set_text_content(Some(&self.state.wave.to_string()));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        /// Fresh session with a new seed (keyboard restart path)
        fn restart(&mut self, seed: u64) {
            self.state = GameState::new(seed);
            self.state.phase = GamePhase::Playing;
            spawn_wave(&mut self.state);
            self.accumulator = 0.0;
            log::info!("Game restarted with seed: {}", seed);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Neon Invaders starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Neon Invaders running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keydown
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => {
                        g.input.left = true;
                        event.prevent_default();
                    }
                    "ArrowRight" | "d" | "D" => {
                        g.input.right = true;
                        event.prevent_default();
                    }
                    " " => {
                        g.input.fire = true;
                        // Browsers gate audio behind a user gesture
                        g.audio.resume();
                        event.prevent_default();
                    }
                    "r" | "R" => {
                        if g.state.phase == GamePhase::GameOver {
                            let seed = js_sys::Date::now() as u64;
                            g.restart(seed);
                        } else {
                            g.input.restart = true;
                        }
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" | "a" | "A" => g.input.left = false,
                    "ArrowRight" | "d" | "D" => g.input.right = false,
                    " " => g.input.fire = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Neon Invaders (native) starting...");
    log::info!("Native mode requires winit integration - run with `trunk serve` for web version");

    headless_smoke();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a short scripted session end to end without a window
#[cfg(not(target_arch = "wasm32"))]
fn headless_smoke() {
    use neon_invaders::consts::SIM_DT;
    use neon_invaders::sim::{spawn_wave, tick, GamePhase, GameState, TickInput};

    let mut state = GameState::new(0x4e454f4e);
    spawn_wave(&mut state);

    // Leave the title screen
    let fire = TickInput {
        fire: true,
        ..Default::default()
    };
    tick(&mut state, &fire, SIM_DT);

    // Sweep back and forth firing for thirty simulated seconds
    for i in 0..1800u32 {
        let input = TickInput {
            move_x: if (i / 120) % 2 == 0 { 1.0 } else { -1.0 },
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        state.take_events();
        if state.phase != GamePhase::Playing {
            break;
        }
    }

    println!(
        "headless session: score {} wave {} after {} ticks",
        state.score, state.wave, state.time_ticks
    );
}
