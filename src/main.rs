//! Star Invaders entry point
//!
//! The browser build draws to a canvas and schedules frames with
//! `requestAnimationFrame`. The native build runs a headless autopilot
//! session and prints a JSON summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent};

    use star_invaders::platform::DisplaySink;
    use star_invaders::platform::input::{BUTTONS, command_for_key};
    use star_invaders::renderer::{Color, DrawingSurface};
    use star_invaders::sim::Command;
    use star_invaders::{FrameDriver, FrameOutcome, Tuning};

    type Game = FrameDriver<CanvasSurface, DomDisplay>;

    /// 2D canvas context as a drawing surface
    struct CanvasSurface {
        ctx: CanvasRenderingContext2d,
    }

    impl DrawingSurface for CanvasSurface {
        fn clear(&mut self, x: f32, y: f32, width: f32, height: f32) {
            self.ctx
                .clear_rect(x as f64, y as f64, width as f64, height as f64);
        }

        fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
            self.ctx.set_fill_style_str(&color.css());
            self.ctx
                .fill_rect(x as f64, y as f64, width as f64, height as f64);
        }
    }

    /// HUD elements in the page
    struct DomDisplay {
        document: Document,
    }

    impl DomDisplay {
        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn set_game_over_hidden(&self, hidden: bool) {
            if let Some(el) = self.document.get_element_by_id("gameOver") {
                let classes = el.class_list();
                let _ = if hidden {
                    classes.add_1("hidden")
                } else {
                    classes.remove_1("hidden")
                };
            }
        }
    }

    impl DisplaySink for DomDisplay {
        fn set_score(&mut self, score: u64) {
            self.set_text("score", &score.to_string());
        }

        fn set_lives(&mut self, lives: u8) {
            self.set_text("lives", &lives.to_string());
        }

        fn show_game_over(&mut self, final_score: u64) {
            self.set_text("finalScore", &final_score.to_string());
            self.set_game_over_hidden(false);
        }

        fn hide_game_over(&mut self) {
            self.set_game_over_hidden(true);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"logger already initialised".into());
        }

        log::info!("Star Invaders starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no #gameCanvas")?
            .dyn_into()?;

        let tuning = Tuning::load();
        canvas.set_width(tuning.field_width as u32);
        canvas.set_height(tuning.field_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        log::info!("Seed: {seed}");

        let game = Rc::new(RefCell::new(Game::new(
            seed,
            tuning,
            CanvasSurface { ctx },
            DomDisplay {
                document: document.clone(),
            },
        )));

        setup_keyboard(game.clone())?;
        setup_buttons(&document, game.clone())?;

        request_animation_frame(game);
        Ok(())
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let sender = game.borrow().sender();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.code() == "KeyI" {
                let mut g = game.borrow_mut();
                let enabled = !g.autopilot();
                g.set_autopilot(enabled);
                return;
            }
            if let Some(command) = command_for_key(&event.code()) {
                if command == Command::Fire {
                    event.prevent_default();
                }
                sender.send(command);
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        for (id, command) in BUTTONS {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Button #{id} not found");
                continue;
            };

            let events: &[&str] = if command == Command::Restart {
                &["click"]
            } else {
                &["touchstart", "click"]
            };

            for &kind in events {
                let game = game.clone();
                let sender = game.borrow().sender();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                    event.prevent_default();
                    sender.send(command);
                    // The loop stops at game over; restart has to kick it
                    if command == Command::Restart && game.borrow_mut().resume() {
                        request_animation_frame(game.clone());
                    }
                });
                btn.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
                closure.forget();
            }
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let outcome = game.borrow_mut().frame(time);
        if outcome == FrameOutcome::Continue {
            request_animation_frame(game);
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

#[cfg(not(target_arch = "wasm32"))]
mod headless_run {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;
    use serde::Serialize;

    use star_invaders::platform::headless::{FixedClock, LogDisplay, NullSurface};
    use star_invaders::sim::GamePhase;
    use star_invaders::{FrameDriver, Tuning};

    /// Run a headless Star Invaders session and print a JSON summary
    #[derive(Parser, Debug)]
    #[command(name = "star-invaders", version, about)]
    pub struct Args {
        /// RNG seed (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many frames
        #[arg(long, default_value_t = 3600)]
        frames: u64,

        /// JSON tuning file
        #[arg(long, value_name = "PATH")]
        tuning: Option<PathBuf>,

        /// Pace frames at 60 Hz instead of running flat out
        #[arg(long)]
        realtime: bool,

        /// Do not let the autopilot play
        #[arg(long)]
        no_autopilot: bool,
    }

    #[derive(Debug, Serialize)]
    struct RunSummary {
        seed: u64,
        frames: u64,
        ticks: u64,
        phase: GamePhase,
        stage: u32,
        score: u64,
        lives: u8,
        enemies_alive: usize,
    }

    fn clock_seed() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    /// Play one headless session and summarize it
    fn simulate(args: &Args) -> Result<RunSummary> {
        let tuning = match &args.tuning {
            Some(path) => {
                let tuning = Tuning::load_file(path)
                    .with_context(|| format!("failed loading tuning from {}", path.display()))?;
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            None => Tuning::load(),
        };
        let seed = args.seed.unwrap_or_else(clock_seed);
        log::info!("Star Invaders (native) starting with seed {seed}");

        let mut driver = FrameDriver::new(
            seed,
            tuning,
            NullSurface::default(),
            LogDisplay::default(),
        );
        driver.set_autopilot(!args.no_autopilot);

        let mut clock = FixedClock::new(Some(args.frames), args.realtime);
        let frames = driver.run(&mut clock);

        let state = driver.state();
        log::debug!(
            "{} clears, {} fills",
            driver.surface().clears,
            driver.surface().fills
        );
        Ok(RunSummary {
            seed,
            frames,
            ticks: state.time_ticks,
            phase: state.phase,
            stage: state.stage,
            score: state.score,
            lives: state.lives,
            enemies_alive: state.alive_enemies(),
        })
    }

    pub fn run(args: Args) -> Result<()> {
        let summary = simulate(&args)?;
        let json =
            serde_json::to_string_pretty(&summary).context("failed to serialize run summary")?;
        println!("{json}");
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    headless_run::run(headless_run::Args::parse())
}
