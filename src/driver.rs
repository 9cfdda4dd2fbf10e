//! Frame driver
//!
//! Owns the session and runs one frame per display refresh:
//! drain input, clear, draw, tick, publish HUD changes. Entering game over
//! stops the loop; a restart command resumes it.

use crate::consts::FRAME_MS;
use crate::platform::{CommandQueue, CommandSender, DisplaySink, Scheduler};
use crate::renderer::{self, DrawingSurface};
use crate::sim::{self, Command, GameEvent, GameState, TickInput};
use crate::tuning::Tuning;

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Stopped,
}

pub struct FrameDriver<S: DrawingSurface, D: DisplaySink> {
    state: GameState,
    surface: S,
    display: D,
    queue: CommandQueue,
    last_time_ms: Option<f64>,
    autopilot: bool,
    looping: bool,
}

impl<S: DrawingSurface, D: DisplaySink> FrameDriver<S, D> {
    pub fn new(seed: u64, tuning: Tuning, surface: S, display: D) -> Self {
        let mut driver = Self {
            state: GameState::new(seed, tuning),
            surface,
            display,
            queue: CommandQueue::new(),
            last_time_ms: None,
            autopilot: false,
            looping: true,
        };
        driver.publish_events();
        driver
    }

    /// Producer handle for key and touch listeners
    pub fn sender(&self) -> CommandSender {
        self.queue.sender()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        if enabled != self.autopilot {
            log::info!("Autopilot {}", if enabled { "on" } else { "off" });
        }
        self.autopilot = enabled;
    }

    /// True while the host is expected to keep scheduling frames
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Mark the loop as live again. Returns true when the caller has to
    /// schedule the first frame itself.
    pub fn resume(&mut self) -> bool {
        if self.looping {
            return false;
        }
        self.looping = true;
        true
    }

    /// Run one frame at host timestamp `now_ms`
    pub fn frame(&mut self, now_ms: f64) -> FrameOutcome {
        let commands = self.queue.drain();

        if !self.state.is_running() && !commands.contains(&Command::Restart) {
            // Stale callback after the loop stopped
            self.publish_events();
            self.stop();
            return FrameOutcome::Stopped;
        }

        let elapsed_ms = match self.last_time_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => FRAME_MS,
        };
        self.last_time_ms = Some(now_ms);

        renderer::clear(&mut self.surface, &self.state);
        renderer::draw_frame(&mut self.surface, &self.state);

        let input = TickInput {
            commands,
            autopilot: self.autopilot,
        };
        sim::tick(&mut self.state, &input, elapsed_ms);
        self.publish_events();

        if self.state.is_running() {
            self.looping = true;
            FrameOutcome::Continue
        } else {
            self.stop();
            FrameOutcome::Stopped
        }
    }

    /// Pull frames from `scheduler` until it runs dry or the game ends.
    /// Returns the number of frames simulated.
    pub fn run(&mut self, scheduler: &mut impl Scheduler) -> u64 {
        let mut frames = 0;
        while let Some(now_ms) = scheduler.next_frame() {
            let outcome = self.frame(now_ms);
            frames += 1;
            if let Err(violation) = sim::invariants::check(&self.state) {
                log::warn!("Invariant violated at tick {}: {violation}", self.state.time_ticks);
            }
            if outcome == FrameOutcome::Stopped {
                break;
            }
        }
        frames
    }

    fn stop(&mut self) {
        self.looping = false;
        // A resumed loop must not count the pause as elapsed time
        self.last_time_ms = None;
    }

    fn publish_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) => self.display.set_score(score),
                GameEvent::LivesChanged(lives) => self.display.set_lives(lives),
                GameEvent::GameOver { final_score } => self.display.show_game_over(final_score),
                GameEvent::Restarted => self.display.hide_game_over(),
                other => log::trace!("{other:?}"),
            }
        }
    }
}
