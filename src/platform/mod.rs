//! Platform abstraction layer
//!
//! Collaborators the frame driver talks to:
//! - `DisplaySink`: score/lives/game-over readouts
//! - `Scheduler`: "run again at the next display refresh"
//! - `input`: command queue fed by key/touch listeners
//! - `headless`: native stand-ins used by the demo runner and tests

pub mod headless;
pub mod input;

pub use input::{CommandQueue, CommandSender};

/// HUD outside the play field
pub trait DisplaySink {
    fn set_score(&mut self, score: u64);
    fn set_lives(&mut self, lives: u8);
    fn show_game_over(&mut self, final_score: u64);
    fn hide_game_over(&mut self);
}

/// Pull-style frame scheduler for hosts that own their loop.
///
/// Push-style hosts (the browser's `requestAnimationFrame`) call
/// `FrameDriver::frame` from their callback instead.
pub trait Scheduler {
    /// Wait for the next display refresh and return its timestamp in
    /// milliseconds, or `None` when the host is shutting down.
    fn next_frame(&mut self) -> Option<f64>;
}
