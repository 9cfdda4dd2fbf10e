//! Star Invaders - a single-screen invaders shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, enemy fire, collisions, rules)
//! - `driver`: Per-frame orchestration of input, drawing and simulation
//! - `renderer`: Draws a `GameState` onto any `DrawingSurface`
//! - `platform`: Host collaborators (display, scheduler, input queue)
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use driver::{FrameDriver, FrameOutcome};
pub use tuning::{Tuning, TuningError};

/// Fixed layout constants (not tunable: there is one level archetype)
pub mod consts {
    /// Enemy grid rows
    pub const GRID_ROWS: usize = 5;
    /// Enemy grid columns
    pub const GRID_COLS: usize = 8;
    /// Total enemies per stage
    pub const GRID_SIZE: usize = GRID_ROWS * GRID_COLS;

    /// Horizontal distance between enemy columns
    pub const GRID_COL_SPACING: f32 = 45.0;
    /// Vertical distance between enemy rows
    pub const GRID_ROW_SPACING: f32 = 35.0;
    /// Left edge of column 0
    pub const GRID_OFFSET_X: f32 = 50.0;
    /// Top edge of row 0
    pub const GRID_OFFSET_Y: f32 = 50.0;

    /// Nominal display refresh used by headless hosts (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}
