//! Game state and core simulation types
//!
//! Everything the simulation touches lives in [`GameState`]; phase functions
//! receive it by reference and nothing is kept in statics.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::spawn;
use crate::tuning::Tuning;

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Frames are simulated and the loop reschedules itself
    Running,
    /// Terminal: nothing is simulated until a restart
    GameOver,
}

/// Shared horizontal direction of the enemy sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepDirection {
    Left,
    Right,
}

impl SweepDirection {
    /// -1 for left, +1 for right
    pub fn sign(self) -> f32 {
        match self {
            SweepDirection::Left => -1.0,
            SweepDirection::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SweepDirection::Left => SweepDirection::Right,
            SweepDirection::Right => SweepDirection::Left,
        }
    }
}

/// Cosmetic enemy class, derived from the grid row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyClass {
    /// Row 0: moves at the fast-row multiplier
    Fast,
    /// Row 1
    Red,
    /// Rows 2-3
    Yellow,
    /// Row 4
    Cyan,
}

impl EnemyClass {
    pub fn for_row(row: usize) -> Self {
        match row {
            0 => EnemyClass::Fast,
            1 => EnemyClass::Red,
            2 | 3 => EnemyClass::Yellow,
            _ => EnemyClass::Cyan,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Distance per move command
    pub speed: f32,
}

/// One invader. Dead invaders keep their slot so the grid layout is stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    pub alive: bool,
    pub speed_multiplier: f32,
    pub class: EnemyClass,
}

/// A player or enemy shot. `speed` is always positive; direction depends on
/// which collection the shot lives in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    pub speed: f32,
}

/// Things that happened during a tick, drained by the frame driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged(u64),
    LivesChanged(u8),
    /// Index into `GameState::enemies`
    EnemyDestroyed { index: usize },
    EnemyFired { index: usize },
    PlayerHit,
    StageCleared { stage: u32, bonus: u64 },
    StageStarted { stage: u32 },
    GameOver { final_score: u64 },
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance in effect for this session
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    /// 1-based stage counter
    pub stage: u32,
    /// Simulated ticks since the session started
    pub time_ticks: u64,
    pub player: Player,
    /// Row-major grid, always `GRID_SIZE` long once a stage has started
    pub enemies: Vec<Enemy>,
    pub player_shots: Vec<Projectile>,
    pub enemy_shots: Vec<Projectile>,
    pub sweep_direction: SweepDirection,
    pub sweep_speed: f32,
    /// Milliseconds until the next stage spawns, set once a stage is cleared
    pub stage_reset_ms: Option<f64>,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a session with the given seed and balance and spawn stage 1
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let player = Player {
            rect: Rect::new(
                tuning.player_center_x(),
                tuning.player_y(),
                tuning.player_width,
                tuning.player_height,
            ),
            speed: tuning.player_speed,
        };

        let mut state = Self {
            seed,
            phase: GamePhase::Running,
            score: 0,
            lives: tuning.starting_lives,
            stage: 0,
            time_ticks: 0,
            player,
            enemies: Vec::new(),
            player_shots: Vec::new(),
            enemy_shots: Vec::new(),
            sweep_direction: SweepDirection::Right,
            sweep_speed: tuning.sweep_speed,
            stage_reset_ms: None,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        };

        spawn::start_stage(&mut state);
        state
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn alive_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.alive).count()
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Enter the terminal phase. Only the first call per session has effect.
    pub(crate) fn enter_game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.stage_reset_ms = None;
        self.events.push(GameEvent::GameOver {
            final_score: self.score,
        });
        log::info!(
            "Game over at stage {} with score {} (tick {})",
            self.stage,
            self.score,
            self.time_ticks
        );
    }

    /// Explicit restart: fresh score and lives, new grid, running again
    pub fn restart(&mut self) {
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.phase = GamePhase::Running;
        self.stage = 0;
        self.stage_reset_ms = None;
        self.events.push(GameEvent::Restarted);
        log::info!("Restarting session (seed {})", self.seed);
        spawn::start_stage(self);
    }
}
