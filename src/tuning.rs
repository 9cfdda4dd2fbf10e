//! Game balance knobs
//!
//! Every gameplay number lives here so a host can load an alternative balance
//! from JSON. Defaults reproduce the classic arcade feel.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Error loading or validating a [`Tuning`]
#[derive(Debug)]
pub enum TuningError {
    /// JSON was malformed or had wrong field types
    Parse(serde_json::Error),
    /// Tuning file could not be read
    Io(std::io::Error),
    /// A value is outside the range the simulation can handle
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "malformed tuning: {e}"),
            Self::Io(e) => write!(f, "cannot read tuning: {e}"),
            Self::Invalid { field, reason } => write!(f, "invalid tuning `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Gameplay tuning. Missing JSON fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Distance moved per move command
    pub player_speed: f32,
    /// Player top edge sits this far above the bottom of the field
    pub player_bottom_margin: f32,
    pub starting_lives: u8,

    // === Enemies ===
    pub enemy_width: f32,
    pub enemy_height: f32,
    /// Horizontal sweep distance per tick (before the row multiplier)
    pub sweep_speed: f32,
    /// Downward step applied when the sweep reverses
    pub sweep_drop: f32,
    /// Speed multiplier of the top ("fast") row
    pub fast_row_multiplier: f32,

    // === Player shots ===
    pub player_shot_width: f32,
    pub player_shot_height: f32,
    pub player_shot_speed: f32,
    /// Maximum simultaneous player shots
    pub max_player_shots: usize,

    // === Enemy shots ===
    pub enemy_shot_width: f32,
    pub enemy_shot_height: f32,
    pub enemy_shot_speed: f32,
    /// Per-tick probability that some alive enemy fires
    pub enemy_fire_chance: f64,

    // === Scoring ===
    pub score_per_kill: u64,
    pub stage_clear_bonus: u64,
    /// Wall-clock delay between clearing a stage and the next grid appearing
    pub stage_reset_delay_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: 400.0,
            field_height: 600.0,

            player_width: 30.0,
            player_height: 20.0,
            player_speed: 10.0,
            player_bottom_margin: 60.0,
            starting_lives: 3,

            enemy_width: 25.0,
            enemy_height: 20.0,
            sweep_speed: 0.6,
            sweep_drop: 12.0,
            fast_row_multiplier: 2.0,

            player_shot_width: 4.0,
            player_shot_height: 10.0,
            player_shot_speed: 8.0,
            max_player_shots: 3,

            enemy_shot_width: 4.0,
            enemy_shot_height: 8.0,
            enemy_shot_speed: 1.8,
            enemy_fire_chance: 0.001,

            score_per_kill: 10,
            stage_clear_bonus: 100,
            stage_reset_delay_ms: 1000.0,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a JSON tuning file
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_speed", self.player_speed),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
            ("sweep_speed", self.sweep_speed),
            ("player_shot_width", self.player_shot_width),
            ("player_shot_height", self.player_shot_height),
            ("player_shot_speed", self.player_shot_speed),
            ("enemy_shot_width", self.enemy_shot_width),
            ("enemy_shot_height", self.enemy_shot_height),
            ("enemy_shot_speed", self.enemy_shot_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                });
            }
        }

        if !(self.sweep_drop.is_finite() && self.sweep_drop >= 0.0) {
            return Err(TuningError::Invalid {
                field: "sweep_drop",
                reason: "must be zero or positive",
            });
        }
        if !(self.fast_row_multiplier.is_finite() && self.fast_row_multiplier > 0.0) {
            return Err(TuningError::Invalid {
                field: "fast_row_multiplier",
                reason: "must be a positive number",
            });
        }
        if !(0.0..=1.0).contains(&self.enemy_fire_chance) {
            return Err(TuningError::Invalid {
                field: "enemy_fire_chance",
                reason: "must be a probability in [0, 1]",
            });
        }
        if !(self.stage_reset_delay_ms.is_finite() && self.stage_reset_delay_ms >= 0.0) {
            return Err(TuningError::Invalid {
                field: "stage_reset_delay_ms",
                reason: "must be zero or positive",
            });
        }
        if self.max_player_shots == 0 {
            return Err(TuningError::Invalid {
                field: "max_player_shots",
                reason: "must allow at least one shot",
            });
        }
        if self.starting_lives == 0 {
            return Err(TuningError::Invalid {
                field: "starting_lives",
                reason: "must be at least one",
            });
        }
        if self.player_width > self.field_width {
            return Err(TuningError::Invalid {
                field: "player_width",
                reason: "wider than the field",
            });
        }

        // The whole grid must start inside the field and above the player
        if self.grid_right() > self.field_width {
            return Err(TuningError::Invalid {
                field: "field_width",
                reason: "enemy grid does not fit",
            });
        }
        if self.grid_bottom() >= self.player_y() {
            return Err(TuningError::Invalid {
                field: "player_bottom_margin",
                reason: "player row overlaps the enemy grid",
            });
        }
        if self.player_y() + self.player_height > self.field_height {
            return Err(TuningError::Invalid {
                field: "player_bottom_margin",
                reason: "player sits below the field",
            });
        }

        Ok(())
    }

    /// Player top edge
    pub fn player_y(&self) -> f32 {
        self.field_height - self.player_bottom_margin
    }

    /// Player left edge when centered
    pub fn player_center_x(&self) -> f32 {
        self.field_width / 2.0 - self.player_width / 2.0
    }

    /// Right edge of the rightmost enemy column at spawn
    pub fn grid_right(&self) -> f32 {
        GRID_OFFSET_X + (GRID_COLS - 1) as f32 * GRID_COL_SPACING + self.enemy_width
    }

    /// Bottom edge of the lowest enemy row at spawn
    pub fn grid_bottom(&self) -> f32 {
        GRID_OFFSET_Y + (GRID_ROWS - 1) as f32 * GRID_ROW_SPACING + self.enemy_height
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "star_invaders_tuning";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {e}"),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native hosts pass a file path instead
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
