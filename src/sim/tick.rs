//! Per-frame simulation tick
//!
//! Applies queued commands, then advances the world in a fixed order:
//! stage timer, shots and sweep, enemy fire, collisions, stage-clear check.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{GamePhase, GameState, Projectile};
use super::{autopilot, collision, fire, movement, spawn};

/// A discrete player command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Fire,
    Restart,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Commands drained from the input queue, in arrival order
    pub commands: Vec<Command>,
    /// Idle/demo mode - autopilot plays the game
    pub autopilot: bool,
}

impl TickInput {
    pub fn with_commands(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            autopilot: false,
        }
    }
}

/// Horizontal move direction for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Left,
    Right,
}

/// Move the player one step, clamped to the field
pub fn move_player(state: &mut GameState, direction: MoveDirection) {
    let max_x = state.tuning.field_width - state.player.rect.size.x;
    let speed = state.player.speed;
    let x = &mut state.player.rect.pos.x;
    *x = match direction {
        MoveDirection::Left => (*x - speed).max(0.0),
        MoveDirection::Right => (*x + speed).min(max_x),
    };
}

/// Fire a player shot from the ship's nose, unless the shot cap is reached.
/// Returns true when a shot was created.
pub fn fire_player_shot(state: &mut GameState) -> bool {
    if state.player_shots.len() >= state.tuning.max_player_shots {
        return false;
    }
    let t = &state.tuning;
    let shot = Projectile {
        rect: Rect::new(
            state.player.rect.center_x() - t.player_shot_width / 2.0,
            state.player.rect.top(),
            t.player_shot_width,
            t.player_shot_height,
        ),
        speed: t.player_shot_speed,
    };
    state.player_shots.push(shot);
    true
}

/// Apply one command. Gameplay commands are ignored once the game is over.
pub fn apply_command(state: &mut GameState, command: Command) {
    match (command, state.phase) {
        (Command::Restart, _) => state.restart(),
        (_, GamePhase::GameOver) => {}
        (Command::MoveLeft, GamePhase::Running) => move_player(state, MoveDirection::Left),
        (Command::MoveRight, GamePhase::Running) => move_player(state, MoveDirection::Right),
        (Command::Fire, GamePhase::Running) => {
            fire_player_shot(state);
        }
    }
}

/// Advance the game by one frame.
///
/// `elapsed_ms` is wall-clock time since the previous frame; it only drives
/// the delay before a cleared stage respawns.
pub fn tick(state: &mut GameState, input: &TickInput, elapsed_ms: f64) {
    for &command in &input.commands {
        apply_command(state, command);
    }

    if state.phase == GamePhase::GameOver {
        return;
    }

    if input.autopilot {
        for command in autopilot::plan(state) {
            apply_command(state, command);
        }
    }

    state.time_ticks += 1;

    spawn::advance_stage_timer(state, elapsed_ms);

    movement::advance_projectiles(state);
    movement::sweep_enemies(state);

    fire::maybe_fire(state);

    collision::resolve(state);

    collision::check_stage_clear(state);
}
