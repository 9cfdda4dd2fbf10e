//! Stage spawner
//!
//! Lays out the enemy grid and clears everything left over from the previous
//! stage. Score and lives are untouched here.

use super::rect::Rect;
use super::state::{Enemy, EnemyClass, GameEvent, GameState};
use crate::consts::*;

/// Build a fresh row-major enemy grid for the given balance
pub fn build_grid(enemy_width: f32, enemy_height: f32, fast_multiplier: f32) -> Vec<Enemy> {
    let mut enemies = Vec::with_capacity(GRID_SIZE);
    for row in 0..GRID_ROWS {
        let class = EnemyClass::for_row(row);
        let speed_multiplier = if class == EnemyClass::Fast {
            fast_multiplier
        } else {
            1.0
        };
        for col in 0..GRID_COLS {
            enemies.push(Enemy {
                rect: Rect::new(
                    col as f32 * GRID_COL_SPACING + GRID_OFFSET_X,
                    row as f32 * GRID_ROW_SPACING + GRID_OFFSET_Y,
                    enemy_width,
                    enemy_height,
                ),
                alive: true,
                speed_multiplier,
                class,
            });
        }
    }
    enemies
}

/// Begin the next stage: new grid, no shots, player re-centered.
///
/// The player's row and the sweep direction carry over.
pub fn start_stage(state: &mut GameState) {
    let t = &state.tuning;
    state.enemies = build_grid(t.enemy_width, t.enemy_height, t.fast_row_multiplier);
    state.player_shots.clear();
    state.enemy_shots.clear();
    state.player.rect.pos.x = t.player_center_x();
    state.stage_reset_ms = None;
    state.stage += 1;

    state.events.push(GameEvent::ScoreChanged(state.score));
    state.events.push(GameEvent::LivesChanged(state.lives));
    state.events.push(GameEvent::StageStarted { stage: state.stage });
    log::info!("Stage {} started (score {}, lives {})", state.stage, state.score, state.lives);
}

/// Count down a pending stage reset and spawn the next stage when it expires
pub fn advance_stage_timer(state: &mut GameState, elapsed_ms: f64) {
    let Some(remaining) = state.stage_reset_ms else {
        return;
    };
    let remaining = remaining - elapsed_ms;
    if remaining <= 0.0 {
        start_stage(state);
    } else {
        state.stage_reset_ms = Some(remaining);
    }
}
