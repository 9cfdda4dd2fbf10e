//! Session invariants
//!
//! Violations indicate a simulation bug, never a gameplay outcome.

use std::fmt;

use super::state::{GamePhase, GameState};
use crate::consts::GRID_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    PlayerShotLimit { count: usize, max: usize },
    ZeroLivesWhileRunning,
    LivesAboveStart { lives: u8, start: u8 },
    EnemyCount { count: usize },
    PlayerOutOfField,
    StageTimerWithSurvivors,
    StageTimerAfterGameOver,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerShotLimit { count, max } => {
                write!(f, "PLAYER_SHOT_LIMIT ({count} > {max})")
            }
            Self::ZeroLivesWhileRunning => write!(f, "ZERO_LIVES_WHILE_RUNNING"),
            Self::LivesAboveStart { lives, start } => {
                write!(f, "LIVES_ABOVE_START ({lives} > {start})")
            }
            Self::EnemyCount { count } => write!(f, "ENEMY_COUNT ({count} != {GRID_SIZE})"),
            Self::PlayerOutOfField => write!(f, "PLAYER_OUT_OF_FIELD"),
            Self::StageTimerWithSurvivors => write!(f, "STAGE_TIMER_WITH_SURVIVORS"),
            Self::StageTimerAfterGameOver => write!(f, "STAGE_TIMER_AFTER_GAME_OVER"),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Check every session invariant, reporting the first violation
pub fn check(state: &GameState) -> Result<(), InvariantViolation> {
    let max = state.tuning.max_player_shots;
    if state.player_shots.len() > max {
        return Err(InvariantViolation::PlayerShotLimit {
            count: state.player_shots.len(),
            max,
        });
    }

    if state.lives == 0 && state.phase == GamePhase::Running {
        return Err(InvariantViolation::ZeroLivesWhileRunning);
    }
    if state.lives > state.tuning.starting_lives {
        return Err(InvariantViolation::LivesAboveStart {
            lives: state.lives,
            start: state.tuning.starting_lives,
        });
    }

    if state.enemies.len() != GRID_SIZE {
        return Err(InvariantViolation::EnemyCount {
            count: state.enemies.len(),
        });
    }

    let player = state.player.rect;
    if player.left() < 0.0 || player.right() > state.tuning.field_width {
        return Err(InvariantViolation::PlayerOutOfField);
    }

    if state.stage_reset_ms.is_some() {
        if state.phase == GamePhase::GameOver {
            return Err(InvariantViolation::StageTimerAfterGameOver);
        }
        if state.enemies.iter().any(|e| e.alive) {
            return Err(InvariantViolation::StageTimerWithSurvivors);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::Projectile;
    use crate::tuning::Tuning;

    #[test]
    fn test_fresh_state_is_valid() {
        assert_eq!(check(&GameState::new(8, Tuning::default())), Ok(()));
    }

    #[test]
    fn test_detects_shot_overflow() {
        let mut s = GameState::new(8, Tuning::default());
        for _ in 0..4 {
            s.player_shots.push(Projectile {
                rect: Rect::new(0.0, 300.0, 4.0, 10.0),
                speed: 8.0,
            });
        }
        assert_eq!(
            check(&s),
            Err(InvariantViolation::PlayerShotLimit { count: 4, max: 3 })
        );
    }

    #[test]
    fn test_detects_zero_lives_running() {
        let mut s = GameState::new(8, Tuning::default());
        s.lives = 0;
        let err = check(&s).unwrap_err();
        assert_eq!(err.to_string(), "ZERO_LIVES_WHILE_RUNNING");
    }

    #[test]
    fn test_detects_premature_stage_timer() {
        let mut s = GameState::new(8, Tuning::default());
        s.stage_reset_ms = Some(500.0);
        assert_eq!(check(&s), Err(InvariantViolation::StageTimerWithSurvivors));
    }
}
