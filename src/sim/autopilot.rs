//! Idle/demo mode
//!
//! A simple bot that produces the same commands a player would: dodge shots
//! falling onto the ship, otherwise line up under the most dangerous enemy
//! and fire.

use super::state::GameState;
use super::tick::Command;

/// How far above the ship an incoming shot triggers a dodge
const DODGE_RANGE: f32 = 60.0;

/// Plan this tick's commands
pub fn plan(state: &GameState) -> Vec<Command> {
    let mut commands = Vec::new();
    if !state.is_running() {
        return commands;
    }

    let ship = state.player.rect;
    let ship_center = ship.center_x();

    // Dodge first: a shot about to land on the ship wins over everything
    let threat = state.enemy_shots.iter().find(|shot| {
        let above = ship.top() - shot.rect.bottom();
        (0.0..DODGE_RANGE).contains(&above)
            && shot.rect.right() > ship.left()
            && shot.rect.left() < ship.right()
    });
    if let Some(shot) = threat {
        let away = if shot.rect.center_x() >= ship_center
            && ship.left() > state.player.speed
        {
            Command::MoveLeft
        } else {
            Command::MoveRight
        };
        commands.push(away);
        return commands;
    }

    // The lowest alive enemy is the most dangerous; prefer the nearest one
    let target = state
        .enemies
        .iter()
        .filter(|e| e.alive)
        .min_by(|a, b| {
            b.rect
                .bottom()
                .partial_cmp(&a.rect.bottom())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    let da = (a.rect.center_x() - ship_center).abs();
                    let db = (b.rect.center_x() - ship_center).abs();
                    da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
                })
        });

    let Some(target) = target else {
        return commands;
    };

    let dx = target.rect.center_x() - ship_center;
    let deadzone = state.player.speed / 2.0;
    if dx > deadzone {
        commands.push(Command::MoveRight);
    } else if dx < -deadzone {
        commands.push(Command::MoveLeft);
    }

    if dx.abs() < target.rect.size.x / 2.0 {
        commands.push(Command::Fire);
    }

    commands
}
