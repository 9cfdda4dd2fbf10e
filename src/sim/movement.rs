//! Movement integration
//!
//! Advances shots and the enemy sweep by one tick. Player movement is not
//! integrated here: it is driven directly by move commands.

use super::state::GameState;

/// Move shots and drop the ones that left the field.
///
/// Player shots travel up and leave once `y <= 0`; enemy shots travel down
/// and leave once `y >= field_height`.
pub fn advance_projectiles(state: &mut GameState) {
    state.player_shots.retain_mut(|shot| {
        shot.rect.pos.y -= shot.speed;
        shot.rect.pos.y > 0.0
    });

    let floor = state.tuning.field_height;
    state.enemy_shots.retain_mut(|shot| {
        shot.rect.pos.y += shot.speed;
        shot.rect.pos.y < floor
    });
}

/// Advance the enemy sweep.
///
/// If any alive enemy touches a side wall the shared direction flips once and
/// every alive enemy steps down; then every alive enemy moves horizontally.
/// Returns true when the sweep reversed this tick.
pub fn sweep_enemies(state: &mut GameState) -> bool {
    let right_wall = state.tuning.field_width - state.tuning.enemy_width;
    let at_wall = state
        .enemies
        .iter()
        .filter(|e| e.alive)
        .any(|e| e.rect.pos.x <= 0.0 || e.rect.pos.x >= right_wall);

    if at_wall {
        state.sweep_direction = state.sweep_direction.reversed();
        let drop = state.tuning.sweep_drop;
        for enemy in state.enemies.iter_mut().filter(|e| e.alive) {
            enemy.rect.pos.y += drop;
        }
        log::trace!(
            "Sweep reversed to {:?} at tick {}",
            state.sweep_direction,
            state.time_ticks
        );
    }

    let step = state.sweep_speed * state.sweep_direction.sign();
    for enemy in state.enemies.iter_mut().filter(|e| e.alive) {
        enemy.rect.pos.x += step * enemy.speed_multiplier;
    }

    at_wall
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Projectile, SweepDirection};
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(11, Tuning::default())
    }

    fn shot(y: f32, speed: f32) -> Projectile {
        Projectile {
            rect: Rect::new(100.0, y, 4.0, 10.0),
            speed,
        }
    }

    #[test]
    fn test_player_shot_moves_up() {
        let mut s = state();
        s.player_shots.push(shot(540.0, 8.0));
        advance_projectiles(&mut s);
        assert_eq!(s.player_shots[0].rect.pos.y, 532.0);
    }

    #[test]
    fn test_player_shot_removed_exactly_at_top() {
        let mut s = state();
        // 9 - 8 = 1 stays, 8 - 8 = 0 leaves
        s.player_shots.push(shot(9.0, 8.0));
        s.player_shots.push(shot(8.0, 8.0));
        advance_projectiles(&mut s);
        assert_eq!(s.player_shots.len(), 1);
        assert_eq!(s.player_shots[0].rect.pos.y, 1.0);

        advance_projectiles(&mut s);
        assert!(s.player_shots.is_empty());
    }

    #[test]
    fn test_enemy_shot_removed_at_bottom() {
        let mut s = state();
        s.enemy_shots.push(shot(597.0, 2.0));
        s.enemy_shots.push(shot(598.0, 2.0));
        advance_projectiles(&mut s);
        assert_eq!(s.enemy_shots.len(), 1);
        assert_eq!(s.enemy_shots[0].rect.pos.y, 599.0);
    }

    #[test]
    fn test_sweep_moves_right_by_multiplier() {
        let mut s = state();
        let flipped = sweep_enemies(&mut s);
        assert!(!flipped);
        // Fast row moves 0.6 * 2, the rest 0.6
        assert!((s.enemies[0].rect.pos.x - 51.2).abs() < 1e-4);
        assert!((s.enemies[8].rect.pos.x - 50.6).abs() < 1e-4);
        assert_eq!(s.enemies[8].rect.pos.y, 85.0);
    }

    #[test]
    fn test_sweep_flips_at_right_wall() {
        let mut s = state();
        // Rightmost enemy of row 2 exactly at field_width - enemy_width
        s.enemies[23].rect.pos.x = 375.0;
        let before: Vec<f32> = s.enemies.iter().map(|e| e.rect.pos.y).collect();

        let flipped = sweep_enemies(&mut s);

        assert!(flipped);
        assert_eq!(s.sweep_direction, SweepDirection::Left);
        for (enemy, y) in s.enemies.iter().zip(before) {
            assert_eq!(enemy.rect.pos.y, y + 12.0);
        }
        // Horizontal step already uses the new direction
        assert!((s.enemies[23].rect.pos.x - 374.4).abs() < 1e-4);
    }

    #[test]
    fn test_sweep_flips_at_left_wall() {
        let mut s = state();
        s.sweep_direction = SweepDirection::Left;
        s.enemies[8].rect.pos.x = 0.0;
        assert!(sweep_enemies(&mut s));
        assert_eq!(s.sweep_direction, SweepDirection::Right);
    }

    #[test]
    fn test_dead_enemies_ignored_and_frozen() {
        let mut s = state();
        s.enemies[7].rect.pos.x = 390.0;
        s.enemies[7].alive = false;
        let frozen = s.enemies[7].rect;

        let flipped = sweep_enemies(&mut s);

        assert!(!flipped);
        assert_eq!(s.sweep_direction, SweepDirection::Right);
        assert_eq!(s.enemies[7].rect, frozen);
    }

    #[test]
    fn test_dead_enemies_skip_drop() {
        let mut s = state();
        s.enemies[0].rect.pos.x = 0.0;
        s.enemies[5].alive = false;
        let y = s.enemies[5].rect.pos.y;
        assert!(sweep_enemies(&mut s));
        assert_eq!(s.enemies[5].rect.pos.y, y);
        assert_eq!(s.enemies[6].rect.pos.y, y + 12.0);
    }
}
