//! Enemy fire policy

use rand::Rng;

use super::rect::Rect;
use super::state::{GameEvent, GameState, Projectile};

/// Roll for an enemy shot this tick.
///
/// With probability `enemy_fire_chance` a uniformly chosen alive enemy fires
/// from its lower center. Returns the index of the enemy that fired.
pub fn maybe_fire(state: &mut GameState) -> Option<usize> {
    let chance = state.tuning.enemy_fire_chance;
    if chance.is_nan() || chance <= 0.0 || !state.rng().random_bool(chance.min(1.0)) {
        return None;
    }

    let alive: Vec<usize> = state
        .enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| e.alive)
        .map(|(i, _)| i)
        .collect();
    if alive.is_empty() {
        return None;
    }

    let pick = state.rng().random_range(0..alive.len());
    let index = alive[pick];
    fire_from(state, index);
    Some(index)
}

/// Spawn an enemy shot below the given enemy
pub fn fire_from(state: &mut GameState, index: usize) {
    let Some(enemy) = state.enemies.get(index) else {
        return;
    };
    let t = &state.tuning;
    let shot = Projectile {
        rect: Rect::new(
            enemy.rect.center_x() - t.enemy_shot_width / 2.0,
            enemy.rect.bottom(),
            t.enemy_shot_width,
            t.enemy_shot_height,
        ),
        speed: t.enemy_shot_speed,
    };
    state.enemy_shots.push(shot);
    state.events.push(GameEvent::EnemyFired { index });
    log::debug!("Enemy {index} fired");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn always_fire() -> GameState {
        let tuning = Tuning {
            enemy_fire_chance: 1.0,
            ..Tuning::default()
        };
        GameState::new(5, tuning)
    }

    #[test]
    fn test_fire_from_lower_center() {
        let mut s = GameState::new(5, Tuning::default());
        fire_from(&mut s, 9);
        let shot = &s.enemy_shots[0];
        // Enemy 9: x = 95, y = 85, 25x20
        assert_eq!(shot.rect.pos.x, 95.0 + 12.5 - 2.0);
        assert_eq!(shot.rect.pos.y, 105.0);
        assert_eq!(shot.rect.size.x, 4.0);
        assert_eq!(shot.rect.size.y, 8.0);
        assert_eq!(shot.speed, 1.8);
    }

    #[test]
    fn test_never_fires_at_zero_chance() {
        let tuning = Tuning {
            enemy_fire_chance: 0.0,
            ..Tuning::default()
        };
        let mut s = GameState::new(5, tuning);
        for _ in 0..1000 {
            assert_eq!(maybe_fire(&mut s), None);
        }
        assert!(s.enemy_shots.is_empty());
    }

    #[test]
    fn test_only_alive_enemies_fire() {
        let mut s = always_fire();
        for enemy in s.enemies.iter_mut() {
            enemy.alive = false;
        }
        s.enemies[17].alive = true;
        s.enemies[30].alive = true;

        for _ in 0..50 {
            let index = maybe_fire(&mut s).unwrap();
            assert!(index == 17 || index == 30);
        }
        assert_eq!(s.enemy_shots.len(), 50);
    }

    #[test]
    fn test_no_alive_enemies_is_noop() {
        let mut s = always_fire();
        for enemy in s.enemies.iter_mut() {
            enemy.alive = false;
        }
        assert_eq!(maybe_fire(&mut s), None);
        assert!(s.enemy_shots.is_empty());
    }

    #[test]
    fn test_default_rate_is_about_one_in_a_thousand() {
        let mut s = GameState::new(42, Tuning::default());
        let rolls = 100_000;
        let fired = (0..rolls).filter(|_| maybe_fire(&mut s).is_some()).count();
        // Expected 100, standard deviation ~10
        assert!((50..=150).contains(&fired), "fired {fired} of {rolls}");
        assert_eq!(s.enemy_shots.len(), fired);
    }

    #[test]
    fn test_same_seed_same_shooter() {
        let mut a = always_fire();
        let mut b = always_fire();
        for _ in 0..20 {
            assert_eq!(maybe_fire(&mut a), maybe_fire(&mut b));
        }
    }
}
