//! Collision detection and game rules
//!
//! Hits are collected during each scan and applied afterwards, so removing a
//! shot never shifts the indices of pairs that are still to be tested.
//!
//! Tie-break contract: shots are scanned in insertion order and enemies in
//! row-major order. A shot is credited to the first alive enemy it overlaps,
//! and an enemy can only be destroyed once per tick.

use super::state::{GameEvent, GameState};

/// Outcome of one collision pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Enemy indices destroyed, in the order they were hit
    pub destroyed: Vec<usize>,
    /// Enemy shots that struck the player
    pub player_hits: u32,
    /// An alive enemy reached the player's row
    pub contact: bool,
}

/// Resolve every collision for this tick and apply loss conditions
pub fn resolve(state: &mut GameState) -> CollisionReport {
    let destroyed = player_shots_vs_enemies(state);
    let player_hits = enemy_shots_vs_player(state);
    let contact = enemy_reached_player(state);
    if contact {
        state.enter_game_over();
    }

    CollisionReport {
        destroyed,
        player_hits,
        contact,
    }
}

/// Player shots against alive enemies. Returns destroyed enemy indices.
pub fn player_shots_vs_enemies(state: &mut GameState) -> Vec<usize> {
    let mut spent = vec![false; state.player_shots.len()];
    let mut destroyed = Vec::new();

    for (shot_idx, shot) in state.player_shots.iter().enumerate() {
        let target = state
            .enemies
            .iter()
            .position(|e| e.alive && shot.rect.overlaps(&e.rect));
        if let Some(enemy_idx) = target {
            state.enemies[enemy_idx].alive = false;
            spent[shot_idx] = true;
            destroyed.push(enemy_idx);
        }
    }

    if destroyed.is_empty() {
        return destroyed;
    }

    let mut idx = 0;
    state.player_shots.retain(|_| {
        let keep = !spent[idx];
        idx += 1;
        keep
    });

    for &index in &destroyed {
        state.score += state.tuning.score_per_kill;
        state.events.push(GameEvent::EnemyDestroyed { index });
        state.events.push(GameEvent::ScoreChanged(state.score));
        log::debug!("Enemy {index} destroyed, score {}", state.score);
    }

    destroyed
}

/// Enemy shots against the player. Returns the number of hits taken.
pub fn enemy_shots_vs_player(state: &mut GameState) -> u32 {
    let player = state.player.rect;
    let before = state.enemy_shots.len();
    state.enemy_shots.retain(|shot| !shot.rect.overlaps(&player));
    let hits = (before - state.enemy_shots.len()) as u32;

    for _ in 0..hits {
        state.lives = state.lives.saturating_sub(1);
        state.events.push(GameEvent::PlayerHit);
        state.events.push(GameEvent::LivesChanged(state.lives));
        log::debug!("Player hit, {} lives left", state.lives);
        if state.lives == 0 {
            state.enter_game_over();
        }
    }

    hits
}

/// True when any alive enemy's bottom edge reached the player's top edge
pub fn enemy_reached_player(state: &GameState) -> bool {
    let line = state.player.rect.top();
    state
        .enemies
        .iter()
        .any(|e| e.alive && e.rect.bottom() >= line)
}

/// Award the stage bonus and schedule the next stage once every enemy is
/// dead. Returns true on the tick the stage is cleared.
pub fn check_stage_clear(state: &mut GameState) -> bool {
    if !state.is_running() || state.stage_reset_ms.is_some() {
        return false;
    }
    if state.enemies.iter().any(|e| e.alive) {
        return false;
    }

    let bonus = state.tuning.stage_clear_bonus;
    state.score += bonus;
    state.stage_reset_ms = Some(state.tuning.stage_reset_delay_ms);
    state.events.push(GameEvent::ScoreChanged(state.score));
    state.events.push(GameEvent::StageCleared {
        stage: state.stage,
        bonus,
    });
    log::info!("Stage {} cleared, bonus {} (score {})", state.stage, bonus, state.score);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::{GamePhase, Projectile};
    use crate::tuning::Tuning;

    fn state() -> GameState {
        let mut s = GameState::new(21, Tuning::default());
        s.drain_events();
        s
    }

    fn shot_at(x: f32, y: f32) -> Projectile {
        Projectile {
            rect: Rect::new(x, y, 4.0, 10.0),
            speed: 8.0,
        }
    }

    #[test]
    fn test_shot_kills_enemy() {
        let mut s = state();
        // Enemy 9 occupies x 95..120, y 85..105
        s.player_shots.push(shot_at(100.0, 100.0));

        let report = resolve(&mut s);

        assert_eq!(report.destroyed, vec![9]);
        assert!(!s.enemies[9].alive);
        assert!(s.player_shots.is_empty());
        assert_eq!(s.score, 10);
        assert_eq!(
            s.drain_events(),
            vec![
                GameEvent::EnemyDestroyed { index: 9 },
                GameEvent::ScoreChanged(10)
            ]
        );
    }

    #[test]
    fn test_dead_enemy_is_not_a_target() {
        let mut s = state();
        s.enemies[9].alive = false;
        s.player_shots.push(shot_at(100.0, 100.0));
        resolve(&mut s);
        assert_eq!(s.player_shots.len(), 1);
        assert_eq!(s.score, 0);
    }

    #[test]
    fn test_shot_overlapping_two_enemies_kills_first_only() {
        let mut s = state();
        // Stretch enemy 1 so it overlaps enemy 2's box
        s.enemies[1].rect.size.x = 60.0;
        s.player_shots.push(shot_at(145.0, 60.0));

        let report = resolve(&mut s);

        assert_eq!(report.destroyed, vec![1]);
        assert!(s.enemies[2].alive);
        assert_eq!(s.score, 10);
    }

    #[test]
    fn test_two_shots_one_enemy() {
        let mut s = state();
        s.player_shots.push(shot_at(100.0, 100.0));
        s.player_shots.push(shot_at(105.0, 98.0));

        let report = resolve(&mut s);

        // The second shot finds no alive enemy and keeps flying
        assert_eq!(report.destroyed, vec![9]);
        assert_eq!(s.player_shots.len(), 1);
        assert_eq!(s.player_shots[0].rect.pos.x, 105.0);
        assert_eq!(s.score, 10);
    }

    #[test]
    fn test_adjacent_shots_both_score() {
        let mut s = state();
        s.player_shots.push(shot_at(100.0, 100.0));
        s.player_shots.push(shot_at(300.0, 300.0));
        s.player_shots.push(shot_at(145.0, 100.0));

        let report = resolve(&mut s);

        assert_eq!(report.destroyed, vec![9, 10]);
        assert_eq!(s.player_shots.len(), 1);
        assert_eq!(s.player_shots[0].rect.pos.x, 300.0);
        assert_eq!(s.score, 20);
    }

    #[test]
    fn test_enemy_shot_hits_player() {
        let mut s = state();
        let p = s.player.rect;
        s.enemy_shots.push(Projectile {
            rect: Rect::new(p.pos.x + 5.0, p.pos.y - 4.0, 4.0, 8.0),
            speed: 1.8,
        });

        let report = resolve(&mut s);

        assert_eq!(report.player_hits, 1);
        assert!(s.enemy_shots.is_empty());
        assert_eq!(s.lives, 2);
        assert_eq!(s.phase, GamePhase::Running);
        assert_eq!(
            s.drain_events(),
            vec![GameEvent::PlayerHit, GameEvent::LivesChanged(2)]
        );
    }

    #[test]
    fn test_last_life_ends_game() {
        let mut s = state();
        s.lives = 1;
        s.score = 70;
        let p = s.player.rect;
        s.enemy_shots.push(Projectile {
            rect: Rect::new(p.pos.x, p.pos.y, 4.0, 8.0),
            speed: 1.8,
        });

        resolve(&mut s);

        assert_eq!(s.lives, 0);
        assert_eq!(s.phase, GamePhase::GameOver);
        assert!(
            s.drain_events()
                .contains(&GameEvent::GameOver { final_score: 70 })
        );
    }

    #[test]
    fn test_lives_never_underflow() {
        let mut s = state();
        s.lives = 1;
        let p = s.player.rect;
        for dx in [0.0, 8.0, 16.0] {
            s.enemy_shots.push(Projectile {
                rect: Rect::new(p.pos.x + dx, p.pos.y, 4.0, 8.0),
                speed: 1.8,
            });
        }

        let report = resolve(&mut s);

        assert_eq!(report.player_hits, 3);
        assert_eq!(s.lives, 0);
        let game_overs = s
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_enemy_contact_ends_game() {
        let mut s = state();
        // Bottom edge exactly on the player's top edge
        s.enemies[35].rect.pos.y = s.player.rect.top() - s.enemies[35].rect.size.y;

        let report = resolve(&mut s);

        assert!(report.contact);
        assert_eq!(s.phase, GamePhase::GameOver);
        assert_eq!(s.lives, 3);
    }

    #[test]
    fn test_dead_enemy_contact_ignored() {
        let mut s = state();
        s.enemies[35].rect.pos.y = 580.0;
        s.enemies[35].alive = false;
        assert!(!resolve(&mut s).contact);
        assert_eq!(s.phase, GamePhase::Running);
    }

    #[test]
    fn test_stage_clear_awards_bonus_once() {
        let mut s = state();
        s.score = 400;
        for enemy in &mut s.enemies {
            enemy.alive = false;
        }

        assert!(check_stage_clear(&mut s));
        assert!(!check_stage_clear(&mut s));

        assert_eq!(s.score, 500);
        assert_eq!(s.stage_reset_ms, Some(1000.0));
        assert_eq!(
            s.drain_events(),
            vec![
                GameEvent::ScoreChanged(500),
                GameEvent::StageCleared { stage: 1, bonus: 100 }
            ]
        );
    }

    #[test]
    fn test_no_stage_clear_with_survivors() {
        let mut s = state();
        for enemy in s.enemies.iter_mut().skip(1) {
            enemy.alive = false;
        }
        assert!(!check_stage_clear(&mut s));
        assert_eq!(s.stage_reset_ms, None);
    }

    #[test]
    fn test_no_stage_clear_after_game_over() {
        let mut s = state();
        for enemy in &mut s.enemies {
            enemy.alive = false;
        }
        s.enter_game_over();
        assert!(!check_stage_clear(&mut s));
        assert_eq!(s.score, 0);
    }
}
