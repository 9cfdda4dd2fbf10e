//! Entity sprites built from filled rectangles

use super::DrawingSurface;
use super::palette::{self, Color};
use crate::sim::{Enemy, Player, Projectile, Rect};

fn fill(surface: &mut impl DrawingSurface, rect: &Rect, color: Color) {
    surface.fill_rect(rect.pos.x, rect.pos.y, rect.size.x, rect.size.y, color);
}

/// Ship body plus a small nose on top
pub fn ship(surface: &mut impl DrawingSurface, player: &Player) {
    let r = &player.rect;
    fill(surface, r, palette::PLAYER);
    surface.fill_rect(r.pos.x + 10.0, r.pos.y - 5.0, 10.0, 5.0, palette::PLAYER);
}

/// Invader body with two eyes. Dead invaders are not drawn.
pub fn invader(surface: &mut impl DrawingSurface, enemy: &Enemy) {
    if !enemy.alive {
        return;
    }
    let r = &enemy.rect;
    fill(surface, r, palette::enemy_color(enemy.class));
    surface.fill_rect(r.pos.x + 5.0, r.pos.y + 5.0, 3.0, 3.0, palette::ENEMY_EYES);
    surface.fill_rect(r.pos.x + 17.0, r.pos.y + 5.0, 3.0, 3.0, palette::ENEMY_EYES);
}

pub fn shot(surface: &mut impl DrawingSurface, projectile: &Projectile, color: Color) {
    fill(surface, &projectile.rect, color);
}
