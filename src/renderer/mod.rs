//! Rendering module
//!
//! The game draws through [`DrawingSurface`], so the same frame can land on a
//! browser canvas, a test recorder or nowhere at all.

pub mod palette;
pub mod shapes;

pub use palette::Color;

use crate::sim::GameState;

/// Immediate-mode 2D target
pub trait DrawingSurface {
    /// Erase a region
    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32);
    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
}

/// Clear the field
pub fn clear(surface: &mut impl DrawingSurface, state: &GameState) {
    surface.clear(0.0, 0.0, state.tuning.field_width, state.tuning.field_height);
}

/// Draw every visible entity: ship, alive invaders, then shots
pub fn draw_frame(surface: &mut impl DrawingSurface, state: &GameState) {
    shapes::ship(surface, &state.player);
    for enemy in &state.enemies {
        shapes::invader(surface, enemy);
    }
    for shot in &state.player_shots {
        shapes::shot(surface, shot, palette::PLAYER_SHOT);
    }
    for shot in &state.enemy_shots {
        shapes::shot(surface, shot, palette::ENEMY_SHOT);
    }
}
