//! Colors

use std::fmt;

use crate::sim::EnemyClass;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);
    pub const GREEN: Color = Color(0x00ff00);
    pub const RED: Color = Color(0xff0000);
    pub const MAGENTA: Color = Color(0xff00ff);
    pub const YELLOW: Color = Color(0xffff00);
    pub const CYAN: Color = Color(0x00ffff);

    /// CSS hex notation, e.g. `#ff00ff`
    pub fn css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0xff_ffff)
    }
}

pub const PLAYER: Color = Color::GREEN;
pub const PLAYER_SHOT: Color = Color::WHITE;
pub const ENEMY_SHOT: Color = Color::RED;
pub const ENEMY_EYES: Color = Color::WHITE;

/// Body color for an enemy class
pub fn enemy_color(class: EnemyClass) -> Color {
    match class {
        EnemyClass::Fast => Color::MAGENTA,
        EnemyClass::Red => Color::RED,
        EnemyClass::Yellow => Color::YELLOW,
        EnemyClass::Cyan => Color::CYAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css() {
        assert_eq!(Color::MAGENTA.css(), "#ff00ff");
        assert_eq!(Color::GREEN.css(), "#00ff00");
        assert_eq!(Color(0x0a0b0c).css(), "#0a0b0c");
    }
}
