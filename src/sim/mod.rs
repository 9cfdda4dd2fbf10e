//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (row-major enemies, insertion-ordered shots)
//! - No rendering or platform dependencies
//! - Wall-clock time enters only through `tick`'s `elapsed_ms`

pub mod autopilot;
pub mod collision;
pub mod fire;
pub mod invariants;
pub mod movement;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::CollisionReport;
pub use invariants::InvariantViolation;
pub use rect::Rect;
pub use state::{
    Enemy, EnemyClass, GameEvent, GamePhase, GameState, Player, Projectile, SweepDirection,
};
pub use tick::{Command, MoveDirection, TickInput, apply_command, tick};
