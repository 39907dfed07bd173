//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per tick, no delta-time scaling
//! - Seeded RNG only
//! - Stable iteration order (collection order, earliest index first)
//! - No rendering or platform dependencies beyond the frontend traits

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{CollisionEvent, scan_collisions};
pub use rect::Rect;
pub use state::{EnemyVariant, Entity, EntityKind, GamePhase, GameSession, Intent, Player};
pub use tick::tick;
