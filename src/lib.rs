//! Starlane - a single-screen horizontal wave shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, waves, session state)
//! - `frontend`: Collaborator seams for rendering, HUD and audio
//! - `tuning`: Data-driven game balance

pub mod frontend;
pub mod sim;
pub mod tuning;

pub use frontend::{AudioSink, Frontend, NullFrontend, Presenter, Scene, VisualId};
pub use sim::{
    CollisionEvent, EnemyVariant, Entity, EntityKind, GamePhase, GameSession, Intent, Player, Rect,
    scan_collisions, tick,
};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player ship start position
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 300.0;

    /// Initial speeds (pixels per tick); the live values on the session can
    /// drift from these during a run and snap back on restart
    pub const PLAYER_SPEED: f32 = 20.0;
    pub const ENEMY_SPEED: f32 = 3.0;
    pub const PROJECTILE_SPEED: f32 = 5.0;
    /// Enemy shots fly at a fixed speed, independent of `PROJECTILE_SPEED`
    pub const ENEMY_PROJECTILE_SPEED: f32 = 6.0;

    /// Added to the enemy speed on each wave spawn, scaled by wave number
    pub const ENEMY_SPEED_GAIN: f32 = 0.5;
    /// Pickups drift leftward at this fraction of the projectile speed
    pub const PICKUP_DRIFT_FACTOR: f32 = 0.5;

    /// Wave structure
    pub const MAX_WAVES: u32 = 3;
    pub const WAVE_BASE_ENEMIES: u32 = 5;

    /// Session start
    pub const STARTING_LIVES: u32 = 3;
    pub const STARTING_PICKUPS: u32 = 3;
    pub const PICKUP_SCORE: u64 = 10;

    /// Per-tick chance that a live enemy fires
    pub const ENEMY_FIRE_CHANCE: f32 = 0.01;

    /// Collision box sizes per entity kind (width, height), center-origin.
    /// Sprites are drawn rotated but collide with the unrotated box.
    pub const PLAYER_SIZE: (f32, f32) = (112.0, 75.0);
    pub const PLAYER_PROJECTILE_SIZE: (f32, f32) = (9.0, 37.0);
    pub const ENEMY_RAIDER_SIZE: (f32, f32) = (82.0, 84.0);
    pub const ENEMY_SAUCER_SIZE: (f32, f32) = (91.0, 91.0);
    pub const ENEMY_PROJECTILE_SIZE: (f32, f32) = (9.0, 37.0);
    pub const PICKUP_SIZE: (f32, f32) = (19.0, 30.0);
}
