//! Session state and core simulation types
//!
//! Everything that matters for determinism lives here: the collections,
//! counters, mutable speeds and the seeded RNG.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::frontend::{Frontend, VisualId};
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives ran out; terminal until restart
    GameOver,
    /// All waves cleared; terminal until restart
    Victory,
}

/// Enemy hull variants; wave spawns alternate between them by index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyVariant {
    Raider,
    Saucer,
}

/// What a spawned entity is. Fixed for the entity's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    PlayerShip,
    PlayerProjectile,
    Enemy(EnemyVariant),
    EnemyProjectile,
    Pickup,
}

impl EntityKind {
    /// Collision box (width, height), untransformed
    pub fn size(&self) -> Vec2 {
        let (w, h) = match self {
            EntityKind::PlayerShip => PLAYER_SIZE,
            EntityKind::PlayerProjectile => PLAYER_PROJECTILE_SIZE,
            EntityKind::Enemy(EnemyVariant::Raider) => ENEMY_RAIDER_SIZE,
            EntityKind::Enemy(EnemyVariant::Saucer) => ENEMY_SAUCER_SIZE,
            EntityKind::EnemyProjectile => ENEMY_PROJECTILE_SIZE,
            EntityKind::Pickup => PICKUP_SIZE,
        };
        Vec2::new(w, h)
    }

    /// Sprite rotation (radians) handed to the scene at spawn time.
    /// Rightward movers face right, leftward movers face left.
    pub fn rotation(&self) -> f32 {
        use std::f32::consts::FRAC_PI_2;
        match self {
            EntityKind::PlayerShip | EntityKind::PlayerProjectile => FRAC_PI_2,
            EntityKind::Enemy(_) | EntityKind::EnemyProjectile => -FRAC_PI_2,
            EntityKind::Pickup => 0.0,
        }
    }
}

/// A moving actor in the playfield
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Vec2,
    /// Per-tick x displacement, signed by travel direction
    pub speed: f32,
    /// Handle of the visual the scene spawned for this entity
    pub visual: VisualId,
}

impl Entity {
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.pos, self.kind.size())
    }
}

/// The player ship. Moves on the y axis only, driven by input intents
/// rather than the motion system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub visual: VisualId,
}

impl Player {
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.pos, EntityKind::PlayerShip.size())
    }
}

/// A discrete, edge-triggered input event. Buffered on arrival and applied
/// at the next tick boundary in arrival order, never mid-tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveUp,
    MoveDown,
    Fire,
    Restart,
}

/// One session's worth of game state: the aggregate root every system
/// operates on. No globals; systems receive this by reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    /// Current wave number; 0 only before the first spawn
    pub wave_number: u32,
    /// Live speeds; reset to the tuning values on restart
    pub player_speed: f32,
    pub enemy_speed: f32,
    pub projectile_speed: f32,
    pub player: Player,
    pub player_projectiles: Vec<Entity>,
    pub enemy_projectiles: Vec<Entity>,
    pub enemies: Vec<Entity>,
    pub pickups: Vec<Entity>,
    /// Simulation tick counter
    pub time_ticks: u64,
    #[serde(skip)]
    pub(crate) pending_intents: VecDeque<Intent>,
    next_id: u32,
}

impl GameSession {
    /// Create a session with default tuning and run the start-of-session
    /// spawn sequence (first wave plus pickups).
    pub fn new(seed: u64, frontend: &mut dyn Frontend) -> Self {
        Self::with_tuning(Tuning::default(), seed, frontend)
    }

    pub fn with_tuning(tuning: Tuning, seed: u64, frontend: &mut dyn Frontend) -> Self {
        let player_pos = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
        let player_visual = frontend.spawn_visual(
            EntityKind::PlayerShip,
            player_pos.x,
            player_pos.y,
            EntityKind::PlayerShip.rotation(),
        );

        let mut session = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            score: 0,
            lives: tuning.starting_lives,
            wave_number: 0,
            player_speed: tuning.player_speed,
            enemy_speed: tuning.enemy_speed,
            projectile_speed: tuning.projectile_speed,
            player: Player {
                pos: player_pos,
                visual: player_visual,
            },
            player_projectiles: Vec::new(),
            enemy_projectiles: Vec::new(),
            enemies: Vec::new(),
            pickups: Vec::new(),
            time_ticks: 0,
            pending_intents: VecDeque::new(),
            next_id: 1,
            tuning,
        };

        session.spawn_wave(frontend);
        session.spawn_pickups(frontend);

        // Let the HUD draw its initial values
        frontend.score_changed(session.score);
        frontend.lives_changed(session.lives);
        frontend.phase_changed(session.phase);

        session
    }

    /// Buffer an intent for the next tick. Safe to call from input handlers
    /// at any time relative to tick boundaries.
    pub fn queue_intent(&mut self, intent: Intent) {
        self.pending_intents.push_back(intent);
    }

    /// Allocate an entity ID. IDs are never reused within a session.
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn an entity of `kind` at `pos`, rejecting invalid positions.
    /// Returns the new entity's id, or `None` if the spawn was rejected.
    pub fn spawn_entity(
        &mut self,
        kind: EntityKind,
        pos: Vec2,
        speed: f32,
        frontend: &mut dyn Frontend,
    ) -> Option<u32> {
        if !self.valid_spawn_pos(pos) {
            log::warn!("rejected {kind:?} spawn at ({}, {})", pos.x, pos.y);
            return None;
        }

        let id = self.next_entity_id();
        let visual = frontend.spawn_visual(kind, pos.x, pos.y, kind.rotation());
        let entity = Entity {
            id,
            kind,
            pos,
            speed,
            visual,
        };
        match kind {
            EntityKind::PlayerProjectile => self.player_projectiles.push(entity),
            EntityKind::EnemyProjectile => self.enemy_projectiles.push(entity),
            EntityKind::Enemy(_) => self.enemies.push(entity),
            EntityKind::Pickup => self.pickups.push(entity),
            EntityKind::PlayerShip => {
                // The player is not a collection entity
                log::warn!("spawn_entity called with PlayerShip");
                frontend.destroy_visual(visual);
                return None;
            }
        }
        Some(id)
    }

    /// Spawn one player shot at the ship's position, moving rightward
    pub fn spawn_player_projectile(&mut self, frontend: &mut dyn Frontend) {
        let pos = self.player.pos;
        let speed = self.projectile_speed;
        self.spawn_entity(EntityKind::PlayerProjectile, pos, speed, frontend);
    }

    /// Spawn an enemy shot at `pos`, moving leftward at the fixed
    /// enemy-projectile speed
    pub fn spawn_enemy_projectile(&mut self, pos: Vec2, frontend: &mut dyn Frontend) {
        let speed = -self.tuning.enemy_projectile_speed;
        self.spawn_entity(EntityKind::EnemyProjectile, pos, speed, frontend);
    }

    /// Spawn the next wave: bump the wave number, place `base + wave_number`
    /// enemies in the right-hand third of the playfield, alternating hull
    /// variants, then speed up subsequent enemies.
    pub fn spawn_wave(&mut self, frontend: &mut dyn Frontend) {
        self.wave_number += 1;
        let count = self.tuning.wave_base_enemies + self.wave_number;
        let (width, height) = (self.tuning.playfield_width, self.tuning.playfield_height);

        for i in 0..count {
            let variant = if i % 2 == 0 {
                EnemyVariant::Raider
            } else {
                EnemyVariant::Saucer
            };
            let x = self.rng.random_range(width * 2.0 / 3.0..=width);
            let y = self.rng.random_range(0.0..=height);
            let speed = -self.enemy_speed;
            self.spawn_entity(EntityKind::Enemy(variant), Vec2::new(x, y), speed, frontend);
        }

        self.enemy_speed += self.tuning.enemy_speed_gain * self.wave_number as f32;
        log::info!(
            "wave {} spawned: {} enemies, enemy speed now {}",
            self.wave_number,
            count,
            self.enemy_speed
        );
    }

    /// Scatter the start-of-session pickups across the playfield
    pub fn spawn_pickups(&mut self, frontend: &mut dyn Frontend) {
        let (width, height) = (self.tuning.playfield_width, self.tuning.playfield_height);
        let drift = -self.projectile_speed * self.tuning.pickup_drift_factor;
        for _ in 0..self.tuning.starting_pickups {
            let x = self.rng.random_range(0.0..=width);
            let y = self.rng.random_range(0.0..=height);
            self.spawn_entity(EntityKind::Pickup, Vec2::new(x, y), drift, frontend);
        }
    }

    /// Per-tick Bernoulli roll for enemy fire
    pub(crate) fn roll_fire_chance(&mut self) -> bool {
        self.rng.random::<f32>() < self.tuning.enemy_fire_chance
    }

    fn valid_spawn_pos(&self, pos: Vec2) -> bool {
        pos.x.is_finite()
            && pos.y.is_finite()
            && (0.0..=self.tuning.playfield_width).contains(&pos.x)
            && (0.0..=self.tuning.playfield_height).contains(&pos.y)
    }
}
