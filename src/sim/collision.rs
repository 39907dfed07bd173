//! Pairwise collision scan over the entity collections
//!
//! Direct array scans, no spatial index: the collections stay small enough
//! that brute force beats any indexing scheme here. The scan produces an
//! ordered event list; resolution happens separately in the tick.

use std::collections::HashSet;

use super::state::GameSession;

/// A collision detected during a tick's scan, in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionEvent {
    /// An enemy shot reached the player
    PlayerHitByShot { shot: u32 },
    /// An enemy hull rammed the player
    PlayerRammed { enemy: u32 },
    /// A player shot and an enemy shot cancelled each other out
    ShotsCancelled { shot: u32, enemy_shot: u32 },
    /// A player shot destroyed an enemy
    EnemyDestroyed { shot: u32, enemy: u32 },
    /// The player flew over a pickup
    PickupCollected { pickup: u32 },
}

/// Scan all collection pairs against current bounds and return this tick's
/// collision events.
///
/// Check order: player vs enemy shots, player vs enemies, player shots vs
/// enemy shots, player shots vs enemies, player vs pickups. An entity
/// consumed by an earlier event is excluded from every later check in the
/// same scan, so nothing resolves twice.
pub fn scan_collisions(session: &GameSession) -> Vec<CollisionEvent> {
    let mut events = Vec::new();
    // Entity ids are session-unique, so one consumed set covers every kind
    let mut consumed: HashSet<u32> = HashSet::new();
    let player = session.player.bounds();

    for shot in &session.enemy_projectiles {
        if player.intersects(&shot.bounds()) {
            consumed.insert(shot.id);
            events.push(CollisionEvent::PlayerHitByShot { shot: shot.id });
        }
    }

    for enemy in &session.enemies {
        if player.intersects(&enemy.bounds()) {
            consumed.insert(enemy.id);
            events.push(CollisionEvent::PlayerRammed { enemy: enemy.id });
        }
    }

    for shot in &session.player_projectiles {
        let bounds = shot.bounds();
        for enemy_shot in &session.enemy_projectiles {
            if consumed.contains(&enemy_shot.id) {
                continue;
            }
            if bounds.intersects(&enemy_shot.bounds()) {
                consumed.insert(shot.id);
                consumed.insert(enemy_shot.id);
                events.push(CollisionEvent::ShotsCancelled {
                    shot: shot.id,
                    enemy_shot: enemy_shot.id,
                });
                break;
            }
        }
    }

    for shot in &session.player_projectiles {
        if consumed.contains(&shot.id) {
            continue;
        }
        let bounds = shot.bounds();
        for enemy in &session.enemies {
            if consumed.contains(&enemy.id) {
                continue;
            }
            if bounds.intersects(&enemy.bounds()) {
                consumed.insert(shot.id);
                consumed.insert(enemy.id);
                events.push(CollisionEvent::EnemyDestroyed {
                    shot: shot.id,
                    enemy: enemy.id,
                });
                break;
            }
        }
    }

    for pickup in &session.pickups {
        if player.intersects(&pickup.bounds()) {
            consumed.insert(pickup.id);
            events.push(CollisionEvent::PickupCollected { pickup: pickup.id });
        }
    }

    events
}
