//! One discrete simulation step
//!
//! Tick order: drain buffered intents, motion + bounds cull per collection,
//! enemy fire rolls, collision scan, combat resolution, wave director.
//! Terminal phases skip everything except restart handling.

use super::collision::{CollisionEvent, scan_collisions};
use super::state::{Entity, GamePhase, GameSession, Intent};
use crate::frontend::Frontend;

/// Advance the session by one tick.
///
/// Runs to completion with no blocking; collaborator calls are
/// fire-and-forget side effects.
pub fn tick(session: &mut GameSession, frontend: &mut dyn Frontend) {
    if session.phase != GamePhase::Playing {
        // Terminal: the simulation is frozen, only a restart gets through
        let intents: Vec<Intent> = session.pending_intents.drain(..).collect();
        if intents.contains(&Intent::Restart) {
            restart(session, frontend);
        }
        return;
    }

    session.time_ticks += 1;

    advance_and_cull(session, frontend);
    apply_intents(session, frontend);
    roll_enemy_fire(session, frontend);

    let events = scan_collisions(session);
    resolve(session, &events, frontend);

    // A mid-tick game over suppresses the wave director (and with it any
    // spawn that the clear condition would otherwise trigger)
    if session.phase == GamePhase::Playing {
        check_wave(session, frontend);
    }
}

/// Motion system: one discrete step per tick along x, then bounds cull for
/// the same collection before the next collection moves. Entities whose
/// bounds have fully left the playfield on their trailing edge are removed.
fn advance_and_cull(session: &mut GameSession, frontend: &mut dyn Frontend) {
    let width = session.tuning.playfield_width;
    for list in [
        &mut session.player_projectiles,
        &mut session.enemy_projectiles,
        &mut session.enemies,
        &mut session.pickups,
    ] {
        for entity in list.iter_mut() {
            entity.pos.x += entity.speed;
            frontend.move_visual(entity.visual, entity.pos.x, entity.pos.y);
        }
        list.retain(|entity| {
            let bounds = entity.bounds();
            let exited = if entity.speed >= 0.0 {
                bounds.min().x > width
            } else {
                bounds.max().x < 0.0
            };
            if exited {
                frontend.destroy_visual(entity.visual);
                log::debug!("{:?} {} left the playfield", entity.kind, entity.id);
            }
            !exited
        });
    }
}

/// Apply the intents buffered since the last tick, in arrival order
fn apply_intents(session: &mut GameSession, frontend: &mut dyn Frontend) {
    let height = session.tuning.playfield_height;
    let step = session.player_speed;
    let intents: Vec<Intent> = session.pending_intents.drain(..).collect();
    for intent in intents {
        match intent {
            Intent::MoveUp => move_player(session, -step, height, frontend),
            Intent::MoveDown => move_player(session, step, height, frontend),
            Intent::Fire => {
                session.spawn_player_projectile(frontend);
                frontend.player_fired();
            }
            // Only meaningful from a terminal phase
            Intent::Restart => {}
        }
    }
}

fn move_player(session: &mut GameSession, dy: f32, height: f32, frontend: &mut dyn Frontend) {
    session.player.pos.y = (session.player.pos.y + dy).clamp(0.0, height);
    frontend.move_visual(
        session.player.visual,
        session.player.pos.x,
        session.player.pos.y,
    );
}

/// Each live enemy independently rolls its per-tick fire chance. Enemies
/// whose center already left the playfield hold their fire.
fn roll_enemy_fire(session: &mut GameSession, frontend: &mut dyn Frontend) {
    let width = session.tuning.playfield_width;
    let mut origins = Vec::new();
    for i in 0..session.enemies.len() {
        let pos = session.enemies[i].pos;
        if (0.0..=width).contains(&pos.x) && session.roll_fire_chance() {
            origins.push(pos);
        }
    }
    for pos in origins {
        session.spawn_enemy_projectile(pos, frontend);
    }
}

/// Combat resolution: consume this tick's collision events in order
fn resolve(session: &mut GameSession, events: &[CollisionEvent], frontend: &mut dyn Frontend) {
    for event in events {
        match *event {
            CollisionEvent::PlayerHitByShot { shot } => {
                remove_entity(&mut session.enemy_projectiles, shot, frontend);
                lose_life(session, frontend);
            }
            CollisionEvent::PlayerRammed { enemy } => {
                remove_entity(&mut session.enemies, enemy, frontend);
                lose_life(session, frontend);
            }
            CollisionEvent::ShotsCancelled { shot, enemy_shot } => {
                remove_entity(&mut session.player_projectiles, shot, frontend);
                remove_entity(&mut session.enemy_projectiles, enemy_shot, frontend);
            }
            CollisionEvent::EnemyDestroyed { shot, enemy } => {
                remove_entity(&mut session.player_projectiles, shot, frontend);
                remove_entity(&mut session.enemies, enemy, frontend);
            }
            CollisionEvent::PickupCollected { pickup } => {
                remove_entity(&mut session.pickups, pickup, frontend);
                session.score += session.tuning.pickup_score;
                frontend.score_changed(session.score);
            }
        }
    }
}

fn remove_entity(list: &mut Vec<Entity>, id: u32, frontend: &mut dyn Frontend) {
    if let Some(index) = list.iter().position(|e| e.id == id) {
        let entity = list.remove(index);
        frontend.destroy_visual(entity.visual);
    } else {
        // The scan guarantees one event per entity; reaching this is a bug
        debug_assert!(false, "entity {id} resolved twice");
    }
}

fn lose_life(session: &mut GameSession, frontend: &mut dyn Frontend) {
    if session.phase != GamePhase::Playing {
        // Already over; the entity removal still stands
        return;
    }
    debug_assert!(session.lives > 0, "life lost after reaching zero");
    session.lives = session.lives.saturating_sub(1);
    frontend.lives_changed(session.lives);
    if session.lives == 0 {
        session.phase = GamePhase::GameOver;
        log::info!(
            "game over on wave {} with score {}",
            session.wave_number,
            session.score
        );
        frontend.phase_changed(GamePhase::GameOver);
    }
}

/// Wave director: when the wave is cleared (no enemies, or every survivor
/// already past the left edge), spawn the next wave or declare victory.
fn check_wave(session: &mut GameSession, frontend: &mut dyn Frontend) {
    let cleared =
        session.enemies.is_empty() || session.enemies.iter().all(|enemy| enemy.pos.x < 0.0);
    if !cleared {
        return;
    }

    if session.wave_number < session.tuning.max_waves {
        session.spawn_wave(frontend);
    } else {
        session.phase = GamePhase::Victory;
        log::info!(
            "all {} waves cleared, final score {}",
            session.wave_number,
            session.score
        );
        frontend.phase_changed(GamePhase::Victory);
    }
}

/// Atomically replace the session state: fresh counters, fresh RNG stream,
/// fresh start-of-session spawns. Entity ids keep counting up.
fn restart(session: &mut GameSession, frontend: &mut dyn Frontend) {
    use rand::SeedableRng;

    log::info!("restarting session (seed {})", session.seed);

    for list in [
        &mut session.player_projectiles,
        &mut session.enemy_projectiles,
        &mut session.enemies,
        &mut session.pickups,
    ] {
        for entity in list.drain(..) {
            frontend.destroy_visual(entity.visual);
        }
    }

    session.score = 0;
    session.lives = session.tuning.starting_lives;
    session.wave_number = 0;
    session.player_speed = session.tuning.player_speed;
    session.enemy_speed = session.tuning.enemy_speed;
    session.projectile_speed = session.tuning.projectile_speed;
    session.time_ticks = 0;
    session.rng = rand_pcg::Pcg32::seed_from_u64(session.seed);

    session.player.pos = glam::Vec2::new(crate::consts::PLAYER_START_X, crate::consts::PLAYER_START_Y);
    frontend.move_visual(
        session.player.visual,
        session.player.pos.x,
        session.player.pos.y,
    );

    session.phase = GamePhase::Playing;
    session.spawn_wave(frontend);
    session.spawn_pickups(frontend);

    frontend.score_changed(session.score);
    frontend.lives_changed(session.lives);
    frontend.phase_changed(session.phase);
}
