//! Session-level invariants checked over random intent scripts

use proptest::prelude::*;

use starlane::{GamePhase, GameSession, Intent, NullFrontend, Tuning, tick};

fn intent_strategy() -> impl Strategy<Value = Option<Intent>> {
    prop_oneof![
        3 => Just(None),
        2 => Just(Some(Intent::MoveUp)),
        2 => Just(Some(Intent::MoveDown)),
        2 => Just(Some(Intent::Fire)),
        1 => Just(Some(Intent::Restart)),
    ]
}

fn check_invariants(session: &GameSession) {
    let tuning = &session.tuning;

    assert!(session.lives <= tuning.starting_lives, "lives above cap");
    match session.phase {
        GamePhase::GameOver => assert_eq!(session.lives, 0),
        GamePhase::Playing | GamePhase::Victory => assert!(session.lives > 0),
    }

    assert_eq!(session.score % tuning.pickup_score, 0, "score not additive");
    assert!(session.wave_number >= 1 && session.wave_number <= tuning.max_waves);

    // Player stays clamped to the playfield's y extent
    assert!(session.player.pos.y >= 0.0);
    assert!(session.player.pos.y <= tuning.playfield_height);

    // Collections hold only their own kind
    assert!(session
        .player_projectiles
        .iter()
        .all(|e| e.kind == starlane::EntityKind::PlayerProjectile));
    assert!(session
        .enemy_projectiles
        .iter()
        .all(|e| e.kind == starlane::EntityKind::EnemyProjectile));
    assert!(session
        .enemies
        .iter()
        .all(|e| matches!(e.kind, starlane::EntityKind::Enemy(_))));
    assert!(session
        .pickups
        .iter()
        .all(|e| e.kind == starlane::EntityKind::Pickup));
}

proptest! {
    /// Lives only ever go down between restarts (P1), and every tick keeps
    /// the structural invariants
    #[test]
    fn lives_monotonic_without_restart(
        seed in any::<u64>(),
        script in proptest::collection::vec(intent_strategy(), 1..250),
    ) {
        let mut frontend = NullFrontend::default();
        let mut session = GameSession::new(seed, &mut frontend);
        let mut prev_lives = session.lives;

        for step in script {
            if let Some(intent) = step {
                if intent == Intent::Restart {
                    continue;
                }
                session.queue_intent(intent);
            }
            tick(&mut session, &mut frontend);

            prop_assert!(session.lives <= prev_lives, "lives increased mid-run");
            prev_lives = session.lives;
            check_invariants(&session);
        }
    }

    /// Score moves only in pickup-sized increments and never decreases
    /// between restarts (P3)
    #[test]
    fn score_changes_in_pickup_steps(
        seed in any::<u64>(),
        script in proptest::collection::vec(intent_strategy(), 1..250),
    ) {
        let mut frontend = NullFrontend::default();
        let mut session = GameSession::new(seed, &mut frontend);
        let pickup_score = session.tuning.pickup_score;
        let mut prev_score = session.score;
        let mut prev_phase = session.phase;

        for step in script {
            if let Some(intent) = step {
                session.queue_intent(intent);
            }
            tick(&mut session, &mut frontend);

            if prev_phase != GamePhase::Playing && session.phase == GamePhase::Playing {
                // Restart wiped the board
                prop_assert_eq!(session.score, 0);
                prop_assert_eq!(session.lives, session.tuning.starting_lives);
                prop_assert_eq!(session.wave_number, 1);
            } else {
                prop_assert!(session.score >= prev_score);
                prop_assert_eq!((session.score - prev_score) % pickup_score, 0);
            }
            prev_score = session.score;
            prev_phase = session.phase;
            check_invariants(&session);
        }
    }

    /// Restart from a terminal phase always yields the same fresh board (P5)
    #[test]
    fn restart_yields_fresh_board(
        seed in any::<u64>(),
        ticks in 1usize..200,
    ) {
        let mut frontend = NullFrontend::default();
        let tuning = Tuning {
            // Heavy fire pressure so some runs actually die
            enemy_fire_chance: 0.2,
            ..Tuning::default()
        };
        let mut session = GameSession::with_tuning(tuning, seed, &mut frontend);

        for i in 0..ticks {
            if i % 3 == 0 {
                session.queue_intent(Intent::Fire);
            }
            tick(&mut session, &mut frontend);
        }

        // Force a terminal phase if the run survived, then restart
        if session.phase == GamePhase::Playing {
            session.phase = GamePhase::Victory;
        }
        session.queue_intent(Intent::Restart);
        tick(&mut session, &mut frontend);

        prop_assert_eq!(session.phase, GamePhase::Playing);
        prop_assert_eq!(session.score, 0);
        prop_assert_eq!(session.lives, session.tuning.starting_lives);
        prop_assert_eq!(session.wave_number, 1);
        prop_assert_eq!(
            session.enemies.len() as u32,
            session.tuning.wave_base_enemies + 1
        );
        prop_assert_eq!(
            session.pickups.len() as u32,
            session.tuning.starting_pickups
        );
        prop_assert!(session.player_projectiles.is_empty());
        prop_assert!(session.enemy_projectiles.is_empty());
    }
}
