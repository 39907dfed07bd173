//! Starlane headless demo
//!
//! Runs a scripted session against a logging frontend: a simple bot chases
//! the nearest enemy's altitude and fires on a short cadence. Useful for
//! watching the wave/lifecycle progression without a renderer.

use starlane::{
    AudioSink, GamePhase, GameSession, Intent, Presenter, Scene, VisualId, tick,
};

/// Frontend that mints handles and logs HUD updates
#[derive(Debug, Default)]
struct LogFrontend {
    next_handle: u64,
}

impl Scene for LogFrontend {
    fn spawn_visual(
        &mut self,
        kind: starlane::EntityKind,
        x: f32,
        y: f32,
        _rotation: f32,
    ) -> VisualId {
        self.next_handle += 1;
        log::debug!("scene: spawn {kind:?} at ({x:.0}, {y:.0})");
        VisualId(self.next_handle)
    }

    fn move_visual(&mut self, _handle: VisualId, _x: f32, _y: f32) {}

    fn destroy_visual(&mut self, handle: VisualId) {
        log::debug!("scene: destroy {handle:?}");
    }
}

impl Presenter for LogFrontend {
    fn score_changed(&mut self, score: u64) {
        log::info!("score: {score}");
    }

    fn lives_changed(&mut self, lives: u32) {
        log::info!("lives: {lives}");
    }

    fn phase_changed(&mut self, phase: GamePhase) {
        log::info!("phase: {phase:?}");
    }
}

impl AudioSink for LogFrontend {
    fn player_fired(&mut self) {
        log::trace!("audio: pew");
    }
}

/// Steer toward the nearest enemy's altitude; fire every few ticks
fn bot_intents(session: &GameSession, tick_no: u64) -> Vec<Intent> {
    let mut intents = Vec::new();

    let target = session
        .enemies
        .iter()
        .min_by(|a, b| {
            a.pos
                .x
                .partial_cmp(&b.pos.x)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|enemy| enemy.pos.y);

    if let Some(target_y) = target {
        let dy = target_y - session.player.pos.y;
        if dy.abs() > session.player_speed {
            intents.push(if dy < 0.0 {
                Intent::MoveUp
            } else {
                Intent::MoveDown
            });
        }
    }

    if tick_no % 4 == 0 {
        intents.push(Intent::Fire);
    }

    intents
}

fn main() {
    env_logger::init();

    let seed: u64 = rand::random();
    log::info!("starting demo session with seed {seed}");

    let mut frontend = LogFrontend::default();
    let mut session = GameSession::new(seed, &mut frontend);

    const MAX_TICKS: u64 = 60 * 60 * 5; // five minutes at 60 fps
    for tick_no in 0..MAX_TICKS {
        for intent in bot_intents(&session, tick_no) {
            session.queue_intent(intent);
        }
        tick(&mut session, &mut frontend);

        if session.phase != GamePhase::Playing {
            break;
        }
    }

    println!(
        "seed {seed}: {:?} after {} ticks, wave {}, score {}, {} lives left",
        session.phase, session.time_ticks, session.wave_number, session.score, session.lives
    );
}
