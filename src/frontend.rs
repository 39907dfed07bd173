//! Collaborator seams around the simulation core
//!
//! The core pushes visuals, HUD updates and audio cues out through these
//! traits and never reads anything back. An embedder implements them over
//! its real renderer/mixer; the headless binary and the tests use
//! [`NullFrontend`].

use serde::{Deserialize, Serialize};

use crate::sim::{EntityKind, GamePhase};

/// Opaque handle to a visual spawned in the scene. Stable for the visual's
/// lifetime; meaningless to the core beyond identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualId(pub u64);

/// Renderer/scene collaborator
pub trait Scene {
    fn spawn_visual(&mut self, kind: EntityKind, x: f32, y: f32, rotation: f32) -> VisualId;
    fn move_visual(&mut self, handle: VisualId, x: f32, y: f32);
    fn destroy_visual(&mut self, handle: VisualId);
}

/// Presentation collaborator (HUD text, phase banners)
pub trait Presenter {
    fn score_changed(&mut self, score: u64);
    fn lives_changed(&mut self, lives: u32);
    fn phase_changed(&mut self, phase: GamePhase);
}

/// Audio collaborator; fire-and-forget
pub trait AudioSink {
    fn player_fired(&mut self);
}

/// Everything the core needs from the outside world, as one object
pub trait Frontend: Scene + Presenter + AudioSink {}

impl<T: Scene + Presenter + AudioSink> Frontend for T {}

/// A frontend that mints handles and discards everything else. Used by the
/// headless demo and throughout the tests.
#[derive(Debug, Default)]
pub struct NullFrontend {
    next_handle: u64,
}

impl Scene for NullFrontend {
    fn spawn_visual(&mut self, _kind: EntityKind, _x: f32, _y: f32, _rotation: f32) -> VisualId {
        self.next_handle += 1;
        VisualId(self.next_handle)
    }

    fn move_visual(&mut self, _handle: VisualId, _x: f32, _y: f32) {}

    fn destroy_visual(&mut self, _handle: VisualId) {}
}

impl Presenter for NullFrontend {
    fn score_changed(&mut self, _score: u64) {}
    fn lives_changed(&mut self, _lives: u32) {}
    fn phase_changed(&mut self, _phase: GamePhase) {}
}

impl AudioSink for NullFrontend {
    fn player_fired(&mut self) {}
}
