//! Data-driven game balance
//!
//! Defaults mirror [`crate::consts`]; embedders can override any subset
//! from a JSON table. The session snapshots its tuning at creation, so a
//! table loaded mid-run only applies to the next session.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable gameplay parameters, fixed for a session's lifetime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub player_speed: f32,
    pub enemy_speed: f32,
    pub projectile_speed: f32,
    pub enemy_projectile_speed: f32,
    pub enemy_speed_gain: f32,
    pub pickup_drift_factor: f32,
    pub max_waves: u32,
    pub wave_base_enemies: u32,
    pub starting_lives: u32,
    pub starting_pickups: u32,
    pub pickup_score: u64,
    pub enemy_fire_chance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            player_speed: PLAYER_SPEED,
            enemy_speed: ENEMY_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            enemy_projectile_speed: ENEMY_PROJECTILE_SPEED,
            enemy_speed_gain: ENEMY_SPEED_GAIN,
            pickup_drift_factor: PICKUP_DRIFT_FACTOR,
            max_waves: MAX_WAVES,
            wave_base_enemies: WAVE_BASE_ENEMIES,
            starting_lives: STARTING_LIVES,
            starting_pickups: STARTING_PICKUPS,
            pickup_score: PICKUP_SCORE,
            enemy_fire_chance: ENEMY_FIRE_CHANCE,
        }
    }
}

impl Tuning {
    /// Parse a tuning table from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let tuning = Tuning::default();
        assert_eq!(tuning.playfield_width, 800.0);
        assert_eq!(tuning.playfield_height, 600.0);
        assert_eq!(tuning.max_waves, 3);
        assert_eq!(tuning.starting_lives, 3);
        assert_eq!(tuning.enemy_fire_chance, 0.01);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::default();
        let json = tuning.to_json().unwrap();
        let parsed = Tuning::from_json(&json).unwrap();
        assert_eq!(tuning, parsed);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{"max_waves": 5, "enemy_speed": 4.0}"#).unwrap();
        assert_eq!(tuning.max_waves, 5);
        assert_eq!(tuning.enemy_speed, 4.0);
        assert_eq!(tuning.player_speed, Tuning::default().player_speed);
    }
}
