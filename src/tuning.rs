//! Data-driven game balance
//!
//! A `Tuning` value is fixed for the lifetime of a session. Defaults mirror
//! `crate::consts`; any subset can be overridden from JSON. The two gameplay
//! variants (staggered multi-monster roster vs. a single one-shot monster)
//! differ only in tuning, not in code.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A roster template for one monster identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterSpec {
    /// Identity used by the life-indicator UI
    pub name: String,
    /// Fallback fill color (RGBA)
    pub color: [f32; 4],
    pub size: Vec2,
}

impl MonsterSpec {
    pub fn new(name: &str, color: [f32; 4]) -> Self {
        Self {
            name: name.to_string(),
            color,
            size: Vec2::new(MONSTER_WIDTH, MONSTER_HEIGHT),
        }
    }
}

/// Game balance knobs consulted by the simulation tick
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Reserved top strip height; 0 disables the strip
    pub top_margin: f32,
    pub player_speed: f32,
    pub cannonball_speed: f32,
    /// Hits a monster absorbs before it is destroyed for good
    pub max_life: u32,
    /// Cooldown before a hit monster returns; `None` makes every hit terminal
    pub respawn_delay_ticks: Option<u32>,
    /// Interval between staggered roster spawns
    pub spawn_interval_ticks: u32,
    /// Monster templates, spawned in order, each exactly once
    pub roster: Vec<MonsterSpec>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            top_margin: HUD_STRIP_HEIGHT,
            player_speed: PLAYER_SPEED,
            cannonball_speed: CANNONBALL_SPEED,
            max_life: MONSTER_MAX_LIFE,
            respawn_delay_ticks: Some(RESPAWN_DELAY_TICKS),
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            roster: vec![
                MonsterSpec::new("green-monster", [0.13, 0.55, 0.13, 1.0]),
                MonsterSpec::new("purple-monster", [0.55, 0.13, 0.55, 1.0]),
                MonsterSpec::new("orange-monster", [0.9, 0.45, 0.1, 1.0]),
                MonsterSpec::new("blue-monster", [0.1, 0.3, 0.8, 1.0]),
            ],
        }
    }
}

impl Tuning {
    /// The simplest difficulty: one monster, no reserved strip, and the
    /// first hit destroys it permanently (no respawn, ever).
    pub fn single_monster() -> Self {
        Self {
            top_margin: 0.0,
            max_life: 1,
            respawn_delay_ticks: None,
            roster: vec![MonsterSpec::new("green-monster", [0.13, 0.55, 0.13, 1.0])],
            ..Self::default()
        }
    }

    /// Parse a tuning override from JSON; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
