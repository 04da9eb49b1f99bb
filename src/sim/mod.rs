//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame
//! - Injected RNG only
//! - Stable iteration order (insertion order of the entity lists)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{clamp_position, first_hit};
pub use rect::Rect;
pub use state::{
    Arena, Cannonball, GameEvent, GameState, Monster, MonsterState, Particle, Player,
};
pub use tick::{TickInput, spawn_explosion, tick};
