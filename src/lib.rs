//! Cannonfish - a single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, game state)
//! - `renderer`: Scene composition and the rendering collaborator interface
//! - `platform`: Abstract input commands produced by the host environment
//! - `session`: Frame driver wiring simulation and collaborators together
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second (one tick per display frame)
    pub const TICK_HZ: u32 = 60;

    /// Arena dimensions before the first resize notification
    pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;
    /// Height of the top strip reserved for UI (hearts), closed to entities
    pub const HUD_STRIP_HEIGHT: f32 = 60.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 200.0;
    pub const PLAYER_HEIGHT: f32 = 100.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_START_X: f32 = 100.0;

    /// Monster defaults
    pub const MONSTER_WIDTH: f32 = 200.0;
    pub const MONSTER_HEIGHT: f32 = 100.0;
    pub const MONSTER_MAX_LIFE: u32 = 5;
    /// Per-axis spawn speed magnitude range: [min, max)
    pub const MONSTER_SPEED_MIN: f32 = 1.0;
    pub const MONSTER_SPEED_MAX: f32 = 3.0;
    /// Ticks a hit monster stays inert before respawning (5 s)
    pub const RESPAWN_DELAY_TICKS: u32 = 5 * TICK_HZ;
    /// Ticks between staggered roster spawns (5 s)
    pub const SPAWN_INTERVAL_TICKS: u32 = 5 * TICK_HZ;

    /// Cannonball defaults
    pub const CANNONBALL_SIZE: f32 = 20.0;
    pub const CANNONBALL_SPEED: f32 = 10.0;

    /// Explosion burst
    pub const BURST_COUNT: usize = 20;
    pub const PARTICLE_SIZE_MIN: f32 = 10.0;
    pub const PARTICLE_SIZE_MAX: f32 = 30.0;
    /// Particle velocity components are uniform in [-SPREAD, SPREAD)
    pub const PARTICLE_SPREAD: f32 = 5.0;
    /// Opacity lost per tick
    pub const PARTICLE_FADE: f32 = 0.03;
    /// Soft cap on live particles (oldest dropped first)
    pub const MAX_PARTICLES: usize = 1024;
}
