//! Game state and core simulation types
//!
//! Everything the tick mutates lives here. No rendering or platform
//! dependencies; the session owns one `GameState` for its whole lifetime.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::tuning::{MonsterSpec, Tuning};

/// The bounded play area, resized externally to match the viewport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Top strip reserved for UI; player and monsters may not enter it
    pub top_margin: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32, top_margin: f32) -> Self {
        Self {
            width,
            height,
            top_margin,
        }
    }

    /// Apply a viewport resize. Bounds change from the next tick on; entities
    /// already outside are pulled back by the regular clamp/bounce passes.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Smallest position an occupant may take (strip-aware)
    #[inline]
    pub fn min_pos(&self) -> Vec2 {
        Vec2::new(0.0, self.top_margin)
    }

    /// Largest position an occupant of `size` may take
    #[inline]
    pub fn max_pos(&self, size: Vec2) -> Vec2 {
        Vec2::new(self.width - size.x, self.height - size.y)
    }
}

/// The player's shooter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Scalar speed applied per directional axis
    pub speed: f32,
    /// Velocity set from input intent, applied each tick
    pub vel: Vec2,
}

impl Player {
    /// Point new cannonballs originate from: right edge, vertical middle
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.rect.right(), self.rect.pos.y + self.rect.size.y / 2.0)
    }
}

/// Monster lifecycle - active on screen, waiting out a respawn, or gone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterState {
    /// Bouncing around the arena, hittable
    Active,
    /// Hit but not dead: inert and invisible until the countdown runs out
    Cooldown { ticks_left: u32 },
    /// Out of life, never comes back
    Destroyed,
}

/// A bouncing target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub id: u32,
    /// Identity shown by the life-indicator UI
    pub name: String,
    /// Fallback fill color (RGBA)
    pub color: [f32; 4],
    pub rect: Rect,
    pub vel: Vec2,
    /// Cumulative hits taken, never exceeds `max_life`
    pub hit_count: u32,
    pub max_life: u32,
    pub state: MonsterState,
}

impl Monster {
    pub fn from_spec(id: u32, spec: &MonsterSpec, pos: Vec2, vel: Vec2, max_life: u32) -> Self {
        Self {
            id,
            name: spec.name.clone(),
            color: spec.color,
            rect: Rect {
                pos,
                size: spec.size,
            },
            vel,
            hit_count: 0,
            max_life,
            state: MonsterState::Active,
        }
    }

    /// Hittable and visible
    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == MonsterState::Active
    }

    /// Register one projectile hit. Damage is cumulative across respawns;
    /// reaching `max_life` is terminal. `respawn_delay` of `None` makes any
    /// hit terminal (single-monster variant).
    pub fn take_hit(&mut self, respawn_delay: Option<u32>) {
        debug_assert!(self.is_active(), "inert monsters cannot be hit");
        self.hit_count = (self.hit_count + 1).min(self.max_life);
        self.state = if self.hit_count >= self.max_life {
            MonsterState::Destroyed
        } else {
            match respawn_delay {
                Some(ticks) => MonsterState::Cooldown { ticks_left: ticks },
                None => MonsterState::Destroyed,
            }
        };
    }
}

/// A projectile moving at constant rightward speed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cannonball {
    pub rect: Rect,
    pub speed: f32,
}

impl Cannonball {
    /// Spawn at the player's muzzle point
    pub fn fired_from(player: &Player, speed: f32) -> Self {
        let m = player.muzzle();
        Self {
            rect: Rect::new(m.x, m.y, CANNONBALL_SIZE, CANNONBALL_SIZE),
            speed,
        }
    }
}

/// A short-lived explosion fragment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// 1.0 at spawn, faded linearly; pruned at <= 0
    pub opacity: f32,
}

/// Simulation notifications consumed by the frame driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A roster monster entered the arena (hit count 0)
    MonsterSpawned { id: u32 },
    /// A monster took a hit; carries the updated cumulative count
    MonsterHit { id: u32, hit_count: u32 },
    /// A monster ran out of life for good
    MonsterDestroyed { id: u32 },
    /// A cooldown elapsed and the monster is hittable again
    MonsterRespawned { id: u32 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub player: Player,
    /// Insertion-ordered; monsters are never removed, only deactivated
    pub monsters: Vec<Monster>,
    pub cannonballs: Vec<Cannonball>,
    pub particles: Vec<Particle>,
    /// Ticks until the next roster spawn; `None` once the roster is exhausted
    pub spawn_timer: Option<u32>,
    /// Next roster template to instantiate
    pub roster_cursor: usize,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Game balance the tick consults
    pub tuning: Tuning,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a session-fresh state. The first roster monster spawns on the
    /// first tick (`spawn_timer` starts at zero); the rest are staggered.
    pub fn new(tuning: Tuning) -> Self {
        let arena = Arena::new(
            DEFAULT_ARENA_WIDTH,
            DEFAULT_ARENA_HEIGHT,
            tuning.top_margin,
        );
        let player = Player {
            rect: Rect::new(
                PLAYER_START_X,
                arena.height / 4.0,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            speed: tuning.player_speed,
            vel: Vec2::ZERO,
        };
        let spawn_timer = if tuning.roster.is_empty() {
            None
        } else {
            Some(0)
        };

        Self {
            arena,
            player,
            monsters: Vec::new(),
            cannonballs: Vec::new(),
            particles: Vec::new(),
            spawn_timer,
            roster_cursor: 0,
            time_ticks: 0,
            tuning,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Look up a monster by ID
    pub fn monster(&self, id: u32) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id == id)
    }
}
