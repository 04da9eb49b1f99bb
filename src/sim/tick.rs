//! Fixed timestep simulation tick
//!
//! One tick = one display frame. The driver renders first, then calls
//! `tick`, so every frame shows the state the previous tick produced.
//! Update order within a tick is fixed: player, monsters, cannonballs
//! (with impact resolution), particles, spawner.

use glam::Vec2;
use rand::Rng;

use super::collision::{clamp_position, first_hit};
use super::state::{Cannonball, GameEvent, GameState, Monster, MonsterState, Particle};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Directional intent per axis; components are -1.0, 0.0 or +1.0
    pub move_dir: Vec2,
    /// Absolute pointer position; the player centers on it (one-shot)
    pub pointer: Option<Vec2>,
    /// Fire a cannonball from the muzzle (one-shot)
    pub fire: bool,
}

/// Advance the game state by one tick. Returned events are the driver's to
/// route (life-indicator updates, logging); the simulation never calls out.
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl Rng) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    update_player(state, input);
    update_monsters(state, &mut events);
    update_cannonballs(state, rng, &mut events);

    // Fire after the projectile pass: a new ball is first advanced (and can
    // first hit) on the tick after it leaves the muzzle.
    if input.fire {
        let ball = Cannonball::fired_from(&state.player, state.tuning.cannonball_speed);
        state.cannonballs.push(ball);
    }

    update_particles(state);
    run_spawner(state, rng, &mut events);

    events
}

/// Integrate player velocity (or follow the pointer) and clamp into bounds
fn update_player(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;
    if let Some(pointer) = input.pointer {
        player.rect.pos = pointer - player.rect.size / 2.0;
    } else {
        player.vel = input.move_dir * player.speed;
        player.rect.pos += player.vel;
    }

    let min = state.arena.min_pos();
    let max = state.arena.max_pos(player.rect.size);
    player.rect.pos = clamp_position(player.rect.pos, min, max);
}

/// Bounce active monsters off the arena walls; count down cooldowns
fn update_monsters(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let arena = &state.arena;
    for monster in &mut state.monsters {
        match monster.state {
            MonsterState::Active => {
                monster.rect.pos += monster.vel;

                // Reflect each axis independently (both can fire in a corner).
                // Position is left where it landed; the overshoot corrects
                // itself over the following ticks.
                let min = arena.min_pos();
                if monster.rect.pos.x < min.x || monster.rect.right() > arena.width {
                    monster.vel.x = -monster.vel.x;
                }
                if monster.rect.pos.y < min.y || monster.rect.bottom() > arena.height {
                    monster.vel.y = -monster.vel.y;
                }
            }
            MonsterState::Cooldown { ticks_left } => {
                let left = ticks_left.saturating_sub(1);
                if left == 0 {
                    monster.state = MonsterState::Active;
                    log::debug!(
                        "{} back in the arena at {}/{} hits",
                        monster.name,
                        monster.hit_count,
                        monster.max_life
                    );
                    events.push(GameEvent::MonsterRespawned { id: monster.id });
                } else {
                    monster.state = MonsterState::Cooldown { ticks_left: left };
                }
            }
            MonsterState::Destroyed => {}
        }
    }
}

/// Advance cannonballs, resolve impacts, cull balls past the right bound
fn update_cannonballs(state: &mut GameState, rng: &mut impl Rng, events: &mut Vec<GameEvent>) {
    // Burst spawns are deferred so the particle list is not touched while
    // the cannonball list is being retained.
    let mut bursts: Vec<Vec2> = Vec::new();

    let GameState {
        arena,
        monsters,
        cannonballs,
        tuning,
        ..
    } = state;
    let respawn_delay = tuning.respawn_delay_ticks;

    cannonballs.retain_mut(|ball| {
        ball.rect.pos.x += ball.speed;

        // First active monster in stored order takes the hit; the ball is
        // consumed and scans no further.
        if let Some(monster) = first_hit(&ball.rect, monsters) {
            bursts.push(monster.rect.center());
            monster.take_hit(respawn_delay);
            events.push(GameEvent::MonsterHit {
                id: monster.id,
                hit_count: monster.hit_count,
            });
            if monster.state == MonsterState::Destroyed {
                log::info!("{} destroyed for good", monster.name);
                events.push(GameEvent::MonsterDestroyed { id: monster.id });
            }
            return false;
        }

        // Cull once past the right bound
        ball.rect.pos.x <= arena.width
    });

    for center in bursts {
        spawn_explosion(&mut state.particles, center, rng);
    }
}

/// Append a burst of explosion fragments centered on an impact point
pub fn spawn_explosion(particles: &mut Vec<Particle>, center: Vec2, rng: &mut impl Rng) {
    for _ in 0..BURST_COUNT {
        if particles.len() >= MAX_PARTICLES {
            particles.remove(0);
        }
        particles.push(Particle {
            pos: center,
            vel: Vec2::new(
                rng.random_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
                rng.random_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
            ),
            size: rng.random_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
            opacity: 1.0,
        });
    }
}

/// Drift fragments and fade them out; prune the fully faded
fn update_particles(state: &mut GameState) {
    for particle in &mut state.particles {
        particle.pos += particle.vel;
        particle.opacity -= PARTICLE_FADE;
    }
    state.particles.retain(|p| p.opacity > 0.0);
}

/// Staggered roster spawner: one monster per interval, each template once
fn run_spawner(state: &mut GameState, rng: &mut impl Rng, events: &mut Vec<GameEvent>) {
    let Some(ticks_left) = state.spawn_timer else {
        return;
    };
    let ticks_left = ticks_left.saturating_sub(1);
    if ticks_left > 0 {
        state.spawn_timer = Some(ticks_left);
        return;
    }

    let spec = state.tuning.roster[state.roster_cursor].clone();
    let id = state.next_entity_id();

    // Uniform position below the reserved strip. Degenerate arenas (smaller
    // than the monster) still need a non-empty sampling range.
    let min = state.arena.min_pos();
    let max = state.arena.max_pos(spec.size);
    let pos = Vec2::new(
        rng.random_range(min.x..max.x.max(min.x + 1.0)),
        rng.random_range(min.y..max.y.max(min.y + 1.0)),
    );
    let vel = Vec2::new(random_axis_speed(rng), random_axis_speed(rng));

    log::info!(
        "{} enters the arena ({} of {})",
        spec.name,
        state.roster_cursor + 1,
        state.tuning.roster.len()
    );
    state
        .monsters
        .push(Monster::from_spec(id, &spec, pos, vel, state.tuning.max_life));
    events.push(GameEvent::MonsterSpawned { id });

    state.roster_cursor += 1;
    state.spawn_timer = if state.roster_cursor < state.tuning.roster.len() {
        Some(state.tuning.spawn_interval_ticks)
    } else {
        // Roster exhausted; the spawner never fires again
        None
    };
}

/// Speed magnitude uniform in [min, max) with a uniformly random sign
fn random_axis_speed(rng: &mut impl Rng) -> f32 {
    let magnitude = rng.random_range(MONSTER_SPEED_MIN..MONSTER_SPEED_MAX);
    if rng.random_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}
