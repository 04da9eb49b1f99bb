//! Scene composition and the rendering collaborator interface
//!
//! The simulation never paints. Each frame the session composes a `Scene`
//! (plain draw data in draw order) and hands it to whatever implements
//! `Renderer`. Image lookup and the flat-color fallback for assets that are
//! not ready are the renderer's concern; they must never leak back into
//! motion or collision.

use glam::Vec2;

use crate::sim::{GameState, Rect};

/// Arena background fill (#34bcec water blue)
pub const BACKGROUND_COLOR: [f32; 4] = [0.204, 0.737, 0.925, 1.0];
/// Player fallback fill
pub const PLAYER_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Cannonball fallback fill
pub const CANNONBALL_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
/// Explosion fragment fill
pub const PARTICLE_COLOR: [f32; 4] = [1.0, 0.6, 0.1, 1.0];

/// Which image asset a sprite would like, if the renderer has it ready
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteImage {
    Player,
    Cannonball,
    Monster,
}

/// One rectangle to paint
#[derive(Debug, Clone)]
pub struct Sprite {
    pub rect: Rect,
    /// Flat fill used when `image` is absent or not ready
    pub color: [f32; 4],
    pub opacity: f32,
    pub image: Option<SpriteImage>,
}

/// Draw data for one frame, sprites in draw order
#[derive(Debug, Clone)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub background: [f32; 4],
    pub sprites: Vec<Sprite>,
}

impl Scene {
    /// Compose draw data from the current state. Draw order: player, then
    /// monsters, then cannonballs, with particles on top. Inert monsters
    /// (cooldown or destroyed) compose nothing.
    pub fn compose(state: &GameState) -> Self {
        let mut sprites = Vec::with_capacity(
            1 + state.monsters.len() + state.cannonballs.len() + state.particles.len(),
        );

        sprites.push(Sprite {
            rect: state.player.rect,
            color: PLAYER_COLOR,
            opacity: 1.0,
            image: Some(SpriteImage::Player),
        });

        for monster in state.monsters.iter().filter(|m| m.is_active()) {
            sprites.push(Sprite {
                rect: monster.rect,
                color: monster.color,
                opacity: 1.0,
                image: Some(SpriteImage::Monster),
            });
        }

        for ball in &state.cannonballs {
            sprites.push(Sprite {
                rect: ball.rect,
                color: CANNONBALL_COLOR,
                opacity: 1.0,
                image: Some(SpriteImage::Cannonball),
            });
        }

        for particle in &state.particles {
            sprites.push(Sprite {
                rect: Rect {
                    pos: particle.pos,
                    size: Vec2::splat(particle.size),
                },
                color: PARTICLE_COLOR,
                opacity: particle.opacity,
                image: None,
            });
        }

        Self {
            width: state.arena.width,
            height: state.arena.height,
            background: BACKGROUND_COLOR,
            sprites,
        }
    }
}

/// Paints one frame from composed draw data
pub trait Renderer {
    fn draw(&mut self, scene: &Scene);
}

/// Renders a monster's remaining life as discrete indicator slots,
/// the first `hit_count` of them marked lost
pub trait LifeDisplay {
    fn set_hits(&mut self, id: u32, name: &str, hit_count: u32, max_life: u32);
}

/// Renderer for headless runs: one debug line per frame
#[derive(Debug, Default)]
pub struct HeadlessRenderer;

impl Renderer for HeadlessRenderer {
    fn draw(&mut self, scene: &Scene) {
        log::debug!(
            "frame {}x{}: {} sprites",
            scene.width,
            scene.height,
            scene.sprites.len()
        );
    }
}

/// Life display for headless runs: logs a heart row per update
#[derive(Debug, Default)]
pub struct LogLifeDisplay;

impl LifeDisplay for LogLifeDisplay {
    fn set_hits(&mut self, _id: u32, name: &str, hit_count: u32, max_life: u32) {
        let lost = "x".repeat(hit_count as usize);
        let left = "o".repeat(max_life.saturating_sub(hit_count) as usize);
        log::info!("{name} life: [{lost}{left}]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, MonsterState};
    use crate::tuning::Tuning;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state_with_one_monster() -> GameState {
        let mut state = GameState::new(Tuning::default());
        let mut rng = Pcg32::seed_from_u64(3);
        // First tick spawns the first roster monster
        crate::sim::tick(&mut state, &crate::sim::TickInput::default(), &mut rng);
        assert_eq!(state.monsters.len(), 1);
        state
    }

    #[test]
    fn test_scene_draw_order_and_counts() {
        let mut state = state_with_one_monster();
        state.cannonballs.push(crate::sim::Cannonball {
            rect: crate::sim::Rect::new(300.0, 200.0, 20.0, 20.0),
            speed: 10.0,
        });
        crate::sim::spawn_explosion(
            &mut state.particles,
            Vec2::new(100.0, 100.0),
            &mut Pcg32::seed_from_u64(3),
        );

        let scene = Scene::compose(&state);
        // player + monster + ball + 20 particles
        assert_eq!(scene.sprites.len(), 23);
        assert_eq!(scene.sprites[0].image, Some(SpriteImage::Player));
        assert_eq!(scene.sprites[1].image, Some(SpriteImage::Monster));
        assert_eq!(scene.sprites[2].image, Some(SpriteImage::Cannonball));
        assert_eq!(scene.sprites[3].image, None);
    }

    #[test]
    fn test_inert_monsters_compose_nothing() {
        let mut state = state_with_one_monster();
        state.monsters[0].state = MonsterState::Cooldown { ticks_left: 30 };
        let scene = Scene::compose(&state);
        assert!(
            scene
                .sprites
                .iter()
                .all(|s| s.image != Some(SpriteImage::Monster))
        );

        state.monsters[0].state = MonsterState::Destroyed;
        let scene = Scene::compose(&state);
        assert_eq!(scene.sprites.len(), 1); // just the player
    }

    #[test]
    fn test_particle_opacity_flows_into_sprite() {
        let mut state = GameState::new(Tuning {
            roster: Vec::new(),
            ..Tuning::default()
        });
        state.particles.push(crate::sim::Particle {
            pos: Vec2::new(10.0, 10.0),
            vel: Vec2::ZERO,
            size: 12.0,
            opacity: 0.4,
        });
        let scene = Scene::compose(&state);
        let sprite = scene.sprites.last().unwrap();
        assert_eq!(sprite.opacity, 0.4);
        assert_eq!(sprite.rect.size, Vec2::splat(12.0));
    }

    #[test]
    fn test_scene_tracks_arena_size() {
        let mut state = GameState::new(Tuning::default());
        state.arena.resize(1024.0, 768.0);
        let scene = Scene::compose(&state);
        assert_eq!((scene.width, scene.height), (1024.0, 768.0));
    }
}
