//! Frame driver
//!
//! A `Session` owns the game state, the RNG and the pending input, and wires
//! the collaborators in: each frame it composes a scene, hands it to the
//! renderer, then advances the simulation, so every frame shows the previous
//! tick's state (one frame of lag, intentional). Simulation events are routed
//! to the life-indicator collaborator here.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::platform::{self, InputEvent};
use crate::renderer::{LifeDisplay, Renderer, Scene};
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::tuning::Tuning;

pub struct Session<R: Renderer, L: LifeDisplay> {
    state: GameState,
    input: TickInput,
    rng: Pcg32,
    renderer: R,
    life_display: L,
}

impl<R: Renderer, L: LifeDisplay> Session<R, L> {
    pub fn new(seed: u64, tuning: Tuning, renderer: R, life_display: L) -> Self {
        log::info!("session starting (seed {seed})");
        Self {
            state: GameState::new(tuning),
            input: TickInput::default(),
            rng: Pcg32::seed_from_u64(seed),
            renderer,
            life_display,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Feed one input command from the host environment
    pub fn handle(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Resize { width, height } => {
                log::info!("arena resized to {width}x{height}");
                self.state.arena.resize(width, height);
            }
            _ => platform::apply(event, &mut self.input),
        }
    }

    /// Run one frame: draw the current state, then advance it
    pub fn frame(&mut self) {
        let scene = Scene::compose(&self.state);
        self.renderer.draw(&scene);

        let events = tick(&mut self.state, &self.input, &mut self.rng);
        for event in events {
            self.dispatch(event);
        }

        // One-shot commands apply to exactly one tick
        self.input.fire = false;
        self.input.pointer = None;
    }

    fn dispatch(&mut self, event: GameEvent) {
        match event {
            GameEvent::MonsterSpawned { id } | GameEvent::MonsterHit { id, .. } => {
                if let Some(monster) = self.state.monster(id) {
                    self.life_display
                        .set_hits(id, &monster.name, monster.hit_count, monster.max_life);
                }
            }
            // Already logged by the tick; nothing for the UI to redraw
            GameEvent::MonsterDestroyed { .. } | GameEvent::MonsterRespawned { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CANNONBALL_SPEED;
    use crate::platform::Axis;
    use crate::renderer::SpriteImage;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Captures the sprite image list of every drawn frame
    #[derive(Default)]
    struct RecordingRenderer {
        frames: Rc<RefCell<Vec<Vec<Option<SpriteImage>>>>>,
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self, scene: &Scene) {
            self.frames
                .borrow_mut()
                .push(scene.sprites.iter().map(|s| s.image).collect());
        }
    }

    /// Captures every life-indicator update
    #[derive(Default)]
    struct RecordingLife {
        calls: Rc<RefCell<Vec<(u32, String, u32, u32)>>>,
    }

    impl LifeDisplay for RecordingLife {
        fn set_hits(&mut self, id: u32, name: &str, hit_count: u32, max_life: u32) {
            self.calls
                .borrow_mut()
                .push((id, name.to_string(), hit_count, max_life));
        }
    }

    fn session() -> (
        Session<RecordingRenderer, RecordingLife>,
        Rc<RefCell<Vec<Vec<Option<SpriteImage>>>>>,
        Rc<RefCell<Vec<(u32, String, u32, u32)>>>,
    ) {
        let renderer = RecordingRenderer::default();
        let life = RecordingLife::default();
        let frames = renderer.frames.clone();
        let calls = life.calls.clone();
        let tuning = Tuning {
            roster: vec![crate::tuning::MonsterSpec::new(
                "green-monster",
                [0.13, 0.55, 0.13, 1.0],
            )],
            ..Tuning::default()
        };
        (Session::new(11, tuning, renderer, life), frames, calls)
    }

    #[test]
    fn test_draw_happens_before_update() {
        let (mut session, frames, _) = session();

        // Frame 1 draws the pre-spawn state: just the player
        session.frame();
        assert_eq!(session.state().monsters.len(), 1);
        assert_eq!(frames.borrow()[0], vec![Some(SpriteImage::Player)]);

        // Frame 2 shows the monster that spawned during frame 1's tick
        session.frame();
        assert!(frames.borrow()[1].contains(&Some(SpriteImage::Monster)));
    }

    #[test]
    fn test_spawn_initializes_life_display() {
        let (mut session, _, calls) = session();
        session.frame();
        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        let (_, ref name, hit_count, max_life) = calls[0];
        assert_eq!(name, "green-monster");
        assert_eq!(hit_count, 0);
        assert_eq!(max_life, session.state().tuning.max_life);
    }

    #[test]
    fn test_hit_updates_life_display() {
        let (mut session, _, calls) = session();
        session.frame();

        // Park a ball on top of the monster so next tick registers a hit
        let monster_center = session.state().monsters[0].rect.center();
        session.state.cannonballs.push(crate::sim::Cannonball {
            rect: crate::sim::Rect::new(
                monster_center.x - CANNONBALL_SPEED,
                monster_center.y,
                20.0,
                20.0,
            ),
            speed: CANNONBALL_SPEED,
        });
        session.frame();

        let calls = calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].2, 1); // hit_count after the hit
    }

    #[test]
    fn test_fire_is_one_shot() {
        // Empty roster: nothing in the arena can consume the ball
        let tuning = Tuning {
            roster: Vec::new(),
            ..Tuning::default()
        };
        let mut session = Session::new(
            11,
            tuning,
            RecordingRenderer::default(),
            RecordingLife::default(),
        );
        session.handle(&InputEvent::Fire);
        session.frame();
        assert_eq!(session.state().cannonballs.len(), 1);
        session.frame();
        assert_eq!(session.state().cannonballs.len(), 1);
    }

    #[test]
    fn test_direction_persists_until_released() {
        let (mut session, _, _) = session();
        let x0 = session.state().player.rect.pos.x;
        session.handle(&InputEvent::Direction {
            axis: Axis::X,
            sign: 1,
        });
        session.frame();
        session.frame();
        let speed = session.state().player.speed;
        assert_eq!(session.state().player.rect.pos.x, x0 + 2.0 * speed);

        session.handle(&InputEvent::Direction {
            axis: Axis::X,
            sign: 0,
        });
        session.frame();
        assert_eq!(session.state().player.rect.pos.x, x0 + 2.0 * speed);
    }

    #[test]
    fn test_resize_reaches_arena() {
        let (mut session, _, _) = session();
        session.handle(&InputEvent::Resize {
            width: 1024.0,
            height: 768.0,
        });
        assert_eq!(session.state().arena.width, 1024.0);
        assert_eq!(session.state().arena.height, 768.0);
    }
}
