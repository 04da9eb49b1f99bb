//! Cannonfish entry point
//!
//! Runs a headless demo session: there is no native window yet, so the
//! renderer is the logging one and the demo drives the session with a short
//! scripted input sequence, then prints where every monster ended up.

use rand::Rng;

use cannonfish::platform::{Axis, InputEvent};
use cannonfish::renderer::{HeadlessRenderer, LogLifeDisplay};
use cannonfish::sim::MonsterState;
use cannonfish::{Session, Tuning};

/// Frames the demo runs for (30 s at one tick per frame, 60 Hz)
const DEMO_FRAMES: u32 = 30 * 60;

fn main() {
    env_logger::init();
    log::info!("Cannonfish (headless demo) starting...");

    let seed: u64 = rand::rng().random();
    let mut session = Session::new(seed, Tuning::default(), HeadlessRenderer, LogLifeDisplay);

    session.handle(&InputEvent::Resize {
        width: 1280.0,
        height: 720.0,
    });

    // Drift down-right while firing on a cadence
    session.handle(&InputEvent::Direction {
        axis: Axis::X,
        sign: 1,
    });
    session.handle(&InputEvent::Direction {
        axis: Axis::Y,
        sign: 1,
    });

    for frame in 0..DEMO_FRAMES {
        if frame % 20 == 0 {
            session.handle(&InputEvent::Fire);
        }
        if frame == 300 {
            // Let go of the keys, park mid-arena with the pointer instead
            session.handle(&InputEvent::Direction {
                axis: Axis::X,
                sign: 0,
            });
            session.handle(&InputEvent::Direction {
                axis: Axis::Y,
                sign: 0,
            });
            session.handle(&InputEvent::Pointer { x: 200.0, y: 400.0 });
        }
        session.frame();
    }

    let state = session.state();
    println!(
        "demo over after {} ticks: {} cannonballs in flight, {} particles fading",
        state.time_ticks,
        state.cannonballs.len(),
        state.particles.len()
    );
    for monster in &state.monsters {
        let status = match monster.state {
            MonsterState::Active => "active",
            MonsterState::Cooldown { .. } => "cooling down",
            MonsterState::Destroyed => "destroyed",
        };
        println!(
            "  {}: {}/{} hits, {}",
            monster.name, monster.hit_count, monster.max_life, status
        );
    }

    match serde_json::to_string(state) {
        Ok(json) => log::debug!("final state: {json}"),
        Err(err) => log::warn!("state dump failed: {err}"),
    }
}
