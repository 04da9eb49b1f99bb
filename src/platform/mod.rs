//! Abstract input commands
//!
//! The host environment (browser, terminal, window system) owns the actual
//! devices and translates key/pointer/touch activity into these commands.
//! The session folds them into the pending `TickInput`; nothing here touches
//! a device.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// One input command from the host environment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Directional intent: sign -1/0/+1 per axis (0 on key release)
    Direction { axis: Axis, sign: i8 },
    /// Absolute pointer position in arena coordinates (touch-follow control)
    Pointer { x: f32, y: f32 },
    /// Fire one cannonball
    Fire,
    /// The viewport changed size
    Resize { width: f32, height: f32 },
}

/// Fold an input command into the pending tick input. `Resize` is not an
/// input command; the session applies it to the arena directly.
pub fn apply(event: &InputEvent, input: &mut TickInput) {
    match *event {
        InputEvent::Direction { axis, sign } => {
            let sign = sign.clamp(-1, 1) as f32;
            match axis {
                Axis::X => input.move_dir.x = sign,
                Axis::Y => input.move_dir.y = sign,
            }
        }
        InputEvent::Pointer { x, y } => input.pointer = Some(Vec2::new(x, y)),
        InputEvent::Fire => input.fire = true,
        InputEvent::Resize { .. } => {}
    }
}
