//! Collision testing and boundary clamping
//!
//! Projectile/monster intersection is a plain AABB overlap (see
//! `Rect::overlaps`); this module adds the stored-order hit scan and the
//! saturating clamp that keeps the player inside the arena.

use glam::Vec2;

use super::rect::Rect;
use super::state::Monster;

/// Clamp a position into `[min, max]` per axis, saturating.
///
/// When the span is inverted (entity larger than the arena) the upper bound
/// wins: the lower clamp is applied first, the upper one last.
pub fn clamp_position(pos: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(pos.x.max(min.x).min(max.x), pos.y.max(min.y).min(max.y))
}

/// Find the first active monster, in stored order, that a projectile rect
/// overlaps. Inert monsters (cooldown or destroyed) never collide.
pub fn first_hit<'a>(rect: &Rect, monsters: &'a mut [Monster]) -> Option<&'a mut Monster> {
    monsters
        .iter_mut()
        .find(|m| m.is_active() && m.rect.overlaps(rect))
}
