// Where new asteroids appear

use crate::core::Rect;
use glam::Vec2;
use rand::Rng;

/// Pick a spawn point for an asteroid of `size`
///
/// X is a whole number drawn uniformly from `[min_x, frame width - size]`
/// (relative to the frame's left edge); y sits one asteroid above the top.
pub fn asteroid_position<R: Rng + ?Sized>(rng: &mut R, frame: Rect, size: f32, min_x: f32) -> Vec2 {
    let low = min_x.ceil() as i32;
    let high = ((frame.width() - size).floor() as i32).max(low);
    let x = rng.gen_range(low..=high) as f32;
    Vec2::new(frame.min_x() + x, frame.max_y() + size)
}
