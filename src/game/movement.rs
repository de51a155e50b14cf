// Rocket movement in response to a tap

use crate::config::GameConfig;
use crate::core::math::deg_to_rad;
use crate::core::Rect;
use crate::engine::scene::Action;
use glam::Vec2;

/// Durations of the three phases of a move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveTimings {
    pub bank: f32,
    pub travel: f32,
    pub upright: f32,
}

impl MoveTimings {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            bank: config.bank_duration,
            travel: config.move_duration,
            upright: config.upright_duration,
        }
    }
}

/// A resolved move: how far to bank and where to go
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovePlan {
    /// Bank angle in radians (negative leans right)
    pub bank_angle: f32,
    pub target: Vec2,
}

impl MovePlan {
    /// Plan a move of a rocket at `current` towards a tapped `requested` point
    ///
    /// The rocket banks away from the direction of travel, like a plane
    /// turning, and always settles one rocket height above the bottom edge.
    pub fn new(
        current: Vec2,
        requested: Vec2,
        rocket_size: Vec2,
        frame: Rect,
        bank_degrees: f32,
    ) -> Self {
        let bank_degrees = if requested.x > current.x {
            -bank_degrees
        } else {
            bank_degrees
        };

        Self {
            bank_angle: deg_to_rad(bank_degrees),
            target: Vec2::new(
                clamp_x(requested.x, rocket_size.x * 0.5, frame),
                frame.min_y() + rocket_size.y,
            ),
        }
    }

    /// Bank, travel (both axes together), then turn back upright
    pub fn into_action(self, timings: MoveTimings) -> Action {
        Action::sequence(vec![
            Action::rotate_to(self.bank_angle, timings.bank),
            Action::group(vec![
                Action::move_to_x(self.target.x, timings.travel),
                Action::move_to_y(self.target.y, timings.travel),
            ]),
            Action::rotate_to(0.0, timings.upright),
        ])
    }
}

/// Pull an off-screen x back inside the frame, half a rocket from the edge
pub fn clamp_x(x: f32, half_width: f32, frame: Rect) -> f32 {
    if x < frame.min_x() {
        frame.min_x() + half_width
    } else if x > frame.max_x() {
        frame.max_x() - half_width
    } else {
        x
    }
}
