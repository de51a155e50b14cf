// Axis-aligned rectangle in scene space (origin bottom-left, y up)

use glam::Vec2;

/// The visible frame of the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Frame anchored at the origin with the given size
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        }
    }

    pub fn min_x(&self) -> f32 {
        self.min.x
    }

    pub fn max_x(&self) -> f32 {
        self.max.x
    }

    pub fn min_y(&self) -> f32 {
        self.min.y
    }

    pub fn max_y(&self) -> f32 {
        self.max.y
    }

    pub fn mid_x(&self) -> f32 {
        (self.min.x + self.max.x) * 0.5
    }

    pub fn mid_y(&self) -> f32 {
        (self.min.y + self.max.y) * 0.5
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_metrics() {
        let frame = Rect::from_size(400.0, 800.0);
        assert_eq!(frame.width(), 400.0);
        assert_eq!(frame.max_y(), 800.0);
        assert_eq!(frame.mid_x(), 200.0);
        assert_eq!(frame.mid_y(), 400.0);
        assert_eq!(frame.min_y(), 0.0);
        assert_eq!(frame.max_x(), 400.0);
    }
}
