// Input manager - turns window events into target points and actions

use super::action::{default_bindings, Action};
use glam::Vec2;
use std::collections::HashMap;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton, Touch, TouchPhase};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Collects pointer taps and key actions between updates
///
/// Pointer positions arrive in window pixels (origin top-left, y down) and
/// are handed out in scene points (origin bottom-left, y up).
pub struct InputManager {
    bindings: HashMap<KeyCode, Action>,

    /// Window size in physical pixels
    window_size: Vec2,

    /// Scene size in points
    scene_size: Vec2,

    /// Last known cursor position in window pixels
    cursor: Option<Vec2>,

    /// Taps not yet consumed, in scene points
    points: Vec<Vec2>,

    /// Actions pressed since the last drain
    actions: Vec<Action>,
}

impl InputManager {
    /// Create an input manager for a window showing a scene of `scene_size`
    pub fn new(window_size: Vec2, scene_size: Vec2) -> Self {
        Self {
            bindings: default_bindings().into_iter().collect(),
            window_size,
            scene_size,
            cursor: None,
            points: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Track a window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = Vec2::new(width as f32, height as f32);
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Register a key press or release
    pub fn process_key(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) {
        if state != ElementState::Pressed || repeat {
            return;
        }
        if let Some(&action) = self.bindings.get(&key_code) {
            self.actions.push(action);
        }
    }

    /// Remember where the cursor is
    pub fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.cursor = Some(Vec2::new(position.x as f32, position.y as f32));
    }

    /// A left click taps at the current cursor position
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button != MouseButton::Left || state != ElementState::Pressed {
            return;
        }
        if let Some(cursor) = self.cursor {
            self.push_window_point(cursor);
        }
    }

    /// A touch taps where the finger lands
    pub fn process_touch(&mut self, touch: &Touch) {
        self.process_touch_at(touch.phase, touch.location);
    }

    fn process_touch_at(&mut self, phase: TouchPhase, location: PhysicalPosition<f64>) {
        if phase == TouchPhase::Started {
            self.push_window_point(Vec2::new(location.x as f32, location.y as f32));
        }
    }

    fn push_window_point(&mut self, window_point: Vec2) {
        let point = self.window_to_scene(window_point);
        self.points.push(point);
    }

    /// Map a window pixel position to scene points
    pub fn window_to_scene(&self, window_point: Vec2) -> Vec2 {
        if self.window_size.x <= 0.0 || self.window_size.y <= 0.0 {
            return Vec2::ZERO;
        }
        let normalized = window_point / self.window_size;
        Vec2::new(
            normalized.x * self.scene_size.x,
            (1.0 - normalized.y) * self.scene_size.y,
        )
    }

    /// Take all taps since the last call, oldest first
    pub fn drain_points(&mut self) -> Vec<Vec2> {
        std::mem::take(&mut self.points)
    }

    /// Take all actions since the last call, oldest first
    pub fn drain_actions(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.actions)
    }

    /// Forget everything pending
    pub fn reset(&mut self) {
        self.points.clear();
        self.actions.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn manager() -> InputManager {
        InputManager::new(Vec2::new(828.0, 1472.0), Vec2::new(414.0, 736.0))
    }

    #[test]
    fn test_window_to_scene_flips_y() {
        let input = manager();

        let top_left = input.window_to_scene(Vec2::ZERO);
        assert_relative_eq!(top_left.x, 0.0);
        assert_relative_eq!(top_left.y, 736.0);

        let bottom_right = input.window_to_scene(Vec2::new(828.0, 1472.0));
        assert_relative_eq!(bottom_right.x, 414.0);
        assert_relative_eq!(bottom_right.y, 0.0);
    }

    #[test]
    fn test_click_uses_last_cursor() {
        let mut input = manager();

        // No cursor yet, nothing to tap
        input.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert!(input.drain_points().is_empty());

        input.process_cursor_moved(PhysicalPosition::new(414.0, 736.0));
        input.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        input.process_mouse_button(MouseButton::Left, ElementState::Released);
        input.process_mouse_button(MouseButton::Right, ElementState::Pressed);

        let points = input.drain_points();
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].x, 207.0);
        assert_relative_eq!(points[0].y, 368.0);
        assert!(input.drain_points().is_empty());
    }

    #[test]
    fn test_touch_started_only() {
        let mut input = manager();
        input.process_touch_at(TouchPhase::Started, PhysicalPosition::new(0.0, 1472.0));
        input.process_touch_at(TouchPhase::Moved, PhysicalPosition::new(10.0, 10.0));
        input.process_touch_at(TouchPhase::Ended, PhysicalPosition::new(10.0, 10.0));

        assert_eq!(input.drain_points(), vec![Vec2::new(0.0, 0.0)]);
    }

    #[test]
    fn test_key_actions() {
        let mut input = manager();
        input.process_key(KeyCode::KeyR, ElementState::Pressed, false);
        input.process_key(KeyCode::KeyR, ElementState::Pressed, true);
        input.process_key(KeyCode::KeyR, ElementState::Released, false);
        input.process_key(KeyCode::KeyX, ElementState::Pressed, false);
        input.process_key(KeyCode::Escape, ElementState::Pressed, false);

        assert_eq!(input.drain_actions(), vec![Action::Restart, Action::Quit]);
        assert!(input.drain_actions().is_empty());
    }

    #[test]
    fn test_resize_changes_mapping() {
        let mut input = manager();
        input.resize(414, 736);
        let point = input.window_to_scene(Vec2::new(100.0, 36.0));
        assert_relative_eq!(point.x, 100.0);
        assert_relative_eq!(point.y, 700.0);
    }

    #[test]
    fn test_reset() {
        let mut input = manager();
        input.process_key(KeyCode::KeyP, ElementState::Pressed, false);
        input.process_touch_at(TouchPhase::Started, PhysicalPosition::new(1.0, 1.0));
        input.reset();
        assert!(input.drain_actions().is_empty());
        assert!(input.drain_points().is_empty());
    }
}
