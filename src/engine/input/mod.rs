// Input handling system
//
// - `action`: keyboard actions and their default bindings
// - `manager`: turns winit events into scene-space taps and actions
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::new(window_size, scene_size);
//
// // In the event loop
// input.process_cursor_moved(position);
// input.process_mouse_button(button, state);
//
// // Once per update
// for point in input.drain_points() {
//     // Steer towards `point`
// }
// ```

pub mod action;
pub mod manager;

pub use action::Action;
pub use manager::InputManager;
