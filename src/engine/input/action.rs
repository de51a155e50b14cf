// Game action definitions and mappings

use winit::keyboard::KeyCode;

/// Discrete actions triggered from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Stop the current round and start a new one
    Restart,
    /// Freeze or unfreeze the simulation
    Pause,
    /// Close the game
    Quit,
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::KeyR, Action::Restart),
        (KeyCode::KeyP, Action::Pause),
        (KeyCode::Escape, Action::Quit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_unique_keys() {
        let bindings = default_bindings();
        for (i, (key1, _)) in bindings.iter().enumerate() {
            for (key2, _) in bindings.iter().skip(i + 1) {
                assert_ne!(key1, key2, "Key bound twice");
            }
        }
    }

    #[test]
    fn test_every_action_is_bound() {
        let bindings = default_bindings();
        for action in [Action::Restart, Action::Pause, Action::Quit] {
            assert!(bindings.iter().any(|(_, a)| *a == action));
        }
    }
}
