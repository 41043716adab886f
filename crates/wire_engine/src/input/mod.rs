//! Input state snapshots
//!
//! The host polls its windowing library and feeds key transitions in; the
//! engine only ever sees an [`InputState`] value. Edge detection works on the
//! pair of snapshots the way a keys/previous-keys buffer pair does: a key is
//! "just pressed" when it is down now and was not down at the previous frame
//! boundary.

use std::collections::HashSet;

/// Keys the engine cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Space bar
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Snapshot-based keyboard state with per-frame edge detection
#[derive(Debug, Clone, Default)]
pub struct InputState {
    down: HashSet<KeyCode>,
    previous: HashSet<KeyCode>,
}

impl InputState {
    /// Create an empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll the current snapshot into the previous one (call at frame start,
    /// before feeding this frame's transitions)
    pub fn begin_frame(&mut self) {
        self.previous = self.down.clone();
    }

    /// Record a key going down
    pub fn press(&mut self, key: KeyCode) {
        self.down.insert(key);
    }

    /// Record a key going up
    pub fn release(&mut self, key: KeyCode) {
        self.down.remove(&key);
    }

    /// Whether a key is currently held
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }

    /// Whether a key went down since the previous frame boundary
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.down.contains(&key) && !self.previous.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_just_pressed_is_edge_triggered() {
        let mut input = InputState::new();

        input.begin_frame();
        input.press(KeyCode::Space);
        assert!(input.is_down(KeyCode::Space));
        assert!(input.just_pressed(KeyCode::Space));

        // Held across the next frame boundary: down, but no longer an edge.
        input.begin_frame();
        assert!(input.is_down(KeyCode::Space));
        assert!(!input.just_pressed(KeyCode::Space));

        input.begin_frame();
        input.release(KeyCode::Space);
        assert!(!input.is_down(KeyCode::Space));
        assert!(!input.just_pressed(KeyCode::Space));
    }
}
