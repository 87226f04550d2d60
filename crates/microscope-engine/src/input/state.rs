use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Held-key state for the viewer window.
///
/// Only key transitions reach the frame: OS key-repeat presses and releases
/// of keys this window never saw go down are dropped.
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<Key>,
}

impl InputState {
    /// Updates held keys and records `ev` into `frame` if it is a transition.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        let keep = match &ev {
            InputEvent::Focused(focused) => {
                if !*focused {
                    // Releases are not delivered to unfocused windows.
                    self.keys_down.clear();
                }
                true
            }
            InputEvent::Key { key, state: KeyState::Pressed } => self.keys_down.insert(*key),
            InputEvent::Key { key, state: KeyState::Released } => self.keys_down.remove(key),
            InputEvent::MouseWheel { .. } => true,
        };

        if keep {
            frame.push_event(ev);
        }
    }
}
