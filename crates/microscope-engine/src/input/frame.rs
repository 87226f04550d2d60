use super::types::InputEvent;

/// Input that arrived since the previous frame.
///
/// The runtime fills it through `InputState::apply_event` and clears it after
/// every frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Events in arrival order.
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
