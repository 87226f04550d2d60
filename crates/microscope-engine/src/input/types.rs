use std::fmt;

/// Keyboard key identifier.
///
/// Only keys the viewer reacts to get a variant; everything else maps to
/// `Unknown` with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,
    ArrowUp,
    ArrowDown,
    Unknown(u32),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Vertical direction of one wheel event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WheelDirection {
    /// Wheel rolled away from the user.
    Up,
    /// Wheel rolled toward the user.
    Down,
}

/// Mouse wheel delta.
///
/// `Line` is notched-wheel input; `Pixel` comes from touchpads.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

impl MouseWheelDelta {
    /// Direction of the vertical component, or `None` for horizontal-only
    /// and zero deltas.
    pub fn direction(&self) -> Option<WheelDirection> {
        let y = match *self {
            MouseWheelDelta::Line { y, .. } | MouseWheelDelta::Pixel { y, .. } => y,
        };
        if y > 0.0 {
            Some(WheelDirection::Up)
        } else if y < 0.0 {
            Some(WheelDirection::Down)
        } else {
            None
        }
    }
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key { key: Key, state: KeyState },

    MouseWheel { delta: MouseWheelDelta },

    /// Window focus change.
    Focused(bool),
}
