//! Input → focus command mapping.
//!
//! Keys act on release: Escape quits, ArrowUp/ArrowDown change the scroll
//! step, Space reports the depth. Wheel up moves the focus deeper.

use microscope_engine::input::{InputEvent, Key, KeyState, MouseWheelDelta, WheelDirection};
use microscope_focus::FocusCommand;

/// Touchpad travel that counts as one wheel notch.
pub const DEFAULT_PIXELS_PER_NOTCH: f32 = 40.0;

fn scroll_command(dir: WheelDirection) -> FocusCommand {
    match dir {
        WheelDirection::Up => FocusCommand::ScrollUp,
        WheelDirection::Down => FocusCommand::ScrollDown,
    }
}

/// Turns input events into focus commands.
///
/// A line delta is one notch whatever its size. Pixel deltas are summed and
/// produce one notch per `pixels_per_notch` of travel; the remainder carries
/// into the next event and is dropped when the direction reverses or the
/// window loses focus.
#[derive(Debug, Clone)]
pub struct Controls {
    pixels_per_notch: f32,
    pixel_carry: f32,
}

impl Default for Controls {
    fn default() -> Self {
        Self::new(DEFAULT_PIXELS_PER_NOTCH)
    }
}

impl Controls {
    /// Non-positive or non-finite thresholds fall back to the default.
    pub fn new(pixels_per_notch: f32) -> Self {
        let pixels_per_notch = if pixels_per_notch.is_finite() && pixels_per_notch > 0.0 {
            pixels_per_notch
        } else {
            DEFAULT_PIXELS_PER_NOTCH
        };
        Self { pixels_per_notch, pixel_carry: 0.0 }
    }

    /// Appends the commands for `events`, in order, to `out`.
    pub fn commands(&mut self, events: &[InputEvent], out: &mut Vec<FocusCommand>) {
        for ev in events {
            self.push_commands(ev, out);
        }
    }

    fn push_commands(&mut self, ev: &InputEvent, out: &mut Vec<FocusCommand>) {
        match ev {
            InputEvent::Key { key, state: KeyState::Released } => {
                let cmd = match key {
                    Key::Escape => FocusCommand::Quit,
                    Key::ArrowUp => FocusCommand::StepUp,
                    Key::ArrowDown => FocusCommand::StepDown,
                    Key::Space => FocusCommand::ReportDepth,
                    Key::Unknown(_) => return,
                };
                out.push(cmd);
            }
            InputEvent::Key { state: KeyState::Pressed, .. } => {}

            InputEvent::MouseWheel { delta: delta @ MouseWheelDelta::Line { .. } } => {
                out.extend(delta.direction().map(scroll_command));
            }

            InputEvent::MouseWheel { delta: MouseWheelDelta::Pixel { y, .. } } => {
                if *y == 0.0 {
                    return;
                }
                if self.pixel_carry * y < 0.0 {
                    self.pixel_carry = 0.0;
                }
                self.pixel_carry += y;

                let notches = (self.pixel_carry / self.pixels_per_notch).trunc();
                self.pixel_carry -= notches * self.pixels_per_notch;

                let dir = if notches > 0.0 { WheelDirection::Up } else { WheelDirection::Down };
                let count = notches.abs() as usize;
                out.extend(std::iter::repeat_n(scroll_command(dir), count));
            }

            InputEvent::Focused(false) => self.pixel_carry = 0.0,
            InputEvent::Focused(true) => {}
        }
    }
}
