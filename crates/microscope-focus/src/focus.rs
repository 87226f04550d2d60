//! Focus depth and scroll step.
//!
//! `FocusState` is the only mutable state the blend depends on. It is owned by
//! the application and updated from discrete commands; every update clamps to
//! the configured bounds so out-of-range values never reach the blend.

/// Allowed ranges for the focus depth and the scroll step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FocusBounds {
    pub depth_min: f32,
    pub depth_max: f32,
    pub step_min: f32,
    pub step_max: f32,
}

impl Default for FocusBounds {
    fn default() -> Self {
        Self {
            depth_min: 0.0,
            depth_max: 300.0,
            step_min: 1.0,
            step_max: 10.0,
        }
    }
}

impl FocusBounds {
    /// Returns bounds with each pair ordered `min <= max`.
    pub fn normalized(self) -> Self {
        Self {
            depth_min: self.depth_min.min(self.depth_max),
            depth_max: self.depth_min.max(self.depth_max),
            step_min: self.step_min.min(self.step_max),
            step_max: self.step_min.max(self.step_max),
        }
    }

    #[inline]
    pub fn clamp_depth(&self, depth: f32) -> f32 {
        depth.clamp(self.depth_min, self.depth_max)
    }

    #[inline]
    pub fn clamp_step(&self, step: f32) -> f32 {
        step.clamp(self.step_min, self.step_max)
    }
}

/// Discrete user intent, already decoupled from the windowing backend.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FocusCommand {
    Quit,
    /// Increase the scroll step by one.
    StepUp,
    /// Decrease the scroll step by one.
    StepDown,
    /// Move the focus deeper by one step.
    ScrollUp,
    /// Move the focus shallower by one step.
    ScrollDown,
    /// Report the current depth without changing it.
    ReportDepth,
}

/// Result of applying a [`FocusCommand`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FocusChange {
    Quit,
    /// Depth moved (or stayed clamped at a bound); blends must be recomputed.
    Depth { depth: f32, clamped: bool },
    /// Step size changed (or stayed clamped at a bound).
    Step { step: f32, clamped: bool },
    Report { depth: f32 },
}

/// Current focus depth and scroll step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FocusState {
    depth: f32,
    step: f32,
    bounds: FocusBounds,
}

impl FocusState {
    /// Builds a state with initial values clamped into `bounds`.
    pub fn new(bounds: FocusBounds, depth: f32, step: f32) -> Self {
        let bounds = bounds.normalized();
        Self {
            depth: bounds.clamp_depth(depth),
            step: bounds.clamp_step(step),
            bounds,
        }
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.depth
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    #[inline]
    pub fn bounds(&self) -> FocusBounds {
        self.bounds
    }

    /// Applies one command and reports what changed.
    pub fn apply(&mut self, cmd: FocusCommand) -> FocusChange {
        match cmd {
            FocusCommand::Quit => FocusChange::Quit,
            FocusCommand::StepUp => self.set_step(self.step + 1.0),
            FocusCommand::StepDown => self.set_step(self.step - 1.0),
            FocusCommand::ScrollUp => self.set_depth(self.depth + self.step),
            FocusCommand::ScrollDown => self.set_depth(self.depth - self.step),
            FocusCommand::ReportDepth => FocusChange::Report { depth: self.depth },
        }
    }

    fn set_depth(&mut self, raw: f32) -> FocusChange {
        self.depth = self.bounds.clamp_depth(raw);
        FocusChange::Depth { depth: self.depth, clamped: self.depth != raw }
    }

    fn set_step(&mut self, raw: f32) -> FocusChange {
        self.step = self.bounds.clamp_step(raw);
        FocusChange::Step { step: self.step, clamped: self.step != raw }
    }
}

impl Default for FocusState {
    fn default() -> Self {
        Self::new(FocusBounds::default(), 150.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> FocusState {
        FocusState::default()
    }

    #[test]
    fn default_matches_demo_scene() {
        let s = state();
        assert_eq!(s.depth(), 150.0);
        assert_eq!(s.step(), 1.0);
    }

    #[test]
    fn scroll_moves_by_step() {
        let mut s = state();
        s.apply(FocusCommand::StepUp);
        s.apply(FocusCommand::StepUp);
        assert_eq!(s.step(), 3.0);

        let change = s.apply(FocusCommand::ScrollUp);
        assert_eq!(change, FocusChange::Depth { depth: 153.0, clamped: false });
        s.apply(FocusCommand::ScrollDown);
        assert_eq!(s.depth(), 150.0);
    }

    #[test]
    fn depth_clamps_at_max() {
        let mut s = FocusState::new(FocusBounds::default(), 298.0, 5.0);
        let change = s.apply(FocusCommand::ScrollUp);
        assert_eq!(change, FocusChange::Depth { depth: 300.0, clamped: true });
    }

    #[test]
    fn depth_clamps_at_min() {
        let mut s = FocusState::new(FocusBounds::default(), 2.0, 10.0);
        s.apply(FocusCommand::ScrollDown);
        assert_eq!(s.depth(), 0.0);
    }

    #[test]
    fn step_clamps_to_bounds() {
        let mut s = state();
        for _ in 0..20 {
            s.apply(FocusCommand::StepUp);
        }
        assert_eq!(s.step(), 10.0);
        for _ in 0..20 {
            s.apply(FocusCommand::StepDown);
        }
        assert_eq!(s.step(), 1.0);
        assert_eq!(
            s.apply(FocusCommand::StepDown),
            FocusChange::Step { step: 1.0, clamped: true }
        );
    }

    #[test]
    fn initial_values_are_clamped() {
        let s = FocusState::new(FocusBounds::default(), 900.0, 0.0);
        assert_eq!(s.depth(), 300.0);
        assert_eq!(s.step(), 1.0);
    }

    #[test]
    fn swapped_bounds_are_normalized() {
        let bounds = FocusBounds { depth_min: 10.0, depth_max: -10.0, step_min: 4.0, step_max: 2.0 };
        let s = FocusState::new(bounds, 0.0, 3.0);
        assert_eq!(s.bounds().depth_min, -10.0);
        assert_eq!(s.bounds().step_max, 4.0);
    }

    #[test]
    fn arbitrary_sequences_stay_in_bounds() {
        // Deterministic LCG so the sequence is reproducible.
        let cmds = [
            FocusCommand::StepUp,
            FocusCommand::StepDown,
            FocusCommand::ScrollUp,
            FocusCommand::ScrollDown,
            FocusCommand::ReportDepth,
        ];
        let mut seed: u32 = 0x1234_5678;
        let mut s = state();
        for _ in 0..10_000 {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            let cmd = cmds[(seed >> 16) as usize % cmds.len()];
            s.apply(cmd);
            assert!((0.0..=300.0).contains(&s.depth()));
            assert!((1.0..=10.0).contains(&s.step()));
        }
    }

    #[test]
    fn quit_and_report_leave_state_alone() {
        let mut s = state();
        assert_eq!(s.apply(FocusCommand::Quit), FocusChange::Quit);
        assert_eq!(s.apply(FocusCommand::ReportDepth), FocusChange::Report { depth: 150.0 });
        assert_eq!(s, state());
    }
}
