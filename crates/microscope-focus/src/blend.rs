//! Depth → texture-pair blending.
//!
//! A specimen's depth range is split into `frame_count + 1` fade slots. The
//! first slot fades the shallowest slice in, the last slot fades the deepest
//! slice out, and every slot in between cross-fades two adjacent slices.

/// Which part of the specimen's depth range the focus currently sits in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BlendPhase {
    /// Focus is shallower than the specimen; nothing visible.
    AboveRange,
    /// First slot: slice 0 fades in.
    FadingIn,
    /// Cross-fade between two adjacent slices.
    Interior,
    /// Last slot: the deepest slice fades out.
    FadingOut,
    /// Focus is deeper than the specimen; nothing visible.
    BelowRange,
}

/// Texture pair and weights for one specimen at one focus depth.
///
/// For `frame_count >= 2` (the only counts a `Specimen` accepts),
/// `index_b == index_a + 1` holds for every phase. Smaller counts saturate to
/// the pair `(0, 0)` at the deep end of the range.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Blend {
    pub phase: BlendPhase,
    pub index_a: usize,
    pub index_b: usize,
    pub alpha_a: f32,
    pub alpha_b: f32,
}

impl Blend {
    /// True when neither draw contributes anything.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        self.alpha_a <= 0.0 && self.alpha_b <= 0.0
    }
}

/// Maps `depth` onto the slice pair of a specimen starting at `depth_top`
/// and spanning `depth_height`, with `frame_count` slices.
///
/// `frame_count >= 2` and `depth_height > 0` are validated when the
/// [`Specimen`](crate::Specimen) is built. With smaller counts the index
/// arithmetic saturates at 0 instead of panicking.
pub fn blend(depth: f32, depth_top: f32, depth_height: f32, frame_count: usize) -> Blend {
    let slot_count = frame_count + 1;
    let relative = depth - depth_top;
    let progression = (relative / depth_height) * slot_count as f32;

    let floor = progression.floor();
    let slot = floor as i64;
    let remainder = progression - floor;

    let last_pair = (frame_count.saturating_sub(2), frame_count.saturating_sub(1));

    let (phase, (index_a, index_b), alpha_a, alpha_b) = if slot < 0 {
        (BlendPhase::AboveRange, (0, 1), 0.0, 0.0)
    } else if slot < 1 {
        (BlendPhase::FadingIn, (0, 1), remainder, 0.0)
    } else if slot >= slot_count as i64 {
        (BlendPhase::BelowRange, last_pair, 0.0, 0.0)
    } else if slot >= frame_count as i64 {
        (BlendPhase::FadingOut, last_pair, 0.0, 1.0 - remainder)
    } else {
        // 1 <= slot < frame_count, so both indices are in range.
        let slot = slot as usize;
        (BlendPhase::Interior, (slot - 1, slot), 1.0 - remainder, remainder)
    };

    Blend { phase, index_a, index_b, alpha_a, alpha_b }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP: f32 = 150.0;
    const HEIGHT: f32 = 50.0;
    const FRAMES: usize = 21;

    fn at(depth: f32) -> Blend {
        blend(depth, TOP, HEIGHT, FRAMES)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-6
    }

    /// Weight contributed to slice `index` by `b`.
    fn weight_of(b: &Blend, index: usize) -> f32 {
        let mut w = 0.0;
        if index == b.index_a {
            w += b.alpha_a;
        }
        if index == b.index_b {
            w += b.alpha_b;
        }
        w
    }

    // ── concrete scenarios ────────────────────────────────────────────────

    #[test]
    fn top_of_range_is_start_of_fade_in() {
        let b = at(150.0);
        assert_eq!(b.phase, BlendPhase::FadingIn);
        assert_eq!((b.index_a, b.index_b), (0, 1));
        assert_eq!(b.alpha_a, 0.0);
        assert_eq!(b.alpha_b, 0.0);
    }

    #[test]
    fn mid_slot_splits_evenly() {
        // (12.5 / 50) * 22 = 5.5 → slot 5, remainder 0.5
        let b = at(162.5);
        assert_eq!(b.phase, BlendPhase::Interior);
        assert_eq!((b.index_a, b.index_b), (4, 5));
        assert!(approx(b.alpha_a, 0.5));
        assert!(approx(b.alpha_b, 0.5));
    }

    #[test]
    fn far_below_clamps_to_last_pair() {
        let b = at(300.0);
        assert_eq!(b.phase, BlendPhase::BelowRange);
        assert_eq!((b.index_a, b.index_b), (19, 20));
        assert_eq!(b.alpha_a, 0.0);
        assert_eq!(b.alpha_b, 0.0);
    }

    // ── phases ────────────────────────────────────────────────────────────

    #[test]
    fn above_range_is_invisible() {
        for depth in [-1000.0, 0.0, 100.0, 149.0, 149.999] {
            let b = at(depth);
            assert_eq!(b.phase, BlendPhase::AboveRange, "depth {depth}");
            assert!(b.is_invisible());
            assert_eq!((b.index_a, b.index_b), (0, 1));
        }
    }

    #[test]
    fn below_range_is_invisible() {
        for depth in [200.0, 201.0, 250.0, 1.0e6] {
            let b = at(depth);
            assert_eq!(b.phase, BlendPhase::BelowRange, "depth {depth}");
            assert!(b.is_invisible());
        }
    }

    #[test]
    fn fade_in_only_uses_first_slice() {
        // Slot 0 covers [150, 150 + 50/22).
        let b = at(151.0);
        assert_eq!(b.phase, BlendPhase::FadingIn);
        assert!(b.alpha_a > 0.0 && b.alpha_a < 1.0);
        assert_eq!(b.alpha_b, 0.0);
    }

    #[test]
    fn fade_out_only_uses_last_slice() {
        // Slot 21 covers [150 + 21*50/22, 200).
        let b = at(199.0);
        assert_eq!(b.phase, BlendPhase::FadingOut);
        assert_eq!((b.index_a, b.index_b), (19, 20));
        assert_eq!(b.alpha_a, 0.0);
        assert!(b.alpha_b > 0.0 && b.alpha_b < 1.0);
    }

    #[test]
    fn interior_alphas_sum_to_one() {
        let steps = 10_000;
        for i in 0..=steps {
            let depth = TOP + HEIGHT * i as f32 / steps as f32;
            let b = at(depth);
            if b.phase == BlendPhase::Interior {
                assert!(
                    (b.alpha_a + b.alpha_b - 1.0).abs() <= 1e-6,
                    "depth {depth}: {} + {}",
                    b.alpha_a,
                    b.alpha_b
                );
            }
        }
    }

    #[test]
    fn indices_are_adjacent_and_in_range() {
        for i in -100..400 {
            let b = at(i as f32 * 0.75);
            assert_eq!(b.index_b, b.index_a + 1);
            assert!(b.index_b < FRAMES);
            assert!((0.0..=1.0).contains(&b.alpha_a));
            assert!((0.0..=1.0).contains(&b.alpha_b));
        }
    }

    // ── sweep properties ──────────────────────────────────────────────────

    #[test]
    fn indices_never_decrease_with_depth() {
        let mut prev = at(TOP - 1.0);
        let steps = 5_000;
        for i in 0..=steps {
            let b = at(TOP + HEIGHT * i as f32 / steps as f32);
            assert!(b.index_a >= prev.index_a);
            assert!(b.index_b >= prev.index_b);
            prev = b;
        }
    }

    #[test]
    fn per_slice_weight_changes_continuously() {
        // Each slice fades over one slot of width HEIGHT/22 ≈ 2.27 depth units,
        // so a 0.001 step moves any weight by well under 0.01.
        let step = 0.001;
        let mut prev = at(TOP - 1.0);
        let mut depth = TOP - 1.0;
        while depth < TOP + HEIGHT + 1.0 {
            depth += step;
            let b = at(depth);
            for slice in 0..FRAMES {
                let jump = (weight_of(&b, slice) - weight_of(&prev, slice)).abs();
                assert!(jump < 0.01, "slice {slice} jumped {jump} at depth {depth}");
            }
            prev = b;
        }
    }

    #[test]
    fn blend_is_pure() {
        for depth in [140.0, 150.0, 162.5, 177.7, 199.9, 210.0] {
            assert_eq!(at(depth), at(depth));
        }
    }

    #[test]
    fn two_frame_specimen_has_three_slots() {
        // slot width = 10 / 3
        let fade_in = blend(1.0, 0.0, 10.0, 2);
        assert_eq!(fade_in.phase, BlendPhase::FadingIn);

        let interior = blend(5.0, 0.0, 10.0, 2);
        assert_eq!(interior.phase, BlendPhase::Interior);
        assert_eq!((interior.index_a, interior.index_b), (0, 1));

        let fade_out = blend(9.0, 0.0, 10.0, 2);
        assert_eq!(fade_out.phase, BlendPhase::FadingOut);
        assert_eq!((fade_out.index_a, fade_out.index_b), (0, 1));
    }

    #[test]
    fn single_frame_saturates_instead_of_panicking() {
        // 1 frame → 2 slots of 25 depth units each.
        let deep = blend(40.0, 0.0, 50.0, 1);
        assert_eq!(deep.phase, BlendPhase::FadingOut);
        assert_eq!((deep.index_a, deep.index_b), (0, 0));

        let below = blend(60.0, 0.0, 50.0, 1);
        assert_eq!((below.index_a, below.index_b), (0, 0));
        assert!(below.is_invisible());
    }
}
