//! Draw planning.
//!
//! Each specimen owns two meshes: `2 * i` is slot A and `2 * i + 1` is slot B.
//! The planner decides *what* to draw (mesh, texture, alpha); the renderer only
//! replays the list against the GPU.

use crate::specimen::Specimen;

/// One textured circle draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawCall<T> {
    /// Mesh slot index (two per specimen).
    pub mesh: usize,
    pub texture: T,
    pub alpha: f32,
}

/// Mesh slot drawn with the specimen's `index_a` texture.
#[inline]
pub fn slot_a(specimen_index: usize) -> usize {
    specimen_index * 2
}

/// Mesh slot drawn with the specimen's `index_b` texture.
#[inline]
pub fn slot_b(specimen_index: usize) -> usize {
    specimen_index * 2 + 1
}

/// Builds the frame's draw list in specimen order, slot A before slot B.
///
/// Fully transparent calls are kept so the list length is always
/// `2 * specimens.len()`.
pub fn plan_draws<T: Copy>(specimens: &[Specimen<T>], depth: f32) -> Vec<DrawCall<T>> {
    let mut calls = Vec::with_capacity(specimens.len() * 2);
    plan_draws_into(specimens, depth, &mut calls);
    calls
}

/// Like [`plan_draws`] but reuses `out`'s allocation.
pub fn plan_draws_into<T: Copy>(specimens: &[Specimen<T>], depth: f32, out: &mut Vec<DrawCall<T>>) {
    out.clear();
    for (i, specimen) in specimens.iter().enumerate() {
        let b = specimen.blend_at(depth);
        let textures = specimen.textures();
        out.push(DrawCall { mesh: slot_a(i), texture: textures[b.index_a], alpha: b.alpha_a });
        out.push(DrawCall { mesh: slot_b(i), texture: textures[b.index_b], alpha: b.alpha_b });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specimen(top: f32, tag: u32) -> Specimen<u32> {
        // Texture handles encode specimen tag and slice so they are distinguishable.
        let textures = (0..21).map(|i| tag * 100 + i).collect();
        Specimen::new([0.0, 0.0], top, 50.0, 0.3, textures).unwrap()
    }

    #[test]
    fn two_calls_per_specimen_in_order() {
        let specimens = vec![specimen(150.0, 1), specimen(175.0, 2), specimen(136.0, 3)];
        let calls = plan_draws(&specimens, 162.5);

        assert_eq!(calls.len(), 6);
        let meshes: Vec<usize> = calls.iter().map(|c| c.mesh).collect();
        assert_eq!(meshes, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(calls[0].texture / 100, 1);
        assert_eq!(calls[2].texture / 100, 2);
        assert_eq!(calls[4].texture / 100, 3);
    }

    #[test]
    fn calls_carry_blend_result() {
        let specimens = vec![specimen(150.0, 1)];
        let calls = plan_draws(&specimens, 162.5);
        assert_eq!(calls[0], DrawCall { mesh: 0, texture: 104, alpha: 0.5 });
        assert_eq!(calls[1], DrawCall { mesh: 1, texture: 105, alpha: 0.5 });
    }

    #[test]
    fn invisible_specimens_still_emit_calls() {
        // 175 is above this specimen's range.
        let specimens = vec![specimen(175.0, 2)];
        let calls = plan_draws(&specimens, 150.0);
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|c| c.alpha == 0.0));
        assert_eq!(calls[0].texture, 200);
        assert_eq!(calls[1].texture, 201);
    }

    #[test]
    fn plan_into_reuses_buffer() {
        let specimens = vec![specimen(150.0, 1), specimen(175.0, 2)];
        let mut out = plan_draws(&specimens, 0.0);
        let cap = out.capacity();
        plan_draws_into(&specimens, 180.0, &mut out);
        assert_eq!(out.len(), 4);
        assert_eq!(out.capacity(), cap);
    }

    #[test]
    fn empty_scene_plans_nothing() {
        let calls = plan_draws::<u32>(&[], 100.0);
        assert!(calls.is_empty());
    }
}
