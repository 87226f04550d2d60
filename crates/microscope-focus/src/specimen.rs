use crate::blend::{blend, Blend};
use crate::error::SpecimenError;

/// One circular sprite with its own depth range and slice stack.
///
/// `T` is the texture handle type; the engine uses its `TextureId`.
/// Fields are private so the construction-time checks cannot be bypassed.
#[derive(Debug, Clone, PartialEq)]
pub struct Specimen<T> {
    center: [f32; 2],
    depth_top: f32,
    depth_height: f32,
    radius: f32,
    textures: Vec<T>,
}

impl<T> Specimen<T> {
    /// Validates and builds a specimen.
    ///
    /// `center` is in normalized device coordinates. `textures` are ordered
    /// from shallowest to deepest slice.
    pub fn new(
        center: [f32; 2],
        depth_top: f32,
        depth_height: f32,
        radius: f32,
        textures: Vec<T>,
    ) -> Result<Self, SpecimenError> {
        if !(center[0].is_finite() && center[1].is_finite()) {
            return Err(SpecimenError::NonFinite("center"));
        }
        if !depth_top.is_finite() {
            return Err(SpecimenError::NonFinite("depth_top"));
        }
        if !depth_height.is_finite() {
            return Err(SpecimenError::NonFinite("depth_height"));
        }
        if !radius.is_finite() {
            return Err(SpecimenError::NonFinite("radius"));
        }
        if depth_height <= 0.0 {
            return Err(SpecimenError::NonPositiveHeight(depth_height));
        }
        if radius <= 0.0 {
            return Err(SpecimenError::NonPositiveRadius(radius));
        }
        if textures.len() < 2 {
            return Err(SpecimenError::TooFewFrames(textures.len()));
        }

        Ok(Self { center, depth_top, depth_height, radius, textures })
    }

    #[inline]
    pub fn center(&self) -> [f32; 2] {
        self.center
    }

    #[inline]
    pub fn depth_top(&self) -> f32 {
        self.depth_top
    }

    #[inline]
    pub fn depth_height(&self) -> f32 {
        self.depth_height
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn textures(&self) -> &[T] {
        &self.textures
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.textures.len()
    }

    /// Blend for this specimen at the given focus depth.
    pub fn blend_at(&self, depth: f32) -> Blend {
        blend(depth, self.depth_top, self.depth_height, self.textures.len())
    }
}
