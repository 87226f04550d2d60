/// Rejected specimen configuration.
///
/// Reported by [`Specimen::new`](crate::Specimen::new); the blend itself never
/// fails once a specimen exists.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpecimenError {
    #[error("specimen needs at least 2 depth slices, got {0}")]
    TooFewFrames(usize),

    #[error("specimen depth height must be > 0, got {0}")]
    NonPositiveHeight(f32),

    #[error("specimen radius must be > 0, got {0}")]
    NonPositiveRadius(f32),

    #[error("specimen field `{0}` is not finite")]
    NonFinite(&'static str),
}
