//! Focus model for the microscope viewer.
//!
//! This crate owns everything that can be decided without a GPU:
//! - mapping a focus depth onto a pair of depth-slice textures (`blend`)
//! - specimen configuration and validation (`specimen`)
//! - the mutable focus depth / scroll step (`focus`)
//! - turning specimens into an ordered list of draw calls (`plan`)
//!
//! Texture handles are generic so the engine can plug in its own id type.

pub mod blend;
pub mod error;
pub mod focus;
pub mod plan;
pub mod specimen;

pub use blend::{blend, Blend, BlendPhase};
pub use error::SpecimenError;
pub use focus::{FocusBounds, FocusChange, FocusCommand, FocusState};
pub use plan::{plan_draws, plan_draws_into, slot_a, slot_b, DrawCall};
pub use specimen::Specimen;
