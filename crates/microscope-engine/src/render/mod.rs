//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and replay draw
//! lists planned on the CPU.
//!
//! Convention: geometry is authored directly in normalized device
//! coordinates (+Y up); no viewport transform is applied.

mod ctx;
pub mod shader;
pub mod specimen;

pub use ctx::{RenderCtx, RenderTarget};
