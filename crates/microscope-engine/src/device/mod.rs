//! GPU device + surface management.
//!
//! Creates the wgpu instance/adapter/device/queue for the viewer window,
//! configures the swapchain and hands out one encoder + view per frame.

mod gpu;
mod init;

pub use gpu::{Gpu, GpuFrame, SurfaceErrorAction};
pub use init::GpuInit;
