//! Core engine-facing contracts.
//!
//! The interface between the runtime (platform loop) and the application:
//! a one-time init hook once the GPU exists, and a per-frame callback with a
//! consistent frame context.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
