//! Windowing runtime built on winit.
//!
//! Opens one window, owns its GPU surface and drives the application's
//! init hook and per-frame callback.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
