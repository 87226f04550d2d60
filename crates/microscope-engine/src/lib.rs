//! Microscope engine crate.
//!
//! Platform and GPU runtime for the viewer: the winit loop, input translation,
//! wgpu device/surface, texture loading and the specimen renderer. Blend math
//! and focus state live in `microscope-focus`.

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod texture;
pub mod window;
