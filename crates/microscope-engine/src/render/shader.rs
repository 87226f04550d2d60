//! WGSL compilation with up-front validation.
//!
//! wgpu reports shader errors through the device's error callback, which
//! panics by default. Parsing and validating with naga first turns a bad
//! shader into an ordinary startup error.

use naga::valid::{Capabilities, ValidationFlags, Validator};

/// A WGSL source that failed to parse or validate.
#[derive(Debug, thiserror::Error)]
#[error("shader `{label}` failed to compile:\n{message}")]
pub struct ShaderCompileError {
    pub label: String,
    pub message: String,
}

/// Parses and validates `source` without touching the GPU.
pub fn validate_wgsl(label: &str, source: &str) -> Result<(), ShaderCompileError> {
    let module = naga::front::wgsl::parse_str(source).map_err(|e| ShaderCompileError {
        label: label.to_string(),
        message: e.emit_to_string(source),
    })?;

    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|e| ShaderCompileError {
            label: label.to_string(),
            message: e.emit_to_string(source),
        })?;

    Ok(())
}

/// Validates `source`, then creates the shader module.
pub fn compile_wgsl(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, ShaderCompileError> {
    validate_wgsl(label, source)?;

    log::debug!("compiled shader `{label}`");
    Ok(device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    }))
}
