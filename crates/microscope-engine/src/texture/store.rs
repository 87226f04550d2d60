use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::RgbaImage;

use super::mipmap::mip_chain;

/// Error returned by [`TextureStore::load`].
#[derive(Debug, thiserror::Error)]
pub enum AssetLoadError {
    #[error("texture file not found: {}", .path.display())]
    Missing { path: PathBuf },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{} is {width}x{height}, device limit is {max}", .path.display())]
    TooLarge { path: PathBuf, width: u32, height: u32, max: u32 },
}

/// Reads `path` and converts it to RGBA8.
pub fn decode(path: &Path) -> Result<RgbaImage, AssetLoadError> {
    if !path.is_file() {
        return Err(AssetLoadError::Missing { path: path.to_path_buf() });
    }

    let rgba = image::open(path)
        .map_err(|source| AssetLoadError::Decode { path: path.to_path_buf(), source })?
        .to_rgba8();
    Ok(rgba)
}

/// Opaque handle to a texture owned by a [`TextureStore`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub(crate) usize);

struct SliceTexture {
    // Kept alive for the bind group.
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

/// Owns every loaded slice texture plus the shared sampler and layout.
///
/// Loading the same path twice returns the first id, so specimens sharing a
/// slice stack share GPU memory.
pub struct TextureStore {
    layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    textures: Vec<SliceTexture>,
    by_path: HashMap<PathBuf, TextureId>,
}

impl TextureStore {
    pub fn new(device: &wgpu::Device) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("microscope slice bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("microscope slice sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Linear,
            ..Default::default()
        });

        Self {
            layout,
            sampler,
            textures: Vec::new(),
            by_path: HashMap::new(),
        }
    }

    /// Layout of the per-texture bind group (texture at 0, sampler at 1).
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    pub(crate) fn bind_group(&self, id: TextureId) -> Option<&wgpu::BindGroup> {
        self.textures.get(id.0).map(|t| &t.bind_group)
    }

    /// Decodes `path`, uploads it with a full mip chain and returns its id.
    pub fn load(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: impl AsRef<Path>,
    ) -> Result<TextureId, AssetLoadError> {
        let path = path.as_ref();
        if let Some(id) = self.by_path.get(path) {
            return Ok(*id);
        }

        let rgba = decode(path)?;

        let (width, height) = rgba.dimensions();
        let max = device.limits().max_texture_dimension_2d;
        if width > max || height > max {
            return Err(AssetLoadError::TooLarge { path: path.to_path_buf(), width, height, max });
        }

        let label = format!("microscope slice {}", path.display());
        let id = self.upload(device, queue, &label, rgba);
        self.by_path.insert(path.to_path_buf(), id);

        log::debug!("loaded {} ({width}x{height}) as {:?}", path.display(), id);
        Ok(id)
    }

    /// Loads every path in order; stops at the first failure.
    pub fn load_all<P: AsRef<Path>>(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        paths: &[P],
    ) -> Result<Vec<TextureId>, AssetLoadError> {
        paths.iter().map(|p| self.load(device, queue, p)).collect()
    }

    fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        rgba: RgbaImage,
    ) -> TextureId {
        let (width, height) = rgba.dimensions();
        let levels = mip_chain(rgba);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
            mip_level_count: levels.len() as u32,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        for (level, img) in levels.iter().enumerate() {
            let (w, h) = img.dimensions();
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: level as u32,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                img.as_raw(),
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * w),
                    rows_per_image: Some(h),
                },
                wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        let id = TextureId(self.textures.len());
        self.textures.push(SliceTexture { _texture: texture, bind_group });
        id
    }
}
