//! Slice texture loading.
//!
//! Images are decoded with the `image` crate, uploaded as RGBA8 with a full
//! mip chain, and addressed by [`TextureId`]. Each texture carries its own bind
//! group so the renderer only switches bind groups between draws.

mod mipmap;
mod store;

pub use mipmap::{mip_chain, mip_level_count};
pub use store::{decode, AssetLoadError, TextureId, TextureStore};
