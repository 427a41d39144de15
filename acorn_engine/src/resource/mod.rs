//! Resource management module
//!
//! Path-keyed ownership of textures and models, the built-in fallbacks, and
//! the decode/load collaborators the caches depend on.

pub mod built_in;
pub mod image_decoder;
pub mod material;
pub mod mesh;
pub mod model;
mod resource_manager;
pub mod texture;
pub mod texture_cache;

// In-memory image decoder for tests
#[cfg(test)]
pub mod mock_image_decoder;

pub use resource_manager::{ResourceManager, ResourceManagerConfig};
pub use texture::{Texture, TextureKind};
pub use texture_cache::{Channel, SplitTextures, TextureCache, TextureKey};
pub use image_decoder::{DecodedImage, FileImageDecoder, ImageDecoder};
pub use material::{Material, MaterialSlot};
pub use mesh::{Mesh, Vertex};
pub use model::{Model, ModelKey, ModelLoader};
pub use built_in::{BuiltInModel, BuiltInTexture, BuiltInTextures};
