/// GraphicsDevice trait - the GPU texture interface consumed by resources
///
/// Backends (OpenGL, Vulkan, ...) implement this trait. The resource layer
/// only ever allocates, uploads, binds and releases texture handles through
/// it; vertex/index buffer upload lives with the renderer.

use crate::error::Result;
use super::texture::{TextureHandle, TextureTarget, TextureUpload};

/// GPU texture object factory
///
/// All methods take `&self`: the device is shared by every texture it created
/// (through `Rc<dyn GraphicsDevice>`) and is only ever driven from the render
/// thread, so implementations use interior mutability for their bookkeeping.
pub trait GraphicsDevice {
    /// Allocate a new texture name
    ///
    /// Must never return `TextureHandle::INVALID`.
    fn create_texture(&self) -> Result<TextureHandle>;

    /// Specify storage (and optionally contents) for a texture name
    fn upload_texture(&self, handle: TextureHandle, upload: &TextureUpload<'_>) -> Result<()>;

    /// Bind a texture name to a numbered texture unit
    fn bind_texture(&self, handle: TextureHandle, target: TextureTarget, unit: u32);

    /// Release a texture name
    ///
    /// Called exactly once per handle returned by `create_texture`.
    fn destroy_texture(&self, handle: TextureHandle);
}
