/// Resource-level texture type.
///
/// A `Texture` owns exactly one GPU texture name allocated from a
/// `GraphicsDevice`. Two kinds exist, chosen at construction time:
///
/// - **Planar2D**: a single 2D image
/// - **Cube**: six square faces of equal side length
///
/// The name is released when the texture is dropped. Textures are not
/// `Clone`; ownership of the name moves with the value.

use std::rc::Rc;
use crate::error::{Error, Result};
use crate::engine_warn;
use crate::graphics_device::{
    GraphicsDevice, TextureFormat, TextureHandle, TextureTarget, TextureUpload, CUBE_FACE_COUNT,
};

/// Kind of a texture, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Planar2D,
    Cube,
}

impl TextureKind {
    /// Binding target used for this kind
    pub fn target(self) -> TextureTarget {
        match self {
            TextureKind::Planar2D => TextureTarget::Tex2D,
            TextureKind::Cube => TextureTarget::Cube,
        }
    }
}

/// A GPU image resource
pub struct Texture {
    device: Rc<dyn GraphicsDevice>,
    handle: TextureHandle,
    kind: TextureKind,
    format: TextureFormat,
    width: u32,
    height: u32,
}

impl Texture {
    fn allocate(device: Rc<dyn GraphicsDevice>, kind: TextureKind) -> Result<Self> {
        let handle = device.create_texture()?;
        if !handle.is_valid() {
            return Err(Error::BackendError(
                "graphics device returned the invalid texture handle".to_string()
            ));
        }
        Ok(Self {
            device,
            handle,
            kind,
            format: TextureFormat::RGBA8,
            width: 0,
            height: 0,
        })
    }

    /// Allocate a planar 2D texture with no storage yet
    pub fn new_2d(device: Rc<dyn GraphicsDevice>) -> Result<Self> {
        Self::allocate(device, TextureKind::Planar2D)
    }

    /// Allocate a cube map texture with no storage yet
    pub fn new_cube(device: Rc<dyn GraphicsDevice>) -> Result<Self> {
        Self::allocate(device, TextureKind::Cube)
    }

    /// Allocate a planar 2D texture and upload `data` into it
    pub fn from_pixels_2d(
        device: Rc<dyn GraphicsDevice>,
        width: u32,
        height: u32,
        format: TextureFormat,
        data: &[u8],
    ) -> Result<Self> {
        let mut texture = Self::new_2d(device)?;
        texture.set_image(width, height, format, Some(data))?;
        Ok(texture)
    }

    /// Specify the image of a planar 2D texture
    ///
    /// With `data: None` the GPU storage is allocated uninitialized.
    ///
    /// # Errors
    ///
    /// - the texture is a cube map or no longer owns a handle
    /// - `width` or `height` is zero
    /// - `data` does not hold exactly `width * height` pixels of `format`
    pub fn set_image(
        &mut self,
        width: u32,
        height: u32,
        format: TextureFormat,
        data: Option<&[u8]>,
    ) -> Result<()> {
        self.check_kind(TextureKind::Planar2D)?;
        check_extent(width, height)?;
        if let Some(data) = data {
            check_len(data, format.image_size(width, height), "image")?;
        }

        self.device.upload_texture(self.handle, &TextureUpload::Planar2D {
            width,
            height,
            format,
            data,
        })?;

        self.width = width;
        self.height = height;
        self.format = format;
        Ok(())
    }

    /// Specify the six faces of a cube map texture
    ///
    /// With `faces: None` the GPU storage is allocated uninitialized.
    pub fn set_cube_image(
        &mut self,
        side_length: u32,
        format: TextureFormat,
        faces: Option<[&[u8]; CUBE_FACE_COUNT]>,
    ) -> Result<()> {
        self.check_kind(TextureKind::Cube)?;
        check_extent(side_length, side_length)?;
        if let Some(faces) = faces {
            let expected = format.image_size(side_length, side_length);
            for face in faces {
                check_len(face, expected, "cube face")?;
            }
        }

        self.device.upload_texture(self.handle, &TextureUpload::Cube {
            side_length,
            format,
            faces,
        })?;

        self.width = side_length;
        self.height = side_length;
        self.format = format;
        Ok(())
    }

    /// Bind this texture to a numbered texture unit
    pub fn bind(&self, unit: u32) {
        if !self.handle.is_valid() {
            engine_warn!("acorn::Texture", "Binding a texture that owns no GPU handle (unit {})", unit);
            return;
        }
        self.device.bind_texture(self.handle, self.kind.target(), unit);
    }

    /// Move the GPU handle out into a new `Texture`
    ///
    /// `self` is left owning `TextureHandle::INVALID`, so dropping it
    /// releases nothing.
    pub fn take(&mut self) -> Texture {
        Texture {
            device: Rc::clone(&self.device),
            handle: std::mem::replace(&mut self.handle, TextureHandle::INVALID),
            kind: self.kind,
            format: self.format,
            width: std::mem::take(&mut self.width),
            height: std::mem::take(&mut self.height),
        }
    }

    pub fn handle(&self) -> TextureHandle {
        self.handle
    }

    /// Whether this texture still owns a GPU handle
    pub fn is_valid(&self) -> bool {
        self.handle.is_valid()
    }

    pub fn kind(&self) -> TextureKind {
        self.kind
    }

    pub fn format(&self) -> TextureFormat {
        self.format
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn check_kind(&self, expected: TextureKind) -> Result<()> {
        if !self.handle.is_valid() {
            return Err(Error::InvalidResource("texture owns no GPU handle".to_string()));
        }
        if self.kind != expected {
            return Err(Error::InvalidResource(format!(
                "texture is {:?}, operation requires {:?}", self.kind, expected
            )));
        }
        Ok(())
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        if self.handle.is_valid() {
            self.device.destroy_texture(self.handle);
            self.handle = TextureHandle::INVALID;
        }
    }
}

impl std::fmt::Debug for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture")
            .field("handle", &self.handle)
            .field("kind", &self.kind)
            .field("format", &self.format)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

fn check_extent(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidResource(format!(
            "texture extent must be non-zero (got {}x{})", width, height
        )));
    }
    Ok(())
}

fn check_len(data: &[u8], expected: usize, what: &str) -> Result<()> {
    if data.len() != expected {
        return Err(Error::InvalidResource(format!(
            "{} data is {} bytes, expected {}", what, data.len(), expected
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
