/// Texture handle, pixel formats, and upload descriptors

// ===== HANDLE =====

/// Opaque GPU texture name
///
/// `0` is never handed out by a device and marks a texture that no longer
/// owns anything (moved-from or never allocated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(u32);

impl TextureHandle {
    /// Sentinel for "owns no GPU object"
    pub const INVALID: TextureHandle = TextureHandle(0);

    /// Wrap a raw device id
    pub const fn from_raw(id: u32) -> Self {
        Self(id)
    }

    /// Raw device id
    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl Default for TextureHandle {
    fn default() -> Self {
        Self::INVALID
    }
}

// ===== FORMAT =====

/// Pixel format of uploaded texture data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    RGB8,
    RGBA8,
    RG16F,
    RGB16F,
    RGBA16F,
    /// Single 8-bit channel (used for split material channels)
    R8,
}

impl TextureFormat {
    /// Number of components per pixel
    pub fn components(self) -> u32 {
        match self {
            TextureFormat::R8 => 1,
            TextureFormat::RG16F => 2,
            TextureFormat::RGB8 | TextureFormat::RGB16F => 3,
            TextureFormat::RGBA8 | TextureFormat::RGBA16F => 4,
        }
    }

    /// Size of one pixel in bytes
    pub fn bytes_per_pixel(self) -> u32 {
        match self {
            TextureFormat::R8 => 1,
            TextureFormat::RGB8 => 3,
            TextureFormat::RGBA8 | TextureFormat::RG16F => 4,
            TextureFormat::RGB16F => 6,
            TextureFormat::RGBA16F => 8,
        }
    }

    /// Expected byte length of a `width` x `height` image in this format
    pub fn image_size(self, width: u32, height: u32) -> usize {
        width as usize * height as usize * self.bytes_per_pixel() as usize
    }
}

// ===== TARGET =====

/// Binding target of a texture handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureTarget {
    Tex2D,
    Cube,
}

/// Cube map faces, in upload order (+X, -X, +Y, -Y, +Z, -Z)
pub const CUBE_FACE_COUNT: usize = 6;

// ===== UPLOAD =====

/// Storage description for a texture handle
///
/// `data: None` allocates uninitialized storage.
#[derive(Debug, Clone, Copy)]
pub enum TextureUpload<'a> {
    Planar2D {
        width: u32,
        height: u32,
        format: TextureFormat,
        data: Option<&'a [u8]>,
    },
    Cube {
        side_length: u32,
        format: TextureFormat,
        faces: Option<[&'a [u8]; CUBE_FACE_COUNT]>,
    },
}

impl TextureUpload<'_> {
    /// Target the upload applies to
    pub fn target(&self) -> TextureTarget {
        match self {
            TextureUpload::Planar2D { .. } => TextureTarget::Tex2D,
            TextureUpload::Cube { .. } => TextureTarget::Cube,
        }
    }

    pub fn format(&self) -> TextureFormat {
        match *self {
            TextureUpload::Planar2D { format, .. } | TextureUpload::Cube { format, .. } => format,
        }
    }
}
