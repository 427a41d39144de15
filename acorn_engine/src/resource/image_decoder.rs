//! Image decoding collaborator.
//!
//! Turns an image file into a flat RGBA8 pixel buffer. The texture cache only
//! depends on the `ImageDecoder` trait; `FileImageDecoder` is the default
//! implementation backed by the `image` crate.

use std::path::Path;
use crate::error::{Error, Result};

/// Number of components in every decoded pixel
pub const DECODED_COMPONENTS: usize = 4;

/// A decoded image with 4 components (RGBA, 8 bits each) per pixel
///
/// Only built through `new`, so the buffer always matches the dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    /// Row-major RGBA8 pixels, `width * height * 4` bytes
    pixels: Vec<u8>,
}

impl DecodedImage {
    /// Wrap an RGBA8 buffer
    ///
    /// # Errors
    ///
    /// Returns `Error::DecodeFailed` if the buffer length does not match the
    /// dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * DECODED_COMPONENTS;
        if pixels.len() != expected {
            return Err(Error::DecodeFailed(format!(
                "decoded buffer is {} bytes, expected {} for {}x{}",
                pixels.len(), expected, width, height
            )));
        }
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Copy one component of every pixel into `out`
    ///
    /// `out` must hold exactly `pixel_count()` bytes.
    pub fn extract_channel(&self, channel: usize, out: &mut [u8]) {
        debug_assert!(channel < DECODED_COMPONENTS);
        debug_assert_eq!(out.len(), self.pixel_count());
        for (dst, pixel) in out.iter_mut().zip(self.pixels.chunks_exact(DECODED_COMPONENTS)) {
            *dst = pixel[channel];
        }
    }
}

/// Decodes image files into RGBA8 buffers
pub trait ImageDecoder {
    /// Decode the file at `path`, converting to 4 components per pixel
    ///
    /// Fails with `Error::DecodeFailed` carrying a human-readable reason.
    fn decode_rgba8(&self, path: &Path) -> Result<DecodedImage>;
}

/// `ImageDecoder` backed by the `image` crate
#[derive(Debug, Clone)]
pub struct FileImageDecoder {
    flip_vertically: bool,
}

impl FileImageDecoder {
    /// Create a decoder; `flip_vertically` puts the first row at the bottom,
    /// matching texture coordinates with v pointing up
    pub fn new(flip_vertically: bool) -> Self {
        Self { flip_vertically }
    }

    pub fn flips_vertically(&self) -> bool {
        self.flip_vertically
    }
}

impl Default for FileImageDecoder {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ImageDecoder for FileImageDecoder {
    fn decode_rgba8(&self, path: &Path) -> Result<DecodedImage> {
        let image = image::open(path).map_err(|e| {
            Error::DecodeFailed(format!("'{}': {}", path.display(), e))
        })?;

        let mut rgba = image.into_rgba8();
        if self.flip_vertically {
            image::imageops::flip_vertical_in_place(&mut rgba);
        }

        let (width, height) = rgba.dimensions();
        DecodedImage::new(width, height, rgba.into_raw())
    }
}

#[cfg(test)]
#[path = "image_decoder_tests.rs"]
mod tests;
