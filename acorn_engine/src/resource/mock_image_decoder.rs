/// Mock ImageDecoder for unit tests (no files required)
///
/// Serves in-memory images by path and records every decode request.
/// Clones share state, so a test can keep one clone for inspection after
/// handing another to a cache.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::resource::image_decoder::{DecodedImage, ImageDecoder};

#[derive(Debug, Clone, Default)]
pub struct MockImageDecoder {
    images: Rc<RefCell<FxHashMap<PathBuf, DecodedImage>>>,
    requests: Rc<RefCell<Vec<PathBuf>>>,
}

impl MockImageDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `image` for `path`
    pub fn add_image(&self, path: impl Into<PathBuf>, image: DecodedImage) {
        self.images.borrow_mut().insert(path.into(), image);
    }

    /// Stop serving `path` (later decodes fail)
    pub fn remove_image(&self, path: impl AsRef<Path>) {
        self.images.borrow_mut().remove(path.as_ref());
    }

    /// Total number of decode requests
    pub fn decode_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// Number of decode requests for one path
    pub fn decode_count_for(&self, path: impl AsRef<Path>) -> usize {
        self.requests.borrow().iter().filter(|p| p.as_path() == path.as_ref()).count()
    }
}

impl ImageDecoder for MockImageDecoder {
    fn decode_rgba8(&self, path: &Path) -> Result<DecodedImage> {
        self.requests.borrow_mut().push(path.to_path_buf());
        self.images
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| Error::DecodeFailed(format!("can't fopen '{}'", path.display())))
    }
}

/// `width` x `height` RGBA8 image whose bytes count up from 0 (wrapping)
///
/// Channel `c` of pixel `i` is `(4 * i + c) as u8`.
pub fn counting_image(width: u32, height: u32) -> DecodedImage {
    let len = (width * height * 4) as usize;
    let pixels = (0..len).map(|b| b as u8).collect();
    DecodedImage::new(width, height, pixels).expect("buffer sized from the dimensions")
}
