/// Path-keyed texture cache.
///
/// Owns every texture of a resource manager: the built-ins, textures loaded
/// from files, and single-channel textures split out of a source image.
/// Textures live in a SlotMap and are handed out as `TextureKey`s; a path
/// maps to at most one key, and a key names the same texture until the cache
/// is dropped.
///
/// Load failures never touch the map: the caller gets the MISSING built-in
/// and a warning is logged. A later request for the same path tries again.

use std::path::{Path, PathBuf};
use std::rc::Rc;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use crate::error::Result;
use crate::graphics_device::{GraphicsDevice, TextureFormat};
use crate::{engine_bail, engine_debug, engine_info, engine_warn};
use crate::resource::built_in::{BuiltInTexture, BuiltInTextures};
use crate::resource::image_decoder::{DecodedImage, ImageDecoder};
use crate::resource::texture::Texture;

const SOURCE: &str = "acorn::TextureCache";

new_key_type! {
    /// Stable key for a Texture owned by a TextureCache.
    ///
    /// Keys are never reused for a different texture while the cache lives.
    pub struct TextureKey;
}

// ============================================================================
// CHANNELS
// ============================================================================

/// A component of an RGBA image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Component index within an RGBA pixel
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }

    /// Suffix appended to the source path to form the channel's cache path
    pub fn suffix(self) -> &'static str {
        match self {
            Channel::Red => "_r",
            Channel::Green => "_g",
            Channel::Blue => "_b",
            Channel::Alpha => "_a",
        }
    }

    /// Cache path of this channel of `path`
    pub fn cache_path(self, path: &str) -> String {
        format!("{}{}", path, self.suffix())
    }
}

/// Result of a channel split: one texture per requested channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitTextures {
    keys: [Option<TextureKey>; 4],
    extracted: usize,
}

impl SplitTextures {
    /// Texture for a channel, `None` if the channel was not requested
    pub fn get(&self, channel: Channel) -> Option<TextureKey> {
        self.keys[channel.index()]
    }

    pub fn red(&self) -> Option<TextureKey> {
        self.get(Channel::Red)
    }

    pub fn green(&self) -> Option<TextureKey> {
        self.get(Channel::Green)
    }

    pub fn blue(&self) -> Option<TextureKey> {
        self.get(Channel::Blue)
    }

    pub fn alpha(&self) -> Option<TextureKey> {
        self.get(Channel::Alpha)
    }

    /// Number of channels extracted from a freshly decoded image by this call
    pub fn extracted(&self) -> usize {
        self.extracted
    }

    fn set(&mut self, channel: Channel, key: TextureKey) {
        self.keys[channel.index()] = Some(key);
    }
}

// ============================================================================
// TEXTURE CACHE
// ============================================================================

/// Owner of all textures of a resource manager
pub struct TextureCache {
    device: Rc<dyn GraphicsDevice>,
    decoder: Box<dyn ImageDecoder>,
    asset_root: PathBuf,
    textures: SlotMap<TextureKey, Texture>,
    paths: FxHashMap<String, TextureKey>,
    built_ins: BuiltInTextures,
}

impl TextureCache {
    /// Create a cache and its built-in textures
    ///
    /// # Errors
    ///
    /// Returns `Error::InitializationFailed` if a built-in texture cannot be
    /// created on the device.
    pub fn new(
        device: Rc<dyn GraphicsDevice>,
        decoder: Box<dyn ImageDecoder>,
        asset_root: PathBuf,
    ) -> Result<Self> {
        let mut textures = SlotMap::with_key();
        let built_ins = BuiltInTextures::create(&device, &mut textures)?;
        engine_debug!(SOURCE, "Created {} built-in textures", textures.len());

        Ok(Self {
            device,
            decoder,
            asset_root,
            textures,
            paths: FxHashMap::default(),
            built_ins,
        })
    }

    /// Get the texture for `path`, loading it on first request
    ///
    /// Returns the MISSING built-in if the image cannot be decoded or
    /// uploaded; nothing is cached in that case.
    pub fn get_texture(&mut self, path: &str) -> TextureKey {
        if let Some(&key) = self.paths.get(path) {
            return key;
        }

        engine_info!(SOURCE, "Loading texture '{}'", path);

        let Some(image) = self.decode(path) else {
            return self.built_ins.missing;
        };

        let texture = Texture::from_pixels_2d(
            Rc::clone(&self.device),
            image.width(),
            image.height(),
            TextureFormat::RGBA8,
            image.pixels(),
        );
        drop(image);

        match texture {
            Ok(texture) => self.insert(path.to_string(), texture),
            Err(e) => {
                engine_warn!(SOURCE, "Failed to create texture '{}': {}", path, e);
                self.built_ins.missing
            }
        }
    }

    /// Get single-channel (R8) textures for some channels of `path`
    ///
    /// Each channel is cached under `path + suffix` (`_r`, `_g`, `_b`, `_a`).
    /// Channels already cached are returned as-is; the source image is decoded
    /// at most once, and only if a requested channel is not cached yet. On
    /// decode failure every uncached requested channel gets the MISSING
    /// built-in and nothing is cached.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let split = cache.get_texture_split_components(
    ///     "rock/orm.png", &[Channel::Green, Channel::Blue]);
    /// material.roughness_texture = split.green();
    /// material.metallic_texture = split.blue();
    /// ```
    pub fn get_texture_split_components(&mut self, path: &str, channels: &[Channel]) -> SplitTextures {
        let mut result = SplitTextures::default();
        let mut pending = [false; 4];
        for &channel in channels {
            pending[channel.index()] = true;
        }

        for channel in Channel::ALL {
            if !pending[channel.index()] {
                continue;
            }
            if let Some(&key) = self.paths.get(&channel.cache_path(path)) {
                result.set(channel, key);
                pending[channel.index()] = false;
            }
        }

        if !pending.contains(&true) {
            return result;
        }

        engine_info!(SOURCE, "Loading texture '{}' for channel split", path);

        let Some(image) = self.decode(path) else {
            for channel in Channel::ALL.into_iter().filter(|c| pending[c.index()]) {
                result.set(channel, self.built_ins.missing);
            }
            return result;
        };

        // One scratch buffer for every extracted channel of this image
        let mut scratch = vec![0u8; image.pixel_count()];

        for channel in Channel::ALL.into_iter().filter(|c| pending[c.index()]) {
            image.extract_channel(channel.index(), &mut scratch);

            let key = match Texture::from_pixels_2d(
                Rc::clone(&self.device),
                image.width(),
                image.height(),
                TextureFormat::R8,
                &scratch,
            ) {
                Ok(texture) => {
                    result.extracted += 1;
                    self.insert(channel.cache_path(path), texture)
                }
                Err(e) => {
                    engine_warn!(SOURCE, "Failed to create texture '{}': {}",
                        channel.cache_path(path), e);
                    self.built_ins.missing
                }
            };
            result.set(channel, key);
        }

        drop(scratch);
        drop(image);
        result
    }

    /// Register an already created texture under `path`
    ///
    /// Used by model loaders for textures that do not come from an image file
    /// (embedded or generated data).
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is already cached.
    pub fn add_texture(&mut self, path: &str, texture: Texture) -> Result<TextureKey> {
        if self.paths.contains_key(path) {
            engine_bail!(SOURCE, "Texture '{}' already exists", path);
        }
        Ok(self.insert(path.to_string(), texture))
    }

    /// Key of a built-in texture
    pub fn built_in(&self, kind: BuiltInTexture) -> TextureKey {
        self.built_ins.get(kind)
    }

    /// Key of a built-in texture by numeric id
    ///
    /// An unknown id is a caller bug; it is logged and MISSING is returned.
    pub fn built_in_from_id(&self, id: u32) -> TextureKey {
        match BuiltInTexture::from_id(id) {
            Some(kind) => self.built_in(kind),
            None => {
                engine_warn!(SOURCE, "Unhandled case for getting a built in texture: {}", id);
                self.built_ins.missing
            }
        }
    }

    pub fn built_ins(&self) -> &BuiltInTextures {
        &self.built_ins
    }

    /// Texture for a key
    pub fn texture(&self, key: TextureKey) -> Option<&Texture> {
        self.textures.get(key)
    }

    /// Key cached under `path`, without loading
    pub fn lookup(&self, path: &str) -> Option<TextureKey> {
        self.paths.get(path).copied()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains_key(path)
    }

    /// Number of path-keyed textures (built-ins excluded)
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Cached paths, in no particular order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(|p| p.as_str())
    }

    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }

    pub fn device(&self) -> &Rc<dyn GraphicsDevice> {
        &self.device
    }

    fn decode(&self, path: &str) -> Option<DecodedImage> {
        match self.decoder.decode_rgba8(&self.asset_root.join(path)) {
            Ok(image) => Some(image),
            Err(e) => {
                engine_warn!(SOURCE, "Failed to load image '{}': {}", path, e);
                None
            }
        }
    }

    fn insert(&mut self, path: String, texture: Texture) -> TextureKey {
        debug_assert!(!self.paths.contains_key(&path), "texture '{}' cached twice", path);
        let key = self.textures.insert(texture);
        self.paths.insert(path, key);
        key
    }

    /// Release loaded textures, then the built-ins
    pub(crate) fn release_all(&mut self) {
        self.release_loaded();
        self.release_built_ins();
    }

    /// Release every path-keyed texture, keeping the built-ins
    pub(crate) fn release_loaded(&mut self) {
        let loaded = self.paths.len();
        for (_, key) in self.paths.drain() {
            self.textures.remove(key);
        }
        engine_debug!(SOURCE, "Released {} loaded textures", loaded);
    }

    /// Release the built-ins; call after `release_loaded`
    pub(crate) fn release_built_ins(&mut self) {
        debug_assert!(self.paths.is_empty());
        // Only built-ins remain
        self.textures.clear();
        engine_debug!(SOURCE, "Released the built-in textures");
    }
}

impl Drop for TextureCache {
    fn drop(&mut self) {
        if !self.textures.is_empty() {
            self.release_all();
        }
    }
}

#[cfg(test)]
#[path = "texture_cache_tests.rs"]
mod tests;
