/// Central resource manager for the engine.
///
/// Owns every texture and model the engine uses, keyed by logical path, plus
/// the built-in fallbacks. Callers get `TextureKey`s and `ModelKey`s that stay
/// valid for the manager's lifetime and resolve them through `texture()` and
/// `model()`.

use std::path::PathBuf;
use std::rc::Rc;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use crate::error::{Error, Result};
use crate::graphics_device::GraphicsDevice;
use crate::{engine_debug, engine_error, engine_info, engine_warn};
use crate::resource::built_in::{plane_model, BuiltInModel, BuiltInTexture};
use crate::resource::image_decoder::{FileImageDecoder, ImageDecoder};
use crate::resource::model::{Model, ModelKey, ModelLoader};
use crate::resource::texture::Texture;
use crate::resource::texture_cache::{Channel, SplitTextures, TextureCache, TextureKey};

const SOURCE: &str = "acorn::ResourceManager";

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Resource manager configuration
#[derive(Debug, Clone)]
pub struct ResourceManagerConfig {
    /// Directory resource paths are resolved against (empty: paths are used as given)
    pub asset_root: PathBuf,

    /// Flip decoded images so the first row ends up at the bottom
    /// (used by `ResourceManager::with_defaults`)
    pub flip_vertically_on_load: bool,
}

impl Default for ResourceManagerConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::new(),
            flip_vertically_on_load: true,
        }
    }
}

// ============================================================================
// RESOURCE MANAGER
// ============================================================================

/// Owner of all textures and models
///
/// # Example
///
/// ```ignore
/// let mut resources = ResourceManager::with_defaults(device, Box::new(loader), config)?;
/// let rock = resources.get_model("rock/rock.obj")?;
/// let albedo = resources.get_texture("rock/albedo.png");
/// let plane = resources.built_in_model(BuiltInModel::Plane);
/// ```
pub struct ResourceManager {
    config: ResourceManagerConfig,
    textures: TextureCache,
    models: SlotMap<ModelKey, Model>,
    model_paths: FxHashMap<String, ModelKey>,
    model_loader: Box<dyn ModelLoader>,
    plane: ModelKey,
}

impl ResourceManager {
    /// Create a manager and its built-in resources
    ///
    /// # Errors
    ///
    /// Returns `Error::InitializationFailed` if a built-in resource cannot be
    /// created.
    pub fn new(
        device: Rc<dyn GraphicsDevice>,
        decoder: Box<dyn ImageDecoder>,
        model_loader: Box<dyn ModelLoader>,
        config: ResourceManagerConfig,
    ) -> Result<Self> {
        let textures = TextureCache::new(device, decoder, config.asset_root.clone())?;

        let mut models = SlotMap::with_key();
        let plane = models.insert(plane_model(textures.built_ins()));

        engine_info!(SOURCE, "Resource manager ready (asset root '{}')",
            config.asset_root.display());

        Ok(Self {
            config,
            textures,
            models,
            model_paths: FxHashMap::default(),
            model_loader,
            plane,
        })
    }

    /// Create a manager that decodes images from files with the `image` crate
    pub fn with_defaults(
        device: Rc<dyn GraphicsDevice>,
        model_loader: Box<dyn ModelLoader>,
        config: ResourceManagerConfig,
    ) -> Result<Self> {
        let decoder = FileImageDecoder::new(config.flip_vertically_on_load);
        Self::new(device, Box::new(decoder), model_loader, config)
    }

    // ===== MODELS =====

    /// Get the model for `path`, loading it on first request
    ///
    /// Textures the model references are loaded through this manager's
    /// texture cache, so they are shared with direct `get_texture` calls.
    ///
    /// # Errors
    ///
    /// Returns `Error::ModelLoadFailed` if the loader fails. Nothing is cached
    /// and the caller is expected to treat this as fatal.
    pub fn get_model(&mut self, path: &str) -> Result<ModelKey> {
        if let Some(&key) = self.model_paths.get(path) {
            return Ok(key);
        }

        engine_info!(SOURCE, "Loading model '{}'", path);

        let model = self
            .model_loader
            .load_model(&self.config.asset_root, path, &mut self.textures)
            .map_err(|e| {
                engine_error!(SOURCE, "Failed to load model '{}': {}", path, e);
                match e {
                    Error::ModelLoadFailed(_) => e,
                    other => Error::ModelLoadFailed(format!("'{}': {}", path, other)),
                }
            })?;

        engine_debug!(SOURCE, "Model '{}' has {} meshes, {} vertices",
            path, model.mesh_count(), model.vertex_count());

        let key = self.models.insert(model);
        self.model_paths.insert(path.to_string(), key);
        Ok(key)
    }

    /// Key of a built-in model
    pub fn built_in_model(&self, kind: BuiltInModel) -> ModelKey {
        match kind {
            BuiltInModel::Plane => self.plane,
        }
    }

    /// Key of a built-in model by numeric id, `None` for an unknown id
    pub fn built_in_model_from_id(&self, id: u32) -> Option<ModelKey> {
        match BuiltInModel::from_id(id) {
            Some(kind) => Some(self.built_in_model(kind)),
            None => {
                engine_warn!(SOURCE, "Unhandled case for getting a built in model: {}", id);
                None
            }
        }
    }

    pub fn model(&self, key: ModelKey) -> Option<&Model> {
        self.models.get(key)
    }

    /// Number of path-keyed models (built-ins excluded)
    pub fn model_count(&self) -> usize {
        self.model_paths.len()
    }

    pub fn contains_model(&self, path: &str) -> bool {
        self.model_paths.contains_key(path)
    }

    // ===== TEXTURES =====

    /// See `TextureCache::get_texture`
    pub fn get_texture(&mut self, path: &str) -> TextureKey {
        self.textures.get_texture(path)
    }

    /// See `TextureCache::get_texture_split_components`
    pub fn get_texture_split_components(&mut self, path: &str, channels: &[Channel]) -> SplitTextures {
        self.textures.get_texture_split_components(path, channels)
    }

    pub fn built_in_texture(&self, kind: BuiltInTexture) -> TextureKey {
        self.textures.built_in(kind)
    }

    /// Key of a built-in texture by numeric id, MISSING for an unknown id
    pub fn built_in_texture_from_id(&self, id: u32) -> TextureKey {
        self.textures.built_in_from_id(id)
    }

    pub fn texture(&self, key: TextureKey) -> Option<&Texture> {
        self.textures.texture(key)
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn contains_texture(&self, path: &str) -> bool {
        self.textures.contains(path)
    }

    pub fn textures(&self) -> &TextureCache {
        &self.textures
    }

    pub fn textures_mut(&mut self) -> &mut TextureCache {
        &mut self.textures
    }

    pub fn config(&self) -> &ResourceManagerConfig {
        &self.config
    }
}

impl Drop for ResourceManager {
    fn drop(&mut self) {
        engine_debug!(SOURCE, "Releasing {} loaded models", self.model_paths.len());
        for (_, key) in self.model_paths.drain() {
            self.models.remove(key);
        }
        self.textures.release_loaded();

        // Only the built-ins remain
        self.models.clear();
        self.textures.release_built_ins();
    }
}

#[cfg(test)]
#[path = "resource_manager_tests.rs"]
mod tests;
