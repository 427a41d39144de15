/// Model resource and the model loader collaborator.
///
/// A Model is an ordered list of meshes. Parsing model files is delegated to a
/// `ModelLoader`; the loader obtains the textures a model references through
/// the same `TextureCache` the resource manager uses, so they are shared and
/// owned by the manager like any other texture.

use std::path::Path;
use slotmap::new_key_type;
use crate::error::Result;
use crate::resource::mesh::Mesh;
use crate::resource::texture_cache::TextureCache;

new_key_type! {
    /// Stable key for a Model owned by a ResourceManager.
    ///
    /// A key stays valid, and names the same model, for the manager's lifetime.
    pub struct ModelKey;
}

/// An ordered sequence of meshes
#[derive(Debug, Clone, Default)]
pub struct Model {
    meshes: Vec<Mesh>,
}

impl Model {
    pub fn new(meshes: Vec<Mesh>) -> Self {
        Self { meshes }
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Total vertex count over all meshes
    pub fn vertex_count(&self) -> usize {
        self.meshes.iter().map(Mesh::vertex_count).sum()
    }
}

/// Parses model files into `Model`s
pub trait ModelLoader {
    /// Load the model at `path` (relative to `asset_root`)
    ///
    /// Textures referenced by the model must be requested from `textures`.
    ///
    /// # Errors
    ///
    /// Any failure is unrecoverable for the caller; implementations should
    /// return `Error::ModelLoadFailed` with a readable reason.
    fn load_model(
        &mut self,
        asset_root: &Path,
        path: &str,
        textures: &mut TextureCache,
    ) -> Result<Model>;
}
