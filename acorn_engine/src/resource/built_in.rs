//! Built-in resources.
//!
//! Default textures (solid black/white, flat normal, a checkerboard for
//! missing assets) and a default model (a textured quad). They are created
//! once when the resource manager is constructed and live as long as it does.

use std::rc::Rc;
use glam::{Vec2, Vec3};
use slotmap::SlotMap;
use crate::error::{Error, Result};
use crate::graphics_device::{GraphicsDevice, TextureFormat};
use crate::resource::material::Material;
use crate::resource::mesh::{compute_tangent_basis, Mesh, Vertex};
use crate::resource::model::Model;
use crate::resource::texture::Texture;
use crate::resource::texture_cache::TextureKey;

const MAGENTA: [u8; 4] = [255, 0, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];
/// Tangent-space (0, 0, 1) encoded in unsigned bytes
const FLAT_NORMAL: [u8; 4] = [127, 127, 255, 255];
const MISSING_SIZE: u32 = 2;

// ============================================================================
// ENUMS
// ============================================================================

/// Built-in textures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum BuiltInTexture {
    Black = 0,
    White = 1,
    Normal = 2,
    Missing = 3,
}

impl BuiltInTexture {
    pub const ALL: [BuiltInTexture; 4] = [
        BuiltInTexture::Black,
        BuiltInTexture::White,
        BuiltInTexture::Normal,
        BuiltInTexture::Missing,
    ];

    /// Look up a built-in texture by its numeric id
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn id(self) -> u32 {
        self as u32
    }

    /// Dimensions and RGBA8 pixels
    pub fn image(self) -> (u32, u32, Vec<u8>) {
        match self {
            BuiltInTexture::Black => (1, 1, BLACK.to_vec()),
            BuiltInTexture::White => (1, 1, WHITE.to_vec()),
            BuiltInTexture::Normal => (1, 1, FLAT_NORMAL.to_vec()),
            BuiltInTexture::Missing => (
                MISSING_SIZE,
                MISSING_SIZE,
                checkerboard(MISSING_SIZE, MAGENTA, BLACK),
            ),
        }
    }
}

/// Built-in models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum BuiltInModel {
    Plane = 0,
}

impl BuiltInModel {
    pub const ALL: [BuiltInModel; 1] = [BuiltInModel::Plane];

    /// Look up a built-in model by its numeric id
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    pub fn id(self) -> u32 {
        self as u32
    }
}

/// Square RGBA8 checkerboard of 1-pixel cells, `a` in the top-left corner
pub fn checkerboard(size: u32, a: [u8; 4], b: [u8; 4]) -> Vec<u8> {
    (0..size)
        .flat_map(|y| (0..size).map(move |x| if (x + y) % 2 == 0 { a } else { b }))
        .flatten()
        .collect()
}

// ============================================================================
// BUILT-IN TEXTURE SET
// ============================================================================

/// Keys of the built-in textures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltInTextures {
    pub black: TextureKey,
    pub white: TextureKey,
    pub normal: TextureKey,
    pub missing: TextureKey,
}

impl BuiltInTextures {
    /// Create every built-in texture and store it in `storage`
    pub(crate) fn create(
        device: &Rc<dyn GraphicsDevice>,
        storage: &mut SlotMap<TextureKey, Texture>,
    ) -> Result<Self> {
        let mut create = |kind: BuiltInTexture| -> Result<TextureKey> {
            let (width, height, pixels) = kind.image();
            let texture = Texture::from_pixels_2d(
                Rc::clone(device), width, height, TextureFormat::RGBA8, &pixels,
            )
            .map_err(|e| Error::InitializationFailed(format!(
                "built-in texture {:?}: {}", kind, e
            )))?;
            Ok(storage.insert(texture))
        };

        Ok(Self {
            black: create(BuiltInTexture::Black)?,
            white: create(BuiltInTexture::White)?,
            normal: create(BuiltInTexture::Normal)?,
            missing: create(BuiltInTexture::Missing)?,
        })
    }

    pub fn get(&self, kind: BuiltInTexture) -> TextureKey {
        match kind {
            BuiltInTexture::Black => self.black,
            BuiltInTexture::White => self.white,
            BuiltInTexture::Normal => self.normal,
            BuiltInTexture::Missing => self.missing,
        }
    }

    pub fn contains(&self, key: TextureKey) -> bool {
        BuiltInTexture::ALL.into_iter().any(|kind| self.get(kind) == key)
    }
}

// ============================================================================
// PLANE MODEL
// ============================================================================

/// Vertices of the built-in plane: a quad on y = 0 spanning [-1, 1] in x and z
///
/// Two triangles (v1, v2, v3) and (v1, v3, v4), each with its own tangent basis.
pub fn plane_vertices() -> Vec<Vertex> {
    let up = Vec3::Y;
    let v1 = Vertex::new(Vec3::new(-1.0, 0.0, -1.0), up, Vec2::new(0.0, 0.0));
    let v2 = Vertex::new(Vec3::new(1.0, 0.0, -1.0), up, Vec2::new(1.0, 0.0));
    let v3 = Vertex::new(Vec3::new(1.0, 0.0, 1.0), up, Vec2::new(1.0, 1.0));
    let v4 = Vertex::new(Vec3::new(-1.0, 0.0, 1.0), up, Vec2::new(0.0, 1.0));

    let mut vertices = vec![v1, v2, v3, v1, v3, v4];
    compute_tangent_basis(&mut vertices);
    vertices
}

/// Material of the built-in plane: white albedo, flat normal, non-metallic, fully rough
pub fn plane_material(textures: &BuiltInTextures) -> Material {
    Material {
        albedo_texture: Some(textures.white),
        normal_texture: Some(textures.normal),
        metallic_texture: Some(textures.white),
        roughness_texture: Some(textures.white),
        metallic_scale: 0.0,
        roughness_scale: 1.0,
    }
}

/// The built-in plane model
pub fn plane_model(textures: &BuiltInTextures) -> Model {
    Model::new(vec![Mesh::new(plane_vertices(), plane_material(textures))])
}

#[cfg(test)]
#[path = "built_in_tests.rs"]
mod tests;
