/// Resource-level material type.
///
/// A Material is a pure data description of a surface: up to four texture
/// references (albedo, normal, metallic, roughness) and the scalar factors
/// applied to the metallic and roughness maps. Textures are referenced by
/// key; the resource manager owns them.

use crate::resource::texture_cache::TextureKey;

/// Texture slots of a material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialSlot {
    Albedo,
    Normal,
    Metallic,
    Roughness,
}

/// Surface description used by a mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub albedo_texture: Option<TextureKey>,
    pub normal_texture: Option<TextureKey>,
    pub metallic_texture: Option<TextureKey>,
    pub roughness_texture: Option<TextureKey>,
    /// Multiplier for the metallic map (the whole value when the map is a flat default)
    pub metallic_scale: f32,
    /// Multiplier for the roughness map
    pub roughness_scale: f32,
}

impl Material {
    /// Texture referenced by a slot
    pub fn texture(&self, slot: MaterialSlot) -> Option<TextureKey> {
        match slot {
            MaterialSlot::Albedo => self.albedo_texture,
            MaterialSlot::Normal => self.normal_texture,
            MaterialSlot::Metallic => self.metallic_texture,
            MaterialSlot::Roughness => self.roughness_texture,
        }
    }

    /// Set the texture of a slot
    pub fn set_texture(&mut self, slot: MaterialSlot, texture: Option<TextureKey>) {
        match slot {
            MaterialSlot::Albedo => self.albedo_texture = texture,
            MaterialSlot::Normal => self.normal_texture = texture,
            MaterialSlot::Metallic => self.metallic_texture = texture,
            MaterialSlot::Roughness => self.roughness_texture = texture,
        }
    }

    /// All referenced textures, in slot order
    pub fn textures(&self) -> impl Iterator<Item = TextureKey> + '_ {
        [
            self.albedo_texture,
            self.normal_texture,
            self.metallic_texture,
            self.roughness_texture,
        ]
        .into_iter()
        .flatten()
    }
}

impl Default for Material {
    /// No textures, non-metallic, fully rough
    fn default() -> Self {
        Self {
            albedo_texture: None,
            normal_texture: None,
            metallic_texture: None,
            roughness_texture: None,
            metallic_scale: 0.0,
            roughness_scale: 1.0,
        }
    }
}
