#![allow(dead_code)]
//! Test utilities - counting collaborators for integration tests
//!
//! Integration tests cannot see the crate's `#[cfg(test)]` mocks, so this
//! module provides its own:
//!
//! - `CountingDevice`: GraphicsDevice handing out sequential texture names
//! - `CountingDecoder`: ImageDecoder serving in-memory images
//! - `StubModelLoader`: ModelLoader that loads its textures through the cache

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use acorn_engine::acorn::graphics_device::{
    GraphicsDevice, TextureHandle, TextureTarget, TextureUpload,
};
use acorn_engine::acorn::resource::{
    BuiltInModel, Channel, DecodedImage, ImageDecoder, Material, Mesh, Model, ModelLoader,
    ResourceManager, ResourceManagerConfig, TextureCache, Vertex,
};
use acorn_engine::acorn::{Error, Result};
use acorn_engine::glam::{Vec2, Vec3};

// ============================================================================
// Graphics device
// ============================================================================

#[derive(Default)]
pub struct CountingDevice {
    next_id: Cell<u32>,
    live: RefCell<Vec<TextureHandle>>,
    pub created: Cell<usize>,
    pub destroyed: Cell<usize>,
    pub double_releases: Cell<usize>,
    pub bound: RefCell<Vec<(TextureHandle, TextureTarget, u32)>>,
}

impl CountingDevice {
    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }
}

impl GraphicsDevice for CountingDevice {
    fn create_texture(&self) -> Result<TextureHandle> {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let handle = TextureHandle::from_raw(id);
        self.live.borrow_mut().push(handle);
        self.created.set(self.created.get() + 1);
        Ok(handle)
    }

    fn upload_texture(&self, handle: TextureHandle, _upload: &TextureUpload<'_>) -> Result<()> {
        if self.live.borrow().contains(&handle) {
            Ok(())
        } else {
            Err(Error::InvalidResource("upload to released texture".to_string()))
        }
    }

    fn bind_texture(&self, handle: TextureHandle, target: TextureTarget, unit: u32) {
        self.bound.borrow_mut().push((handle, target, unit));
    }

    fn destroy_texture(&self, handle: TextureHandle) {
        let mut live = self.live.borrow_mut();
        match live.iter().position(|&h| h == handle) {
            Some(index) => {
                live.swap_remove(index);
                self.destroyed.set(self.destroyed.get() + 1);
            }
            None => self.double_releases.set(self.double_releases.get() + 1),
        }
    }
}

// ============================================================================
// Image decoder
// ============================================================================

#[derive(Clone, Default)]
pub struct CountingDecoder {
    images: Rc<RefCell<Vec<(PathBuf, DecodedImage)>>>,
    pub decodes: Rc<Cell<usize>>,
}

impl CountingDecoder {
    pub fn add(&self, path: &str, width: u32, height: u32, rgba: [u8; 4]) {
        let pixels = rgba.repeat((width * height) as usize);
        let image = DecodedImage::new(width, height, pixels).unwrap();
        self.images.borrow_mut().push((PathBuf::from(path), image));
    }
}

impl ImageDecoder for CountingDecoder {
    fn decode_rgba8(&self, path: &Path) -> Result<DecodedImage> {
        self.decodes.set(self.decodes.get() + 1);
        self.images
            .borrow()
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, image)| image.clone())
            .ok_or_else(|| Error::DecodeFailed(format!("no such file '{}'", path.display())))
    }
}

// ============================================================================
// Model loader
// ============================================================================

/// Loads "<name>.model" as one quad-sized triangle list whose material uses
/// "<name>_albedo.png" and the green/blue channels of "<name>_orm.png".
/// Any other extension fails.
#[derive(Clone, Default)]
pub struct StubModelLoader {
    pub loads: Rc<Cell<usize>>,
}

impl ModelLoader for StubModelLoader {
    fn load_model(&mut self, _asset_root: &Path, path: &str, textures: &mut TextureCache) -> Result<Model> {
        self.loads.set(self.loads.get() + 1);
        let Some(name) = path.strip_suffix(".model") else {
            return Err(Error::ModelLoadFailed(format!("unsupported format '{}'", path)));
        };

        let orm = textures.get_texture_split_components(
            &format!("{}_orm.png", name), &[Channel::Green, Channel::Blue]);
        let material = Material {
            albedo_texture: Some(textures.get_texture(&format!("{}_albedo.png", name))),
            roughness_texture: orm.green(),
            metallic_texture: orm.blue(),
            ..Material::default()
        };

        let vertices = vec![
            Vertex::new(Vec3::ZERO, Vec3::Y, Vec2::ZERO),
            Vertex::new(Vec3::X, Vec3::Y, Vec2::X),
            Vertex::new(Vec3::Z, Vec3::Y, Vec2::Y),
        ];
        Ok(Model::new(vec![Mesh::new(vertices, material)]))
    }
}

// ============================================================================
// Setup
// ============================================================================

pub struct TestContext {
    pub device: Rc<CountingDevice>,
    pub decoder: CountingDecoder,
    pub loader: StubModelLoader,
    pub resources: ResourceManager,
}

/// Resource manager over counting collaborators, with "rock" assets available
pub fn create_test_context() -> TestContext {
    let device = Rc::new(CountingDevice::default());
    let decoder = CountingDecoder::default();
    decoder.add("rock_albedo.png", 4, 4, [120, 100, 80, 255]);
    decoder.add("rock_orm.png", 4, 4, [255, 200, 10, 255]);
    decoder.add("grass.png", 2, 2, [20, 160, 30, 255]);
    let loader = StubModelLoader::default();

    let dyn_device: Rc<dyn GraphicsDevice> = device.clone();
    let resources = ResourceManager::new(
        dyn_device,
        Box::new(decoder.clone()),
        Box::new(loader.clone()),
        ResourceManagerConfig::default(),
    )
    .unwrap();

    // The plane is always there
    assert!(resources.model(resources.built_in_model(BuiltInModel::Plane)).is_some());

    TestContext { device, decoder, loader, resources }
}
