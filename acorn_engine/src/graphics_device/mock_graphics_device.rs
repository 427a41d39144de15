/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Hands out sequential texture names and records every call so tests can
/// check creation/destruction balance, uploaded formats and binds.

use std::cell::{Cell, RefCell};
use rustc_hash::FxHashSet;
use crate::error::{Error, Result};
use crate::graphics_device::{
    GraphicsDevice, TextureFormat, TextureHandle, TextureTarget, TextureUpload,
};

// ============================================================================
// Records
// ============================================================================

/// One `upload_texture` call
#[derive(Debug, Clone)]
pub struct UploadRecord {
    pub handle: TextureHandle,
    pub target: TextureTarget,
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    /// Copy of the uploaded pixels (face 0 for cube maps), empty if uninitialized
    pub data: Vec<u8>,
    pub initialized: bool,
}

/// One `bind_texture` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindRecord {
    pub handle: TextureHandle,
    pub target: TextureTarget,
    pub unit: u32,
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

/// Mock GraphicsDevice that tracks texture names without a GPU
#[derive(Debug, Default)]
pub struct MockGraphicsDevice {
    next_id: Cell<u32>,
    live: RefCell<FxHashSet<TextureHandle>>,
    created: Cell<usize>,
    destroyed: Cell<usize>,
    invalid_releases: Cell<usize>,
    destroy_order: RefCell<Vec<TextureHandle>>,
    uploads: RefCell<Vec<UploadRecord>>,
    binds: RefCell<Vec<BindRecord>>,
    fail_creates: Cell<bool>,
}

impl MockGraphicsDevice {
    /// Create a new mock graphics device
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `create_texture` calls
    pub fn created_count(&self) -> usize {
        self.created.get()
    }

    /// Number of `destroy_texture` calls that released a live handle
    pub fn destroyed_count(&self) -> usize {
        self.destroyed.get()
    }

    /// Number of `destroy_texture` calls on a handle that was not live
    /// (double release or the invalid sentinel)
    pub fn invalid_release_count(&self) -> usize {
        self.invalid_releases.get()
    }

    /// Handles released by `destroy_texture`, in call order
    pub fn destroyed_handles(&self) -> Vec<TextureHandle> {
        self.destroy_order.borrow().clone()
    }

    /// Number of handles currently alive
    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }

    pub fn is_live(&self, handle: TextureHandle) -> bool {
        self.live.borrow().contains(&handle)
    }

    /// All uploads so far, in call order
    pub fn uploads(&self) -> Vec<UploadRecord> {
        self.uploads.borrow().clone()
    }

    /// Most recent upload for a handle
    pub fn last_upload(&self, handle: TextureHandle) -> Option<UploadRecord> {
        self.uploads.borrow().iter().rev().find(|u| u.handle == handle).cloned()
    }

    /// All binds so far, in call order
    pub fn binds(&self) -> Vec<BindRecord> {
        self.binds.borrow().clone()
    }

    /// Make every following `create_texture` call fail (until reset)
    pub fn set_fail_creates(&self, fail: bool) {
        self.fail_creates.set(fail);
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_texture(&self) -> Result<TextureHandle> {
        if self.fail_creates.get() {
            return Err(Error::OutOfMemory);
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let handle = TextureHandle::from_raw(id);
        self.live.borrow_mut().insert(handle);
        self.created.set(self.created.get() + 1);
        Ok(handle)
    }

    fn upload_texture(&self, handle: TextureHandle, upload: &TextureUpload<'_>) -> Result<()> {
        if !self.is_live(handle) {
            return Err(Error::InvalidResource(format!(
                "upload to unknown texture handle {}", handle.raw()
            )));
        }

        let record = match *upload {
            TextureUpload::Planar2D { width, height, format, data } => UploadRecord {
                handle,
                target: TextureTarget::Tex2D,
                width,
                height,
                format,
                data: data.map(|d| d.to_vec()).unwrap_or_default(),
                initialized: data.is_some(),
            },
            TextureUpload::Cube { side_length, format, faces } => UploadRecord {
                handle,
                target: TextureTarget::Cube,
                width: side_length,
                height: side_length,
                format,
                data: faces.map(|f| f[0].to_vec()).unwrap_or_default(),
                initialized: faces.is_some(),
            },
        };
        self.uploads.borrow_mut().push(record);
        Ok(())
    }

    fn bind_texture(&self, handle: TextureHandle, target: TextureTarget, unit: u32) {
        self.binds.borrow_mut().push(BindRecord { handle, target, unit });
    }

    fn destroy_texture(&self, handle: TextureHandle) {
        if self.live.borrow_mut().remove(&handle) {
            self.destroyed.set(self.destroyed.get() + 1);
            self.destroy_order.borrow_mut().push(handle);
        } else {
            self.invalid_releases.set(self.invalid_releases.get() + 1);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
