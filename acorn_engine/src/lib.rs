/*!
# Acorn Engine

Resource core of the Acorn real-time 3D engine.

This crate loads, caches and owns the GPU-resident assets of a scene (textures
and models) by logical path, and hands out stable keys to them. Failed texture
loads never stop the frame loop: the caller gets a built-in fallback and a
warning is logged.

## Architecture

- **GraphicsDevice**: GPU texture interface implemented by the backend
- **ResourceManager**: path-keyed owner of textures and models
- **TextureCache**: texture side of the manager, including channel splitting
- **ImageDecoder / ModelLoader**: decode and parse collaborators
- **RenderQueue**: per-frame consumer that resolves keys into draw items

The GPU backend, the model file parser and the window layer are supplied by
the application through the traits above.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod graphics_device;
pub mod resource;
pub mod scene;

// Main acorn namespace module
pub mod acorn {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine services (logger slot)
    pub use crate::engine::Engine;

    // GPU texture interface
    pub use crate::graphics_device::GraphicsDevice;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Graphics device sub-module
    pub mod graphics_device {
        pub use crate::graphics_device::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
