//! Scene module
//!
//! The frame-side consumer of resources: transforms, renderables and the
//! per-frame render queue.

mod render_queue;
mod transform;

pub use render_queue::{DrawItem, RenderQueue, Renderable};
pub use transform::Transform;
