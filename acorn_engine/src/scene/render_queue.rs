/// Per-frame list of things to draw.
///
/// The frame loop acquires `ModelKey`s from the resource manager once, then
/// queues a `Renderable` per object every frame. `draw_list` resolves the
/// queue against the manager into world matrices and model references; the
/// manager is not asked to load anything at this point.

use glam::Mat4;
use crate::engine_warn;
use crate::resource::{Model, ModelKey, ResourceManager};
use crate::scene::transform::Transform;

const SOURCE: &str = "acorn::RenderQueue";

/// A model placed in the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderable {
    pub transform: Transform,
    pub model: ModelKey,
}

impl Renderable {
    pub fn new(transform: Transform, model: ModelKey) -> Self {
        Self { transform, model }
    }
}

/// A resolved renderable, ready for submission
#[derive(Debug, Clone, Copy)]
pub struct DrawItem<'a> {
    pub world_matrix: Mat4,
    pub model: &'a Model,
}

/// Renderables queued for the current frame
#[derive(Debug, Clone, Default)]
pub struct RenderQueue {
    renderables: Vec<Renderable>,
}

impl RenderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_renderable(&mut self, renderable: Renderable) {
        self.renderables.push(renderable);
    }

    pub fn len(&self) -> usize {
        self.renderables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderables.is_empty()
    }

    /// Empty the queue, keeping its allocation for the next frame
    pub fn clear(&mut self) {
        self.renderables.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Renderable> {
        self.renderables.iter()
    }

    /// Resolve every queued renderable, in queue order
    ///
    /// Renderables whose model key is unknown to `resources` are skipped
    /// with a warning.
    pub fn draw_list<'a>(&self, resources: &'a ResourceManager) -> Vec<DrawItem<'a>> {
        self.renderables
            .iter()
            .filter_map(|renderable| match resources.model(renderable.model) {
                Some(model) => Some(DrawItem {
                    world_matrix: renderable.transform.matrix(),
                    model,
                }),
                None => {
                    engine_warn!(SOURCE, "Skipping renderable with unknown model {:?}",
                        renderable.model);
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "render_queue_tests.rs"]
mod tests;
