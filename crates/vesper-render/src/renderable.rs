//! The render lifecycle seam.

use crate::context::GraphicsContext;
use crate::mesh::SpriteMesh;
use crate::sprite::SpriteQuad;

/// Per-frame lifecycle of anything the draw issuer renders.
///
/// A small capability seam instead of an inheritance chain: `pre_draw`
/// settles GPU-visible state (uploads and whatever binds the implementation
/// needs), `draw` records into an already-configured pass, `post_draw`
/// releases per-frame state, and `reset` returns a pooled instance to a
/// fresh state without reallocation.
pub trait Renderable {
    fn pre_draw(&mut self, context: &GraphicsContext);
    fn draw<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>);
    fn post_draw(&mut self);
    fn reset(&mut self);
}

/// A sprite ready for the frame loop: CPU-side quad state plus its GPU
/// mirror.
pub struct SpriteRenderable {
    quad: SpriteQuad,
    mesh: SpriteMesh,
}

impl SpriteRenderable {
    pub fn new(context: &GraphicsContext, quad: SpriteQuad) -> Self {
        Self {
            quad,
            mesh: SpriteMesh::new(context),
        }
    }

    pub fn quad(&self) -> &SpriteQuad {
        &self.quad
    }

    /// Mutable access for the update phase (resize, recolor, flip).
    pub fn quad_mut(&mut self) -> &mut SpriteQuad {
        &mut self.quad
    }
}

impl Renderable for SpriteRenderable {
    fn pre_draw(&mut self, context: &GraphicsContext) {
        self.mesh.upload_if_dirty(context, &mut self.quad);
    }

    fn draw<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        self.mesh.draw(pass);
    }

    fn post_draw(&mut self) {}

    fn reset(&mut self) {
        self.quad.reset();
    }
}
