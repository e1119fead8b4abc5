//! GPU-side mirror of a sprite's vertex stream.

use crate::context::GraphicsContext;
use crate::sprite::SpriteQuad;
use crate::vertex::{SpriteVertex, VERTICES_PER_SPRITE};

/// The GPU-resident vertex buffer for one sprite quad.
///
/// The CPU-side state lives in [`SpriteQuad`]; this type owns the wgpu
/// buffer mirroring it and re-uploads only when the quad reports itself
/// dirty. Pipeline and bind-group state are the caller's concern — `draw`
/// assumes they are already set on the pass.
pub struct SpriteMesh {
    vertex_buffer: wgpu::Buffer,
}

impl SpriteMesh {
    /// Topology the external render pipeline must be built with: the four
    /// slots form a triangle strip.
    pub const TOPOLOGY: wgpu::PrimitiveTopology = wgpu::PrimitiveTopology::TriangleStrip;

    pub fn new(context: &GraphicsContext) -> Self {
        let vertex_buffer = context.device().create_buffer(&wgpu::BufferDescriptor {
            label: Some("Sprite Vertex Buffer"),
            size: SpriteVertex::LAYOUT.sprite_bytes() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self { vertex_buffer }
    }

    /// Re-upload the quad's vertex stream if it changed since the last
    /// upload. Returns whether an upload happened.
    pub fn upload_if_dirty(&mut self, context: &GraphicsContext, quad: &mut SpriteQuad) -> bool {
        if !quad.sync_if_dirty() {
            return false;
        }

        tracing::trace!("re-uploading sprite vertex buffer");
        context
            .queue()
            .write_buffer(&self.vertex_buffer, 0, quad.as_bytes());
        true
    }

    /// Bind the vertex buffer and issue the 4-vertex strip draw.
    pub fn draw<'a>(&'a self, pass: &mut wgpu::RenderPass<'a>) {
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.draw(0..VERTICES_PER_SPRITE as u32, 0..1);
    }
}
