//! The interleaved sprite vertex format.
//!
//! One sprite is four vertices in a fixed slot order, each carrying
//! `[x, y, color, u, v]`. The byte layout is described by an explicit
//! [`VertexLayout`] value handed to whatever constructs buffers, instead of
//! a process-wide mutable default.

use bytemuck::{Pod, Zeroable};
use std::mem::{offset_of, size_of};

/// Number of vertices in one sprite quad. Read in slot order the vertices
/// form a valid triangle-strip winding.
pub const VERTICES_PER_SPRITE: usize = 4;

/// One corner of a sprite quad.
///
/// `color` holds the four channels packed by [`crate::Color::pack`], read by
/// the GPU as a `Unorm8x4` attribute.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 2],
    pub color: u32,
    pub uv: [f32; 2],
}

/// Byte layout of a [`SpriteVertex`]: stride plus per-attribute offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    pub stride: usize,
    pub position_offset: usize,
    pub color_offset: usize,
    pub uv_offset: usize,
}

impl VertexLayout {
    /// Total byte size of one sprite quad.
    pub const fn sprite_bytes(&self) -> usize {
        self.stride * VERTICES_PER_SPRITE
    }
}

impl SpriteVertex {
    /// The layout of the interleaved stream: `[x, y, color, u, v]`,
    /// 20 bytes per vertex.
    pub const LAYOUT: VertexLayout = VertexLayout {
        stride: size_of::<SpriteVertex>(),
        position_offset: offset_of!(SpriteVertex, position),
        color_offset: offset_of!(SpriteVertex, color),
        uv_offset: offset_of!(SpriteVertex, uv),
    };

    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = [
        // position
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: Self::LAYOUT.position_offset as u64,
            shader_location: 0,
        },
        // packed color
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Unorm8x4,
            offset: Self::LAYOUT.color_offset as u64,
            shader_location: 1,
        },
        // uv
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: Self::LAYOUT.uv_offset as u64,
            shader_location: 2,
        },
    ];

    /// The wgpu vertex buffer layout for this format.
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::LAYOUT.stride as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

// The shader-facing stride and offsets are load-bearing; pin them.
static_assertions::const_assert_eq!(size_of::<SpriteVertex>(), 20);
static_assertions::const_assert_eq!(SpriteVertex::LAYOUT.position_offset, 0);
static_assertions::const_assert_eq!(SpriteVertex::LAYOUT.color_offset, 8);
static_assertions::const_assert_eq!(SpriteVertex::LAYOUT.uv_offset, 12);
