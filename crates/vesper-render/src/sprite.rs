//! Sprite quad vertex state.
//!
//! A sprite is a textured quad: four vertices in a fixed slot order carrying
//! position, packed color, and texture coordinates. This module owns the
//! CPU-side copy of those vertices and the dirty flag that tells the
//! draw-time collaborator when the GPU-side mirror needs a re-upload.

use bytemuck::Zeroable;
use vesper_core::geometry::Size;
use vesper_core::math::fast::Vec2;

use crate::color::Color;
use crate::region::TextureRegion;
use crate::vertex::{SpriteVertex, VERTICES_PER_SPRITE};

/// Local-space corner positions for a `width` × `height` quad, in slot
/// order: slot 0 = (0, 0), slot 1 = (0, h), slot 2 = (w, 0),
/// slot 3 = (w, h).
///
/// Zero or negative dimensions are permitted and yield a degenerate or
/// mirrored quad.
pub fn corner_positions(width: f32, height: f32) -> [Vec2; VERTICES_PER_SPRITE] {
    [
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, height),
        Vec2::new(width, 0.0),
        Vec2::new(width, height),
    ]
}

/// Map a texture region onto the four vertex slots under the given flip
/// flags.
///
/// Two independent steps: the flip flags first mirror the raw rectangle per
/// axis into an effective rectangle, then the region's `rotated` flag
/// selects which effective corner lands in which slot. Restarting from the
/// raw rectangle every call keeps flip toggling exactly reversible.
pub fn map_uv(
    region: &TextureRegion,
    flip_horizontal: bool,
    flip_vertical: bool,
) -> [[f32; 2]; VERTICES_PER_SPRITE] {
    let (eu, eu2) = if flip_horizontal {
        (region.u2(), region.u())
    } else {
        (region.u(), region.u2())
    };
    let (ev, ev2) = if flip_vertical {
        (region.v2(), region.v())
    } else {
        (region.v(), region.v2())
    };

    if region.is_rotated() {
        [[eu2, ev], [eu, ev], [eu2, ev2], [eu, ev2]]
    } else {
        [[eu, ev], [eu, ev2], [eu2, ev], [eu2, ev2]]
    }
}

/// The four-vertex state of one sprite.
///
/// Owns the interleaved CPU-side vertex buffer and recomputes the affected
/// attribute family synchronously inside every mutator. All four slots
/// always carry the same color.
///
/// The quad is not internally synchronized: it assumes the usual
/// update-then-render frame discipline, where mutators run during the
/// update phase and [`SpriteQuad::sync_if_dirty`] plus buffer reads run
/// during the render phase. An embedding that mutates concurrently with
/// rendering must bring its own synchronization.
#[derive(Debug, Clone)]
pub struct SpriteQuad {
    width: f32,
    height: f32,
    color: Color,
    flip_horizontal: bool,
    flip_vertical: bool,
    region: TextureRegion,
    vertices: [SpriteVertex; VERTICES_PER_SPRITE],
    dirty: bool,
}

impl SpriteQuad {
    /// Create a sprite quad with explicit dimensions.
    pub fn new(region: TextureRegion, width: f32, height: f32, color: Color) -> Self {
        let mut quad = Self {
            width,
            height,
            color,
            flip_horizontal: false,
            flip_vertical: false,
            region,
            vertices: [SpriteVertex::zeroed(); VERTICES_PER_SPRITE],
            dirty: false,
        };
        quad.update_vertices();
        quad.update_color();
        quad.update_texture_coords();
        quad
    }

    /// Create a sprite quad sized from the region's pixel dimensions.
    pub fn with_region_size(region: TextureRegion, color: Color) -> Self {
        let size = region.pixel_size().as_f32();
        Self::new(region, size.width, size.height, color)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Size<f32> {
        Size::new(self.width, self.height)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    pub fn is_flipped_vertical(&self) -> bool {
        self.flip_vertical
    }

    pub fn texture_region(&self) -> &TextureRegion {
        &self.region
    }

    /// The four vertices in slot order.
    pub fn vertices(&self) -> &[SpriteVertex; VERTICES_PER_SPRITE] {
        &self.vertices
    }

    /// The interleaved vertex stream as bytes, ready for a buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Resize the quad. Only positions are recomputed; color and texture
    /// coordinates are untouched.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.update_vertices();
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
        self.update_vertices();
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
        self.update_vertices();
    }

    /// Recolor the quad. The packed value is computed once and written into
    /// all four slots.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.update_color();
    }

    /// Mirror the texture horizontally. Only texture coordinates are
    /// recomputed.
    pub fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
        self.update_texture_coords();
    }

    /// Mirror the texture vertically. Only texture coordinates are
    /// recomputed.
    pub fn set_flip_vertical(&mut self, flip: bool) {
        self.flip_vertical = flip;
        self.update_texture_coords();
    }

    /// Restore transient rendering state for pooled reuse.
    ///
    /// The quad owns nothing transient beyond its vertex buffer, whose
    /// contents deliberately survive a reset; blend-state restoration is
    /// the draw-time collaborator's concern.
    pub fn reset(&mut self) {}

    /// Whether the buffer changed since the last call; clears the flag.
    ///
    /// This is the sole consumer of the dirty flag. The draw-time
    /// collaborator calls it immediately before deciding whether to
    /// re-upload the vertex stream.
    pub fn sync_if_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    fn update_vertices(&mut self) {
        let corners = corner_positions(self.width, self.height);
        for (vertex, corner) in self.vertices.iter_mut().zip(corners) {
            vertex.position = corner.to_array();
        }
        self.dirty = true;
    }

    fn update_color(&mut self) {
        let packed = self.color.pack();
        for vertex in &mut self.vertices {
            vertex.color = packed;
        }
        self.dirty = true;
    }

    fn update_texture_coords(&mut self) {
        let uvs = map_uv(&self.region, self.flip_horizontal, self.flip_vertical);
        for (vertex, uv) in self.vertices.iter_mut().zip(uvs) {
            vertex.uv = uv;
        }
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_region() -> TextureRegion {
        TextureRegion::new(0.0, 0.0, 1.0, 1.0, 64, 32)
    }

    fn positions(quad: &SpriteQuad) -> [[f32; 2]; 4] {
        quad.vertices().map(|v| v.position)
    }

    fn uvs(quad: &SpriteQuad) -> [[f32; 2]; 4] {
        quad.vertices().map(|v| v.uv)
    }

    #[test]
    fn corner_positions_follow_slot_order() {
        let corners = corner_positions(3.0, 5.0);
        assert_eq!(corners[0], Vec2::new(0.0, 0.0));
        assert_eq!(corners[1], Vec2::new(0.0, 5.0));
        assert_eq!(corners[2], Vec2::new(3.0, 0.0));
        assert_eq!(corners[3], Vec2::new(3.0, 5.0));
    }

    #[test]
    fn corner_positions_allow_degenerate_sizes() {
        let corners = corner_positions(0.0, -2.0);
        assert_eq!(corners[3], Vec2::new(0.0, -2.0));
    }

    #[test]
    fn map_uv_flat_region() {
        let slots = map_uv(&unit_region(), false, false);
        assert_eq!(slots, [[0.0, 0.0], [0.0, 1.0], [1.0, 0.0], [1.0, 1.0]]);
    }

    #[test]
    fn map_uv_horizontal_flip() {
        let slots = map_uv(&unit_region(), true, false);
        assert_eq!(slots, [[1.0, 0.0], [1.0, 1.0], [0.0, 0.0], [0.0, 1.0]]);
    }

    #[test]
    fn map_uv_vertical_flip() {
        let slots = map_uv(&unit_region(), false, true);
        assert_eq!(slots, [[0.0, 1.0], [0.0, 0.0], [1.0, 1.0], [1.0, 0.0]]);
    }

    #[test]
    fn map_uv_both_flips() {
        let slots = map_uv(&unit_region(), true, true);
        assert_eq!(slots, [[1.0, 1.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]);
    }

    #[test]
    fn map_uv_rotated_region() {
        let region = unit_region().rotated(true);
        let slots = map_uv(&region, false, false);
        assert_eq!(slots, [[1.0, 0.0], [0.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    }

    #[test]
    fn map_uv_rotated_with_horizontal_flip() {
        let region = unit_region().rotated(true);
        let slots = map_uv(&region, true, false);
        assert_eq!(slots, [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
    }

    #[test]
    fn map_uv_works_on_sub_rectangles() {
        let region = TextureRegion::from_pixels(32, 64, 32, 32, 128, 128);
        let slots = map_uv(&region, false, false);
        assert_eq!(slots[0], [0.25, 0.5]);
        assert_eq!(slots[3], [0.5, 0.75]);
    }

    #[test]
    fn construction_writes_all_attribute_families() {
        let quad = SpriteQuad::new(unit_region(), 10.0, 20.0, Color::RED);
        assert_eq!(
            positions(&quad),
            [[0.0, 0.0], [0.0, 20.0], [10.0, 0.0], [10.0, 20.0]]
        );
        assert_eq!(uvs(&quad), map_uv(&unit_region(), false, false));
        for vertex in quad.vertices() {
            assert_eq!(vertex.color, Color::RED.pack());
        }
    }

    #[test]
    fn with_region_size_uses_pixel_dimensions() {
        let quad = SpriteQuad::with_region_size(unit_region(), Color::WHITE);
        assert_eq!(quad.size(), Size::new(64.0, 32.0));
    }

    #[test]
    fn set_color_is_uniform_across_slots() {
        let mut quad = SpriteQuad::with_region_size(unit_region(), Color::WHITE);
        let color = Color::rgba(0.2, 0.4, 0.6, 0.8);
        quad.set_color(color);
        for vertex in quad.vertices() {
            assert_eq!(vertex.color, color.pack());
        }
    }

    #[test]
    fn flip_toggling_is_exactly_reversible() {
        let mut quad = SpriteQuad::with_region_size(unit_region(), Color::WHITE);
        let original = uvs(&quad);
        quad.set_flip_horizontal(true);
        assert_ne!(uvs(&quad), original);
        quad.set_flip_horizontal(false);
        assert_eq!(uvs(&quad), original);
    }

    #[test]
    fn dirty_lifecycle() {
        let mut quad = SpriteQuad::with_region_size(unit_region(), Color::WHITE);
        // dirty immediately after construction
        assert!(quad.sync_if_dirty());
        // read-then-clear
        assert!(!quad.sync_if_dirty());
        // every mutator re-dirties
        quad.set_size(5.0, 5.0);
        assert!(quad.sync_if_dirty());
        quad.set_color(Color::BLUE);
        assert!(quad.sync_if_dirty());
        quad.set_flip_vertical(true);
        assert!(quad.sync_if_dirty());
        assert!(!quad.sync_if_dirty());
    }

    #[test]
    fn read_only_accessors_leave_the_flag_alone() {
        let mut quad = SpriteQuad::with_region_size(unit_region(), Color::WHITE);
        quad.sync_if_dirty();
        let _ = quad.texture_region();
        let _ = quad.vertices();
        let _ = quad.as_bytes();
        let _ = quad.size();
        assert!(!quad.sync_if_dirty());
    }

    #[test]
    fn reset_keeps_buffer_contents() {
        let mut quad = SpriteQuad::with_region_size(unit_region(), Color::GREEN);
        quad.sync_if_dirty();
        let before = *quad.vertices();
        quad.reset();
        assert_eq!(*quad.vertices(), before);
        assert!(!quad.sync_if_dirty());
    }

    #[test]
    fn set_size_only_touches_positions() {
        let mut quad = SpriteQuad::with_region_size(unit_region(), Color::RED);
        let uv_before = uvs(&quad);
        let color_before = quad.vertices()[0].color;
        quad.set_size(100.0, 200.0);
        assert_eq!(uvs(&quad), uv_before);
        assert_eq!(quad.vertices()[0].color, color_before);
        assert_eq!(positions(&quad)[3], [100.0, 200.0]);
    }

    #[test]
    fn set_color_only_touches_color() {
        let mut quad = SpriteQuad::with_region_size(unit_region(), Color::RED);
        let pos_before = positions(&quad);
        let uv_before = uvs(&quad);
        quad.set_color(Color::BLUE);
        assert_eq!(positions(&quad), pos_before);
        assert_eq!(uvs(&quad), uv_before);
    }

    #[test]
    fn flips_only_touch_texture_coords() {
        let mut quad = SpriteQuad::with_region_size(unit_region(), Color::RED);
        let pos_before = positions(&quad);
        let color_before = quad.vertices()[0].color;
        quad.set_flip_horizontal(true);
        quad.set_flip_vertical(true);
        assert_eq!(positions(&quad), pos_before);
        assert_eq!(quad.vertices()[0].color, color_before);
    }

    #[test]
    fn as_bytes_matches_the_interleaved_layout() {
        let quad = SpriteQuad::new(unit_region(), 1.0, 1.0, Color::WHITE);
        let bytes = quad.as_bytes();
        assert_eq!(bytes.len(), SpriteVertex::LAYOUT.sprite_bytes());
        // slot 1 starts one stride in; its y coordinate is the height
        let stride = SpriteVertex::LAYOUT.stride;
        let y = f32::from_le_bytes(bytes[stride + 4..stride + 8].try_into().unwrap());
        assert_eq!(y, 1.0);
    }
}
