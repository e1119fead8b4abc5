//! Texture regions: sub-rectangles of an atlas texture.

use vesper_core::geometry::Size;

/// A sub-rectangle of an atlas texture in normalized UV coordinates.
///
/// `(u, v)` and `(u2, v2)` are opposite corners of the rectangle. The
/// `rotated` flag marks regions whose pixel data the atlas packer stored
/// transposed 90°; `width`/`height` are the pixel dimensions of the sprite
/// as it should display, already un-transposed.
///
/// Regions are plain `Copy` snapshots. The sprite vertex state never
/// mutates them: flip and rotation handling always recombines from the raw
/// rectangle stored here, which is what makes flip toggling exactly
/// reversible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureRegion {
    u: f32,
    v: f32,
    u2: f32,
    v2: f32,
    rotated: bool,
    width: u32,
    height: u32,
}

impl TextureRegion {
    /// Create a region from normalized UV corners and pixel dimensions.
    pub fn new(u: f32, v: f32, u2: f32, v2: f32, width: u32, height: u32) -> Self {
        Self {
            u,
            v,
            u2,
            v2,
            rotated: false,
            width,
            height,
        }
    }

    /// Create a region from a pixel rectangle within an atlas of the given
    /// dimensions, normalizing to UV space.
    pub fn from_pixels(
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        atlas_width: u32,
        atlas_height: u32,
    ) -> Self {
        let aw = atlas_width as f32;
        let ah = atlas_height as f32;
        Self::new(
            x as f32 / aw,
            y as f32 / ah,
            (x + width) as f32 / aw,
            (y + height) as f32 / ah,
            width,
            height,
        )
    }

    /// Mark whether the region's pixels are stored transposed in the atlas.
    pub fn rotated(mut self, rotated: bool) -> Self {
        self.rotated = rotated;
        self
    }

    pub fn u(&self) -> f32 {
        self.u
    }

    pub fn v(&self) -> f32 {
        self.v
    }

    pub fn u2(&self) -> f32 {
        self.u2
    }

    pub fn v2(&self) -> f32 {
        self.v2
    }

    pub fn is_rotated(&self) -> bool {
        self.rotated
    }

    /// Pixel width of the displayed sprite.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Pixel height of the displayed sprite.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel dimensions, used for default sprite sizing.
    pub fn pixel_size(&self) -> Size<u32> {
        Size::new(self.width, self.height)
    }
}
