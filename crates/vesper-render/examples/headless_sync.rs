//! Headless demonstration of the sprite update → upload loop.
//!
//! Creates a graphics context without a window, mutates a sprite quad over
//! a few fake frames, and logs when the dirty flag actually triggers a GPU
//! upload.

use vesper_render::{Color, GraphicsContext, SpriteMesh, SpriteQuad, TextureRegion};

fn main() {
    vesper_core::logging::init();

    let context = GraphicsContext::new_owned_sync();

    let region = TextureRegion::from_pixels(0, 0, 64, 64, 256, 256).rotated(true);
    let mut quad = SpriteQuad::with_region_size(region, Color::WHITE);
    let mut mesh = SpriteMesh::new(&context);

    for frame in 0..6u32 {
        // update phase: mutate on some frames only
        match frame {
            2 => quad.set_flip_horizontal(true),
            4 => quad.set_color(Color::from_hex(0x88CCFF)),
            _ => {}
        }

        // render phase: upload only if something changed
        let uploaded = mesh.upload_if_dirty(&context, &mut quad);
        tracing::info!(frame, uploaded, "frame synced");
    }
}
