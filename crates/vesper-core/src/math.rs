/// Vector and matrix math via the SIMD-accelerated [`glam`] crate.
///
/// All vesper crates route their vector math through this module so the
/// math backend is swappable in one place.
///
/// # Examples
///
/// ```
/// use vesper_core::math::fast::Vec2;
///
/// let position = Vec2::new(10.0, 20.0);
/// let velocity = Vec2::new(1.0, 0.5);
/// let next = position + velocity * 0.016;
/// assert!(next.x > position.x);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::{Vec2, Vec3, Vec4};
