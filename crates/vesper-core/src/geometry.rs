#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    pub fn cast<U: From<T>>(self) -> Size<U> {
        Size {
            width: U::from(self.width),
            height: U::from(self.height),
        }
    }
}

impl Size<u32> {
    /// Lossy conversion to floating-point dimensions, e.g. when pixel
    /// dimensions seed a local-space quad.
    pub fn as_f32(self) -> Size<f32> {
        Size {
            width: self.width as f32,
            height: self.height as f32,
        }
    }
}
