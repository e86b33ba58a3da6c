//! Trait definitions for pixels with named black and white values.

use image::Luma;

/// Pixels which have a named Black value.
pub trait HasBlack {
    /// Returns a black value of this pixel type.
    fn black() -> Self;
}

/// Pixels which have a named White value.
pub trait HasWhite {
    /// Returns a white value of this pixel type.
    fn white() -> Self;
}

impl HasBlack for Luma<u8> {
    fn black() -> Self {
        Luma([0u8])
    }
}

impl HasWhite for Luma<u8> {
    fn white() -> Self {
        Luma([u8::MAX])
    }
}
