//! The 8-bit RGBA pixel type.
//!
//! Everything texprep processes is normalized to four 8-bit channels before
//! a transform runs, so a single concrete pixel type is enough. The struct
//! layout replaces the bit-shifted 32-bit packing a C implementation would
//! use; no mask arithmetic is needed anywhere.

use std::fmt;

/// An RGBA pixel with 8 bits per channel.
///
/// Channel values are in `[0, 255]`. `a == 0` means fully transparent,
/// `a == 255` fully opaque.
///
/// `#[repr(C)]` gives the predictable `[r, g, b, a]` byte order expected by
/// encoders.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha (opacity) channel.
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black, `(0, 0, 0, 0)`.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Creates a pixel from the four channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque pixel (`a = 255`).
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Returns `true` if the pixel is fully transparent (`a == 0`).
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Returns the channels as an `[r, g, b, a]` array.
    #[inline]
    pub const fn channels(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba8 {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba8> for [u8; 4] {
    #[inline]
    fn from(px: Rgba8) -> Self {
        px.channels()
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
