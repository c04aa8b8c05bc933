//! Owned RGBA pixel buffer.
//!
//! [`PixelBuffer`] stores pixels in row-major order, top-to-bottom. It is
//! the only representation the transforms operate on: decoders produce one,
//! a transform mutates it in place, the encoder consumes it.
//!
//! Construction validates dimensions, so every live buffer satisfies
//! `width > 0`, `height > 0` and `data.len() == width * height`. Transforms
//! never need to re-check shape.

use crate::{Error, Result, Rgba8};

/// A rectangular array of [`Rgba8`] pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<Rgba8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Creates a buffer filled with transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::validate(width, height)?;
        let data = vec![Rgba8::TRANSPARENT; width as usize * height as usize];
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a buffer from existing pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero, or
    /// if `data` does not hold exactly `width * height` pixels.
    pub fn from_pixels(width: u32, height: u32, data: Vec<Rgba8>) -> Result<Self> {
        Self::validate(width, height)?;
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    fn validate(width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "width and height must be nonzero",
            ));
        }
        Ok(())
    }

    /// Returns the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[self.offset(x, y)]
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.offset(x, y);
        self.data[offset] = pixel;
    }

    /// Returns the pixels as a flat row-major slice.
    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.data
    }

    /// Returns the pixels as a mutable flat row-major slice.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba8] {
        &mut self.data
    }

    /// Returns the pixel data as interleaved `[r, g, b, a]` bytes.
    ///
    /// This is the layout PNG encoders expect for 8-bit RGBA rows.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for px in &self.data {
            bytes.extend_from_slice(&px.channels());
        }
        bytes
    }
}
