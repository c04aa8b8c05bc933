//! # texprep-io
//!
//! Image decode and encode for alpha texture preparation.
//!
//! Inputs may be PNG or JPEG; output is always an 8-bit-per-channel RGBA
//! PNG. Decoding normalizes every input to 8 bits per channel and reports
//! the source channel count (1 = gray, 2 = gray+alpha, 3 = RGB, 4 = RGBA);
//! [`ImageData::into_rgba`] upconverts to the RGBA [`PixelBuffer`] the
//! transforms operate on, filling alpha = 255 where the source had none.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use texprep_io::{read, write_png};
//!
//! let image = read("input.png")?;      // format auto-detected
//! let buffer = image.into_rgba()?;
//! write_png("output.png", &buffer)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;

pub mod jpeg;
pub mod png;

pub use detect::Format;
pub use error::{IoError, IoResult};

use std::path::Path;
use texprep_core::{PixelBuffer, Rgba8};

/// Reads an image from a file, auto-detecting the format.
///
/// Pixel data is normalized to 8 bits per channel; 16-bit sources are
/// downconverted with a warning. The source channel count is preserved in
/// [`ImageData::channels`] so callers can diagnose missing alpha before
/// upconverting.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the format is not
/// supported, the file is corrupted, or the decoded dimensions are zero.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageData> {
    let path = path.as_ref();

    let image = match Format::detect(path)? {
        Format::Png => png::read(path),
        Format::Jpeg => jpeg::read(path),
        Format::Unknown => Err(IoError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )),
    }?;

    if image.width == 0 || image.height == 0 {
        return Err(IoError::InvalidDimensions(format!(
            "{}x{}",
            image.width, image.height
        )));
    }

    Ok(image)
}

/// Writes a pixel buffer as an 8-bit RGBA PNG.
///
/// A failed write reports an error; the in-memory buffer is untouched and
/// remains usable.
pub fn write_png<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    png::write(path, image)
}

/// Decoded image container, always 8 bits per channel.
///
/// Holds interleaved samples in the source channel layout. Convert to a
/// [`PixelBuffer`] with [`into_rgba`](Self::into_rgba) before running a
/// transform.
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Source channel count: 1 = gray, 2 = gray+alpha, 3 = RGB, 4 = RGBA.
    pub channels: u32,
    /// Interleaved 8-bit samples, `width * height * channels` bytes.
    pub data: Vec<u8>,
}

impl ImageData {
    /// Returns `true` if the source carried an alpha channel.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.channels == 2 || self.channels == 4
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Upconverts to an RGBA pixel buffer.
    ///
    /// Gray sources replicate the gray value into R, G and B; sources
    /// without alpha get `a = 255` everywhere.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnsupportedChannels`] for channel counts outside
    /// 1..=4 and [`IoError::InvalidDimensions`] when the sample count does
    /// not match the dimensions.
    pub fn into_rgba(self) -> IoResult<PixelBuffer> {
        let pixels: Vec<Rgba8> = match self.channels {
            1 => self.data.iter().map(|&g| Rgba8::opaque(g, g, g)).collect(),
            2 => self
                .data
                .chunks_exact(2)
                .map(|ga| Rgba8::new(ga[0], ga[0], ga[0], ga[1]))
                .collect(),
            3 => self
                .data
                .chunks_exact(3)
                .map(|rgb| Rgba8::opaque(rgb[0], rgb[1], rgb[2]))
                .collect(),
            4 => self
                .data
                .chunks_exact(4)
                .map(|p| Rgba8::new(p[0], p[1], p[2], p[3]))
                .collect(),
            n => return Err(IoError::UnsupportedChannels(n)),
        };

        PixelBuffer::from_pixels(self.width, self.height, pixels)
            .map_err(|e| IoError::InvalidDimensions(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_rgba_gray() {
        let image = ImageData {
            width: 2,
            height: 1,
            channels: 1,
            data: vec![10, 20],
        };
        assert!(!image.has_alpha());
        let buf = image.into_rgba().unwrap();
        assert_eq!(buf.pixel(0, 0), Rgba8::opaque(10, 10, 10));
        assert_eq!(buf.pixel(1, 0), Rgba8::opaque(20, 20, 20));
    }

    #[test]
    fn test_into_rgba_gray_alpha() {
        let image = ImageData {
            width: 1,
            height: 1,
            channels: 2,
            data: vec![128, 40],
        };
        assert!(image.has_alpha());
        let buf = image.into_rgba().unwrap();
        assert_eq!(buf.pixel(0, 0), Rgba8::new(128, 128, 128, 40));
    }

    #[test]
    fn test_into_rgba_rgb_fills_alpha() {
        let image = ImageData {
            width: 1,
            height: 1,
            channels: 3,
            data: vec![1, 2, 3],
        };
        let buf = image.into_rgba().unwrap();
        assert_eq!(buf.pixel(0, 0), Rgba8::opaque(1, 2, 3));
    }

    #[test]
    fn test_into_rgba_passthrough() {
        let image = ImageData {
            width: 1,
            height: 2,
            channels: 4,
            data: vec![1, 2, 3, 4, 5, 6, 7, 8],
        };
        let buf = image.into_rgba().unwrap();
        assert_eq!(buf.pixel(0, 0), Rgba8::new(1, 2, 3, 4));
        assert_eq!(buf.pixel(0, 1), Rgba8::new(5, 6, 7, 8));
    }

    #[test]
    fn test_into_rgba_bad_channel_count() {
        let image = ImageData {
            width: 1,
            height: 1,
            channels: 5,
            data: vec![0; 5],
        };
        assert!(matches!(
            image.into_rgba(),
            Err(IoError::UnsupportedChannels(5))
        ));
    }

    #[test]
    fn test_into_rgba_sample_count_mismatch() {
        let image = ImageData {
            width: 3,
            height: 3,
            channels: 4,
            data: vec![0; 4],
        };
        assert!(matches!(
            image.into_rgba(),
            Err(IoError::InvalidDimensions(_))
        ));
    }
}
