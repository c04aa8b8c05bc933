//! PNG format support.
//!
//! Reading accepts grayscale, gray+alpha, RGB and RGBA at 8 or 16 bits per
//! channel (palette images are expanded by the decoder); 16-bit sources are
//! downconverted to 8-bit. Writing always produces 8-bit RGBA with an sRGB
//! chunk.

use crate::{ImageData, IoError, IoResult};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use texprep_core::PixelBuffer;
use tracing::warn;

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageData> {
    let file = File::open(path.as_ref())?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let width = info.width;
    let height = info.height;
    buf.truncate(info.buffer_size());

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        color_type => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, info.bit_depth
            )));
        }
    };

    let data = match info.bit_depth {
        png::BitDepth::Eight => buf,
        png::BitDepth::Sixteen => {
            // Big-endian samples; keep the high byte.
            warn!("16-bit input downconverted to 8 bits per channel");
            buf.chunks_exact(2).map(|s| s[0]).collect()
        }
        bit_depth => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                info.color_type, bit_depth
            )));
        }
    };

    Ok(ImageData {
        width,
        height,
        channels,
        data,
    })
}

/// Writes a pixel buffer as an 8-bit RGBA PNG.
pub fn write<P: AsRef<Path>>(path: P, image: &PixelBuffer) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    png_writer
        .write_image_data(&image.to_bytes())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use texprep_core::Rgba8;

    #[test]
    fn test_roundtrip_rgba() {
        let mut image = PixelBuffer::new(16, 8).unwrap();
        for y in 0..8 {
            for x in 0..16 {
                image.set_pixel(x, y, Rgba8::new((x * 16) as u8, (y * 32) as u8, 77, 200));
            }
        }

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("roundtrip_rgba.png");

        write(&path, &image).expect("Failed to write PNG");
        let loaded = read(&path).expect("Failed to read PNG");

        assert_eq!(loaded.width, 16);
        assert_eq!(loaded.height, 8);
        assert_eq!(loaded.channels, 4);

        let buffer = loaded.into_rgba().unwrap();
        assert_eq!(buffer, image);
    }

    #[test]
    fn test_read_grayscale() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("gray.png");

        // Encode a 2x2 grayscale image directly with the png crate.
        {
            let file = File::create(&path).unwrap();
            let mut encoder = png::Encoder::new(BufWriter::new(file), 2, 2);
            encoder.set_color(png::ColorType::Grayscale);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0, 85, 170, 255]).unwrap();
        }

        let loaded = read(&path).expect("Failed to read PNG");
        assert_eq!(loaded.channels, 1);
        assert!(!loaded.has_alpha());

        let buffer = loaded.into_rgba().unwrap();
        assert_eq!(buffer.pixel(1, 0), Rgba8::opaque(85, 85, 85));
        assert_eq!(buffer.pixel(1, 1), Rgba8::opaque(255, 255, 255));
    }

    #[test]
    fn test_read_sixteen_bit_downconverts() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("deep.png");

        {
            let file = File::create(&path).unwrap();
            let mut encoder = png::Encoder::new(BufWriter::new(file), 1, 1);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Sixteen);
            let mut writer = encoder.write_header().unwrap();
            // Big-endian 16-bit samples: 0xABCD, 0x1234, 0xFF00, 0x8001.
            writer
                .write_image_data(&[0xAB, 0xCD, 0x12, 0x34, 0xFF, 0x00, 0x80, 0x01])
                .unwrap();
        }

        let loaded = read(&path).expect("Failed to read PNG");
        assert_eq!(loaded.channels, 4);
        // High bytes survive.
        assert_eq!(loaded.data, vec![0xAB, 0x12, 0xFF, 0x80]);
    }

    #[test]
    fn test_write_failure_reported() {
        let image = PixelBuffer::new(1, 1).unwrap();
        let result = write("/nonexistent-dir/out.png", &image);
        assert!(result.is_err());
    }
}
