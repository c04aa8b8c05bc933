//! JPEG format support (decode only).
//!
//! JPEG carries no alpha channel, so decoded images always need the
//! alpha = 255 fill during RGBA upconversion. Output is always PNG; there
//! is no JPEG writer.

use crate::{ImageData, IoError, IoResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::warn;

/// Reads a JPEG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<ImageData> {
    let file = File::open(path.as_ref())?;
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(file));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;

    let (channels, data) = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => (3, pixels),
        jpeg_decoder::PixelFormat::L8 => (1, pixels),
        jpeg_decoder::PixelFormat::L16 => {
            // Big-endian 16-bit luma; keep the high byte.
            warn!("16-bit input downconverted to 8 bits per channel");
            (1, pixels.chunks_exact(2).map(|s| s[0]).collect())
        }
        jpeg_decoder::PixelFormat::CMYK32 => (3, cmyk_to_rgb(&pixels)),
    };

    Ok(ImageData {
        width: u32::from(info.width),
        height: u32::from(info.height),
        channels,
        data,
    })
}

/// Approximate CMYK to RGB conversion (no ICC profile handling).
fn cmyk_to_rgb(cmyk: &[u8]) -> Vec<u8> {
    cmyk.chunks_exact(4)
        .flat_map(|px| {
            let k = 255 - px[3] as u32;
            let r = (255 - px[0] as u32) * k / 255;
            let g = (255 - px[1] as u32) * k / 255;
            let b = (255 - px[2] as u32) * k / 255;
            [r as u8, g as u8, b as u8]
        })
        .collect()
}
