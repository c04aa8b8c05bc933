//! Edge dilation for alpha-blended textures.
//!
//! Bilinear filtering and mipmap generation sample color from fully
//! transparent pixels. If those pixels carry stale background color, it
//! bleeds through at alpha edges as dark seams. Dilation replaces the color
//! under transparent pixels with the average color of their opaque
//! neighbors, so filtered samples stay consistent with the visible edge.
//!
//! The transform runs in two strictly ordered passes:
//!
//! 1. Every pixel with `a == 0` has its color channels zeroed, so garbage
//!    color stored under transparent pixels never contaminates an average.
//! 2. Every pixel with `a == 0` takes the average color of the `a != 0`
//!    pixels in its 3x3 window, clipped to the image bounds. Truncating
//!    integer division, alpha stays 0. A transparent pixel with no opaque
//!    neighbor stays `(0, 0, 0, 0)`.
//!
//! One invocation reaches exactly one ring of neighbors: transparent
//! regions wider than one pixel from any opaque boundary remain partially
//! unfilled. That matches the mipmap-bleed use case (the first ring is what
//! filtering samples) and is documented behavior, not something to iterate
//! to a fixpoint.

use texprep_core::{PixelBuffer, Rgba8};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Dilates opaque color into fully-transparent pixels, in place.
///
/// Opaque pixels (`a > 0`) are never modified. Dimensions are preserved.
///
/// # Example
///
/// ```
/// use texprep_core::{PixelBuffer, Rgba8};
/// use texprep_ops::dilate;
///
/// let mut img = PixelBuffer::new(3, 1).unwrap();
/// img.set_pixel(0, 0, Rgba8::opaque(90, 60, 30));
/// dilate(&mut img);
///
/// // The transparent neighbor picked up the opaque color, alpha stays 0.
/// assert_eq!(img.pixel(1, 0), Rgba8::new(90, 60, 30, 0));
/// // Out of reach of the single-ring window.
/// assert_eq!(img.pixel(2, 0), Rgba8::TRANSPARENT);
/// ```
pub fn dilate(image: &mut PixelBuffer) {
    let (width, height) = image.dimensions();
    debug!("dilating {}x{} image", width, height);

    // Pass 1: blank the color of every fully transparent pixel.
    for px in image.pixels_mut() {
        if px.is_transparent() {
            *px = Rgba8::TRANSPARENT;
        }
    }

    // Pass 2 reads a frozen copy of the pass-1 output. Writes only touch
    // pixels with a == 0, which the window average never samples, so rows
    // can be filled independently.
    let snapshot = image.clone();
    let row_len = width as usize;

    let fill_row = |(y, row): (usize, &mut [Rgba8])| {
        for (x, px) in row.iter_mut().enumerate() {
            if !px.is_transparent() {
                continue;
            }
            if let Some(color) = window_average(&snapshot, x as u32, y as u32) {
                *px = color;
            }
        }
    };

    #[cfg(feature = "parallel")]
    image
        .pixels_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(fill_row);

    #[cfg(not(feature = "parallel"))]
    image
        .pixels_mut()
        .chunks_mut(row_len)
        .enumerate()
        .for_each(fill_row);
}

/// Average color of the opaque pixels in the clipped 3x3 window at (x, y).
///
/// Returns `None` when the window holds no pixel with `a != 0`. Edge and
/// corner pixels see a smaller window; positions outside the image are
/// never sampled.
fn window_average(image: &PixelBuffer, x: u32, y: u32) -> Option<Rgba8> {
    let (width, height) = image.dimensions();
    let left = x.saturating_sub(1);
    let right = (x + 1).min(width - 1);
    let top = y.saturating_sub(1);
    let bottom = (y + 1).min(height - 1);

    let mut red = 0u32;
    let mut green = 0u32;
    let mut blue = 0u32;
    let mut count = 0u32;

    for wy in top..=bottom {
        for wx in left..=right {
            let px = image.pixel(wx, wy);
            if !px.is_transparent() {
                red += u32::from(px.r);
                green += u32::from(px.g);
                blue += u32::from(px.b);
                count += 1;
            }
        }
    }

    if count == 0 {
        return None;
    }
    // Truncating division, alpha stays 0.
    Some(Rgba8::new(
        (red / count) as u8,
        (green / count) as u8,
        (blue / count) as u8,
        0,
    ))
}
