//! Alpha premultiplication.
//!
//! Scales each color channel by `alpha / 255` using truncating integer
//! division, leaving alpha unchanged. Premultiplied color simplifies
//! blending math (`src + dst * (1 - src.a)`) and avoids fringing when
//! textures are filtered.
//!
//! The transform is per-pixel with no neighbor dependency, so it is fully
//! order independent.

use texprep_core::{PixelBuffer, Rgba8};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Pre-multiplies color channels by alpha, in place.
///
/// For each pixel: `c' = c * a / 255` with truncating division; `a` is
/// unchanged. Dimensions are preserved.
///
/// # Example
///
/// ```
/// use texprep_core::{PixelBuffer, Rgba8};
/// use texprep_ops::premultiply;
///
/// let mut img = PixelBuffer::new(1, 1).unwrap();
/// img.set_pixel(0, 0, Rgba8::new(255, 255, 255, 128));
/// premultiply(&mut img);
/// assert_eq!(img.pixel(0, 0), Rgba8::new(128, 128, 128, 128));
/// ```
pub fn premultiply(image: &mut PixelBuffer) {
    let (width, height) = image.dimensions();
    debug!("premultiplying {}x{} image", width, height);

    #[cfg(feature = "parallel")]
    image
        .pixels_mut()
        .par_iter_mut()
        .for_each(|px| *px = premultiply_pixel(*px));

    #[cfg(not(feature = "parallel"))]
    image
        .pixels_mut()
        .iter_mut()
        .for_each(|px| *px = premultiply_pixel(*px));
}

/// Pre-multiplies a single pixel: `c' = c * a / 255`, truncating.
///
/// The per-channel product fits in `u16` (255 * 255 = 65025), so the math
/// is exact; no clamping is needed for 8-bit inputs.
#[inline]
pub fn premultiply_pixel(px: Rgba8) -> Rgba8 {
    let a = u16::from(px.a);
    Rgba8::new(
        (u16::from(px.r) * a / 255) as u8,
        (u16::from(px.g) * a / 255) as u8,
        (u16::from(px.b) * a / 255) as u8,
        px.a,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_contract() {
        // 255 * 128 = 32640, / 255 = 128 exactly; truncation, not rounding
        // to nearest.
        let px = premultiply_pixel(Rgba8::new(255, 255, 255, 128));
        assert_eq!(px, Rgba8::new(128, 128, 128, 128));

        // 100 * 200 = 20000, / 255 = 78.43 -> 78
        let px = premultiply_pixel(Rgba8::new(100, 0, 0, 200));
        assert_eq!(px.r, 78);
    }

    #[test]
    fn test_zero_alpha_zeroes_color() {
        let px = premultiply_pixel(Rgba8::new(255, 128, 64, 0));
        assert_eq!(px, Rgba8::TRANSPARENT);
    }

    #[test]
    fn test_full_alpha_is_identity() {
        let px = premultiply_pixel(Rgba8::new(255, 128, 64, 255));
        assert_eq!(px, Rgba8::new(255, 128, 64, 255));
    }

    #[test]
    fn test_result_never_exceeds_input() {
        for c in (0..=255u8).step_by(15) {
            for a in (0..=255u8).step_by(15) {
                let px = premultiply_pixel(Rgba8::new(c, c, c, a));
                assert!(px.r <= c);
                assert_eq!(px.r, ((c as u32 * a as u32) / 255) as u8);
                assert_eq!(px.a, a);
            }
        }
    }

    #[test]
    fn test_buffer_premultiply() {
        let mut img = PixelBuffer::new(4, 2).unwrap();
        for px in img.pixels_mut() {
            *px = Rgba8::new(200, 100, 50, 51);
        }
        premultiply(&mut img);
        assert_eq!(img.dimensions(), (4, 2));
        for px in img.pixels() {
            // 200*51/255 = 40, 100*51/255 = 20, 50*51/255 = 10
            assert_eq!(*px, Rgba8::new(40, 20, 10, 51));
        }
    }
}
