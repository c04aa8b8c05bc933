//! # texprep-ops
//!
//! Pixel-buffer transforms that prepare RGBA images for use as
//! alpha-blended textures.
//!
//! Two independent, stateless transforms are provided, selected by
//! [`Operation`]:
//!
//! - [`dilate`](dilate::dilate) - spreads color from opaque pixels into
//!   adjacent fully-transparent pixels, so texture filtering and mipmap
//!   generation do not bleed stale background color across alpha edges.
//! - [`premultiply`](premultiply::premultiply) - scales color channels by
//!   `alpha / 255`.
//!
//! Exactly one transform runs per invocation; there is no combined mode.
//! Both mutate a [`texprep_core::PixelBuffer`] in place and preserve its
//! dimensions.
//!
//! # Example
//!
//! ```
//! use texprep_core::PixelBuffer;
//! use texprep_ops::Operation;
//!
//! let mut img = PixelBuffer::new(64, 64).unwrap();
//! Operation::default().apply(&mut img); // dilate
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - row-parallel processing via rayon (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dilate;
pub mod premultiply;

pub use dilate::dilate;
pub use premultiply::{premultiply, premultiply_pixel};

use std::fmt;
use texprep_core::PixelBuffer;

/// The transform to apply to a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    /// Dilate color from opaque pixels into transparent neighbors.
    #[default]
    Dilate,
    /// Pre-multiply color channels by alpha.
    Premultiply,
}

impl Operation {
    /// Applies this operation to the buffer in place.
    pub fn apply(self, image: &mut PixelBuffer) {
        match self {
            Self::Dilate => dilate(image),
            Self::Premultiply => premultiply(image),
        }
    }

    /// Short operation name for log and status output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dilate => "dilate",
            Self::Premultiply => "premul",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use texprep_core::Rgba8;

    #[test]
    fn test_default_operation_is_dilate() {
        assert_eq!(Operation::default(), Operation::Dilate);
        assert_eq!(Operation::default().name(), "dilate");
        assert_eq!(Operation::Premultiply.to_string(), "premul");
    }

    #[test]
    fn test_apply_dispatch_preserves_shape() {
        for op in [Operation::Dilate, Operation::Premultiply] {
            let mut img = PixelBuffer::new(5, 7).unwrap();
            img.set_pixel(2, 3, Rgba8::opaque(200, 100, 50));
            op.apply(&mut img);
            assert_eq!(img.dimensions(), (5, 7));
        }
    }
}
