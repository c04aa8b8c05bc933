//! # texprep-core
//!
//! Core types for alpha texture preparation.
//!
//! This crate provides the in-memory representation shared by the texprep
//! tools:
//!
//! - [`Rgba8`] - an 8-bit-per-channel RGBA pixel
//! - [`PixelBuffer`] - an owned, row-major rectangular pixel array
//! - [`Error`] / [`Result`] - validation errors for buffer construction
//!
//! A buffer is created by decoding an input file, mutated by exactly one
//! transform, then consumed by the encoder and discarded. There is no
//! caching and no sharing across invocations, so the buffer is a plain
//! single-owner `Vec` without interior mutability.
//!
//! ```
//! use texprep_core::{PixelBuffer, Rgba8};
//!
//! let mut img = PixelBuffer::new(16, 16).unwrap();
//! img.set_pixel(3, 4, Rgba8::opaque(255, 128, 0));
//! assert_eq!(img.pixel(3, 4).r, 255);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod pixel;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use pixel::Rgba8;
