//! Pixelops Core — pixel-level transforms over packed RGBA buffers.
//!
//! This crate contains the buffer representation, the grayscale
//! conversion, and the small statistics helpers. Pure synchronous
//! functions only; no I/O, no framework dependencies.

pub mod error;
pub mod image;
pub mod stats;
pub mod transform;

// Re-exports for convenience.
pub use error::PixelOpsError;
pub use image::{Pixel, PixelBuffer};
pub use transform::grayscale::{grayscale, Weighting};
