//! Pixel transforms producing new buffers from read-only inputs.

pub mod grayscale;

pub use grayscale::{grayscale, Weighting};
