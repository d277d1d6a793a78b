//! Grayscale conversion over packed RGBA buffers.
//!
//! Two channel weightings are offered. `GreenBiased` approximates luma
//! perception (eyes are more sensitive to green) with a cheap 1:2:1
//! integer average rather than a photometric formula such as
//! `0.2126R + 0.7152G + 0.0722B` — an intentional simplification, not a
//! standards-compliant conversion.

use serde::{Deserialize, Serialize};

use crate::error::PixelOpsError;
use crate::image::PixelBuffer;

/// Channel weighting used when collapsing RGB to a single gray value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weighting {
    /// Plain average: `(R + G + B) / 3`.
    Equal,
    /// Green-weighted average: `(R + 2G + B) / 4`.
    GreenBiased,
}

/// Convert a buffer to grayscale, returning a newly allocated buffer of
/// identical dimensions.
///
/// Every output pixel has `R == G == B` and alpha forced to 255,
/// regardless of input alpha. The gray value uses integer division, so
/// fractional results truncate toward zero (e.g. 17.5 becomes 17).
///
/// The input is never mutated. A zero-dimension buffer converts to an
/// empty buffer of the same dimensions. Fails with
/// [`PixelOpsError::InvalidBufferShape`] when `data.len()` disagrees
/// with `width * height * 4`.
pub fn grayscale(input: &PixelBuffer, weighting: Weighting) -> Result<PixelBuffer, PixelOpsError> {
    input.validate_shape()?;

    let mut result = PixelBuffer::new(input.width, input.height);
    for (src, dst) in input
        .data
        .chunks_exact(4)
        .zip(result.data.chunks_exact_mut(4))
    {
        let r = src[0] as u16;
        let g = src[1] as u16;
        let b = src[2] as u16;
        let gray = match weighting {
            Weighting::Equal => ((r + g + b) / 3) as u8,
            Weighting::GreenBiased => ((r + 2 * g + b) / 4) as u8,
        };
        dst[0] = gray;
        dst[1] = gray;
        dst[2] = gray;
        dst[3] = 255;
    }

    tracing::debug!(
        "grayscale: {}x{} buffer, weighting {:?}",
        result.width,
        result.height,
        weighting
    );
    Ok(result)
}
