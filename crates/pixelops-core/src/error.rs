//! Error type shared across buffer accessors, transforms, and statistics.

/// Errors surfaced by pixel buffer operations and statistics helpers.
///
/// Every failure here is a contract violation by the caller; operations
/// are deterministic, so there is no retry or recovery path.
#[derive(Debug, thiserror::Error)]
pub enum PixelOpsError {
    #[error("buffer shape {width}x{height} requires {} bytes, got {len}", (*width as u64) * (*height as u64) * 4)]
    InvalidBufferShape { width: u32, height: u32, len: usize },
    #[error("statistics on an empty sequence")]
    EmptyInput,
    #[error("pixel ({x}, {y}) outside {width}x{height} buffer")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}
