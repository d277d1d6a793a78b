//! Packed RGBA buffer representation and pixel accessors.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::error::PixelOpsError;

/// A single RGBA pixel. Layout matches four consecutive bytes in a
/// [`PixelBuffer`], so a buffer's data can be viewed as `&[Pixel]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Pixel {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel (255 = fully opaque).
    pub alpha: u8,
}

/// Owned packed-RGBA image buffer in row-major order.
///
/// Invariant: `data.len() == width * height * 4`. Fields are public, so
/// operations re-validate the invariant at their entry rather than
/// trusting construction alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data as `[R, G, B, A, R, G, B, A, ...]`.
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Construct a zero-filled (transparent black) buffer of size
    /// `width × height`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; expected_len(width, height)],
        }
    }

    /// Construct a buffer from raw RGBA bytes, validating that the data
    /// length matches the stated dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, PixelOpsError> {
        if data.len() != expected_len(width, height) {
            return Err(PixelOpsError::InvalidBufferShape {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Number of pixels in the buffer.
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when the buffer holds no pixels (zero width or height).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the `data.len() == width * height * 4` invariant.
    pub fn validate_shape(&self) -> Result<(), PixelOpsError> {
        if self.data.len() != expected_len(self.width, self.height) {
            return Err(PixelOpsError::InvalidBufferShape {
                width: self.width,
                height: self.height,
                len: self.data.len(),
            });
        }
        Ok(())
    }

    /// Byte offset of the first channel of the pixel at (x, y).
    ///
    /// If (x, y) is the n-th pixel in row-major order, the offset is
    /// `n * 4`, since each pixel spans four bytes. Fails with
    /// [`PixelOpsError::OutOfBounds`] when the coordinates fall outside
    /// the buffer.
    pub fn pixel_offset(&self, x: u32, y: u32) -> Result<usize, PixelOpsError> {
        if x >= self.width || y >= self.height {
            return Err(PixelOpsError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize * self.width as usize + x as usize) * 4)
    }

    /// Read the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Result<Pixel, PixelOpsError> {
        let offset = self.pixel_offset(x, y)?;
        Ok(Pixel {
            red: self.data[offset],
            green: self.data[offset + 1],
            blue: self.data[offset + 2],
            alpha: self.data[offset + 3],
        })
    }

    /// Zero-copy view of the data as whole pixels. Trailing bytes that do
    /// not form a complete pixel are excluded.
    pub fn pixels(&self) -> &[Pixel] {
        let whole = self.data.len() / 4 * 4;
        bytemuck::cast_slice(&self.data[..whole])
    }

    /// Convert into an [`image::RgbaImage`] for interop with callers that
    /// render or inspect buffers through the `image` crate.
    pub fn to_rgba_image(&self) -> Result<image::RgbaImage, PixelOpsError> {
        self.validate_shape()?;
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or(
            PixelOpsError::InvalidBufferShape {
                width: self.width,
                height: self.height,
                len: self.data.len(),
            },
        )
    }
}

impl From<image::RgbaImage> for PixelBuffer {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }
}

fn expected_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}
