/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoded RGB pixels
//!
//! A [`PixelBuffer`] is what a decoder hands out and what a render surface
//! uploads as its texture. It always stores interleaved 8 bit RGB, row major,
//! top row first.
use core::fmt::{Debug, Display, Formatter};

/// Number of channels stored per pixel
pub const CHANNELS: usize = 3;

/// The only supported maximum sample value
pub const MAX_COLOR_VALUE: usize = 255;

/// Errors that can occur when building a pixel buffer
/// from raw parts
pub enum PixelBufferErrors {
    /// Width or height was zero
    ZeroDimensions(usize, usize),
    /// Expected length, found length
    LengthMismatch(usize, usize),
    /// Width * height * channels does not fit in a usize
    Overflow(usize, usize)
}

impl Debug for PixelBufferErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroDimensions(width, height) => {
                writeln!(f, "Image dimensions must be positive, found {width}x{height}")
            }
            Self::LengthMismatch(expected, found) => {
                writeln!(
                    f,
                    "Data length does not match image dimensions, expected {expected} but found {found}"
                )
            }
            Self::Overflow(width, height) => {
                writeln!(f, "Dimensions {width}x{height} overflow the addressable size")
            }
        }
    }
}

impl Display for PixelBufferErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PixelBufferErrors {}

/// Return the number of bytes needed to store a `width` x `height` RGB image,
/// or `None` on overflow
pub const fn buffer_size(width: usize, height: usize) -> Option<usize> {
    match width.checked_mul(height) {
        Some(pixels) => pixels.checked_mul(CHANNELS),
        None => None
    }
}

/// An owned, immutable 8 bit RGB image
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width:  usize,
    height: usize,
    data:   Vec<u8>
}

impl PixelBuffer {
    /// Create a new pixel buffer from interleaved RGB bytes
    ///
    /// # Errors
    /// - If either dimension is zero
    /// - If `data.len()` is not `width * height * 3`
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<PixelBuffer, PixelBufferErrors> {
        if width == 0 || height == 0 {
            return Err(PixelBufferErrors::ZeroDimensions(width, height));
        }
        let expected = buffer_size(width, height).ok_or(PixelBufferErrors::Overflow(width, height))?;

        if expected != data.len() {
            return Err(PixelBufferErrors::LengthMismatch(expected, data.len()));
        }
        Ok(PixelBuffer {
            width,
            height,
            data
        })
    }
    /// Create an image where every pixel has the same color
    pub fn fill(color: [u8; 3], width: usize, height: usize) -> Result<PixelBuffer, PixelBufferErrors> {
        let size = buffer_size(width, height).ok_or(PixelBufferErrors::Overflow(width, height))?;

        let data = color.iter().copied().cycle().take(size).collect();

        PixelBuffer::new(width, height, data)
    }
    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn height(&self) -> usize {
        self.height
    }
    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    /// The maximum sample value, always 255
    pub const fn max_color_value(&self) -> usize {
        MAX_COLOR_VALUE
    }
    /// Raw interleaved RGB bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }
    /// Consume the buffer and return the raw bytes
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
    /// Iterate over pixels in row major order
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| [px[0], px[1], px[2]])
    }
    /// Iterate over rows, top row first, each row is `width * 3` bytes
    pub fn rows(&self) -> core::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.width * CHANNELS)
    }
    /// Return the pixel at column `x`, row `y`, or `None` if out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * CHANNELS;
        let px = &self.data[start..start + CHANNELS];

        Some([px[0], px[1], px[2]])
    }
}

impl Debug for PixelBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        // printing every sample is useless for anything but tiny images
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}
