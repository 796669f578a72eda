/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during decoding and encoding
use std::fmt::{Debug, Display, Formatter};
use std::io;

use ppmview_core::pixel_buffer::PixelBufferErrors;

/// Grammar violations found while reading or writing a PPM stream
///
/// Each variant names the rule that failed
pub enum FormatErrors {
    /// The first two bytes were not `P3` or `P6`
    BadMagic(String),
    /// Width or height absent, zero or not a base 10 integer
    MissingDimensions(&'static str),
    /// Max color value absent or not exactly 255
    UnsupportedMaxValue(Option<usize>),
    /// Expected number of samples, found number of samples
    TruncatedPixelData(usize, usize),
    /// The byte after the max color value was not whitespace
    MissingSeparator(u8),
    /// A P3 sample larger than 255, in strict mode
    InvalidPixelValue(usize),
    /// Expected a value less than, found
    LargeDimensions(usize, usize),
    /// Encoder asked for something other than `3` or `6`
    UnsupportedSubformat(String),
    /// Pixel data and dimensions disagree
    InvalidBuffer(PixelBufferErrors)
}

impl Debug for FormatErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadMagic(found) => {
                writeln!(
                    f,
                    "Bad magic, expected P3 or P6 but found `{found}`"
                )
            }
            Self::MissingDimensions(which) => {
                writeln!(f, "Missing dimensions, could not read a positive {which}")
            }
            Self::UnsupportedMaxValue(Some(value)) => {
                writeln!(
                    f,
                    "Unsupported max color value {value}, only 8 bit images (255) are supported"
                )
            }
            Self::UnsupportedMaxValue(None) => {
                writeln!(f, "Unsupported max color value, no value present")
            }
            Self::TruncatedPixelData(expected, found) => {
                writeln!(
                    f,
                    "Truncated pixel data, expected {expected} samples but found {found}"
                )
            }
            Self::MissingSeparator(found) => {
                writeln!(
                    f,
                    "Missing whitespace between the max color value and the pixel data, found byte {found:#04x}"
                )
            }
            Self::InvalidPixelValue(value) => {
                writeln!(f, "Invalid pixel value {value}, samples must be in 0..=255")
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::UnsupportedSubformat(found) => {
                writeln!(f, "Unsupported subformat `{found}`, expected 3 or 6")
            }
            Self::InvalidBuffer(err) => {
                writeln!(f, "Invalid pixel buffer: {err:?}")
            }
        }
    }
}

/// Errors returned by the PPM decoder and encoder
pub enum PPMErrors {
    /// The file could not be opened, read or written
    IoErrors(io::Error),
    /// The stream violates the PPM grammar
    FormatErrors(FormatErrors)
}

impl PPMErrors {
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::IoErrors(_))
    }
    /// Return the grammar violation, if this is a format error
    pub const fn format_error(&self) -> Option<&FormatErrors> {
        match self {
            Self::FormatErrors(err) => Some(err),
            Self::IoErrors(_) => None
        }
    }
}

impl Debug for PPMErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoErrors(ref err) => {
                writeln!(f, "I/O error: {err}")
            }
            Self::FormatErrors(ref err) => {
                write!(f, "Format error: {err:?}")
            }
        }
    }
}

impl Display for PPMErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PPMErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoErrors(err) => Some(err),
            Self::FormatErrors(_) => None
        }
    }
}

impl From<io::Error> for PPMErrors {
    fn from(err: io::Error) -> Self {
        PPMErrors::IoErrors(err)
    }
}

impl From<FormatErrors> for PPMErrors {
    fn from(err: FormatErrors) -> Self {
        PPMErrors::FormatErrors(err)
    }
}

impl From<PixelBufferErrors> for PPMErrors {
    fn from(err: PixelBufferErrors) -> Self {
        PPMErrors::FormatErrors(FormatErrors::InvalidBuffer(err))
    }
}
