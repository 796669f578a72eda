/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A Portable Pixmap decoder and encoder
//!
//! Supports the two RGB flavours of the format,
//! - `P3`: samples written as ascii decimal numbers
//! - `P6`: samples written as raw bytes
//!
//! Only images with a maximum sample value of 255 are supported.
//!
//! # Example
//! ```no_run
//! use ppmview_ppm::{decode_file, encode_file};
//!
//! let pixels = decode_file("image.ppm").unwrap();
//! encode_file(&pixels, "3", "image_ascii.ppm").unwrap();
//! ```
use std::fs::{read, File};
use std::io::BufWriter;
use std::path::Path;

pub use ppmview_core;
use ppmview_core::options::DecoderOptions;
use ppmview_core::pixel_buffer::PixelBuffer;

pub use crate::decoder::*;
pub use crate::encoder::*;
pub use crate::errors::*;

mod decoder;
mod encoder;
mod errors;

/// Read and decode the PPM file at `path` with default options
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<PixelBuffer, PPMErrors> {
    decode_file_with_options(path, DecoderOptions::default())
}

/// Read and decode the PPM file at `path`
///
/// # Errors
/// - [`PPMErrors::IoErrors`] if the file cannot be opened or read
/// - [`PPMErrors::FormatErrors`] if the contents are not a supported PPM image
pub fn decode_file_with_options<P: AsRef<Path>>(
    path: P, options: DecoderOptions
) -> Result<PixelBuffer, PPMErrors> {
    let data = read(path)?;

    PPMDecoder::new_with_options(options, &data).decode()
}

/// Encode `pixels` into a new file at `path`
///
/// `subformat` is `3` for ascii or `6` for binary output, it is validated
/// before the destination is created.
pub fn encode_file<P: AsRef<Path>>(
    pixels: &PixelBuffer, subformat: &str, path: P
) -> Result<usize, PPMErrors> {
    let version: PPMVersions = subformat.parse()?;

    let mut writer = BufWriter::new(File::create(path)?);

    PPMEncoder::new(&mut writer).encode(pixels, version)
}
