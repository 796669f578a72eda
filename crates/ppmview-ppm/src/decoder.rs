/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ppmview_core::bytestream::ByteReader;
use ppmview_core::log::{info, trace, warn};
use ppmview_core::options::DecoderOptions;
use ppmview_core::pixel_buffer::{buffer_size, PixelBuffer, PixelBufferErrors, MAX_COLOR_VALUE};

use crate::encoder::PPMVersions;
use crate::errors::{FormatErrors, PPMErrors};

/// An instance of a PPM decoder
///
/// The decoder can decode P3 (ascii) and P6 (binary) images
/// with a max color value of 255.
pub struct PPMDecoder<'a> {
    width:           usize,
    height:          usize,
    decoded_headers: bool,
    reader:          ByteReader<'a>,
    version:         PPMVersions,
    options:         DecoderOptions
}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data:PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use ppmview_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(DecoderOptions::default(), data)
    }
    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - options: Modified options for the decoder
    /// - data: PPM encoded data.
    /// # Example
    /// ```
    /// use ppmview_core::options::DecoderOptions;
    /// use ppmview_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new_with_options(DecoderOptions::default(),b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> PPMDecoder<'a> {
        let reader = ByteReader::new(data);

        PPMDecoder {
            width: 0,
            height: 0,
            decoded_headers: false,
            reader,
            version: PPMVersions::P6,
            options
        }
    }
    /// Read PPM headers and store them in internal state
    ///
    /// After this returns, the reader points at the first byte
    /// of the pixel body.
    ///
    /// Calling this more than once is a no-op.
    pub fn read_headers(&mut self) -> Result<(), PPMErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        if !self.reader.has(2) {
            let rest = self.reader.peek_at(0, self.reader.remaining()).unwrap_or(&[]);
            let msg = String::from_utf8_lossy(rest).to_string();

            return Err(FormatErrors::BadMagic(msg).into());
        }
        let p = self.reader.get_u8();
        let version = self.reader.get_u8();

        self.version = match (p, version) {
            (b'P', b'3') => PPMVersions::P3,
            (b'P', b'6') => PPMVersions::P6,
            _ => {
                let msg = String::from_utf8_lossy(&[p, version]).to_string();
                return Err(FormatErrors::BadMagic(msg).into());
            }
        };
        // the magic is a token of its own, `P61` is not P6
        if let Some(next) = self.reader.peek_u8() {
            if !next.is_ascii_whitespace() && next != b'#' {
                let msg = String::from_utf8_lossy(&[p, version, next]).to_string();
                return Err(FormatErrors::BadMagic(msg).into());
            }
        }
        info!("Version: {}", self.version);

        skip_spaces(&mut self.reader);
        self.width = self.get_dimension("width", self.options.get_max_width())?;

        skip_spaces(&mut self.reader);
        self.height = self.get_dimension("height", self.options.get_max_height())?;

        info!("Width: {}, height: {}", self.width, self.height);

        if buffer_size(self.width, self.height).is_none() {
            let overflow = PixelBufferErrors::Overflow(self.width, self.height);
            return Err(FormatErrors::InvalidBuffer(overflow).into());
        }

        skip_spaces(&mut self.reader);
        let max_value = self.get_integer();

        if max_value != Some(MAX_COLOR_VALUE) {
            return Err(FormatErrors::UnsupportedMaxValue(max_value).into());
        }
        // a single whitespace byte separates the header from the body,
        // eof is left for the body decoder to report
        if let Ok(byte) = self.reader.get_u8_err() {
            if !byte.is_ascii_whitespace() {
                return Err(FormatErrors::MissingSeparator(byte).into());
            }
        }
        self.decoded_headers = true;

        Ok(())
    }
    /// Read a width or height, which must be present, positive and below `max`
    fn get_dimension(&mut self, name: &'static str, max: usize) -> Result<usize, PPMErrors> {
        let value = match self.get_integer() {
            Some(value) if value > 0 => value,
            _ => return Err(FormatErrors::MissingDimensions(name).into())
        };
        if value > max {
            return Err(FormatErrors::LargeDimensions(max, value).into());
        }
        Ok(value)
    }
    /// Read a base 10 unsigned integer
    ///
    /// Returns `None` if the stream does not start with a digit.
    /// Values saturate at `usize::MAX`, callers reject them as too large.
    fn get_integer(&mut self) -> Option<usize> {
        let mut value = 0_usize;
        let mut seen_digit = false;

        while let Some(byte) = self.reader.peek_u8() {
            if !byte.is_ascii_digit() {
                break;
            }
            value = value
                .saturating_mul(10)
                .saturating_add(usize::from(byte - b'0'));
            seen_digit = true;
            self.reader.skip(1);
        }
        seen_digit.then_some(value)
    }

    /// Return the image sub-format or none if headers
    /// are not decoded
    pub const fn version(&self) -> Option<PPMVersions> {
        if self.decoded_headers {
            Some(self.version)
        } else {
            None
        }
    }
    /// Return image dimensions or none if headers aren't decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }
    /// Decode a ppm encoded file and return the pixels in it
    ///
    /// # Errors
    /// Any header violation, or a body with fewer samples than
    /// `width*height*3`. Trailing bytes after the body are ignored.
    pub fn decode(&mut self) -> Result<PixelBuffer, PPMErrors> {
        self.read_headers()?;

        let size = buffer_size(self.width, self.height)
            .ok_or_else(|| {
                FormatErrors::InvalidBuffer(PixelBufferErrors::Overflow(self.width, self.height))
            })?;

        let data = match self.version {
            PPMVersions::P6 => self.decode_p6_body(size)?,
            PPMVersions::P3 => self.decode_p3_body(size)?
        };
        trace!("Decoded {} bytes, {} left over", size, self.reader.remaining());

        Ok(PixelBuffer::new(self.width, self.height, data)?)
    }

    fn decode_p6_body(&mut self, size: usize) -> Result<Vec<u8>, PPMErrors> {
        let remaining = self.reader.remaining();

        if remaining < size {
            return Err(FormatErrors::TruncatedPixelData(size, remaining).into());
        }
        let bytes = self
            .reader
            .get_as_ref(size)
            .map_err(|_| FormatErrors::TruncatedPixelData(size, remaining))?;

        Ok(bytes.to_vec())
    }

    fn decode_p3_body(&mut self, size: usize) -> Result<Vec<u8>, PPMErrors> {
        // every sample takes at least a byte, don't trust the header
        // for the allocation size
        let mut data = Vec::with_capacity(size.min(self.reader.remaining()));
        let strict = self.options.get_strict_mode();

        for found in 0..size {
            skip_spaces(&mut self.reader);

            let sample = match self.get_integer() {
                Some(sample) => sample,
                None => return Err(FormatErrors::TruncatedPixelData(size, found).into())
            };
            if sample > MAX_COLOR_VALUE {
                if strict {
                    return Err(FormatErrors::InvalidPixelValue(sample).into());
                }
                warn!("Sample {} at position {} out of range, clamping to 255", sample, found);
            }
            data.push(sample.min(MAX_COLOR_VALUE) as u8);
        }
        Ok(data)
    }
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
fn skip_spaces(byte_stream: &mut ByteReader) {
    while !byte_stream.eof() {
        let mut byte = byte_stream.get_u8();

        if byte == b'#' {
            // comment
            // skip the whole comment
            while byte != b'\n' && !byte_stream.eof() {
                byte = byte_stream.get_u8();
            }
        } else if !byte.is_ascii_whitespace() {
            // go back one step, we hit something that is not a space
            byte_stream.rewind(1);
            break;
        }
    }
}
