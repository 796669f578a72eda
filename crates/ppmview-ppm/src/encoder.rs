/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Display, Formatter, Write as _};
use std::io::Write;
use std::str::FromStr;

use ppmview_core::pixel_buffer::{PixelBuffer, MAX_COLOR_VALUE};

use crate::errors::{FormatErrors, PPMErrors};

/// Comment line written after the magic
pub const HEADER_COMMENT: &str = "# written by ppmview";

/// PPM sub-formats supported by this crate
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PPMVersions {
    /// Ascii samples
    P3,
    /// Raw bytes
    P6
}

impl PPMVersions {
    /// The digit following `P` in the magic
    pub const fn subformat(self) -> char {
        match self {
            Self::P3 => '3',
            Self::P6 => '6'
        }
    }
}

impl Display for PPMVersions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P3 => write!(f, "P3"),
            Self::P6 => write!(f, "P6")
        }
    }
}

impl FromStr for PPMVersions {
    type Err = FormatErrors;

    /// Parse a sub-format, exactly `3` or `6`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "3" => Ok(Self::P3),
            "6" => Ok(Self::P6),
            _ => Err(FormatErrors::UnsupportedSubformat(s.to_string()))
        }
    }
}

/// A PPM encoder
pub struct PPMEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PPMEncoder<'a, W> {
    /// Create a new PPM encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PPMEncoder<'a, W> {
        Self { writer }
    }

    /// Write the magic, comment, dimension and max value lines
    fn write_headers(
        &mut self, version: PPMVersions, width: usize, height: usize
    ) -> Result<usize, PPMErrors> {
        let header =
            format!("{version}\n{HEADER_COMMENT}\n{width} {height}\n{MAX_COLOR_VALUE}\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(header.len())
    }

    /// Write one line per row, samples separated by a single space
    fn write_p3_body(&mut self, pixels: &PixelBuffer) -> Result<usize, PPMErrors> {
        let mut written = 0;
        // a row can hold up to 12 bytes per pixel
        let mut line = String::with_capacity(pixels.width() * 12);

        for row in pixels.rows() {
            line.clear();

            for (pos, sample) in row.iter().enumerate() {
                if pos != 0 {
                    line.push(' ');
                }
                // writing to a String never fails
                let _ = write!(line, "{sample}");
            }
            line.push('\n');

            self.writer.write_all(line.as_bytes())?;
            written += line.len();
        }
        Ok(written)
    }

    /// Encode `pixels` as a `version` PPM file
    ///
    /// Returns the number of bytes written
    pub fn encode(&mut self, pixels: &PixelBuffer, version: PPMVersions) -> Result<usize, PPMErrors> {
        let (width, height) = pixels.dimensions();

        let mut written = self.write_headers(version, width, height)?;

        written += match version {
            PPMVersions::P6 => {
                self.writer.write_all(pixels.data())?;
                pixels.data().len()
            }
            PPMVersions::P3 => self.write_p3_body(pixels)?
        };
        self.writer.flush()?;

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use ppmview_core::pixel_buffer::PixelBuffer;

    use crate::errors::FormatErrors;
    use crate::{PPMDecoder, PPMEncoder, PPMVersions};

    fn sample_image() -> PixelBuffer {
        PixelBuffer::new(2, 2, vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 10, 100, 200]).unwrap()
    }

    #[test]
    fn test_p6_layout() {
        let mut sink = Vec::new();
        let written = PPMEncoder::new(&mut sink)
            .encode(&sample_image(), PPMVersions::P6)
            .unwrap();

        let header = b"P6\n# written by ppmview\n2 2\n255\n";
        assert_eq!(written, sink.len());
        assert_eq!(&sink[..header.len()], header);
        assert_eq!(&sink[header.len()..], sample_image().data());
    }

    #[test]
    fn test_p3_layout() {
        let mut sink = Vec::new();
        PPMEncoder::new(&mut sink)
            .encode(&sample_image(), PPMVersions::P3)
            .unwrap();

        let expected = "P3\n# written by ppmview\n2 2\n255\n255 0 0 0 255 0\n0 0 255 10 100 200\n";
        assert_eq!(String::from_utf8(sink).unwrap(), expected);
    }

    #[test]
    fn test_round_trip_both_versions() {
        let image = sample_image();

        for version in [PPMVersions::P3, PPMVersions::P6] {
            let mut sink = Vec::new();
            PPMEncoder::new(&mut sink).encode(&image, version).unwrap();

            let mut decoder = PPMDecoder::new(&sink);
            let decoded = decoder.decode().unwrap();

            assert_eq!(decoder.version(), Some(version));
            assert!(decoded == image, "round trip failed for {version}");
        }
    }

    #[test]
    fn test_parse_subformat() {
        assert_eq!("3".parse::<PPMVersions>().unwrap(), PPMVersions::P3);
        assert_eq!("6".parse::<PPMVersions>().unwrap(), PPMVersions::P6);

        for subformat in ["5", "p3", "P6", " 6", "3\n", ""] {
            assert!(
                matches!(
                    subformat.parse::<PPMVersions>(),
                    Err(FormatErrors::UnsupportedSubformat(_))
                ),
                "{subformat:?} should be rejected"
            );
        }
        assert_eq!(PPMVersions::P6.subformat(), '6');
    }
}
