/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use ppmview_core::pixel_buffer::PixelBufferErrors;
use ppmview_ppm::PPMErrors;

/// Errors that can stop a command line run
pub enum ViewerErrors {
    /// Decoding or encoding the image failed
    Ppm(PPMErrors),
    /// Reading the input or writing output failed
    Io(std::io::Error),
    /// The render surface could not be created or read back
    Surface(PixelBufferErrors),
    /// Transform or metadata could not be serialized
    Serialize(serde_json::Error)
}

impl Debug for ViewerErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ppm(err) => writeln!(f, "{err:?}"),
            Self::Io(err) => writeln!(f, "IO error: {err}"),
            Self::Surface(err) => writeln!(f, "Render surface error: {err}"),
            Self::Serialize(err) => writeln!(f, "Serialization error: {err}")
        }
    }
}

impl From<PPMErrors> for ViewerErrors {
    fn from(value: PPMErrors) -> Self {
        Self::Ppm(value)
    }
}

impl From<std::io::Error> for ViewerErrors {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<PixelBufferErrors> for ViewerErrors {
    fn from(value: PixelBufferErrors) -> Self {
        Self::Surface(value)
    }
}

impl From<serde_json::Error> for ViewerErrors {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
