/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use ppmview_ppm::FormatErrors;
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;

mod ppm;
mod transform;
mod viewer;

/// A fixture that must decode
#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:      String,
    /// A P6 file whose body holds the expected pixels
    pub reference: Option<String>,
    /// Expected pixels, for fixtures without a reference
    pub pixels:    Option<Vec<u8>>,
    pub width:     usize,
    pub height:    usize,
    pub comment:   Option<String>
}

/// A fixture that must fail to decode
#[derive(Clone, Deserialize, Debug)]
pub struct InvalidEntry {
    pub name:    String,
    pub error:   String,
    pub comment: Option<String>
}

pub fn sample_path() -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"));
    // get parent path
    path.parent().unwrap().to_owned()
}

pub fn ppm_path() -> PathBuf {
    sample_path().join("test-images/ppm")
}

fn read_manifest<T: for<'de> Deserialize<'de>>(name: &str) -> Vec<T> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join(name);
    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}

/// Name a format error the way the fixture manifest does
fn error_kind(err: &FormatErrors) -> &'static str {
    match err {
        FormatErrors::BadMagic(_) => "bad_magic",
        FormatErrors::MissingDimensions(_) => "missing_dimensions",
        FormatErrors::UnsupportedMaxValue(_) => "unsupported_max_value",
        FormatErrors::TruncatedPixelData(..) => "truncated_pixel_data",
        FormatErrors::MissingSeparator(_) => "missing_separator",
        FormatErrors::InvalidPixelValue(_) => "invalid_pixel_value",
        FormatErrors::LargeDimensions(..) => "large_dimensions",
        FormatErrors::UnsupportedSubformat(_) => "unsupported_subformat",
        FormatErrors::InvalidBuffer(_) => "invalid_buffer"
    }
}

fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ppmview-tests-{}-{name}", std::process::id()))
}
