/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use ppmview_ppm::PPMVersions;
use ppmview_transform::TransformValues;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Header information printed by `--probe`
pub struct Metadata {
    file:    OsString,
    size:    u64,
    version: PPMVersions,
    width:   usize,
    height:  usize
}

impl Metadata {
    pub fn new(file: OsString, size: u64, version: PPMVersions, (width, height): (usize, usize)) -> Metadata {
        Metadata {
            file,
            size,
            version,
            width,
            height
        }
    }
}

impl Serialize for Metadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 6)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("format", &self.version.to_string())?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("max_color_value", &255)?;

        state.end()
    }
}

/// One line of `--dump-transform` output
pub struct FrameDump<'a> {
    frame:     usize,
    transform: &'a TransformValues
}

impl<'a> FrameDump<'a> {
    pub fn new(frame: usize, transform: &'a TransformValues) -> FrameDump<'a> {
        FrameDump { frame, transform }
    }
}

impl<'a> Serialize for FrameDump<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("FrameDump", 2)?;

        state.serialize_field("frame", &self.frame)?;
        state.serialize_field("transform", self.transform)?;

        state.end()
    }
}
