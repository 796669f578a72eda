/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;
use std::path::Path;

use log::info;
use ppmview_core::options::DecoderOptions;
use ppmview_ppm::{FormatErrors, PPMDecoder};

use crate::errors::ViewerErrors;
use crate::serde::Metadata;

/// Read the headers of `in_file` and describe them
pub fn probe_file(in_file: &Path) -> Result<Metadata, ViewerErrors> {
    let data = read(in_file)?;
    // set to high to remove restrictions.
    // We'll just be reading headers so it doesn't matter
    let options = DecoderOptions::new_cmd()
        .set_max_height(usize::MAX)
        .set_max_width(usize::MAX);

    let mut decoder = PPMDecoder::new_with_options(options, &data);
    decoder.read_headers()?;

    match (decoder.version(), decoder.dimensions()) {
        (Some(version), Some(dimensions)) => Ok(Metadata::new(
            in_file.as_os_str().to_os_string(),
            data.len() as u64,
            version,
            dimensions
        )),
        _ => Err(ViewerErrors::Ppm(
            FormatErrors::MissingDimensions("headers were not decoded").into()
        ))
    }
}

/// Probe the input file, and print its metadata to standard output.
pub fn probe_input_file(in_file: &Path) -> Result<(), ViewerErrors> {
    info!("Probing {:?}", in_file);

    let metadata = probe_file(in_file)?;
    println!("{}", serde_json::to_string_pretty(&metadata)?);

    Ok(())
}
