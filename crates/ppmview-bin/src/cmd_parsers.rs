/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use ppmview_core::options::DecoderOptions;

pub mod global_options;

/// Build decoder options from the command line
pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let max_width = *options.get_one::<usize>("max-width").unwrap_or(&(1 << 14));
    let max_height = *options.get_one::<usize>("max-height").unwrap_or(&(1 << 14));
    let strict_mode = !options.get_flag("lenient");

    DecoderOptions::new_cmd()
        .set_max_height(max_height)
        .set_max_width(max_width)
        .set_strict_mode(strict_mode)
}
