/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

use crate::keymap::bindings_help;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("ppmview")
        .about("Decode, re-encode and render PPM (P3/P6) images with animated affine transforms")
        .after_long_help(bindings_help())
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to"))
        .arg(Arg::new("format")
            .long("format")
            .help("PPM sub-format of the output, 3 (ascii) or 6 (binary)")
            .value_parser(["3", "6", "p3", "p6", "P3", "P6"])
            .default_value("6"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print input file header information as json"))
        .arg(Arg::new("render")
            .long("render")
            .action(ArgAction::SetTrue)
            .help_heading("VIEWER")
            .help("Write the rendered frame instead of the decoded image"))
        .arg(Arg::new("keys")
            .long("keys")
            .help_heading("VIEWER")
            .help("Key presses to replay, numbers advance that many frames")
            .long_help("Comma or space separated key names delivered to the viewer in order.\nA number advances the viewer by that many frames.\nExample: --keys \"up,10,c,c,5,r\""))
        .arg(Arg::new("frames")
            .long("frames")
            .help_heading("VIEWER")
            .help("Frames to advance after the key script")
            .value_parser(value_parser!(usize))
            .default_value("60"))
        .arg(Arg::new("surface-width")
            .long("surface-width")
            .help_heading("VIEWER")
            .help("Width of the render surface")
            .value_parser(value_parser!(usize))
            .default_value("640"))
        .arg(Arg::new("surface-height")
            .long("surface-height")
            .help_heading("VIEWER")
            .help("Height of the render surface")
            .value_parser(value_parser!(usize))
            .default_value("480"))
        .arg(Arg::new("dump-transform")
            .long("dump-transform")
            .action(ArgAction::SetTrue)
            .help_heading("VIEWER")
            .help("Print the current transform as a json line every frame"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum image width to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum image height to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("lenient")
            .long("lenient")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Clamp out of range ascii samples instead of failing"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
}
