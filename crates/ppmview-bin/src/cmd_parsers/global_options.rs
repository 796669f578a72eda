/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use log::{info, Level};

use crate::script::{parse_script, ScriptStep};

/// Options for a single run, resolved from the command line
#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub input:          PathBuf,
    pub output:         Option<PathBuf>,
    pub format:         String,
    pub probe:          bool,
    pub render:         bool,
    pub script:         Vec<ScriptStep>,
    pub frames:         usize,
    pub surface_width:  usize,
    pub surface_height: usize,
    pub dump_transform: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            input:          PathBuf::new(),
            output:         None,
            format:         String::from("6"),
            probe:          false,
            render:         false,
            script:         vec![],
            frames:         60,
            surface_width:  640,
            surface_height: 480,
            dump_transform: false
        }
    }
    /// Whether the viewer needs to run at all
    pub fn runs_viewer(&self) -> bool {
        self.render || self.dump_transform || !self.script.is_empty()
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(input) = options.get_one::<String>("in") {
        cmd_options.input = PathBuf::from(input);
    }
    if let Some(output) = options.get_one::<String>("out") {
        cmd_options.output = Some(PathBuf::from(output));
    }
    if let Some(format) = options.get_one::<String>("format") {
        // the encoder only takes the bare digit
        let digit = format.trim_start_matches(['p', 'P']);
        cmd_options.format = digit.to_string();
    }
    if let Some(keys) = options.get_one::<String>("keys") {
        cmd_options.script = parse_script(keys);
        info!("Key script has {} steps", cmd_options.script.len());
    }
    if let Some(frames) = options.get_one::<usize>("frames") {
        cmd_options.frames = *frames;
    }
    if let Some(width) = options.get_one::<usize>("surface-width") {
        cmd_options.surface_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("surface-height") {
        cmd_options.surface_height = *height;
    }
    cmd_options.probe = options.get_flag("probe");
    cmd_options.render = options.get_flag("render");
    cmd_options.dump_transform = options.get_flag("dump-transform");

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
