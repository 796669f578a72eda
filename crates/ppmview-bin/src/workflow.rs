/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{debug, info};
use ppmview_core::pixel_buffer::PixelBuffer;
use ppmview_ppm::encode_file;

use crate::cmd_parsers::get_decoder_options;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::ViewerErrors;
use crate::probe_files::probe_input_file;
use crate::script::ScriptStep;
use crate::serde::FrameDump;
use crate::surface::{RenderSurface, SoftwareSurface};
use crate::viewer::{load_image, Viewer};

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), ViewerErrors> {
    info!("Creating workflows from input");

    if cmd_opts.probe {
        probe_input_file(&cmd_opts.input)?;

        if cmd_opts.output.is_none() && !cmd_opts.runs_viewer() {
            return Ok(());
        }
    }
    let image = load_image(&cmd_opts.input, get_decoder_options(args))?;

    let rendered = if cmd_opts.runs_viewer() {
        Some(run_viewer(cmd_opts, &image)?)
    } else {
        None
    };

    if let Some(out_file) = &cmd_opts.output {
        let pixels = match &rendered {
            Some(frame) if cmd_opts.render => {
                debug!("Writing rendered frame");
                frame
            }
            _ => &image
        };
        let bytes = encode_file(pixels, &cmd_opts.format, out_file)?;

        info!("Wrote {} bytes to {:?}", bytes, out_file);
    }
    Ok(())
}

/// Replay the key script on a software surface and return the last frame
fn run_viewer(cmd_opts: &CmdOptions, image: &PixelBuffer) -> Result<PixelBuffer, ViewerErrors> {
    let surface = SoftwareSurface::new(cmd_opts.surface_width, cmd_opts.surface_height)?;
    let mut viewer = Viewer::new(surface, image);

    for step in &cmd_opts.script {
        match *step {
            ScriptStep::Key(action) => viewer.handle_key(action),
            ScriptStep::Frames(frames) => advance(&mut viewer, frames, cmd_opts.dump_transform)?
        }
    }
    advance(&mut viewer, cmd_opts.frames, cmd_opts.dump_transform)?;

    if viewer.frame_count() == 0 {
        // nothing was drawn yet, show the image at rest
        advance(&mut viewer, 1, false)?;
    }

    info!(
        "Viewer stopped after {} frames, final transform {:?}",
        viewer.frame_count(),
        viewer.current_transform()
    );
    Ok(viewer.surface().frame()?)
}

fn advance<S: RenderSurface>(
    viewer: &mut Viewer<S>, frames: usize, dump_transform: bool
) -> Result<(), ViewerErrors> {
    for _ in 0..frames {
        if !viewer.tick() {
            break;
        }
        if dump_transform {
            let transform = viewer.current_transform();
            let dump = FrameDump::new(viewer.frame_count(), &transform);

            println!("{}", serde_json::to_string(&dump)?);
        }
    }
    Ok(())
}
