/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The viewer control loop
//!
//! A [`Viewer`] owns the transform state and a render surface. The
//! surface receives the image once, then key actions change the
//! transform targets and every [`tick`](Viewer::tick) eases the
//! transform one frame and draws it.
use std::path::Path;

use log::{debug, info, trace};
use ppmview_core::options::DecoderOptions;
use ppmview_core::pixel_buffer::PixelBuffer;
use ppmview_ppm::{decode_file_with_options, PPMErrors};
use ppmview_transform::{Command, TransformState, TransformValues};

use crate::keymap::KeyAction;
use crate::surface::RenderSurface;

/// Decode the image a viewer will display
pub fn load_image<P: AsRef<Path>>(path: P, options: DecoderOptions) -> Result<PixelBuffer, PPMErrors> {
    info!("Loading image {:?}", path.as_ref());

    let image = decode_file_with_options(path, options)?;

    info!("Loaded {}x{} image", image.width(), image.height());
    Ok(image)
}

pub struct Viewer<S: RenderSurface> {
    surface: S,
    state:   TransformState,
    frame:   usize,
    running: bool
}

impl<S: RenderSurface> Viewer<S> {
    /// Create a viewer resting at the identity transform,
    /// uploading `image` to `surface`
    pub fn new(mut surface: S, image: &PixelBuffer) -> Viewer<S> {
        surface.upload_texture(image);

        Viewer {
            surface,
            state:   TransformState::new(),
            frame:   0,
            running: true
        }
    }

    /// Deliver a key action, commands only move transform targets
    pub fn handle_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Command(command) => self.handle_command(command),
            KeyAction::Quit => {
                debug!("Quit requested after {} frames", self.frame);
                self.running = false;
            }
        }
    }

    pub fn handle_command(&mut self, command: Command) {
        if self.running {
            self.state.apply_command(command);
        }
    }

    /// Advance one frame: ease the transform and draw it.
    ///
    /// Returns `false` without drawing once the viewer has quit.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.state.tween();

        let transform = self.state.current_values();
        self.surface.draw(&transform);
        self.frame += 1;

        trace!("Frame {}: {:?}", self.frame, transform);
        true
    }

    /// Transform values drawn on the last frame
    pub const fn current_transform(&self) -> TransformValues {
        self.state.current_values()
    }

    pub const fn state(&self) -> &TransformState {
        &self.state
    }

    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Number of frames drawn so far
    pub const fn frame_count(&self) -> usize {
        self.frame
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
