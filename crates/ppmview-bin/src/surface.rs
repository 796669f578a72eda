/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Render surfaces
//!
//! A surface owns an uploaded texture and draws it as a unit quad
//! spanning normalized device coordinates `[-1, 1]` on both axes,
//! mapped through the current affine transform.
//!
//! [`SoftwareSurface`] rasterizes into memory so frames can be
//! inspected or written out without a window system.
use log::{debug, trace};
use ppmview_core::pixel_buffer::{PixelBuffer, PixelBufferErrors, CHANNELS};
use ppmview_transform::kurbo::Point;
use ppmview_transform::TransformValues;

/// Something the viewer can draw frames to
pub trait RenderSurface {
    /// Replace the texture drawn on the quad
    fn upload_texture(&mut self, image: &PixelBuffer);
    /// Draw one frame with the given transform
    fn draw(&mut self, transform: &TransformValues);
}

/// A framebuffer in memory, sampled nearest-neighbour
pub struct SoftwareSurface {
    width:       usize,
    height:      usize,
    framebuffer: Vec<u8>,
    texture:     Option<PixelBuffer>
}

impl SoftwareSurface {
    /// Create a black surface of `width x height` pixels
    pub fn new(width: usize, height: usize) -> Result<SoftwareSurface, PixelBufferErrors> {
        let framebuffer = PixelBuffer::fill([0, 0, 0], width, height)?.into_inner();

        Ok(SoftwareSurface {
            width,
            height,
            framebuffer,
            texture: None
        })
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Copy of the last drawn frame
    pub fn frame(&self) -> Result<PixelBuffer, PixelBufferErrors> {
        PixelBuffer::new(self.width, self.height, self.framebuffer.clone())
    }

    fn clear(&mut self) {
        self.framebuffer.fill(0);
    }
}

impl RenderSurface for SoftwareSurface {
    fn upload_texture(&mut self, image: &PixelBuffer) {
        debug!(
            "Uploading {}x{} texture to software surface",
            image.width(),
            image.height()
        );
        self.texture = Some(image.clone());
    }

    fn draw(&mut self, transform: &TransformValues) {
        self.clear();

        let Some(texture) = &self.texture else {
            return;
        };
        let affine = transform.to_affine();

        // a degenerate transform collapses the quad, nothing is covered
        if affine.determinant() == 0.0 {
            trace!("Degenerate transform, drawing an empty frame");
            return;
        }
        let inverse = affine.inverse();

        if !inverse.is_finite() {
            trace!("Transform is not invertible, drawing an empty frame");
            return;
        }
        let (tex_width, tex_height) = texture.dimensions();
        let (width, height) = (self.width as f64, self.height as f64);

        for (py, row) in self
            .framebuffer
            .chunks_exact_mut(self.width * CHANNELS)
            .enumerate()
        {
            let ndc_y = 1.0 - (py as f64 + 0.5) / height * 2.0;

            for (px, out) in row.chunks_exact_mut(CHANNELS).enumerate() {
                let ndc_x = (px as f64 + 0.5) / width * 2.0 - 1.0;
                let quad = inverse * Point::new(ndc_x, ndc_y);

                if quad.x.abs() > 1.0 || quad.y.abs() > 1.0 {
                    continue;
                }
                // texture row 0 is drawn at the top of the quad
                let u = (quad.x + 1.0) / 2.0;
                let v = (1.0 - quad.y) / 2.0;

                let tx = ((u * tex_width as f64) as usize).min(tex_width - 1);
                let ty = ((v * tex_height as f64) as usize).min(tex_height - 1);

                if let Some(color) = texture.pixel(tx, ty) {
                    out.copy_from_slice(&color);
                }
            }
        }
    }
}
