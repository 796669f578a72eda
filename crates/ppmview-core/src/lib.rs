/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all ppmview crates
//!
//! It currently contains
//!
//! - A bytestream reader used by the PPM header and body parsers
//! - Decoder options shared by the decoder and the command line
//! - The decoded pixel buffer handed to render surfaces
//!
//! # Features
//!  - `log`: Route the crate logging macros to the [`log`](https://docs.rs/log) facade.
#![macro_use]

pub mod bytestream;
#[cfg(feature = "log")]
pub use log;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;
pub mod pixel_buffer;
