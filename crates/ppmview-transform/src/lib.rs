/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Live 2D transform state for the image viewer
//!
//! Discrete [`Command`]s move the *target* of a transform,
//! and a per-frame [`tween`](TransformState::tween) eases the *current*
//! value towards it. Render surfaces poll [`TransformState::current_values`]
//! once per frame.
//!
//! ```
//! use ppmview_transform::{Command, TransformState};
//!
//! let mut state = TransformState::new();
//! state.apply_command(Command::ScaleUp);
//! state.tween();
//!
//! assert_eq!(state.current_values().scale.x, 1.5);
//! ```
//!
//! # Features
//! - `serde`: Implement `Serialize` for [`TransformValues`]
//! - `log`: Trace commands through the `log` facade
pub use kurbo;

pub use crate::command::Command;
pub use crate::state::*;
pub use crate::tween::*;

mod command;
#[cfg(feature = "serde")]
mod serde;
mod state;
mod tween;
