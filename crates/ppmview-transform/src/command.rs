/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Display, Formatter};

/// Named transform commands
///
/// Render surfaces translate raw input into these, the transform
/// state never sees a key code.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Command {
    /// Double both scale components
    ScaleUp,
    /// Halve both scale components
    ScaleDown,
    ScaleXUp,
    ScaleXDown,
    ScaleYUp,
    ScaleYDown,
    TranslateXUp,
    TranslateXDown,
    TranslateYUp,
    TranslateYDown,
    ShearXUp,
    ShearXDown,
    ShearYUp,
    ShearYDown,
    /// Rotate counter clockwise by 0.1 radians
    RotateCcw,
    /// Rotate clockwise by 0.1 radians
    RotateCw,
    /// Return targets and current values to identity
    Reset
}

impl Command {
    /// Every command, in declaration order
    pub const ALL: [Command; 17] = [
        Command::ScaleUp,
        Command::ScaleDown,
        Command::ScaleXUp,
        Command::ScaleXDown,
        Command::ScaleYUp,
        Command::ScaleYDown,
        Command::TranslateXUp,
        Command::TranslateXDown,
        Command::TranslateYUp,
        Command::TranslateYDown,
        Command::ShearXUp,
        Command::ShearXDown,
        Command::ShearYUp,
        Command::ShearYDown,
        Command::RotateCcw,
        Command::RotateCw,
        Command::Reset
    ];

    /// A short human readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::ScaleUp => "scale up",
            Self::ScaleDown => "scale down",
            Self::ScaleXUp => "scale x up",
            Self::ScaleXDown => "scale x down",
            Self::ScaleYUp => "scale y up",
            Self::ScaleYDown => "scale y down",
            Self::TranslateXUp => "translate x up",
            Self::TranslateXDown => "translate x down",
            Self::TranslateYUp => "translate y up",
            Self::TranslateYDown => "translate y down",
            Self::ShearXUp => "shear x up",
            Self::ShearXDown => "shear x down",
            Self::ShearYUp => "shear y up",
            Self::ShearYDown => "shear y down",
            Self::RotateCcw => "rotate counter clockwise",
            Self::RotateCw => "rotate clockwise",
            Self::Reset => "reset"
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
