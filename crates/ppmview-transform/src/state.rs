/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use kurbo::{Affine, Vec2};
use ppmview_core::log::trace;

use crate::command::Command;
use crate::tween::{Tween, ROTATION_STEP_RATE, SETTLE_EPSILON, VECTOR_STEP_RATE};

/// Factor applied to scale targets per command
pub const SCALE_FACTOR: f64 = 2.0;
/// Translation target change per command
pub const TRANSLATION_STEP: f64 = 1.0;
/// Shear target change per command
pub const SHEAR_STEP: f64 = 1.0;
/// Rotation target change per command, in radians
pub const ROTATION_STEP: f64 = 0.1;

/// A snapshot of transform parameters
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransformValues {
    pub scale:       Vec2,
    pub shear:       Vec2,
    pub translation: Vec2,
    /// Radians, counter clockwise
    pub rotation:    f64
}

impl TransformValues {
    /// Identity values: unit scale, no shear, translation or rotation
    pub const IDENTITY: TransformValues = TransformValues {
        scale:       Vec2::new(1.0, 1.0),
        shear:       Vec2::ZERO,
        translation: Vec2::ZERO,
        rotation:    0.0
    };

    /// Compose the values into a single affine map.
    ///
    /// Points are scaled first, then sheared, rotated and finally translated.
    /// Shear maps `(x, y)` to `(x + shear.x * y, shear.y * x + y)`.
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation)
            * Affine::rotate(self.rotation)
            * Affine::skew(self.shear.x, self.shear.y)
            * Affine::scale_non_uniform(self.scale.x, self.scale.y)
    }
}

impl Default for TransformValues {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Current and target values for scale, shear, translation and rotation
///
/// Commands only move targets, [`tween`](Self::tween) is the
/// only thing that moves current values (apart from [`Command::Reset`]).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransformState {
    scale:       Tween<Vec2>,
    shear:       Tween<Vec2>,
    translation: Tween<Vec2>,
    rotation:    Tween<f64>
}

impl Default for TransformState {
    fn default() -> Self {
        TransformState::new()
    }
}

impl TransformState {
    /// Create a state resting at identity
    pub const fn new() -> TransformState {
        let identity = TransformValues::IDENTITY;

        TransformState {
            scale:       Tween::new(identity.scale),
            shear:       Tween::new(identity.shear),
            translation: Tween::new(identity.translation),
            rotation:    Tween::new(identity.rotation)
        }
    }

    /// Apply a command to the targets
    pub fn apply_command(&mut self, command: Command) {
        trace!("Applying command: {}", command);

        match command {
            Command::ScaleUp => *self.scale.target_mut() *= SCALE_FACTOR,
            Command::ScaleDown => *self.scale.target_mut() /= SCALE_FACTOR,
            Command::ScaleXUp => self.scale.target_mut().x *= SCALE_FACTOR,
            Command::ScaleXDown => self.scale.target_mut().x /= SCALE_FACTOR,
            Command::ScaleYUp => self.scale.target_mut().y *= SCALE_FACTOR,
            Command::ScaleYDown => self.scale.target_mut().y /= SCALE_FACTOR,
            Command::TranslateXUp => self.translation.target_mut().x += TRANSLATION_STEP,
            Command::TranslateXDown => self.translation.target_mut().x -= TRANSLATION_STEP,
            Command::TranslateYUp => self.translation.target_mut().y += TRANSLATION_STEP,
            Command::TranslateYDown => self.translation.target_mut().y -= TRANSLATION_STEP,
            Command::ShearXUp => self.shear.target_mut().x += SHEAR_STEP,
            Command::ShearXDown => self.shear.target_mut().x -= SHEAR_STEP,
            Command::ShearYUp => self.shear.target_mut().y += SHEAR_STEP,
            Command::ShearYDown => self.shear.target_mut().y -= SHEAR_STEP,
            Command::RotateCcw => *self.rotation.target_mut() += ROTATION_STEP,
            Command::RotateCw => *self.rotation.target_mut() -= ROTATION_STEP,
            Command::Reset => self.reset()
        }
    }

    /// Snap both current and target values back to identity
    pub fn reset(&mut self) {
        let identity = TransformValues::IDENTITY;

        self.scale.snap(identity.scale);
        self.shear.snap(identity.shear);
        self.translation.snap(identity.translation);
        self.rotation.snap(identity.rotation);
    }

    /// Advance every current value one frame towards its target
    ///
    /// Vectors use [`VECTOR_STEP_RATE`], rotation uses [`ROTATION_STEP_RATE`]
    pub fn tween(&mut self) {
        self.tween_with(VECTOR_STEP_RATE, ROTATION_STEP_RATE);
    }

    /// Advance every current value one step with explicit step rates
    pub fn tween_with(&mut self, vector_rate: f64, rotation_rate: f64) {
        self.scale.step(vector_rate);
        self.shear.step(vector_rate);
        self.translation.step(vector_rate);
        self.rotation.step(rotation_rate);
    }

    /// Values render surfaces should draw with this frame
    pub const fn current_values(&self) -> TransformValues {
        TransformValues {
            scale:       self.scale.current(),
            shear:       self.shear.current(),
            translation: self.translation.current(),
            rotation:    self.rotation.current()
        }
    }

    /// Values the current ones are easing towards
    pub const fn target_values(&self) -> TransformValues {
        TransformValues {
            scale:       self.scale.target(),
            shear:       self.shear.target(),
            translation: self.translation.target(),
            rotation:    self.rotation.target()
        }
    }

    /// Whether every current value is within `epsilon` of its target
    pub fn is_settled(&self, epsilon: f64) -> bool {
        self.scale.is_settled(epsilon)
            && self.shear.is_settled(epsilon)
            && self.translation.is_settled(epsilon)
            && self.rotation.is_settled(epsilon)
    }

    /// [`is_settled`](Self::is_settled) with [`SETTLE_EPSILON`]
    pub fn is_at_rest(&self) -> bool {
        self.is_settled(SETTLE_EPSILON)
    }
}
