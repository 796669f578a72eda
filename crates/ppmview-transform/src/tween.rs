/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Per-frame easing towards a target
//!
//! Each step moves a value `1/step_rate` of the remaining way to its target,
//! so with a rate of 2 the distance halves every frame and with a rate
//! of 1 the value snaps to the target. Rates below 1 overshoot and
//! are not used.
use kurbo::Vec2;

/// Step rate used for the vector fields, scale, shear and translation
pub const VECTOR_STEP_RATE: f64 = 2.0;

/// Step rate used for rotation.
///
/// Rotation snaps to its target in one frame while vectors ease.
/// This asymmetry is kept as is.
pub const ROTATION_STEP_RATE: f64 = 1.0;

/// Distance at which a tweened value counts as having reached its target
pub const SETTLE_EPSILON: f64 = 1e-4;

/// Move `current` towards `target` by `1/step_rate` of the distance between them
#[inline]
pub fn tween(current: f64, target: f64, step_rate: f64) -> f64 {
    current + (target - current) / step_rate
}

/// Values that can be eased towards a target
pub trait Interpolate: Copy {
    /// One tween step towards `target`
    fn step_toward(self, target: Self, step_rate: f64) -> Self;
    /// Largest per-component distance to `other`
    fn distance(self, other: Self) -> f64;
}

impl Interpolate for f64 {
    fn step_toward(self, target: Self, step_rate: f64) -> Self {
        tween(self, target, step_rate)
    }
    fn distance(self, other: Self) -> f64 {
        (self - other).abs()
    }
}

impl Interpolate for Vec2 {
    fn step_toward(self, target: Self, step_rate: f64) -> Self {
        Vec2::new(
            tween(self.x, target.x, step_rate),
            tween(self.y, target.y, step_rate)
        )
    }
    fn distance(self, other: Self) -> f64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// A value with a current state and a target it eases towards
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tween<T> {
    current: T,
    target:  T
}

impl<T: Interpolate> Tween<T> {
    /// Create a tween resting at `value`
    pub const fn new(value: T) -> Tween<T> {
        Tween {
            current: value,
            target:  value
        }
    }
    pub const fn current(&self) -> T {
        self.current
    }
    pub const fn target(&self) -> T {
        self.target
    }
    /// Mutable access to the target, the current value is untouched
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }
    /// Set both current and target to `value`
    pub fn snap(&mut self, value: T) {
        self.current = value;
        self.target = value;
    }
    /// Advance the current value one step towards the target
    pub fn step(&mut self, step_rate: f64) {
        self.current = self.current.step_toward(self.target, step_rate);
    }
    /// Whether the current value is within `epsilon` of the target
    pub fn is_settled(&self, epsilon: f64) -> bool {
        self.current.distance(self.target) <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use crate::tween::{tween, Tween, SETTLE_EPSILON};

    #[test]
    fn test_halving_sequence() {
        let mut current = 0.0;
        let mut seen = vec![];

        for _ in 0..4 {
            current = tween(current, 10.0, 2.0);
            seen.push(current);
        }
        assert_eq!(seen, [5.0, 7.5, 8.75, 9.375]);
    }

    #[test]
    fn test_distance_halves_every_step() {
        let mut value = Tween::new(0.0);
        *value.target_mut() = 10.0;

        for n in 1..=30 {
            value.step(2.0);
            let expected = 10.0 / 2_f64.powi(n);
            assert_eq!((value.current() - value.target()).abs(), expected);
        }
    }

    #[test]
    fn test_rate_one_snaps() {
        let mut value = Tween::new(0.0);
        *value.target_mut() = -0.3;
        value.step(1.0);

        assert_eq!(value.current(), -0.3);
        assert!(value.is_settled(0.0));
    }

    #[test]
    fn test_never_overshoots() {
        let mut value = Tween::new(Vec2::new(1.0, 1.0));
        *value.target_mut() = Vec2::new(8.0, 0.125);

        for _ in 0..100 {
            value.step(2.0);
            assert!(value.current().x <= 8.0);
            assert!(value.current().y >= 0.125);
        }
        assert!(value.is_settled(SETTLE_EPSILON));
    }
}
