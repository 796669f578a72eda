/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ppmview_transform::kurbo::Vec2;
use ppmview_transform::{tween, Command, TransformState, TransformValues, SETTLE_EPSILON};

#[test]
fn test_tween_sequence() {
    let mut current = 0.0;
    let mut sequence = vec![];

    for _ in 0..4 {
        current = tween(current, 10.0, 2.0);
        sequence.push(current);
    }
    assert_eq!(sequence, [5.0, 7.5, 8.75, 9.375]);
    assert_eq!(tween(0.0, 10.0, 1.0), 10.0);
}

#[test]
fn test_reset_after_every_command() {
    for first in Command::ALL {
        for second in Command::ALL {
            let mut state = TransformState::new();
            state.apply_command(first);
            state.tween();
            state.apply_command(second);
            state.apply_command(Command::Reset);

            assert_eq!(state.current_values(), TransformValues::IDENTITY);
            assert_eq!(state.target_values(), TransformValues::IDENTITY);
        }
    }
}

#[test]
fn test_currents_approach_targets_monotonically() {
    let mut state = TransformState::new();

    for command in [
        Command::ScaleUp,
        Command::ScaleYDown,
        Command::ShearXUp,
        Command::TranslateYDown,
        Command::RotateCw
    ] {
        state.apply_command(command);
    }
    let target = state.target_values();
    let distance = |values: TransformValues| {
        let d = |a: Vec2, b: Vec2| (a - b).hypot();
        d(values.scale, target.scale)
            + d(values.shear, target.shear)
            + d(values.translation, target.translation)
            + (values.rotation - target.rotation).abs()
    };
    let mut last = distance(state.current_values());

    while !state.is_settled(SETTLE_EPSILON) {
        state.tween();
        let now = distance(state.current_values());

        assert!(now < last);
        last = now;
    }
    // targets never move while tweening
    assert_eq!(state.target_values(), target);
}

#[test]
fn test_serialized_values() {
    let mut state = TransformState::new();
    state.apply_command(Command::ScaleUp);
    state.apply_command(Command::RotateCcw);
    state.tween();

    let json = serde_json::to_value(state.current_values()).unwrap();

    assert_eq!(json["scale"], serde_json::json!([1.5, 1.5]));
    assert_eq!(json["shear"], serde_json::json!([0.0, 0.0]));
    assert_eq!(json["rotation"], 0.1);
}
