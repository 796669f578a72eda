/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use ppmview_bin::keymap::action_for_key;
use ppmview_bin::script::{parse_script, ScriptStep};
use ppmview_bin::surface::SoftwareSurface;
use ppmview_bin::viewer::{load_image, Viewer};
use ppmview_core::options::DecoderOptions;
use ppmview_ppm::encode_file;
use ppmview_transform::kurbo::Vec2;
use ppmview_transform::{Command, TransformValues};

use crate::{ppm_path, temp_file};

#[test]
fn test_end_to_end_scenario() {
    let image = load_image(ppm_path().join("two_pixels_p6.ppm"), DecoderOptions::default()).unwrap();

    assert_eq!(image.dimensions(), (2, 1));
    assert_eq!(image.pixels().collect::<Vec<_>>(), [[255, 0, 0], [0, 255, 0]]);

    let mut viewer = Viewer::new(SoftwareSurface::new(8, 4).unwrap(), &image);
    assert_eq!(viewer.current_transform(), TransformValues::IDENTITY);

    viewer.handle_command(Command::ScaleUp);
    assert_eq!(viewer.state().target_values().scale, Vec2::new(2.0, 2.0));

    viewer.tick();
    assert_eq!(viewer.current_transform().scale, Vec2::new(1.5, 1.5));
}

#[test]
fn test_scripted_session() {
    let image = load_image(ppm_path().join("gradient_p6.ppm"), DecoderOptions::default()).unwrap();
    let mut viewer = Viewer::new(SoftwareSurface::new(16, 12).unwrap(), &image);

    for step in parse_script("down,down,40,escape,10") {
        match step {
            ScriptStep::Key(action) => viewer.handle_key(action),
            ScriptStep::Frames(frames) => {
                for _ in 0..frames {
                    viewer.tick();
                }
            }
        }
    }
    assert!(!viewer.is_running());
    assert_eq!(viewer.frame_count(), 40);

    let scale = viewer.current_transform().scale;
    assert!((scale.x - 0.25).abs() < 1e-9);

    // a quarter sized quad leaves the surface border black
    let frame = viewer.surface().frame().unwrap();
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0]));
    assert_eq!(frame.pixel(15, 11), Some([0, 0, 0]));
    assert_ne!(frame.pixel(7, 5), Some([0, 0, 0]));

    // frames can be written like any decoded image
    let out = temp_file("frame.ppm");
    encode_file(&frame, "6", &out).unwrap();
    std::fs::remove_file(&out).unwrap();
}

#[test]
fn test_unbound_keys_are_ignored() {
    assert!(action_for_key("q").is_none());
    assert_eq!(parse_script("q,F5,up").len(), 1);
}
