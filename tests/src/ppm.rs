/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{read, remove_file, write};

use ppmview_core::options::DecoderOptions;
use ppmview_core::pixel_buffer::PixelBuffer;
use ppmview_ppm::{decode_file, decode_file_with_options, encode_file, PPMErrors};

use crate::{error_kind, hash, ppm_path, read_manifest, temp_file, InvalidEntry, TestEntry};

/// Pixels a manifest entry is expected to decode to
fn expected_pixels(entry: &TestEntry) -> Vec<u8> {
    if let Some(pixels) = &entry.pixels {
        return pixels.clone();
    }
    let reference = entry.reference.as_ref().unwrap();
    let contents = read(ppm_path().join(reference)).unwrap();
    let size = entry.width * entry.height * 3;

    contents[contents.len() - size..].to_vec()
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_ppm() {
    let entries: Vec<TestEntry> = read_manifest("ppm.json");

    let mut error = false;
    let mut files = Vec::new();

    for entry in &entries {
        let file_name = ppm_path().join(&entry.name);
        let pixels = decode_file(&file_name).unwrap();

        let expected_hash = hash(&expected_pixels(entry));
        let hash = hash(pixels.data());

        if hash != expected_hash || pixels.dimensions() != (entry.width, entry.height) {
            error = true;
            files.push(entry.to_owned());
            // report error
            let err = format!(
                "Mismatch for file {:?}\nExpected hash {} but found {}\nConfig:{:#?}",
                file_name, expected_hash, hash, entry
            );
            eprintln!("{}\n", err);
        }
    }
    if error {
        panic!("Errors found during test decoding\n {:#?}", files);
    }
}

#[test]
fn test_ppm_rejections() {
    let entries: Vec<InvalidEntry> = read_manifest("ppm_invalid.json");

    for entry in &entries {
        let file_name = ppm_path().join("invalid").join(&entry.name);

        match decode_file(&file_name) {
            Ok(pixels) => panic!("{:?} decoded to {:?}", file_name, pixels),
            Err(PPMErrors::IoErrors(err)) => panic!("{:?}: unexpected io error {err}", file_name),
            Err(PPMErrors::FormatErrors(err)) => {
                assert_eq!(error_kind(&err), entry.error, "{:?}: {:?}", file_name, err);
            }
        }
    }
}

#[test]
fn test_comments_decode_identically() {
    let plain = decode_file(ppm_path().join("gradient_p3.ppm")).unwrap();
    let commented = decode_file(ppm_path().join("gradient_p3_comments.ppm")).unwrap();
    assert_eq!(plain, commented);

    let plain = decode_file(ppm_path().join("gradient_p6.ppm")).unwrap();
    let commented = decode_file(ppm_path().join("gradient_p6_comments.ppm")).unwrap();
    assert_eq!(plain, commented);
}

#[test]
fn test_lenient_mode_clamps() {
    let file_name = ppm_path().join("invalid/sample_out_of_range_p3.ppm");
    let options = DecoderOptions::default().set_strict_mode(false);

    let pixels = decode_file_with_options(file_name, options).unwrap();
    assert_eq!(pixels.data(), &[1, 255, 3]);
}

#[test]
fn test_size_limits() {
    let file_name = ppm_path().join("gradient_p6.ppm");
    let options = DecoderOptions::default().set_max_width(3);

    let err = decode_file_with_options(file_name, options).unwrap_err();
    assert_eq!(error_kind(err.format_error().unwrap()), "large_dimensions");
}

#[test]
fn test_fixtures_round_trip() {
    let entries: Vec<TestEntry> = read_manifest("ppm.json");

    for entry in &entries {
        let original = decode_file(ppm_path().join(&entry.name)).unwrap();

        for subformat in ["3", "6"] {
            let out = temp_file(&format!("{}.{subformat}.ppm", entry.name));
            encode_file(&original, subformat, &out).unwrap();

            let decoded = decode_file(&out).unwrap();
            remove_file(&out).unwrap();

            assert_eq!(original, decoded, "{} via P{subformat}", entry.name);
        }
    }
}

#[test]
fn test_p6_output_is_body_verbatim() {
    let original = decode_file(ppm_path().join("gradient_p3.ppm")).unwrap();
    let out = temp_file("verbatim.ppm");

    let written = encode_file(&original, "6", &out).unwrap();
    let contents = read(&out).unwrap();
    remove_file(&out).unwrap();

    assert_eq!(written, contents.len());
    assert!(contents.starts_with(b"P6\n#"));
    assert!(contents.ends_with(original.data()));
    let header = &contents[..contents.len() - original.data().len()];
    assert!(header.ends_with(b"\n4 3\n255\n"));
}

#[test]
fn test_p3_output_layout() {
    let image = PixelBuffer::new(2, 2, (1..=12).collect()).unwrap();
    let out = temp_file("layout.ppm");

    encode_file(&image, "3", &out).unwrap();
    let contents = String::from_utf8(read(&out).unwrap()).unwrap();
    remove_file(&out).unwrap();

    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines[0], "P3");
    assert!(lines[1].starts_with('#'));
    assert_eq!(lines[2], "2 2");
    assert_eq!(lines[3], "255");
    assert_eq!(lines[4], "1 2 3 4 5 6");
    assert_eq!(lines[5], "7 8 9 10 11 12");
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_unwritable_destination_is_io_error() {
    let image = PixelBuffer::fill([1, 2, 3], 1, 1).unwrap();
    let out = temp_file("missing-dir").join("out.ppm");

    let err = encode_file(&image, "6", out).unwrap_err();
    assert!(err.is_io_error());
}

#[test]
fn test_bad_subformat() {
    let image = PixelBuffer::fill([1, 2, 3], 1, 1).unwrap();
    let out = temp_file("bad-subformat.ppm");

    let err = encode_file(&image, "5", &out).unwrap_err();
    assert_eq!(error_kind(err.format_error().unwrap()), "unsupported_subformat");
    assert!(!out.exists());
}

#[test]
fn test_subformat_must_be_a_bare_digit() {
    let image = PixelBuffer::fill([1, 2, 3], 1, 1).unwrap();
    let out = temp_file("not-a-digit.ppm");

    for subformat in ["p3", " 6", "P6", " p6 ", "\t3\n"] {
        let err = encode_file(&image, subformat, &out).unwrap_err();

        assert_eq!(
            error_kind(err.format_error().unwrap()),
            "unsupported_subformat",
            "{subformat:?}"
        );
        assert!(!out.exists());
    }
}

#[test]
fn test_two_pixel_scenario_file() {
    let path = temp_file("two-pixels.ppm");
    write(&path, b"P6\n2 1\n255\n\xff\x00\x00\x00\xff\x00").unwrap();

    let pixels = decode_file(&path).unwrap();
    remove_file(&path).unwrap();

    assert_eq!(pixels.dimensions(), (2, 1));
    assert_eq!(pixels.pixels().collect::<Vec<_>>(), [[255, 0, 0], [0, 255, 0]]);
}
