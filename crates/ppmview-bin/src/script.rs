/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Replayable key scripts
//!
//! A script is a list of key names and frame counts separated by commas
//! or whitespace, e.g. `up,up,10,c,5`. Key presses are delivered in order,
//! a number advances the viewer by that many frames.
use log::warn;

use crate::keymap::{action_for_key, KeyAction};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScriptStep {
    Key(KeyAction),
    Frames(usize)
}

/// Parse a key script.
///
/// Unknown key names are dropped with a warning, the same way the
/// viewer ignores unbound keys.
pub fn parse_script(script: &str) -> Vec<ScriptStep> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            if let Ok(frames) = token.parse::<usize>() {
                return Some(ScriptStep::Frames(frames));
            }
            match action_for_key(token) {
                Some(action) => Some(ScriptStep::Key(action)),
                None => {
                    warn!("Ignoring unbound key `{}`", token);
                    None
                }
            }
        })
        .collect()
}
