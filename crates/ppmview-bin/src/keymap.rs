/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Raw key names to viewer actions
//!
//! Keys not listed here are ignored by the viewer.
use ppmview_transform::Command;

/// What a key press asks the viewer to do
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KeyAction {
    Command(Command),
    /// Close the viewer
    Quit
}

/// Key names and the action each is bound to
pub const KEY_BINDINGS: [(&str, KeyAction); 18] = [
    ("up", KeyAction::Command(Command::ScaleUp)),
    ("down", KeyAction::Command(Command::ScaleDown)),
    ("d", KeyAction::Command(Command::ScaleXUp)),
    ("a", KeyAction::Command(Command::ScaleXDown)),
    ("w", KeyAction::Command(Command::ScaleYUp)),
    ("s", KeyAction::Command(Command::ScaleYDown)),
    ("l", KeyAction::Command(Command::TranslateXUp)),
    ("j", KeyAction::Command(Command::TranslateXDown)),
    ("k", KeyAction::Command(Command::TranslateYUp)),
    ("i", KeyAction::Command(Command::TranslateYDown)),
    ("m", KeyAction::Command(Command::ShearXUp)),
    ("n", KeyAction::Command(Command::ShearXDown)),
    ("y", KeyAction::Command(Command::ShearYUp)),
    ("u", KeyAction::Command(Command::ShearYDown)),
    ("c", KeyAction::Command(Command::RotateCcw)),
    ("z", KeyAction::Command(Command::RotateCw)),
    ("r", KeyAction::Command(Command::Reset)),
    ("escape", KeyAction::Quit)
];

/// Look up the action bound to `key`, ignoring case
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    let key = key.trim();

    KEY_BINDINGS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, action)| *action)
}

/// Key binding table for the long help output
pub fn bindings_help() -> String {
    let mut help = String::from("KEY BINDINGS:\n");

    for (name, action) in KEY_BINDINGS {
        let description = match action {
            KeyAction::Command(command) => command.name(),
            KeyAction::Quit => "quit"
        };
        help.push_str(&format!("  {name:<8}{description}\n"));
    }
    help
}
