// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Keyboard input mapping.
//!
//! A pure function from one key event to at most one action. Repeated key
//! events from a held key arrive as a stream of discrete presses and map
//! individually; no debouncing happens here.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    North,
    South,
    East,
    West,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// A viewport mutation request produced by a recognized movement key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportAction {
    Pan(PanDirection),
    Zoom(ZoomDirection),
}

/// What a key event means to the application.
///
/// `Quit` is handled by the event loop; the controller only ever sees
/// [`ViewportAction`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Viewport(ViewportAction),
    Quit,
}

/// Maps a key event to zero or one action.
///
/// Arrow keys and their `hjkl` aliases pan, `+`/`=` and `-`/`_` zoom,
/// `q`/Esc/Ctrl+C quit. Everything else is a no-op. Key releases are
/// ignored; presses and auto-repeats both count.
pub fn map_key(key: &KeyEvent) -> Option<InputAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    use InputAction::{Quit, Viewport};
    use ViewportAction::{Pan, Zoom};

    match key.code {
        KeyCode::Up => Some(Viewport(Pan(PanDirection::North))),
        KeyCode::Down => Some(Viewport(Pan(PanDirection::South))),
        KeyCode::Left => Some(Viewport(Pan(PanDirection::West))),
        KeyCode::Right => Some(Viewport(Pan(PanDirection::East))),
        KeyCode::Esc => Some(Quit),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return matches!(c, 'c' | 'C').then_some(Quit);
            }
            match c {
                'k' => Some(Viewport(Pan(PanDirection::North))),
                'j' => Some(Viewport(Pan(PanDirection::South))),
                'h' => Some(Viewport(Pan(PanDirection::West))),
                'l' => Some(Viewport(Pan(PanDirection::East))),
                '+' | '=' => Some(Viewport(Zoom(ZoomDirection::In))),
                '-' | '_' => Some(Viewport(Zoom(ZoomDirection::Out))),
                'q' => Some(Quit),
                _ => None,
            }
        }
        _ => None,
    }
}
