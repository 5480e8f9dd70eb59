//! Key bindings.
//!
//! Arrows, WASD and vi keys all work; letters match in either case.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The action bound to `key`, if any
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    let action = match key.code {
        KeyCode::Left => GameAction::MoveLeft,
        KeyCode::Right => GameAction::MoveRight,
        KeyCode::Down => GameAction::SoftDrop,
        KeyCode::Up => GameAction::Rotate,
        KeyCode::Char(c) => char_action(c.to_ascii_lowercase())?,
        _ => return None,
    };
    Some(action)
}

fn char_action(c: char) -> Option<GameAction> {
    Some(match c {
        'a' | 'h' => GameAction::MoveLeft,
        'd' | 'l' => GameAction::MoveRight,
        's' | 'j' => GameAction::SoftDrop,
        'w' | 'k' => GameAction::Rotate,
        ' ' => GameAction::HardDrop,
        'p' => GameAction::Pause,
        'r' => GameAction::Restart,
        _ => return None,
    })
}

/// `q`, Esc or Ctrl-C
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char(c) => c.eq_ignore_ascii_case(&'q'),
        _ => false,
    }
}
