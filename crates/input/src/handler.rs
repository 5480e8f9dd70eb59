//! Held soft-drop tracking for terminal environments.
//!
//! While the drop key is held, the driver applies gravity on every frame.
//! Many terminals never report key releases, so a press only keeps the latch
//! set for a grace period; auto-repeat presses refresh it.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::GameAction;

// Long enough to bridge the gap before a terminal's key auto-repeat kicks in.
const DEFAULT_RELEASE_TIMEOUT_MS: u32 = 150;

/// Soft-drop "held" state with a release timeout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftDropLatch {
    held: bool,
    since_press_ms: u32,
    release_timeout_ms: u32,
}

impl SoftDropLatch {
    pub fn new() -> Self {
        Self {
            held: false,
            since_press_ms: 0,
            release_timeout_ms: DEFAULT_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    pub fn press(&mut self) {
        self.held = true;
        self.since_press_ms = 0;
    }

    pub fn release(&mut self) {
        self.held = false;
        self.since_press_ms = 0;
    }

    /// Age the latch by one frame; drops it once the timeout passes
    pub fn update(&mut self, elapsed_ms: u32) {
        if !self.held {
            return;
        }
        self.since_press_ms = self.since_press_ms.saturating_add(elapsed_ms);
        if self.since_press_ms > self.release_timeout_ms {
            self.release();
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl Default for SoftDropLatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns raw key events into engine actions plus the soft-drop latch
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    soft_drop: SoftDropLatch,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latch(soft_drop: SoftDropLatch) -> Self {
        Self { soft_drop }
    }

    /// Handle one key event
    ///
    /// Returns the action to apply right away. Soft drop never returns an
    /// action: it only sets the latch, and the driver's gravity clock reads it.
    /// Auto-repeat of anything else is ignored.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<GameAction> {
        let action = handle_key_event(key)?;
        match (action, key.kind) {
            (GameAction::SoftDrop, KeyEventKind::Release) => {
                self.soft_drop.release();
                None
            }
            (GameAction::SoftDrop, _) => {
                self.soft_drop.press();
                None
            }
            (_, KeyEventKind::Press) => Some(action),
            _ => None,
        }
    }

    pub fn update(&mut self, elapsed_ms: u32) {
        self.soft_drop.update(elapsed_ms);
    }

    pub fn soft_drop_held(&self) -> bool {
        self.soft_drop.is_held()
    }

    /// Forget any held key (used on pause and restart)
    pub fn reset(&mut self) {
        self.soft_drop.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn latch_expires_without_release() {
        let mut latch = SoftDropLatch::new().with_release_timeout_ms(100);
        latch.press();
        latch.update(40);
        latch.update(40);
        assert!(latch.is_held());
        latch.update(40);
        assert!(!latch.is_held());
    }

    #[test]
    fn repeat_press_refreshes_latch() {
        let mut latch = SoftDropLatch::new().with_release_timeout_ms(100);
        latch.press();
        latch.update(80);
        latch.press();
        latch.update(80);
        assert!(latch.is_held());
    }

    #[test]
    fn down_key_sets_latch_without_action() {
        let mut input = InputHandler::new();
        assert_eq!(input.handle_key(key(KeyCode::Down, KeyEventKind::Press)), None);
        assert!(input.soft_drop_held());

        assert_eq!(input.handle_key(key(KeyCode::Down, KeyEventKind::Release)), None);
        assert!(!input.soft_drop_held());
    }

    #[test]
    fn press_maps_to_action_and_repeat_is_ignored() {
        let mut input = InputHandler::new();
        assert_eq!(
            input.handle_key(key(KeyCode::Left, KeyEventKind::Press)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(input.handle_key(key(KeyCode::Left, KeyEventKind::Repeat)), None);
        assert_eq!(input.handle_key(key(KeyCode::Left, KeyEventKind::Release)), None);
        assert_eq!(
            input.handle_key(key(KeyCode::Char(' '), KeyEventKind::Press)),
            Some(GameAction::HardDrop)
        );
    }

    #[test]
    fn repeat_down_keeps_soft_drop_alive() {
        let mut input = InputHandler::with_latch(SoftDropLatch::new().with_release_timeout_ms(50));
        input.handle_key(key(KeyCode::Down, KeyEventKind::Press));
        input.update(40);
        input.handle_key(key(KeyCode::Down, KeyEventKind::Repeat));
        input.update(40);
        assert!(input.soft_drop_held());
        input.update(40);
        assert!(!input.soft_drop_held());
    }

    #[test]
    fn reset_drops_latch() {
        let mut input = InputHandler::new();
        input.handle_key(key(KeyCode::Down, KeyEventKind::Press));
        input.reset();
        assert!(!input.soft_drop_held());
    }
}
