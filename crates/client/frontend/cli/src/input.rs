//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level command decoded from a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Award pellet points to the running score.
    EatPellet,
    /// Award ghost points to the running score.
    EatGhost,
    /// Flip the pending leaderboard ordering.
    SwitchOrder,
    /// Pull a fresh snapshot into the view model.
    Refresh,
    /// Record the running score under the player's name.
    SaveRun,
    /// Zero the running score.
    ResetRun,
    /// Exit the application.
    Quit,
}

/// Converts a raw key event into a command, if it maps to one.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(ch) => map_char(ch.to_ascii_lowercase()),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Enter => Some(Command::Refresh),
        _ => None,
    }
}

fn map_char(ch: char) -> Option<Command> {
    match ch {
        ' ' => Some(Command::EatPellet),
        'g' => Some(Command::EatGhost),
        'o' => Some(Command::SwitchOrder),
        'r' => Some(Command::Refresh),
        's' => Some(Command::SaveRun),
        'c' => Some(Command::ResetRun),
        'q' => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_score_keys() {
        assert_eq!(map_key(key(KeyCode::Char(' '))), Some(Command::EatPellet));
        assert_eq!(map_key(key(KeyCode::Char('g'))), Some(Command::EatGhost));
        assert_eq!(map_key(key(KeyCode::Char('S'))), Some(Command::SaveRun));
    }

    #[test]
    fn maps_view_model_keys() {
        assert_eq!(map_key(key(KeyCode::Char('o'))), Some(Command::SwitchOrder));
        assert_eq!(map_key(key(KeyCode::Char('r'))), Some(Command::Refresh));
        assert_eq!(map_key(key(KeyCode::Enter)), Some(Command::Refresh));
    }

    #[test]
    fn maps_quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(map_key(key(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(map_key(ctrl(KeyCode::Char('c'))), Some(Command::Quit));
    }

    #[test]
    fn control_does_not_leak_plain_bindings() {
        assert_eq!(map_key(ctrl(KeyCode::Char('g'))), None);
    }

    #[test]
    fn ignores_unknown_keys() {
        assert_eq!(map_key(key(KeyCode::Char('x'))), None);
        assert_eq!(map_key(key(KeyCode::Tab)), None);
    }
}
