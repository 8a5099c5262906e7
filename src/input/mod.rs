//! Input module - keyboard handling for the two screens
//!
//! Pure key-to-action mapping; the main loop decides what each action
//! does. The home screen consumes printable characters for name entry, so
//! it gets its own mapper instead of sharing the game-screen bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions on the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Whack attempt on a cell (digit keys 1-9, row-major).
    Cell(u32),
    /// Start a round, or end the running one.
    ToggleRound,
    CycleDifficulty,
    /// Back to the home screen (ends a running round).
    LeaveRound,
}

/// Actions on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeInput {
    Type(char),
    Backspace,
    CycleDifficulty,
    /// Confirm the entered name and move to the game screen.
    Submit,
    Exit,
}

/// Map keyboard input to game-screen actions
pub fn handle_game_key(key: KeyEvent) -> Option<GameInput> {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            let cell = c as u32 - '1' as u32;
            Some(GameInput::Cell(cell))
        }
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameInput::ToggleRound),
        KeyCode::Tab | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameInput::CycleDifficulty),
        KeyCode::Esc => Some(GameInput::LeaveRound),
        _ => None,
    }
}

/// Map keyboard input to home-screen actions
pub fn handle_home_key(key: KeyEvent) -> Option<HomeInput> {
    // Ctrl-anything is never text input.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(HomeInput::Submit),
        KeyCode::Backspace => Some(HomeInput::Backspace),
        KeyCode::Tab | KeyCode::Up | KeyCode::Down => Some(HomeInput::CycleDifficulty),
        KeyCode::Esc => Some(HomeInput::Exit),
        KeyCode::Char(c) => Some(HomeInput::Type(c)),
        _ => None,
    }
}

/// Check if key should quit the game (game screen only; the home screen
/// needs 'q' for typing).
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
