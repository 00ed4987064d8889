use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Request a snake direction change
    Steer(Direction),
    /// Pick the option at this 0-based index
    Choose(usize),
    /// Go to the next round / dismiss the summary
    Next,
    Restart,
    /// Leave the game, reporting the score so far
    Back,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Steer(Direction::Up),
            KeyCode::Down => KeyAction::Steer(Direction::Down),
            KeyCode::Left => KeyAction::Steer(Direction::Left),
            KeyCode::Right => KeyAction::Steer(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Steer(Direction::Right),

            // Answers
            KeyCode::Char(c @ '1'..='4') => KeyAction::Choose(c as usize - '1' as usize),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Char('N') => {
                KeyAction::Next
            }

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Back,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Up)),
            KeyAction::Steer(Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Down)),
            KeyAction::Steer(Direction::Down)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Left)),
            KeyAction::Steer(Direction::Left)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Right)),
            KeyAction::Steer(Direction::Right)
        );
    }

    #[test]
    fn test_wasd_keys() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('w'))),
            KeyAction::Steer(Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('a'))),
            KeyAction::Steer(Direction::Left)
        );

        let d_upper = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(d_upper),
            KeyAction::Steer(Direction::Right)
        );
    }

    #[test]
    fn test_option_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('1'))), KeyAction::Choose(0));
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('4'))), KeyAction::Choose(3));
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('5'))), KeyAction::None);
        assert_eq!(handler.handle_key_event(press(KeyCode::Enter)), KeyAction::Next);
        assert_eq!(handler.handle_key_event(press(KeyCode::Char(' '))), KeyAction::Next);
    }

    #[test]
    fn test_back_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(press(KeyCode::Char('q'))), KeyAction::Back);
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), KeyAction::Back);
    }

    #[test]
    fn test_restart_key() {
        let handler = InputHandler::new();

        let r_upper = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(r_upper), KeyAction::Restart);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key_event(press(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }
}
