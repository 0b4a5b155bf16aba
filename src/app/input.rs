use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Submit,
    Quit,
    NextField,
    PrevField,
    Toggle,
    Insert(char),
    Backspace,
    Clear,
    None,
}

pub fn classify(key: &KeyEvent) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => KeyCommand::Submit,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => KeyCommand::Quit,
            _ => KeyCommand::None,
        };
    }

    match key.code {
        KeyCode::Esc => KeyCommand::Quit,
        KeyCode::Tab | KeyCode::Down => KeyCommand::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyCommand::PrevField,
        KeyCode::Enter => KeyCommand::Submit,
        KeyCode::Char(' ') => KeyCommand::Toggle,
        KeyCode::Char(c) => KeyCommand::Insert(c),
        KeyCode::Backspace => KeyCommand::Backspace,
        KeyCode::Delete => KeyCommand::Clear,
        _ => KeyCommand::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn control_chords_submit_and_quit() {
        assert_eq!(
            classify(&key(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            KeyCommand::Submit
        );
        assert_eq!(
            classify(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyCommand::Quit
        );
        assert_eq!(
            classify(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            KeyCommand::None
        );
    }

    #[test]
    fn escape_quits() {
        assert_eq!(
            classify(&key(KeyCode::Esc, KeyModifiers::NONE)),
            KeyCommand::Quit
        );
        assert_eq!(
            classify(&key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            KeyCommand::Quit
        );
    }

    #[test]
    fn shift_tab_moves_to_previous_field() {
        assert_eq!(
            classify(&key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            KeyCommand::PrevField
        );
        assert_eq!(
            classify(&key(KeyCode::Tab, KeyModifiers::NONE)),
            KeyCommand::NextField
        );
    }

    #[test]
    fn space_toggles_and_other_chars_insert() {
        assert_eq!(
            classify(&key(KeyCode::Char(' '), KeyModifiers::NONE)),
            KeyCommand::Toggle
        );
        assert_eq!(
            classify(&key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            KeyCommand::Insert('A')
        );
    }
}
