//! Platform-agnostic input event types.
//!
//! Frontends map their native input to these events. The session never sees
//! raw keyboard or stdin data.

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Character typed into the pending input line.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// Submit the pending input line (Enter).
    Submit,
    /// User requested quit (EOF, window close).
    Quit,
}

impl InputEvent {
    /// Expand a complete line into the keystrokes that would type and
    /// submit it.
    pub fn typed_line(line: &str) -> impl Iterator<Item = InputEvent> + '_ {
        line.chars()
            .map(InputEvent::TextInput)
            .chain(std::iter::once(InputEvent::Submit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_event() {
        let e = InputEvent::TextInput('a');
        assert_eq!(e, InputEvent::TextInput('a'));
        assert_ne!(e, InputEvent::TextInput('b'));
    }

    #[test]
    fn typed_line_ends_with_submit() {
        let events: Vec<_> = InputEvent::typed_line("ls").collect();
        assert_eq!(
            events,
            vec![
                InputEvent::TextInput('l'),
                InputEvent::TextInput('s'),
                InputEvent::Submit,
            ]
        );
    }

    #[test]
    fn typed_empty_line_is_only_submit() {
        let events: Vec<_> = InputEvent::typed_line("").collect();
        assert_eq!(events, vec![InputEvent::Submit]);
    }

    #[test]
    fn typed_line_keeps_unicode() {
        let events: Vec<_> = InputEvent::typed_line("\u{1F600}").collect();
        assert_eq!(events[0], InputEvent::TextInput('\u{1F600}'));
    }
}
