//! Map console input lines to session input events.

use folio_types::input::InputEvent;

/// ASCII backspace and delete, as sent by terminals not in cooked mode.
const BACKSPACE_CHARS: [char; 2] = ['\u{8}', '\u{7f}'];

/// Turn one line read from stdin into keystrokes ending with `Submit`.
///
/// A trailing carriage return is dropped, and raw backspace/delete bytes
/// become `Backspace` events.
pub fn line_events(line: &str) -> Vec<InputEvent> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    InputEvent::typed_line(line)
        .map(|event| match event {
            InputEvent::TextInput(ch) if BACKSPACE_CHARS.contains(&ch) => InputEvent::Backspace,
            other => other,
        })
        .collect()
}
