//! Default editing behavior for text inputs.
//!
//! Hosts call [`edit`] for key events that no handler prevented, the way a
//! browser inserts the typed character after `keydown` listeners have run.

use crate::element::{Content, Element};
use crate::event::{Key, Modifiers};

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled (or the element is not a text input).
    Ignored,
}

/// Apply a key press to a text input element.
pub fn edit(element: &mut Element, key: Key, modifiers: Modifiers) -> TextEditResult {
    let Content::TextInput { value, cursor, .. } = &mut element.content else {
        return TextEditResult::Ignored;
    };
    let char_count = value.chars().count();
    *cursor = (*cursor).min(char_count);

    match key {
        Key::Char(c) if c != '\0' && (modifiers.none() || (modifiers.shift && !modifiers.ctrl)) => {
            let byte_pos = char_to_byte_index(value, *cursor);
            value.insert(byte_pos, c);
            *cursor += 1;
            TextEditResult::Changed
        }

        Key::Backspace if modifiers.none() => {
            if *cursor == 0 {
                return TextEditResult::Handled;
            }
            let byte_pos = char_to_byte_index(value, *cursor - 1);
            value.remove(byte_pos);
            *cursor -= 1;
            TextEditResult::Changed
        }

        Key::Delete if modifiers.none() => {
            if *cursor >= char_count {
                return TextEditResult::Handled;
            }
            let byte_pos = char_to_byte_index(value, *cursor);
            value.remove(byte_pos);
            TextEditResult::Changed
        }

        Key::Char('u') if modifiers.ctrl => {
            if value.is_empty() {
                return TextEditResult::Handled;
            }
            value.clear();
            *cursor = 0;
            TextEditResult::Changed
        }

        Key::Left => {
            *cursor = cursor.saturating_sub(1);
            TextEditResult::Handled
        }

        Key::Right => {
            *cursor = (*cursor + 1).min(char_count);
            TextEditResult::Handled
        }

        Key::Home => {
            *cursor = 0;
            TextEditResult::Handled
        }

        Key::End => {
            *cursor = char_count;
            TextEditResult::Handled
        }

        _ => TextEditResult::Ignored,
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_of(el: &Element) -> usize {
        match &el.content {
            Content::TextInput { cursor, .. } => *cursor,
            _ => panic!("not an input"),
        }
    }

    #[test]
    fn inserts_at_cursor() {
        let mut input = Element::text_input("ac");
        edit(&mut input, Key::Left, Modifiers::new());
        assert_eq!(edit(&mut input, Key::Char('b'), Modifiers::new()), TextEditResult::Changed);
        assert_eq!(input.value(), Some("abc"));
        assert_eq!(cursor_of(&input), 2);
    }

    #[test]
    fn backspace_and_delete_handle_multibyte() {
        let mut input = Element::text_input("añb");
        assert_eq!(edit(&mut input, Key::Backspace, Modifiers::new()), TextEditResult::Changed);
        assert_eq!(input.value(), Some("añ"));
        edit(&mut input, Key::Home, Modifiers::new());
        assert_eq!(edit(&mut input, Key::Delete, Modifiers::new()), TextEditResult::Changed);
        assert_eq!(input.value(), Some("ñ"));
        edit(&mut input, Key::End, Modifiers::new());
        assert_eq!(edit(&mut input, Key::Delete, Modifiers::new()), TextEditResult::Handled);
    }

    #[test]
    fn ctrl_u_clears() {
        let mut input = Element::text_input("query");
        assert_eq!(edit(&mut input, Key::Char('u'), Modifiers::ctrl()), TextEditResult::Changed);
        assert_eq!(input.value(), Some(""));
    }

    #[test]
    fn non_inputs_ignore_keys() {
        let mut item = Element::item();
        assert_eq!(edit(&mut item, Key::Char('x'), Modifiers::new()), TextEditResult::Ignored);
    }
}
