//! Focus and text input handlers

use crate::commands::Cmd;
use crate::model::SearchSelect;

/// Delete word backward from end of string (like Option+Backspace)
pub(super) fn delete_word_backward(s: &mut String) {
    // Skip trailing whitespace
    while s.ends_with(char::is_whitespace) {
        s.pop();
    }
    // Delete until whitespace or start
    while !s.is_empty() && !s.ends_with(char::is_whitespace) {
        s.pop();
    }
}

/// Handle focus gained
///
/// A field that already holds text looks it up immediately, without waiting
/// for the debounce delay.
pub fn focus(model: &mut SearchSelect) -> Option<Cmd> {
    model.focus();

    if model.trimmed_query().is_empty() {
        return Some(Cmd::Redraw);
    }

    tracing::debug!("focus: immediate lookup for {:?}", model.trimmed_query());
    lookup_now(model)
}

/// Handle a change of the input text
pub fn set_input(model: &mut SearchSelect, text: String) -> Option<Cmd> {
    let revision = model.set_query(text);

    if model.trimmed_query().is_empty() {
        return Some(Cmd::Redraw);
    }

    if model.is_remote() {
        Some(Cmd::batch(vec![
            Cmd::Redraw,
            Cmd::DebouncedLookup {
                revision,
                delay_ms: model.config().debounce_ms,
            },
        ]))
    } else {
        // Static sources filter locally, no debounce needed
        model.filter_static();
        Some(Cmd::Redraw)
    }
}

/// Start a lookup for the current query right away
pub(super) fn lookup_now(model: &mut SearchSelect) -> Option<Cmd> {
    if model.is_remote() {
        let generation = model.begin_fetch();
        Some(Cmd::RunLookup {
            generation,
            query: model.trimmed_query().to_string(),
        })
    } else {
        model.filter_static();
        Some(Cmd::Redraw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_word_backward() {
        let mut s = String::from("North Warehouse ");
        delete_word_backward(&mut s);
        assert_eq!(s, "North ");
        delete_word_backward(&mut s);
        assert_eq!(s, "");
    }
}
