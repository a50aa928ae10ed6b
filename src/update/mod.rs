//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod exit;
mod input;
mod lookup;

pub use exit::{handle_exit, handle_key};
pub use input::{focus, set_input};
pub use lookup::{lookup_completed, lookup_ready};

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::SearchSelect;
use crate::policy::ExitEvent;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut SearchSelect, msg: Msg) -> Option<Cmd> {
    if model.is_disabled() && msg.is_user_input() {
        tracing::trace!("update: field disabled, ignoring {:?}", msg);
        return None;
    }

    match msg {
        Msg::Focus => focus(model),
        Msg::SetInput(text) => set_input(model, text),
        Msg::InsertChar(ch) => {
            let mut text = model.query().to_string();
            text.push(ch);
            set_input(model, text)
        }
        Msg::DeleteBackward => {
            let mut text = model.query().to_string();
            if text.pop().is_none() {
                return None;
            }
            set_input(model, text)
        }
        Msg::DeleteWordBackward => {
            let mut text = model.query().to_string();
            if text.is_empty() {
                return None;
            }
            input::delete_word_backward(&mut text);
            set_input(model, text)
        }
        Msg::Clear => set_input(model, String::new()),

        Msg::Key(key) => handle_key(model, key),
        Msg::Hover(index) => {
            model.set_highlight(index);
            Some(Cmd::Redraw)
        }
        Msg::SelectOption(index) => handle_exit(model, ExitEvent::Select(index)),
        Msg::Blur => {
            let cmd = handle_exit(model, ExitEvent::Blur);
            model.lose_focus();
            cmd.or(Some(Cmd::Redraw))
        }
        Msg::ClickOutside => handle_exit(model, ExitEvent::ClickOutside),

        Msg::SetValue(value) => {
            model.set_committed(value);
            Some(Cmd::Redraw)
        }

        Msg::LookupReady { revision } => lookup_ready(model, revision),
        Msg::LookupCompleted { generation, result } => lookup_completed(model, generation, result),

        // Delivered to the host by the runtime; the field has nothing to do
        Msg::StopEditing { .. } => None,
    }
}
