//! Key and exit-event handlers
//!
//! Every event that could end an interaction goes through the mode policy;
//! this module only carries out its decision.

use crate::commands::Cmd;
use crate::messages::Key;
use crate::model::{SearchSelect, SelectOption};
use crate::policy::{decide, Decision, ExitEvent, Mode};

/// Handle a key press
pub fn handle_key(model: &mut SearchSelect, key: Key) -> Option<Cmd> {
    let event = match key {
        Key::Enter => ExitEvent::Enter,
        Key::Tab => ExitEvent::Tab,
        Key::Escape => ExitEvent::Escape,
        Key::Arrow(direction) => ExitEvent::Arrow(direction),
    };
    handle_exit(model, event)
}

/// Apply the mode policy to an exit event
///
/// Outside an interaction only Escape does anything, so a field commits or
/// reverts at most once per interaction.
pub fn handle_exit(model: &mut SearchSelect, event: ExitEvent) -> Option<Cmd> {
    if !model.is_editing() && event != ExitEvent::Escape {
        tracing::trace!("handle_exit: {:?} outside an interaction", event);
        return None;
    }

    let decision = decide(model.mode(), event, model.is_open());
    tracing::debug!(
        "handle_exit: {:?} in {:?} mode -> {:?}",
        event,
        model.mode(),
        decision
    );

    match decision {
        Decision::NoOp => None,
        Decision::Navigate(direction) => {
            model.move_highlight(direction);
            Some(Cmd::Redraw)
        }
        Decision::Revert => revert(model),
        Decision::CommitOption(index) => {
            let Some(selection) = model.option_at(index).map(|o| o.selection()) else {
                tracing::warn!("handle_exit: no display row at index {}", index);
                return None;
            };
            commit(model, selection)
        }
        Decision::CommitCandidate => {
            let selection = model.resolve_candidate()?;
            commit(model, selection)
        }
        Decision::CommitQuery => {
            let text = model.trimmed_query().to_string();
            commit(model, SelectOption::from_name(text))
        }
    }
}

fn commit(model: &mut SearchSelect, selection: SelectOption) -> Option<Cmd> {
    let cmd = Cmd::Commit {
        value: selection.value.clone(),
        label: selection.label.clone(),
    };
    model.finish(Some(selection));

    match model.mode() {
        Mode::Form => Some(Cmd::batch(vec![cmd, Cmd::Redraw])),
        Mode::CellEditor => Some(Cmd::batch(vec![cmd, Cmd::StopEditing { cancel: false }])),
    }
}

fn revert(model: &mut SearchSelect) -> Option<Cmd> {
    model.finish(None);

    match model.mode() {
        Mode::Form => Some(Cmd::Redraw),
        Mode::CellEditor => Some(Cmd::batch(vec![
            Cmd::Redraw,
            Cmd::StopEditing { cancel: true },
        ])),
    }
}
