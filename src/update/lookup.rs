//! Lookup scheduling and result handlers

use crate::commands::Cmd;
use crate::model::{SearchSelect, SelectOption};
use crate::registry::LookupError;

use super::input::lookup_now;

/// Handle a fired debounce timer
///
/// Only the timer for the latest query revision runs a lookup; earlier timers
/// were superseded by later keystrokes.
pub fn lookup_ready(model: &mut SearchSelect, revision: u64) -> Option<Cmd> {
    if revision != model.revision() {
        tracing::debug!(
            "Skipping stale lookup timer: query revision {} != timer revision {}",
            model.revision(),
            revision
        );
        return None;
    }

    if model.trimmed_query().is_empty() {
        return None;
    }

    lookup_now(model)
}

/// Handle lookup results
///
/// A failed lookup is treated as an empty result so the field still offers
/// the new-entry row.
pub fn lookup_completed(
    model: &mut SearchSelect,
    generation: u64,
    result: Result<Vec<SelectOption>, LookupError>,
) -> Option<Cmd> {
    let options = match result {
        Ok(options) => options,
        Err(e) => {
            tracing::warn!("Lookup for generation {} failed: {}", generation, e);
            Vec::new()
        }
    };

    let count = options.len();
    if !model.apply_results(generation, options) {
        tracing::debug!(
            "Discarding stale lookup results: generation {} != latest {}",
            generation,
            model.generation()
        );
        return None;
    }

    tracing::debug!(
        "Applied {} lookup results for generation {}",
        count,
        generation
    );
    Some(Cmd::Redraw)
}
