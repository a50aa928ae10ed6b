//! Runtime module - executes commands for a mounted field
//!
//! - `field` - [`FieldRuntime`], the message loop for one widget
//!
//! The update functions are pure; everything with a side effect (timers,
//! registry lookups, host callbacks) happens here. Timers and lookups run on
//! worker threads and report back over an mpsc channel, so the host thread
//! never blocks on a slow registry.

mod field;

pub use field::FieldRuntime;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::SearchSelect;
use crate::update::update;

/// A mounted search-select widget the runtime can drive
pub trait Widget {
    fn update(&mut self, msg: Msg) -> Option<Cmd>;

    /// Underlying field (for its data source and state)
    fn field(&self) -> &SearchSelect;

    /// Work the widget started while being created (e.g. a mount-time lookup)
    fn mount(&mut self) -> Option<Cmd> {
        None
    }
}

impl Widget for SearchSelect {
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        update(self, msg)
    }

    fn field(&self) -> &SearchSelect {
        self
    }
}

/// The form or grid that owns the committed value
pub trait Host {
    /// Called exactly once per committed interaction
    fn on_change(&mut self, value: String);

    /// Grid hosts end the cell edit here; forms ignore it
    fn stop_editing(&mut self, _cancel: bool) {}
}

impl<F> Host for F
where
    F: FnMut(String),
{
    fn on_change(&mut self, value: String) {
        self(value)
    }
}
