//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::SelectOption;
use crate::registry::LookupError;

/// Direction for highlight movement and arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Keys the field reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Tab,
    Escape,
    Arrow(Direction),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // === User input ===
    /// Input gained focus
    Focus,
    /// Replace the input text (paste, programmatic edit)
    SetInput(String),
    /// Insert character at the end of the input
    InsertChar(char),
    /// Delete last character (Backspace)
    DeleteBackward,
    /// Delete last word (Option+Backspace)
    DeleteWordBackward,
    /// Empty the input
    Clear,
    /// Key press
    Key(Key),
    /// Mouse moved over a display row
    Hover(usize),
    /// Mouse click on a display row
    SelectOption(usize),
    /// Focus lost without a selection
    Blur,
    /// Mouse click outside the field and its dropdown
    ClickOutside,

    // === Host ===
    /// The host's committed value changed
    SetValue(String),

    // === Async results ===
    /// Debounce timer fired for a query revision
    LookupReady { revision: u64 },
    /// Lookup finished for a fetch generation
    LookupCompleted {
        generation: u64,
        result: Result<Vec<SelectOption>, LookupError>,
    },
    /// Deferred end-of-edit notification for grid hosts
    StopEditing { cancel: bool },
}

impl Msg {
    /// Messages originating from the user (ignored while disabled)
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Msg::Focus
                | Msg::SetInput(_)
                | Msg::InsertChar(_)
                | Msg::DeleteBackward
                | Msg::DeleteWordBackward
                | Msg::Clear
                | Msg::Key(_)
                | Msg::Hover(_)
                | Msg::SelectOption(_)
                | Msg::Blur
                | Msg::ClickOutside
        )
    }

    /// Create a key press message
    pub fn key(key: Key) -> Self {
        Msg::Key(key)
    }

    /// Create an arrow key message
    pub fn arrow(direction: Direction) -> Self {
        Msg::Key(Key::Arrow(direction))
    }

    /// Create a set-input message
    pub fn input(text: impl Into<String>) -> Self {
        Msg::SetInput(text.into())
    }
}
