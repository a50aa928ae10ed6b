//! Model types for the Elm-style architecture
//!
//! A field's entire state lives in [`SearchSelect`]; update functions are the
//! only place it changes.

pub mod option;
pub mod search_select;

pub use option::{build_display_list, filter_options, new_entry_label, DisplayOption, SelectOption};
pub use search_select::{
    FieldSnapshot, SearchSelect, SearchSelectConfig, Source, LOOKUP_DEBOUNCE_MS,
};
