//! Search-select engine state
//!
//! Owns everything a single field instance needs between messages: the query
//! buffer, the debounce revision, the fetch generation, the display list and
//! the highlighted row. The engine never talks to the host directly; update
//! functions turn its state changes into commands.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::messages::Direction;
use crate::policy::Mode;
use crate::registry::{EntityDomain, OptionLookup};

use super::option::{build_display_list, filter_options, DisplayOption, SelectOption};

/// Default debounce delay in milliseconds before a typed query is looked up
pub const LOOKUP_DEBOUNCE_MS: u64 = 250;

/// Where a field's options come from
#[derive(Clone)]
pub enum Source {
    /// Asynchronous lookup, debounced and run by the runtime
    Remote(Arc<dyn OptionLookup>),
    /// Fixed option list, filtered locally on every keystroke
    Static(Vec<SelectOption>),
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote(_) => f.write_str("Source::Remote(..)"),
            Source::Static(options) => write!(f, "Source::Static({} options)", options.len()),
        }
    }
}

/// Static configuration of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSelectConfig {
    /// Noun for the "New <noun>: ..." row (None disables create-new)
    pub noun: Option<String>,
    pub placeholder: String,
    pub disabled: bool,
    pub debounce_ms: u64,
}

impl Default for SearchSelectConfig {
    fn default() -> Self {
        Self {
            noun: None,
            placeholder: String::new(),
            disabled: false,
            debounce_ms: LOOKUP_DEBOUNCE_MS,
        }
    }
}

impl SearchSelectConfig {
    /// Preset for one of the registry domains
    pub fn for_domain(domain: EntityDomain) -> Self {
        Self {
            noun: Some(domain.noun().to_string()),
            placeholder: domain.placeholder().to_string(),
            ..Self::default()
        }
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Serializable view of a field, for hosts and diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSnapshot {
    pub query: String,
    pub committed: String,
    pub open: bool,
    pub loading: bool,
    pub highlighted: Option<usize>,
    pub options: Vec<String>,
}

/// State of one search-select field
#[derive(Debug, Clone)]
pub struct SearchSelect {
    mode: Mode,
    config: SearchSelectConfig,
    source: Source,
    /// Mirror of the host's committed value identifier
    committed: String,
    /// Label shown in the input for the committed value
    committed_label: String,
    query: String,
    /// Bumped on every query change; debounce timers carry it
    revision: u64,
    /// Bumped on every lookup; results carry it
    generation: u64,
    fetched: Vec<SelectOption>,
    display: Vec<DisplayOption>,
    highlighted: Option<usize>,
    loading: bool,
    focused: bool,
    open: bool,
    editing: bool,
}

impl SearchSelect {
    pub fn new(
        value: impl Into<String>,
        mode: Mode,
        config: SearchSelectConfig,
        source: Source,
    ) -> Self {
        let mut field = Self {
            mode,
            config,
            source,
            committed: String::new(),
            committed_label: String::new(),
            query: String::new(),
            revision: 0,
            generation: 0,
            fetched: Vec::new(),
            display: Vec::new(),
            highlighted: None,
            loading: false,
            focused: false,
            open: false,
            editing: false,
        };
        field.set_committed(value.into());
        field
    }

    // === Accessors ===

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &SearchSelectConfig {
        &self.config
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn is_remote(&self) -> bool {
        matches!(self.source, Source::Remote(_))
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn display_list(&self) -> &[DisplayOption] {
        &self.display
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// Dropdown is shown while focused and either fetching or holding rows
    pub fn is_open(&self) -> bool {
        self.open && self.focused && (self.loading || !self.display.is_empty())
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            query: self.query.clone(),
            committed: self.committed.clone(),
            open: self.is_open(),
            loading: self.loading,
            highlighted: self.highlighted,
            options: self.display.iter().map(|o| o.label().to_string()).collect(),
        }
    }

    // === Input ===

    /// Mark the field focused and start an interaction
    pub fn focus(&mut self) {
        self.focused = true;
        self.editing = true;
        self.open = true;
    }

    /// Focus left the field
    pub fn lose_focus(&mut self) {
        self.focused = false;
    }

    /// Replace the query buffer, returning the new revision
    ///
    /// An empty (or whitespace-only) query drops the results and invalidates
    /// any pending timer or in-flight lookup. Otherwise the rows already
    /// fetched stay visible, the new-entry row follows the new text and the
    /// highlight is dropped until fresh results arrive.
    pub fn set_query(&mut self, text: impl Into<String>) -> u64 {
        self.query = text.into();
        self.revision += 1;
        self.focused = true;
        self.editing = true;
        self.open = true;
        if self.trimmed_query().is_empty() {
            self.clear_results();
        } else {
            self.rebuild_display();
        }
        self.revision
    }

    /// Start a lookup for the current query, returning its generation
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Apply lookup results if they belong to the latest generation
    ///
    /// Returns false (and changes nothing) for stale results.
    pub fn apply_results(&mut self, generation: u64, options: Vec<SelectOption>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        self.fetched = options;
        self.rebuild_display();
        true
    }

    /// Filter a static source against the current query
    pub fn filter_static(&mut self) {
        if let Source::Static(options) = &self.source {
            self.fetched = filter_options(options, &self.query);
            self.rebuild_display();
        }
    }

    fn rebuild_display(&mut self) {
        self.display = build_display_list(&self.fetched, &self.query, self.config.noun.as_deref());
        self.highlighted = None;
    }

    fn clear_results(&mut self) {
        // Results of anything still in flight must not come back
        self.generation += 1;
        self.loading = false;
        self.fetched.clear();
        self.display.clear();
        self.highlighted = None;
    }

    // === Highlight ===

    /// Move the highlight one row, clamped to [none, last row]
    pub fn move_highlight(&mut self, direction: Direction) {
        if self.display.is_empty() {
            return;
        }
        let last = self.display.len() - 1;
        self.highlighted = match (direction, self.highlighted) {
            (Direction::Down, None) => Some(0),
            (Direction::Down, Some(index)) => Some((index + 1).min(last)),
            (Direction::Up, None) | (Direction::Up, Some(0)) => None,
            (Direction::Up, Some(index)) => Some(index - 1),
            (Direction::Left | Direction::Right, current) => current,
        };
    }

    /// Highlight a row directly (mouse hover)
    pub fn set_highlight(&mut self, index: usize) {
        if index < self.display.len() {
            self.highlighted = Some(index);
        }
    }

    pub fn option_at(&self, index: usize) -> Option<&DisplayOption> {
        self.display.get(index)
    }

    /// What Enter/Tab would commit right now
    ///
    /// The highlighted row wins, then the trimmed query, else nothing.
    pub fn resolve_candidate(&self) -> Option<SelectOption> {
        if let Some(option) = self.highlighted.and_then(|i| self.display.get(i)) {
            return Some(option.selection());
        }
        let trimmed = self.trimmed_query();
        if trimmed.is_empty() {
            None
        } else {
            Some(SelectOption::from_name(trimmed))
        }
    }

    // === Interaction end ===

    /// End the interaction, adopting `selection` or reverting to the committed value
    pub fn finish(&mut self, selection: Option<SelectOption>) {
        match selection {
            Some(option) => {
                self.committed = option.value;
                self.committed_label = option.label;
                self.query = self.committed_label.clone();
            }
            None => {
                self.query = self.committed_label.clone();
            }
        }
        // Pending timers and lookups belong to the interaction that just ended
        self.revision += 1;
        self.clear_results();
        self.open = false;
        self.editing = false;
    }

    /// Accept a committed value from the host
    ///
    /// The query mirrors it unless the user is mid-edit.
    pub fn set_committed(&mut self, value: String) {
        self.committed_label = self.label_for(&value);
        self.committed = value;
        if !self.editing {
            self.query = self.committed_label.clone();
        }
    }

    /// Adopt a committed option whose label is already known
    pub fn set_committed_option(&mut self, option: SelectOption) {
        self.committed = option.value;
        self.committed_label = option.label;
        if !self.editing {
            self.query = self.committed_label.clone();
        }
    }

    fn label_for(&self, value: &str) -> String {
        match &self.source {
            Source::Static(options) => options
                .iter()
                .find(|option| option.value == value)
                .map(|option| option.label.clone())
                .unwrap_or_else(|| value.to_string()),
            Source::Remote(_) => value.to_string(),
        }
    }
}
