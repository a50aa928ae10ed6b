//! Search-select field as a pluggable grid cell editor
//!
//! The grid mounts an editor with the cell's current value, reads the result
//! through [`CellEditorHandle::get_value`] and learns that the edit is over
//! from the runtime's deferred `stop_editing` call. The field always runs in
//! cell-editor mode: any exit saves, Escape cancels.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{
    DisplayOption, SearchSelect, SearchSelectConfig, SelectOption, Source, LOOKUP_DEBOUNCE_MS,
};
use crate::policy::Mode;
use crate::registry::OptionLookup;
use crate::runtime::Widget;
use crate::update::update;

/// Where a cell editor gets its options
#[derive(Clone)]
pub enum DataSource {
    /// Fixed options, filtered locally by case-insensitive substring
    Static(Vec<SelectOption>),
    /// Options fetched per query
    Async(Arc<dyn OptionLookup>),
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Static(options) => write!(f, "DataSource::Static({} options)", options.len()),
            DataSource::Async(_) => f.write_str("DataSource::Async(..)"),
        }
    }
}

/// Static configuration supplied by a grid column
#[derive(Debug, Clone)]
pub struct CellEditorConfig {
    pub source: DataSource,
    pub placeholder: String,
    /// Noun for the "New <noun>: ..." row (None disables create-new)
    pub create_noun: Option<String>,
    pub debounce_ms: u64,
}

impl CellEditorConfig {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            placeholder: String::new(),
            create_noun: None,
            debounce_ms: LOOKUP_DEBOUNCE_MS,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_create_noun(mut self, noun: impl Into<String>) -> Self {
        self.create_noun = Some(noun.into());
        self
    }

    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }
}

/// Handle the grid keeps to read the editor's value after the edit ends
#[derive(Debug, Clone, Default)]
pub struct CellEditorHandle {
    value: Rc<RefCell<Option<String>>>,
}

impl CellEditorHandle {
    /// Last committed value identifier (None for an empty cell)
    pub fn get_value(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn set(&self, value: &str) {
        *self.value.borrow_mut() = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
    }
}

/// Grid cell editor wrapping a search-select field
#[derive(Debug)]
pub struct CellEditor {
    field: SearchSelect,
    /// Lowercased label -> option for every option seen so far
    labels: HashMap<String, SelectOption>,
    handle: CellEditorHandle,
    /// Lookup requested by the mount-time focus, not yet handed to a runtime
    mount_cmd: Option<Cmd>,
}

impl CellEditor {
    /// Create an editor for a cell currently holding `value`
    ///
    /// The editor is focused on creation. A static source is filtered right
    /// away; an async lookup is started by the runtime the editor is mounted in.
    pub fn new(value: impl Into<String>, config: CellEditorConfig) -> Self {
        let value = value.into();
        let source = match config.source {
            DataSource::Static(options) => Source::Static(options),
            DataSource::Async(lookup) => Source::Remote(lookup),
        };
        let field_config = SearchSelectConfig {
            noun: config.create_noun,
            placeholder: config.placeholder,
            disabled: false,
            debounce_ms: config.debounce_ms,
        };

        let field = SearchSelect::new(value.clone(), Mode::CellEditor, field_config, source);

        let mut labels = HashMap::new();
        if let Source::Static(options) = field.source() {
            for option in options {
                labels.insert(option.label.to_lowercase(), option.clone());
            }
        }

        let handle = CellEditorHandle::default();
        handle.set(&value);

        let mut editor = Self {
            field,
            labels,
            handle,
            mount_cmd: None,
        };
        editor.mount_cmd = editor.update(Msg::Focus).filter(|cmd| *cmd != Cmd::Redraw);
        editor
    }

    /// Last committed value identifier (not its label)
    pub fn get_value(&self) -> Option<String> {
        self.handle.get_value()
    }

    /// Handle sharing this editor's value with the grid
    pub fn handle(&self) -> CellEditorHandle {
        self.handle.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.field.is_loading()
    }

    pub fn placeholder(&self) -> &str {
        &self.field.config().placeholder
    }

    /// Take the command produced by the mount-time focus
    pub fn take_mount_cmd(&mut self) -> Option<Cmd> {
        self.mount_cmd.take()
    }

    /// Process a message, mapping committed labels back to their values
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let cmd = update(&mut self.field, msg);
        self.remember_labels();
        let cmd = cmd?;

        let labels = &self.labels;
        let handle = &self.handle;
        let mut resolved: Option<SelectOption> = None;
        let cmd = cmd.map_commits(&mut |value, label| {
            let option = resolve_option(labels, value, label);
            handle.set(&option.value);
            resolved = Some(option.clone());
            (option.value, option.label)
        });

        if let Some(option) = resolved {
            tracing::debug!("CellEditor: committed value {:?}", option.value);
            self.field.set_committed_option(option);
        }

        Some(cmd)
    }

    fn remember_labels(&mut self) {
        for option in self.field.display_list() {
            if let DisplayOption::Existing(option) = option {
                self.labels
                    .entry(option.label.to_lowercase())
                    .or_insert_with(|| option.clone());
            }
        }
    }
}

/// Typed text commits as the option with that label, if any
fn resolve_option(
    labels: &HashMap<String, SelectOption>,
    value: String,
    label: String,
) -> SelectOption {
    if value != label {
        // Came from an option row and already carries its identifier
        return SelectOption { value, label };
    }
    labels
        .get(&label.to_lowercase())
        .cloned()
        .unwrap_or(SelectOption { value, label })
}

impl Widget for CellEditor {
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        CellEditor::update(self, msg)
    }

    fn field(&self) -> &SearchSelect {
        &self.field
    }

    fn mount(&mut self) -> Option<Cmd> {
        self.take_mount_cmd()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_option_prefers_option_identifiers() {
        let mut labels = HashMap::new();
        labels.insert("acme".to_string(), SelectOption::new("sup-1", "Acme"));

        assert_eq!(
            resolve_option(&labels, "ACME".into(), "ACME".into()),
            SelectOption::new("sup-1", "Acme")
        );
        assert_eq!(
            resolve_option(&labels, "sup-9".into(), "Other".into()),
            SelectOption::new("sup-9", "Other")
        );
        assert_eq!(
            resolve_option(&labels, "Unknown".into(), "Unknown".into()),
            SelectOption::from_name("Unknown")
        );
    }

    #[test]
    fn test_prefilled_static_editor_is_filtered_on_mount() {
        let options = vec![
            SelectOption::new("f-1", "North Warehouse"),
            SelectOption::new("f-3", "Main Plant"),
        ];
        let mut editor = CellEditor::new("f-3", CellEditorConfig::new(DataSource::Static(options)));

        assert_eq!(editor.field.display_list().len(), 1);
        assert!(editor.field.is_open());
        // Filtering is synchronous, nothing is left for the runtime
        assert_eq!(editor.take_mount_cmd(), None);
    }

    #[test]
    fn test_handle_reads_initial_value() {
        let editor = CellEditor::new("f-1", CellEditorConfig::new(DataSource::Static(vec![])));
        let handle = editor.handle();
        assert_eq!(handle.get_value(), Some("f-1".to_string()));

        let empty = CellEditor::new("", CellEditorConfig::new(DataSource::Static(vec![])));
        assert_eq!(empty.get_value(), None);
    }
}
