//! Options and the display list shown in the dropdown

use serde::Serialize;

/// An entry returned by a data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Identifier stored by the host when this option is committed
    pub value: String,
    /// Text shown to the user
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option for a registry name (value and label are the same)
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: name.clone(),
            label: name,
        }
    }
}

/// One row of the display list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOption {
    /// An option returned by the data source
    Existing(SelectOption),
    /// Synthesized "create new" row for the trimmed query text
    NewEntry { text: String, label: String },
}

impl DisplayOption {
    pub fn label(&self) -> &str {
        match self {
            DisplayOption::Existing(option) => &option.label,
            DisplayOption::NewEntry { label, .. } => label,
        }
    }

    pub fn is_new_entry(&self) -> bool {
        matches!(self, DisplayOption::NewEntry { .. })
    }

    /// The value/label pair committed when this row is chosen
    ///
    /// A new entry commits the typed text itself, not its "New ..." label.
    pub fn selection(&self) -> SelectOption {
        match self {
            DisplayOption::Existing(option) => option.clone(),
            DisplayOption::NewEntry { text, .. } => SelectOption::from_name(text.clone()),
        }
    }
}

/// Label of the synthesized new-entry row
pub fn new_entry_label(noun: &str, text: &str) -> String {
    format!("New {}: {}", noun, text)
}

/// Build the display list for a query from fetched options
///
/// The new-entry row is appended when a noun is configured, the trimmed query
/// is non-empty and no fetched label equals it case-insensitively.
pub fn build_display_list(
    fetched: &[SelectOption],
    query: &str,
    noun: Option<&str>,
) -> Vec<DisplayOption> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut list: Vec<DisplayOption> = fetched
        .iter()
        .cloned()
        .map(DisplayOption::Existing)
        .collect();

    if let Some(noun) = noun {
        let folded = trimmed.to_lowercase();
        let exists = fetched
            .iter()
            .any(|option| option.label.to_lowercase() == folded);
        if !exists {
            list.push(DisplayOption::NewEntry {
                text: trimmed.to_string(),
                label: new_entry_label(noun, trimmed),
            });
        }
    }

    list
}

/// Case-insensitive substring filter used by static data sources
pub fn filter_options(options: &[SelectOption], query: &str) -> Vec<SelectOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    options
        .iter()
        .filter(|option| option.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
