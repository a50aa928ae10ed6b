//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

// ============================================================================
// Side-Effect Commands (returned from update)
// ============================================================================

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Field state changed; the host should redraw it
    Redraw,
    /// Start debounce timer for a lookup
    /// After delay_ms, sends Msg::LookupReady
    DebouncedLookup { revision: u64, delay_ms: u64 },
    /// Run the field's data source in a background worker
    /// Sends Msg::LookupCompleted when done
    RunLookup { generation: u64, query: String },
    /// Propose a new committed value to the host
    Commit { value: String, label: String },
    /// Ask a grid host to end the edit (after the current event is handled)
    StopEditing { cancel: bool },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Timers only matter once they fire
            Cmd::DebouncedLookup { .. } => false,
            // Loading indicator appears immediately
            Cmd::RunLookup { .. } => true,
            Cmd::Commit { .. } => true,
            Cmd::StopEditing { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten nested batches into a single list, dropping `Cmd::None`
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }

    /// Value of the first commit in this command, if any
    pub fn committed_value(&self) -> Option<&str> {
        match self {
            Cmd::Commit { value, .. } => Some(value),
            Cmd::Batch(cmds) => cmds.iter().find_map(|c| c.committed_value()),
            _ => None,
        }
    }

    /// Rewrite every commit in this command
    pub fn map_commits(self, f: &mut impl FnMut(String, String) -> (String, String)) -> Self {
        match self {
            Cmd::Commit { value, label } => {
                let (value, label) = f(value, label);
                Cmd::Commit { value, label }
            }
            Cmd::Batch(cmds) => Cmd::Batch(cmds.into_iter().map(|c| c.map_commits(f)).collect()),
            cmd => cmd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_nested_batches() {
        let cmd = Cmd::batch(vec![
            Cmd::Redraw,
            Cmd::None,
            Cmd::batch(vec![Cmd::StopEditing { cancel: false }]),
        ]);
        assert_eq!(
            cmd.flatten(),
            vec![Cmd::Redraw, Cmd::StopEditing { cancel: false }]
        );
    }

    #[test]
    fn test_needs_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(!Cmd::DebouncedLookup {
            revision: 1,
            delay_ms: 250
        }
        .needs_redraw());
        assert!(Cmd::batch(vec![Cmd::StopEditing { cancel: true }, Cmd::Redraw]).needs_redraw());
    }

    #[test]
    fn test_committed_value_searches_batches() {
        let cmd = Cmd::batch(vec![
            Cmd::Redraw,
            Cmd::Commit {
                value: "v".into(),
                label: "Label".into(),
            },
        ]);
        assert_eq!(cmd.committed_value(), Some("v"));
        assert_eq!(Cmd::Redraw.committed_value(), None);
    }
}
