//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use search_select::commands::Cmd;
use search_select::messages::Msg;
use search_select::model::{SearchSelect, SearchSelectConfig, SelectOption, Source};
use search_select::policy::Mode;
use search_select::registry::{EntityDomain, LookupError, OptionLookup};
use search_select::runtime::Host;

/// Generous upper bound for threaded tests
pub const SETTLE: Duration = Duration::from_secs(5);

/// Host that records every callback
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub changes: Vec<String>,
    pub stops: Vec<bool>,
}

impl Host for RecordingHost {
    fn on_change(&mut self, value: String) {
        self.changes.push(value);
    }

    fn stop_editing(&mut self, cancel: bool) {
        self.stops.push(cancel);
    }
}

/// Lookup returning fixed names that contain the query, counting its calls
#[derive(Debug, Default)]
pub struct CountingLookup {
    names: Vec<String>,
    pub calls: AtomicUsize,
    pub queries: Mutex<Vec<String>>,
}

impl CountingLookup {
    pub fn new(names: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.queries.lock().unwrap().last().cloned()
    }
}

impl OptionLookup for CountingLookup {
    fn lookup_options(&self, query: &str) -> Result<Vec<SelectOption>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        let needle = query.to_lowercase();
        Ok(self
            .names
            .iter()
            .filter(|n| n.to_lowercase().contains(&needle))
            .cloned()
            .map(SelectOption::from_name)
            .collect())
    }
}

/// Lookup that always fails
#[derive(Debug, Default)]
pub struct FailingLookup;

impl OptionLookup for FailingLookup {
    fn lookup_options(&self, _query: &str) -> Result<Vec<SelectOption>, LookupError> {
        Err(LookupError::Unavailable("registry offline".to_string()))
    }
}

/// Remote facility field with a lookup that is never run (tests drive messages)
pub fn facility_field(value: &str, mode: Mode) -> SearchSelect {
    let lookup: Arc<dyn OptionLookup> = CountingLookup::new(&[]);
    SearchSelect::new(
        value,
        mode,
        SearchSelectConfig::for_domain(EntityDomain::Facility),
        Source::Remote(lookup),
    )
}

/// Names as options whose values equal their labels
pub fn names(names: &[&str]) -> Vec<SelectOption> {
    names.iter().map(|n| SelectOption::from_name(*n)).collect()
}

/// Display list labels
pub fn labels(field: &SearchSelect) -> Vec<String> {
    field
        .display_list()
        .iter()
        .map(|o| o.label().to_string())
        .collect()
}

/// Flattened commands returned by one update
pub fn flat(cmd: Option<Cmd>) -> Vec<Cmd> {
    cmd.map(Cmd::flatten).unwrap_or_default()
}

/// Run the lookup a `RunLookup` asks for by hand, returning its generation
pub fn run_lookup_cmd(cmds: &[Cmd]) -> Option<(u64, String)> {
    cmds.iter().find_map(|cmd| match cmd {
        Cmd::RunLookup { generation, query } => Some((*generation, query.clone())),
        _ => None,
    })
}

/// Type `text`, fire its debounce timer and deliver `results` for the lookup
pub fn type_and_resolve(field: &mut SearchSelect, text: &str, results: Vec<SelectOption>) {
    search_select::update::update(field, Msg::input(text));
    let revision = field.revision();
    let cmds = flat(search_select::update::update(
        field,
        Msg::LookupReady { revision },
    ));
    let (generation, _) = run_lookup_cmd(&cmds).expect("debounce should start a lookup");
    search_select::update::update(
        field,
        Msg::LookupCompleted {
            generation,
            result: Ok(results),
        },
    );
}
