//! Search-select - debounced registry picker for forms and grid cells
//!
//! This crate provides the core types and logic for a type-ahead field
//! implementing the Elm Architecture pattern. A [`SearchSelect`] holds all
//! field state, [`update`](update::update) turns messages into commands and a
//! [`FieldRuntime`] executes those commands for a host.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod grid;
pub mod messages;
pub mod model;
pub mod policy;
pub mod registry;
pub mod runtime;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::WidgetConfig;
pub use grid::{CellEditor, CellEditorConfig, CellEditorHandle, DataSource};
pub use messages::{Direction, Key, Msg};
pub use model::{SearchSelect, SearchSelectConfig, SelectOption, Source};
pub use policy::Mode;
pub use registry::{EntityDomain, StaticRegistry};
pub use runtime::{FieldRuntime, Host, Widget};
